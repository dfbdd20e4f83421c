//! Custom two-layer cursor: a dot pinned to the pointer and an outline that
//! springs after it.

use crate::config::{
    CURSOR_DOT, CURSOR_HOVERED, CURSOR_INTERACTIVE, CURSOR_OUTLINE, CURSOR_SMOOTHING,
};
use crate::tasks::FrameLoop;
use crate::{dom, WidgetError};
use gloo_events::EventListener;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, MouseEvent};

/// Pointer position and the lagging outline position.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CursorState {
    pub x: f64,
    pub y: f64,
    pub outline_x: f64,
    pub outline_y: f64,
    started: bool,
}

impl CursorState {
    /// Record a pointer move. Returns `true` on the very first move, which is
    /// when the frame loop should start.
    pub fn pointer_moved(&mut self, x: f64, y: f64) -> bool {
        self.x = x;
        self.y = y;
        !std::mem::replace(&mut self.started, true)
    }

    /// Move the outline a fixed fraction of the way toward the pointer.
    pub fn step(&mut self, smoothing: f64) {
        self.outline_x += (self.x - self.outline_x) * smoothing;
        self.outline_y += (self.y - self.outline_y) * smoothing;
    }
}

pub struct AnimatedCursor {
    _frames: Rc<FrameLoop>,
    _listeners: Vec<EventListener>,
}

pub fn init() -> Result<AnimatedCursor, WidgetError> {
    let dot = dom::query(CURSOR_DOT)?;
    let outline = dom::query(CURSOR_OUTLINE)?;
    let window = dom::window()?;
    let body = dom::body()?;
    let state = Rc::new(Cell::new(CursorState::default()));

    let frames = {
        let state = state.clone();
        Rc::new(FrameLoop::new(move |_| {
            let mut cursor = state.get();
            cursor.step(CURSOR_SMOOTHING);
            state.set(cursor);
            place_centred(&dot, cursor.x, cursor.y);
            place_centred(&outline, cursor.outline_x, cursor.outline_y);
        }))
    };

    let mut listeners = Vec::new();
    {
        let frames = frames.clone();
        listeners.push(EventListener::new(&window, "mousemove", move |event: &Event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let mut cursor = state.get();
            let first = cursor.pointer_moved(event.client_x() as f64, event.client_y() as f64);
            state.set(cursor);
            if first {
                frames.start();
            }
        }));
    }

    for el in dom::query_all(CURSOR_INTERACTIVE) {
        let target = body.clone();
        listeners.push(EventListener::new(&el, "mouseenter", move |_| {
            dom::add_class(&target, CURSOR_HOVERED);
        }));
        let target = body.clone();
        listeners.push(EventListener::new(&el, "mouseleave", move |_| {
            dom::remove_class(&target, CURSOR_HOVERED);
        }));
    }

    Ok(AnimatedCursor {
        _frames: frames,
        _listeners: listeners,
    })
}

fn place_centred(layer: &HtmlElement, x: f64, y: f64) {
    let left = x - layer.offset_width() as f64 / 2.0;
    let top = y - layer.offset_height() as f64 / 2.0;
    dom::set_style(layer, "transform", &format!("translate({}px, {}px)", left, top));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_first_move_starts_the_loop() {
        let mut cursor = CursorState::default();
        assert!(cursor.pointer_moved(10.0, 20.0));
        assert!(!cursor.pointer_moved(30.0, 40.0));
        assert_eq!((cursor.x, cursor.y), (30.0, 40.0));
    }

    #[test]
    fn outline_moves_a_fixed_fraction_per_frame() {
        let mut cursor = CursorState::default();
        cursor.pointer_moved(100.0, 200.0);
        cursor.step(0.15);
        assert!((cursor.outline_x - 15.0).abs() < 1e-9);
        assert!((cursor.outline_y - 30.0).abs() < 1e-9);
        cursor.step(0.15);
        assert!((cursor.outline_x - 27.75).abs() < 1e-9);
    }

    #[test]
    fn outline_converges_without_overshooting() {
        let mut cursor = CursorState::default();
        cursor.pointer_moved(50.0, -50.0);
        let mut last_gap = f64::MAX;
        for _ in 0..200 {
            cursor.step(0.15);
            let gap = (cursor.x - cursor.outline_x).abs();
            assert!(gap <= last_gap);
            assert!(cursor.outline_x <= cursor.x);
            last_gap = gap;
        }
        assert!(last_gap < 1e-6);
        assert!((cursor.outline_y + 50.0).abs() < 1e-6);
    }
}
