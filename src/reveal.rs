//! Fade sections in the first time they scroll into view.

use crate::config::{
    FADE_IN_SECTION, IS_VISIBLE, REVEAL_ROOT_MARGIN, REVEAL_SECTIONS, REVEAL_THRESHOLD,
};
use crate::{dom, WidgetError};
use js_sys::Array;
use log::debug;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Visibility of a single section. Only ever moves from hidden to visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Visible,
}

impl RevealState {
    /// Feed an intersection notification. Returns `true` exactly once, on
    /// the hidden → visible transition.
    pub fn advance(&mut self, intersecting: bool) -> bool {
        match (*self, intersecting) {
            (RevealState::Hidden, true) => {
                *self = RevealState::Visible;
                true
            }
            _ => false,
        }
    }
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

pub struct Reveal {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Drop for Reveal {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn init() -> Result<Reveal, WidgetError> {
    let sections = dom::query_all(REVEAL_SECTIONS);
    if sections.is_empty() {
        return Err(WidgetError::MissingElement(REVEAL_SECTIONS));
    }
    let pending = Rc::new(Cell::new(sections.len()));

    let callback: ObserverCallback = Closure::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let mut state = if dom::has_class(&target, IS_VISIBLE) {
                    RevealState::Visible
                } else {
                    RevealState::Hidden
                };
                if state.advance(entry.is_intersecting()) {
                    dom::add_class(&target, IS_VISIBLE);
                    observer.unobserve(&target);
                    pending.set(pending.get().saturating_sub(1));
                }
            }
            if pending.get() == 0 {
                debug!("All sections revealed, disconnecting observer");
                observer.disconnect();
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

    for section in &sections {
        dom::add_class(section, FADE_IN_SECTION);
        observer.observe(section);
    }

    Ok(Reveal {
        observer,
        _callback: callback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn becomes_visible_on_first_intersection() {
        let mut state = RevealState::Hidden;
        assert!(!state.advance(false));
        assert_eq!(state, RevealState::Hidden);
        assert!(state.advance(true));
        assert_eq!(state, RevealState::Visible);
    }

    #[test]
    fn never_reverts_or_fires_twice() {
        let mut state = RevealState::Hidden;
        let fired = [true, false, true, false]
            .iter()
            .filter(|&&intersecting| state.advance(intersecting))
            .count();
        assert_eq!(fired, 1);
        assert_eq!(state, RevealState::Visible);
    }
}
