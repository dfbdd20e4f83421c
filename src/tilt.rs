//! 3D tilt on portfolio cards while the pointer hovers them.

use crate::config::{PORTFOLIO_CARD, TILT_MAX_DEG, TILT_PERSPECTIVE_PX, TILT_SCALE};
use crate::{dom, WidgetError};
use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, MouseEvent};

/// Card rotation in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    pub const NEUTRAL: Tilt = Tilt {
        rotate_x: 0.0,
        rotate_y: 0.0,
    };

    /// Rotation for a pointer at (`x`, `y`) relative to the card's top-left
    /// corner. Linear in the offset from the centre, capped at `TILT_MAX_DEG`.
    pub fn from_pointer(x: f64, y: f64, width: f64, height: f64) -> Tilt {
        if width <= 0.0 || height <= 0.0 {
            return Tilt::NEUTRAL;
        }
        let half_w = width / 2.0;
        let half_h = height / 2.0;
        let rotate_x = ((y - half_h) / half_h * -TILT_MAX_DEG).clamp(-TILT_MAX_DEG, TILT_MAX_DEG);
        let rotate_y = ((x - half_w) / half_w * TILT_MAX_DEG).clamp(-TILT_MAX_DEG, TILT_MAX_DEG);
        Tilt { rotate_x, rotate_y }
    }

    pub fn to_css(self, scale: f64) -> String {
        format!(
            "perspective({}px) rotateX({:.2}deg) rotateY({:.2}deg) scale({})",
            TILT_PERSPECTIVE_PX, self.rotate_x, self.rotate_y, scale
        )
    }
}

pub struct CardTilt {
    _listeners: Vec<EventListener>,
}

/// Touch-first devices have no hover, so the effect is not attached there.
fn is_touch_device() -> bool {
    dom::window()
        .map(|window| js_sys::Reflect::has(&window, &"ontouchstart".into()).unwrap_or(false))
        .unwrap_or(false)
}

pub fn init() -> Result<CardTilt, WidgetError> {
    if is_touch_device() {
        return Err(WidgetError::TouchInput);
    }
    let cards = dom::query_all(PORTFOLIO_CARD);
    if cards.is_empty() {
        return Err(WidgetError::MissingElement(PORTFOLIO_CARD));
    }

    let mut listeners = Vec::with_capacity(cards.len() * 2);
    for card in cards {
        let target = card.clone();
        listeners.push(EventListener::new(&card, "mousemove", move |event: &Event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let rect = target.get_bounding_client_rect();
            let tilt = Tilt::from_pointer(
                event.client_x() as f64 - rect.left(),
                event.client_y() as f64 - rect.top(),
                rect.width(),
                rect.height(),
            );
            set_transform(&target, &tilt.to_css(TILT_SCALE));
        }));

        let target = card.clone();
        listeners.push(EventListener::new(&card, "mouseleave", move |_| {
            set_transform(&target, &Tilt::NEUTRAL.to_css(1.0));
        }));
    }

    Ok(CardTilt {
        _listeners: listeners,
    })
}

fn set_transform(card: &HtmlElement, transform: &str) {
    dom::set_style(card, "transform", transform);
}
