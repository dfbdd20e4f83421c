//! Client-side interaction layer for the portfolio site.
//!
//! Every widget follows the same shape: an `init` function looks up the
//! elements it needs, wires its listeners and returns an owned handle. The
//! handle keeps closures and timers alive; dropping it detaches the widget.
//! A missing element is reported as [`WidgetError::MissingElement`] instead of
//! failing later on a `None`.

use std::fmt;
use wasm_bindgen::JsValue;

pub mod api;
pub mod carousel;
pub mod config;
pub mod contact;
pub mod cursor;
pub mod dom;
pub mod icons;
pub mod navigation;
pub mod preloader;
pub mod preview;
pub mod reveal;
pub mod tasks;
pub mod tilt;
pub mod utils;

/// Reasons a widget did not attach to the page.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetError {
    /// A required element (or the window/document) is absent.
    MissingElement(&'static str),
    /// The primary input is touch-based; hover effects are not attached.
    TouchInput,
    /// A widget found fewer elements than it needs to do anything useful.
    TooFewItems {
        needed: usize,
        found: usize,
    },
    /// A browser API call failed.
    Js(String),
}

impl WidgetError {
    /// Whether this is an expected "feature not present on this page" outcome
    /// rather than something going wrong.
    pub fn is_skip(&self) -> bool {
        !matches!(self, WidgetError::Js(_))
    }
}

impl fmt::Display for WidgetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidgetError::MissingElement(selector) => {
                write!(f, "Required element not found: {}", selector)
            }
            WidgetError::TouchInput => write!(f, "Hover effects disabled on touch devices"),
            WidgetError::TooFewItems { needed, found } => write!(
                f,
                "Not enough elements: needed at least {}, found {}",
                needed, found
            ),
            WidgetError::Js(msg) => write!(f, "Browser call failed: {}", msg),
        }
    }
}

impl std::error::Error for WidgetError {}

impl From<JsValue> for WidgetError {
    fn from(value: JsValue) -> Self {
        WidgetError::Js(format!("{:?}", value))
    }
}
