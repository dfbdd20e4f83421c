//! Presence-checked element lookups and small DOM helpers shared by widgets.

use crate::WidgetError;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, NodeList, Window};

pub fn window() -> Result<Window, WidgetError> {
    web_sys::window().ok_or(WidgetError::MissingElement("window"))
}

pub fn document() -> Result<Document, WidgetError> {
    window()?
        .document()
        .ok_or(WidgetError::MissingElement("document"))
}

pub fn body() -> Result<HtmlElement, WidgetError> {
    document()?.body().ok_or(WidgetError::MissingElement("body"))
}

/// Look up the first element matching `selector`.
///
/// An invalid selector is treated the same as no match.
pub fn query(selector: &'static str) -> Result<HtmlElement, WidgetError> {
    document()?
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or(WidgetError::MissingElement(selector))
}

/// All elements matching `selector`, in document order. Empty on no match or
/// an invalid selector.
pub fn query_all(selector: &str) -> Vec<HtmlElement> {
    document()
        .ok()
        .and_then(|doc| doc.query_selector_all(selector).ok())
        .map(|list| html_elements(&list))
        .unwrap_or_default()
}

pub fn query_all_in(root: &Element, selector: &str) -> Vec<HtmlElement> {
    root.query_selector_all(selector)
        .map(|list| html_elements(&list))
        .unwrap_or_default()
}

fn html_elements(list: &NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

pub fn add_class(el: &Element, class: &str) {
    let _ = el.class_list().add_1(class);
}

pub fn remove_class(el: &Element, class: &str) {
    let _ = el.class_list().remove_1(class);
}

pub fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

/// `document.readyState`, or `"loading"` when there is no document yet.
pub fn ready_state() -> String {
    document()
        .map(|doc| doc.ready_state())
        .unwrap_or_else(|_| "loading".to_string())
}

/// Viewport size in CSS pixels.
pub fn viewport_size() -> (f64, f64) {
    let Ok(window) = window() else {
        return (0.0, 0.0);
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (width, height)
}
