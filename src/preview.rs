//! Hover-preview tooltip shared by every `.hover-preview` element.

use crate::config::{HOVER_PREVIEW, PREVIEW_BOX, PREVIEW_OFFSET_PX};
use crate::{dom, WidgetError};
use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, MouseEvent};

/// Tooltip content read from an element's `data-*` attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewContent {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl PreviewContent {
    pub fn new(title: Option<String>, description: Option<String>, image: Option<String>) -> Self {
        fn non_blank(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }
        Self {
            title: non_blank(title),
            description: non_blank(description),
            image: non_blank(image),
        }
    }

    fn from_element(el: &Element) -> Self {
        Self::new(
            el.get_attribute("data-title"),
            el.get_attribute("data-desc"),
            el.get_attribute("data-img"),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.image.is_none()
    }
}

/// Top-left corner for a tooltip of `size` next to the pointer.
///
/// The tooltip sits `offset` below-right of the pointer and flips to the
/// other side on an axis where it would run past the viewport edge. It never
/// goes above or left of the viewport origin.
pub fn place_tooltip(
    pointer: (f64, f64),
    size: (f64, f64),
    viewport: (f64, f64),
    offset: f64,
) -> (f64, f64) {
    let place = |pointer: f64, size: f64, limit: f64| {
        let mut pos = pointer + offset;
        if pos + size > limit {
            pos = pointer - size - offset;
        }
        pos.max(0.0)
    };
    (
        place(pointer.0, size.0, viewport.0),
        place(pointer.1, size.1, viewport.1),
    )
}

pub struct HoverPreview {
    tooltip: HtmlElement,
    _listeners: Vec<EventListener>,
}

impl Drop for HoverPreview {
    fn drop(&mut self) {
        self.tooltip.remove();
    }
}

pub fn init() -> Result<HoverPreview, WidgetError> {
    let targets = dom::query_all(HOVER_PREVIEW);
    if targets.is_empty() {
        return Err(WidgetError::MissingElement(HOVER_PREVIEW));
    }
    let document = dom::document()?;
    let tooltip: HtmlElement = document.create_element("div")?.unchecked_into();
    dom::add_class(&tooltip, PREVIEW_BOX);
    set_visible(&tooltip, false);
    dom::body()?.append_child(&tooltip)?;

    let mut listeners = Vec::with_capacity(targets.len() * 3);
    for target in targets {
        let (source, box_el, doc) = (target.clone(), tooltip.clone(), document.clone());
        listeners.push(EventListener::new(&target, "mouseenter", move |_| {
            let content = PreviewContent::from_element(&source);
            if content.is_empty() {
                return;
            }
            if fill(&doc, &box_el, &content).is_ok() {
                set_visible(&box_el, true);
            }
        }));

        let box_el = tooltip.clone();
        listeners.push(EventListener::new(&target, "mousemove", move |event: &Event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let (left, top) = place_tooltip(
                (event.client_x() as f64, event.client_y() as f64),
                (box_el.offset_width() as f64, box_el.offset_height() as f64),
                dom::viewport_size(),
                PREVIEW_OFFSET_PX,
            );
            dom::set_style(&box_el, "left", &format!("{}px", left));
            dom::set_style(&box_el, "top", &format!("{}px", top));
        }));

        let box_el = tooltip.clone();
        listeners.push(EventListener::new(&target, "mouseleave", move |_| {
            set_visible(&box_el, false);
        }));
    }

    Ok(HoverPreview {
        tooltip,
        _listeners: listeners,
    })
}

/// Rebuild the tooltip body. Text goes in through text nodes, never markup.
fn fill(
    document: &Document,
    tooltip: &HtmlElement,
    content: &PreviewContent,
) -> Result<(), WidgetError> {
    tooltip.set_inner_html("");
    if let Some(title) = &content.title {
        let strong = document.create_element("strong")?;
        strong.set_text_content(Some(title));
        tooltip.append_child(&strong)?;
    }
    if let Some(description) = &content.description {
        let paragraph = document.create_element("p")?;
        paragraph.set_text_content(Some(description));
        tooltip.append_child(&paragraph)?;
    }
    if let Some(src) = &content.image {
        let image = document.create_element("img")?;
        image.set_attribute("src", src)?;
        image.set_attribute("alt", content.title.as_deref().unwrap_or(""))?;
        tooltip.append_child(&image)?;
    }
    Ok(())
}

fn set_visible(tooltip: &HtmlElement, visible: bool) {
    let (opacity, visibility) = if visible { ("1", "visible") } else { ("0", "hidden") };
    dom::set_style(tooltip, "opacity", opacity);
    dom::set_style(tooltip, "visibility", visibility);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_attributes_count_as_missing() {
        let content = PreviewContent::new(Some("  ".into()), None, Some(String::new()));
        assert!(content.is_empty());
    }

    #[test]
    fn any_attribute_makes_content() {
        let content = PreviewContent::new(None, Some(" Rust, WASM ".into()), None);
        assert!(!content.is_empty());
        assert_eq!(content.description.as_deref(), Some("Rust, WASM"));
    }

    #[test]
    fn tooltip_sits_below_right_of_pointer() {
        let pos = place_tooltip((100.0, 100.0), (200.0, 80.0), (1280.0, 720.0), 15.0);
        assert_eq!(pos, (115.0, 115.0));
    }

    #[test]
    fn tooltip_flips_at_right_and_bottom_edges() {
        let pos = place_tooltip((1200.0, 700.0), (200.0, 80.0), (1280.0, 720.0), 15.0);
        assert_eq!(pos, (985.0, 605.0));
        assert!(pos.0 + 200.0 <= 1280.0);
        assert!(pos.1 + 80.0 <= 720.0);
    }

    #[test]
    fn tooltip_never_goes_negative() {
        let pos = place_tooltip((50.0, 30.0), (400.0, 300.0), (300.0, 200.0), 15.0);
        assert_eq!(pos, (0.0, 0.0));
    }
}
