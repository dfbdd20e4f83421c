//! Navigation bar behaviour: the mobile menu, in-page smooth scrolling and
//! the scrolled style of the nav bar.

use crate::config::{
    ACTIVE, IN_PAGE_ANCHORS, MENU_TOGGLE, NAV, NAV_LINK, NAV_LINKS, NAV_SCROLL_THRESHOLD_PX,
    SCROLLED,
};
use crate::{dom, WidgetError};
use gloo_events::{EventListener, EventListenerOptions, EventListenerPhase};
use log::debug;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, Node, ScrollBehavior, ScrollToOptions};

// ──────────────────────────────────────────────────────────────────────────────
// Mobile menu

/// Open/closed state of the mobile menu.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Force the menu closed. Returns `true` if it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }
}

pub struct MobileMenu {
    _listeners: Vec<EventListener>,
}

pub fn init_mobile_menu() -> Result<MobileMenu, WidgetError> {
    let toggle = dom::query(MENU_TOGGLE)?;
    let panel = dom::query(NAV_LINKS)?;
    let document = dom::document()?;
    let state = Rc::new(Cell::new(MenuState::default()));
    let mut listeners = Vec::new();

    {
        let (toggle_el, panel_el, state) = (toggle.clone(), panel.clone(), state.clone());
        listeners.push(EventListener::new(&toggle, "click", move |_| {
            let mut menu = state.get();
            let open = menu.toggle();
            state.set(menu);
            show_menu(&toggle_el, &panel_el, open);
        }));
    }

    for link in dom::query_all_in(&panel, NAV_LINK) {
        let (toggle_el, panel_el, state) = (toggle.clone(), panel.clone(), state.clone());
        listeners.push(EventListener::new(&link, "click", move |_| {
            close_menu(&state, &toggle_el, &panel_el);
        }));
    }

    {
        let (toggle_el, panel_el) = (toggle.clone(), panel.clone());
        listeners.push(EventListener::new(&document, "click", move |event: &Event| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
                return;
            };
            if !toggle_el.contains(Some(&target)) && !panel_el.contains(Some(&target)) {
                close_menu(&state, &toggle_el, &panel_el);
            }
        }));
    }

    Ok(MobileMenu {
        _listeners: listeners,
    })
}

fn close_menu(state: &Cell<MenuState>, toggle: &Element, panel: &Element) {
    let mut menu = state.get();
    if menu.close() {
        state.set(menu);
        show_menu(toggle, panel, false);
    }
}

fn show_menu(toggle: &Element, panel: &Element, open: bool) {
    let _ = toggle.class_list().toggle_with_force(ACTIVE, open);
    let _ = panel.class_list().toggle_with_force(ACTIVE, open);
}

// ──────────────────────────────────────────────────────────────────────────────
// Smooth scroll

/// The selector an in-page link points at, if it points anywhere.
///
/// `"#about"` resolves to `Some("#about")`; a bare `"#"` or an external link
/// resolves to nothing.
pub fn anchor_selector(href: &str) -> Option<&str> {
    let href = href.trim();
    if href.len() > 1 && href.starts_with('#') {
        Some(href)
    } else {
        None
    }
}

/// Scroll position that puts a section just below the fixed nav bar.
pub fn scroll_offset(section_top: f64, nav_height: f64) -> f64 {
    (section_top - nav_height).max(0.0)
}

pub struct SmoothScroll {
    _listeners: Vec<EventListener>,
}

pub fn init_smooth_scroll() -> Result<SmoothScroll, WidgetError> {
    let anchors = dom::query_all(IN_PAGE_ANCHORS);
    if anchors.is_empty() {
        return Err(WidgetError::MissingElement(IN_PAGE_ANCHORS));
    }

    let listeners = anchors
        .into_iter()
        .map(|anchor| {
            let link = anchor.clone();
            EventListener::new_with_options(
                &anchor,
                "click",
                EventListenerOptions::enable_prevent_default(),
                move |event: &Event| {
                    event.prevent_default();
                    let href = link.get_attribute("href").unwrap_or_default();
                    if let Some(selector) = anchor_selector(&href) {
                        scroll_to_section(selector);
                    }
                },
            )
        })
        .collect();

    Ok(SmoothScroll {
        _listeners: listeners,
    })
}

fn scroll_to_section(selector: &str) {
    let matches = dom::query_all(selector);
    let [section] = matches.as_slice() else {
        debug!("Anchor {} matched {} elements, not scrolling", selector, matches.len());
        return;
    };
    let Ok(window) = dom::window() else {
        return;
    };
    let nav_height = dom::query(NAV)
        .map(|nav| nav.offset_height() as f64)
        .unwrap_or(0.0);

    let options = ScrollToOptions::new();
    options.set_top(scroll_offset(section.offset_top() as f64, nav_height));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

// ──────────────────────────────────────────────────────────────────────────────
// Nav scroll style

/// Tracks which side of the scroll threshold the page is on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavScrollState {
    scrolled: bool,
    threshold: f64,
}

impl NavScrollState {
    pub fn new(threshold: f64) -> Self {
        Self {
            scrolled: false,
            threshold,
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Feed the latest scroll offset. Returns the new flag only when the
    /// threshold was crossed, so callers write styles once per crossing.
    pub fn update(&mut self, scroll_y: f64) -> Option<bool> {
        let scrolled = scroll_y > self.threshold;
        if scrolled == self.scrolled {
            return None;
        }
        self.scrolled = scrolled;
        Some(scrolled)
    }
}

pub struct NavScroll {
    _listener: EventListener,
}

pub fn init_nav_scroll() -> Result<NavScroll, WidgetError> {
    let nav = dom::query(NAV)?;
    let window = dom::window()?;
    let state = Rc::new(Cell::new(NavScrollState::new(NAV_SCROLL_THRESHOLD_PX)));

    let sync: Rc<dyn Fn()> = {
        let window = window.clone();
        Rc::new(move || {
            let scroll_y = window.scroll_y().unwrap_or(0.0);
            let mut nav_state = state.get();
            if let Some(scrolled) = nav_state.update(scroll_y) {
                state.set(nav_state);
                apply_nav_style(&nav, scrolled);
            }
        })
    };

    // Reloads can restore a scrolled position before any scroll event fires.
    sync();

    let listener = EventListener::new_with_options(
        &window,
        "scroll",
        EventListenerOptions {
            phase: EventListenerPhase::Bubble,
            passive: true,
        },
        move |_| sync(),
    );

    Ok(NavScroll {
        _listener: listener,
    })
}

fn apply_nav_style(nav: &HtmlElement, scrolled: bool) {
    let _ = nav.class_list().toggle_with_force(SCROLLED, scrolled);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_toggles_and_closes() {
        let mut menu = MenuState::default();
        assert!(menu.toggle());
        assert!(!menu.toggle());
        menu.toggle();
        assert!(menu.close());
        assert_eq!(menu, MenuState::default());
    }

    #[test]
    fn closing_a_closed_menu_reports_no_change() {
        let mut menu = MenuState::default();
        assert!(!menu.close());
    }

    #[test]
    fn anchors_resolve_only_to_named_fragments() {
        assert_eq!(anchor_selector("#about"), Some("#about"));
        assert_eq!(anchor_selector(" #work "), Some("#work"));
        assert_eq!(anchor_selector("#"), None);
        assert_eq!(anchor_selector(""), None);
        assert_eq!(anchor_selector("/creatives"), None);
    }

    #[test]
    fn scroll_offset_accounts_for_nav_height() {
        assert_eq!(scroll_offset(900.0, 72.0), 828.0);
        assert_eq!(scroll_offset(40.0, 72.0), 0.0);
    }

    #[test]
    fn nav_flag_mirrors_threshold() {
        let mut nav = NavScrollState::new(50.0);
        assert_eq!(nav.update(10.0), None);
        assert_eq!(nav.update(50.0), None);
        assert_eq!(nav.update(51.0), Some(true));
        assert!(nav.is_scrolled());
        assert_eq!(nav.update(0.0), Some(false));
        assert!(!nav.is_scrolled());
    }

    #[test]
    fn repeated_scrolls_on_one_side_write_nothing() {
        let mut nav = NavScrollState::new(50.0);
        let writes = [60.0, 120.0, 400.0, 51.0, 30.0, 20.0, 0.0]
            .iter()
            .filter_map(|&y| nav.update(y))
            .count();
        assert_eq!(writes, 2);
    }
}
