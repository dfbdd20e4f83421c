//! Icon rendering through the page's Lucide script, plus removal of contact
//! icons that have nowhere to link to.

use crate::config::{CONTACT_ICON, ICON_FADE_MS};
use crate::{dom, WidgetError};
use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = lucide, js_name = createIcons, catch)]
    fn lucide_create_icons() -> Result<(), JsValue>;
}

/// What the icon pass did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconPass {
    pub rendered: bool,
    pub pruned: usize,
}

/// A contact link is dead when it has no target or only a bare fragment.
pub fn is_dead_link(href: Option<&str>) -> bool {
    match href.map(str::trim) {
        None | Some("") | Some("#") => true,
        Some(_) => false,
    }
}

fn library_present() -> bool {
    js_sys::Reflect::has(&js_sys::global(), &"lucide".into()).unwrap_or(false)
}

/// Swap `<i data-lucide>` placeholders for SVGs when the library is loaded.
pub fn render_icons() -> bool {
    if !library_present() {
        return false;
    }
    match lucide_create_icons() {
        Ok(()) => true,
        Err(e) => {
            warn!("lucide.createIcons failed: {:?}", e);
            false
        }
    }
}

/// Fade out and remove contact icons with an empty or placeholder link.
pub fn prune_dead_contact_icons() -> usize {
    let mut pruned = 0;
    for icon in dom::query_all(CONTACT_ICON) {
        let href = icon.get_attribute("href").or_else(|| {
            icon.query_selector("a[href]")
                .ok()
                .flatten()
                .and_then(|link| link.get_attribute("href"))
        });
        if !is_dead_link(href.as_deref()) {
            continue;
        }
        dom::set_style(&icon, "transition", &format!("opacity {}ms ease", ICON_FADE_MS));
        dom::set_style(&icon, "opacity", "0");
        Timeout::new(ICON_FADE_MS, move || icon.remove()).forget();
        pruned += 1;
    }
    pruned
}

pub fn init() -> Result<IconPass, WidgetError> {
    dom::document()?;
    Ok(IconPass {
        rendered: render_icons(),
        pruned: prune_dead_contact_icons(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_placeholder_links_are_dead() {
        assert!(is_dead_link(None));
        assert!(is_dead_link(Some("")));
        assert!(is_dead_link(Some("   ")));
        assert!(is_dead_link(Some("#")));
        assert!(is_dead_link(Some(" # ")));
    }

    #[test]
    fn real_links_are_kept() {
        assert!(!is_dead_link(Some("https://github.com/someone")));
        assert!(!is_dead_link(Some("mailto:me@example.com")));
        assert!(!is_dead_link(Some("#contact")));
    }
}
