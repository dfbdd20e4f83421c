//! Entry point: installs logging, starts the preloader and attaches every
//! page widget once the DOM has been parsed.

use gloo_events::EventListener;
use log::{debug, info, warn};
use portfolio_interactions::config::CREATIVE_LIST_ID;
use portfolio_interactions::{
    api, carousel, contact, cursor, dom, icons, navigation, preloader, preview, reveal, tilt,
    WidgetError,
};
use wasm_bindgen_futures::spawn_local;
use yew::AppHandle;

mod components;
mod registry;

use components::CreativeList;
use registry::{keep_alive, live_widgets};

// ──────────────────────────────────────────────────────────────────────────────
// Helper functions

/// Park a widget handle, or log why the widget is not on this page.
fn attach<T: 'static>(name: &'static str, result: Result<T, WidgetError>) {
    match result {
        Ok(handle) => keep_alive(name, handle),
        Err(e) if e.is_skip() => debug!("{} skipped: {}", name, e),
        Err(e) => warn!("{} failed to start: {}", name, e),
    }
}

/// Mount the creative-works list into its container, replacing the
/// server-rendered placeholder.
fn mount_creative_list() -> Result<AppHandle<CreativeList>, WidgetError> {
    let container = dom::document()?
        .get_element_by_id(CREATIVE_LIST_ID)
        .ok_or(WidgetError::MissingElement("#creative-list"))?;
    container.set_inner_html("");
    Ok(yew::Renderer::<CreativeList>::with_root(container).render())
}

/// `retry_preloader` carries the boot time when the overlay was not yet
/// parsed at startup.
fn init_page(retry_preloader: Option<f64>) {
    if let Some(started_at) = retry_preloader {
        attach("preloader", preloader::init(started_at));
    }
    attach("mobile menu", navigation::init_mobile_menu());
    attach("smooth scroll", navigation::init_smooth_scroll());
    attach("section reveal", reveal::init());
    attach("card tilt", tilt::init());
    match icons::init() {
        Ok(pass) => debug!(
            "Icons rendered: {}, dead contact icons removed: {}",
            pass.rendered, pass.pruned
        ),
        Err(e) => debug!("icons skipped: {}", e),
    }
    attach("hover preview", preview::init());
    attach("photo carousel", carousel::init());
    attach("nav scroll", navigation::init_nav_scroll());
    attach("animated cursor", cursor::init());
    attach("contact form", contact::init());
    attach("creative list", mount_creative_list());

    spawn_local(api::track_page_visit());

    let live = live_widgets();
    info!("Page ready: {} widgets attached ({})", live.len(), live.join(", "));
}

// ──────────────────────────────────────────────────────────────────────────────

/// Entry point: the preloader clock starts here, before the DOM-ready wait.
fn main() {
    // Set the panic hook to log detailed errors to the console
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));

    let started_at = js_sys::Date::now();
    let retry_preloader = match preloader::init(started_at) {
        Err(e) if preloader::needs_retry(&e, &dom::ready_state()) => {
            debug!("Preloader not parsed yet, retrying after DOMContentLoaded");
            Some(started_at)
        }
        result => {
            attach("preloader", result);
            None
        }
    };

    if dom::ready_state() != "loading" {
        init_page(retry_preloader);
        return;
    }
    match dom::document() {
        Ok(document) => {
            EventListener::once(&document, "DOMContentLoaded", move |_| {
                init_page(retry_preloader)
            })
            .forget();
        }
        Err(e) => warn!("Cannot wait for DOMContentLoaded: {}", e),
    }
}
