//! Full-page preloader overlay with a minimum display time.

use crate::config::{
    FADE_OUT, PRELOADER, PRELOADER_FALLBACK_MS, PRELOADER_MIN_DISPLAY_MS,
    PRELOADER_REMOVE_GRACE_MS,
};
use crate::{dom, WidgetError};
use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::HtmlElement;

/// Decides when the overlay may start fading out.
#[derive(Debug, Clone)]
pub struct PreloaderTimer {
    started_at: f64,
    min_display_ms: u32,
    hide_requested: bool,
}

impl PreloaderTimer {
    pub fn new(started_at: f64, min_display_ms: u32) -> Self {
        Self {
            started_at,
            min_display_ms,
            hide_requested: false,
        }
    }

    /// Milliseconds still to wait at `now` before the overlay may hide.
    pub fn remaining_ms(&self, now: f64) -> u32 {
        let elapsed = (now - self.started_at).max(0.0);
        (self.min_display_ms as f64 - elapsed).max(0.0).ceil() as u32
    }

    /// Register a hide trigger. Only the first trigger gets a delay back;
    /// the load event and the fallback timeout race and the loser is ignored.
    pub fn request_hide(&mut self, now: f64) -> Option<u32> {
        if self.hide_requested {
            return None;
        }
        self.hide_requested = true;
        Some(self.remaining_ms(now))
    }
}

/// Whether a failed [`init`] should be repeated once the DOM is parsed. While
/// the document is still loading the overlay may simply not exist yet.
pub fn needs_retry(err: &WidgetError, ready_state: &str) -> bool {
    matches!(err, WidgetError::MissingElement(_)) && ready_state == "loading"
}

/// Keeps the load listener and fallback timer alive.
pub struct Preloader {
    _load: EventListener,
    _fallback: Timeout,
}

pub fn init(started_at: f64) -> Result<Preloader, WidgetError> {
    let overlay = dom::query(PRELOADER)?;
    let window = dom::window()?;
    let timer = Rc::new(RefCell::new(PreloaderTimer::new(
        started_at,
        PRELOADER_MIN_DISPLAY_MS,
    )));
    // Counted from `started_at`, so a late retry does not extend the fallback.
    let fallback_ms =
        PreloaderTimer::new(started_at, PRELOADER_FALLBACK_MS).remaining_ms(js_sys::Date::now());

    let hide: Rc<dyn Fn(&'static str)> = Rc::new(move |trigger: &'static str| {
        let now = js_sys::Date::now();
        if let Some(delay) = timer.borrow_mut().request_hide(now) {
            debug!("Preloader hide triggered by {}, waiting {}ms", trigger, delay);
            fade_out(overlay.clone(), delay);
        }
    });

    // The wasm module can finish loading after the window load event.
    if dom::ready_state() == "complete" {
        hide("ready state");
    }

    let load = {
        let hide = hide.clone();
        EventListener::once(&window, "load", move |_| hide("load event"))
    };
    let fallback = Timeout::new(fallback_ms, move || hide("fallback timeout"));

    Ok(Preloader {
        _load: load,
        _fallback: fallback,
    })
}

fn fade_out(overlay: HtmlElement, delay_ms: u32) {
    Timeout::new(delay_ms, move || {
        dom::add_class(&overlay, FADE_OUT);

        let target = overlay.clone();
        EventListener::once(&overlay, "transitionend", move |_| target.remove()).forget();

        // Not every stylesheet defines a transition for the overlay.
        Timeout::new(PRELOADER_REMOVE_GRACE_MS, move || overlay.remove()).forget();
    })
    .forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fast_load_waits_out_the_minimum() {
        let mut timer = PreloaderTimer::new(1_000.0, 1_500);
        assert_eq!(timer.request_hide(1_400.0), Some(1_100));
    }

    #[test]
    fn slow_load_hides_immediately() {
        let mut timer = PreloaderTimer::new(0.0, 1_500);
        assert_eq!(timer.request_hide(2_000.0), Some(0));
    }

    #[test]
    fn visible_for_at_least_min_display_for_any_early_load() {
        for load_at in [0.0, 1.0, 250.0, 999.5, 1_499.0] {
            let mut timer = PreloaderTimer::new(0.0, 1_500);
            let delay = timer.request_hide(load_at).unwrap();
            assert!(load_at + delay as f64 >= 1_500.0, "load at {}", load_at);
        }
    }

    #[test]
    fn only_the_first_trigger_schedules_a_hide() {
        let mut timer = PreloaderTimer::new(0.0, 1_500);
        assert!(timer.request_hide(100.0).is_some());
        assert_eq!(timer.request_hide(4_000.0), None);
    }

    #[test]
    fn missing_overlay_is_retried_only_while_loading() {
        let missing = WidgetError::MissingElement(PRELOADER);
        assert!(needs_retry(&missing, "loading"));
        assert!(!needs_retry(&missing, "interactive"));
        assert!(!needs_retry(&missing, "complete"));
        assert!(!needs_retry(&WidgetError::Js("boom".into()), "loading"));
    }

    #[test]
    fn fallback_deadline_is_measured_from_boot() {
        let fallback = PreloaderTimer::new(1_000.0, PRELOADER_FALLBACK_MS);
        assert_eq!(fallback.remaining_ms(1_000.0), 4_000);
        assert_eq!(fallback.remaining_ms(2_500.0), 2_500);
        assert_eq!(fallback.remaining_ms(9_000.0), 0);
    }

    #[test]
    fn clock_going_backwards_never_shortens_the_wait() {
        let timer = PreloaderTimer::new(5_000.0, 1_500);
        assert_eq!(timer.remaining_ms(4_000.0), 1_500);
    }
}
