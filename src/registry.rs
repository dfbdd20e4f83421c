//! Thread-local registry that keeps widget handles alive for the page.
//!
//! Widget handles own their listeners, timers and observer closures;
//! dropping one detaches the widget. Booted widgets are parked here so they
//! live until the page is torn down.
//!
//! # Entry Structure
//! - `&'static str`: widget name, used in log lines
//! - `Box<dyn Any>`: the owned handle

use std::any::Any;
use std::cell::RefCell;

type Entry = (&'static str, Box<dyn Any>);

thread_local! {
    /// Live widget handles. Thread-local since wasm runs on one thread.
    pub static WIDGETS: RefCell<Vec<Entry>> = RefCell::new(Vec::with_capacity(16));
}

/// Park a widget handle for the rest of the page lifetime.
pub fn keep_alive<T: 'static>(name: &'static str, handle: T) {
    WIDGETS.with(|w| w.borrow_mut().push((name, Box::new(handle))));
}

/// Names of the widgets currently attached, in boot order.
pub fn live_widgets() -> Vec<&'static str> {
    WIDGETS.with(|w| w.borrow().iter().map(|(name, _)| *name).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn parked_handles_are_kept_alive() {
        let handle = Rc::new(());
        keep_alive("probe", handle.clone());
        assert_eq!(Rc::strong_count(&handle), 2);
        assert!(live_widgets().contains(&"probe"));
    }
}
