//! Auto-advancing photo carousel.

use crate::config::{ACTIVE, CAROUSEL_IMAGE, CAROUSEL_INTERVAL_MS};
use crate::tasks::RepeatingTask;
use crate::{dom, WidgetError};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::HtmlElement;

/// Cyclic index over the carousel images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    current: usize,
}

impl Carousel {
    /// A carousel needs at least two images to have anything to cycle.
    pub fn new(len: usize, start: usize) -> Result<Self, WidgetError> {
        if len < 2 {
            return Err(WidgetError::TooFewItems {
                needed: 2,
                found: len,
            });
        }
        Ok(Self {
            len,
            current: start % len,
        })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Advance one step. Returns `(previous, next)` so the caller can
    /// deactivate one image and activate the other.
    pub fn tick(&mut self) -> (usize, usize) {
        let previous = self.current;
        self.current = (self.current + 1) % self.len;
        (previous, self.current)
    }
}

pub struct PhotoCarousel {
    task: RepeatingTask,
}

impl PhotoCarousel {
    pub fn stop(&mut self) {
        self.task.stop();
    }
}

pub fn init() -> Result<PhotoCarousel, WidgetError> {
    let images = dom::query_all(CAROUSEL_IMAGE);
    let start = images
        .iter()
        .position(|img| dom::has_class(img, ACTIVE))
        .unwrap_or(0);
    let carousel = Rc::new(RefCell::new(Carousel::new(images.len(), start)?));

    // Markup may mark zero or several images active; keep exactly one.
    for (idx, img) in images.iter().enumerate() {
        set_active(img, idx == start);
    }

    let task = RepeatingTask::start(CAROUSEL_INTERVAL_MS, move || {
        let (previous, next) = carousel.borrow_mut().tick();
        set_active(&images[previous], false);
        set_active(&images[next], true);
    });

    Ok(PhotoCarousel { task })
}

fn set_active(img: &HtmlElement, active: bool) {
    let _ = img.class_list().toggle_with_force(ACTIVE, active);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fewer_than_two_images_is_rejected() {
        assert_eq!(
            Carousel::new(1, 0),
            Err(WidgetError::TooFewItems { needed: 2, found: 1 })
        );
        assert!(Carousel::new(0, 0).is_err());
    }

    #[test]
    fn tick_wraps_around() {
        let mut carousel = Carousel::new(3, 0).unwrap();
        assert_eq!(carousel.tick(), (0, 1));
        assert_eq!(carousel.tick(), (1, 2));
        assert_eq!(carousel.tick(), (2, 0));
    }

    #[test]
    fn n_ticks_return_to_start() {
        for len in 2..8 {
            for start in 0..len {
                let mut carousel = Carousel::new(len, start).unwrap();
                for _ in 0..len {
                    carousel.tick();
                }
                assert_eq!(carousel.current(), start);
            }
        }
    }

    #[test]
    fn exactly_one_image_active_after_every_tick() {
        let len = 4;
        let mut carousel = Carousel::new(len, 0).unwrap();
        let mut active = vec![false; len];
        active[carousel.current()] = true;
        for _ in 0..10 {
            let (previous, next) = carousel.tick();
            active[previous] = false;
            active[next] = true;
            assert_eq!(active.iter().filter(|a| **a).count(), 1);
            assert!(active[carousel.current()]);
        }
    }

    #[test]
    fn start_index_is_reduced_modulo_len() {
        let carousel = Carousel::new(3, 7).unwrap();
        assert_eq!(carousel.current(), 1);
    }
}
