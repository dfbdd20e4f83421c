//! Long-running timer and animation-frame tasks with explicit start/stop.

use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Interval;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// A callback fired every `period_ms` until stopped or dropped.
pub struct RepeatingTask {
    interval: Option<Interval>,
}

impl RepeatingTask {
    pub fn start<F>(period_ms: u32, tick: F) -> Self
    where
        F: FnMut() + 'static,
    {
        Self {
            interval: Some(Interval::new(period_ms, tick)),
        }
    }

    pub fn stop(&mut self) {
        if let Some(interval) = self.interval.take() {
            interval.cancel();
        }
    }
}

/// A step function run once per animation frame.
///
/// Created idle; `start` schedules the first frame and every frame schedules
/// the next one until `stop` is called or the loop is dropped.
pub struct FrameLoop {
    inner: Rc<FrameLoopInner>,
}

/// Idle/running flag. Each transition reports whether it changed anything.
#[derive(Debug, Default)]
struct RunFlag(Cell<bool>);

impl RunFlag {
    /// Returns `true` only on the idle to running transition.
    fn start(&self) -> bool {
        !self.0.replace(true)
    }

    /// Returns `true` only on the running to idle transition.
    fn stop(&self) -> bool {
        self.0.replace(false)
    }

    fn is_set(&self) -> bool {
        self.0.get()
    }
}

struct FrameLoopInner {
    running: RunFlag,
    frame: RefCell<Option<AnimationFrame>>,
    step: RefCell<Box<dyn FnMut(f64)>>,
}

impl FrameLoop {
    pub fn new<F>(step: F) -> Self
    where
        F: FnMut(f64) + 'static,
    {
        Self {
            inner: Rc::new(FrameLoopInner {
                running: RunFlag::default(),
                frame: RefCell::new(None),
                step: RefCell::new(Box::new(step)),
            }),
        }
    }

    /// Start the loop. Calling it again while running is a no-op.
    pub fn start(&self) {
        if !self.inner.running.start() {
            return;
        }
        FrameLoopInner::schedule(&self.inner);
    }

    pub fn stop(&self) {
        self.inner.running.stop();
        // Dropping the pending frame cancels it and releases the closure,
        // which breaks the Rc cycle through the callback.
        self.inner.frame.borrow_mut().take();
    }
}

impl FrameLoopInner {
    fn schedule(this: &Rc<Self>) {
        let inner = Rc::clone(this);
        let handle = request_animation_frame(move |timestamp| {
            inner.frame.borrow_mut().take();
            if !inner.running.is_set() {
                return;
            }
            (&mut *inner.step.borrow_mut())(timestamp);
            if inner.running.is_set() {
                FrameLoopInner::schedule(&inner);
            }
        });
        *this.frame.borrow_mut() = Some(handle);
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_twice_only_starts_once() {
        let flag = RunFlag::default();
        assert!(!flag.is_set());
        assert!(flag.start());
        assert!(!flag.start());
        assert!(flag.is_set());
    }

    #[test]
    fn stop_clears_the_flag_once() {
        let flag = RunFlag::default();
        flag.start();
        assert!(flag.stop());
        assert!(!flag.is_set());
        assert!(!flag.stop());
    }

    #[test]
    fn frame_loop_is_created_idle() {
        let frames = FrameLoop::new(|_| {});
        assert!(!frames.inner.running.is_set());
        assert!(frames.inner.frame.borrow().is_none());
        frames.stop();
        assert!(!frames.inner.running.is_set());
    }

    #[test]
    fn dropping_an_idle_loop_releases_its_step() {
        let captured = Rc::new(());
        let frames = {
            let captured = captured.clone();
            FrameLoop::new(move |_| {
                let _ = Rc::strong_count(&captured);
            })
        };
        assert_eq!(Rc::strong_count(&captured), 2);
        drop(frames);
        assert_eq!(Rc::strong_count(&captured), 1);
    }

    #[test]
    fn stopping_a_stopped_task_is_a_no_op() {
        let mut task = RepeatingTask { interval: None };
        task.stop();
        task.stop();
        assert!(task.interval.is_none());
    }
}
