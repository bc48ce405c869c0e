//! Drives `simkit` tweens over `requestAnimationFrame` into reactive
//! signals.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use simkit::tween::Tween;

/// Default tween duration for widget value updates.
pub const DEFAULT_DURATION_MS: f64 = 600.0;

type FrameClosure = Closure<dyn FnMut(f64)>;
type FrameSlot = Rc<RefCell<Option<FrameClosure>>>;

struct Active {
    tween: Tween,
    started_at: Option<f64>,
}

/// The browser-bound half: the frame callback and the slot it reads.
/// Arena-stored so the public handle stays `Copy + Send`.
struct Inner {
    active: Rc<RefCell<Option<Active>>>,
    frame: FrameSlot,
    running: Rc<Cell<bool>>,
}

/// A number displayed through tweened updates.
///
/// At most one animation is live per value: [`AnimatedValue::animate_to`]
/// replaces any in-flight tween, and the replacement starts from the value
/// currently on screen, so a superseded animation can neither fight its
/// successor nor land late.
///
/// One frame callback is created per value and lives until the owning
/// scope is cleaned up; it only schedules frames while a tween is active.
#[derive(Clone, Copy)]
pub struct AnimatedValue {
    value: RwSignal<f64>,
    inner: StoredValue<Inner, LocalStorage>,
}

impl AnimatedValue {
    /// Create a value displaying `initial`. Must be called with a reactive
    /// owner active (component setup or `runtime::start`).
    #[must_use]
    pub fn new(initial: f64) -> Self {
        let value = RwSignal::new(initial);
        let active: Rc<RefCell<Option<Active>>> = Rc::new(RefCell::new(None));
        let frame: FrameSlot = Rc::new(RefCell::new(None));
        let running = Rc::new(Cell::new(false));

        let cb_active = Rc::clone(&active);
        let cb_frame = Rc::clone(&frame);
        let cb_running = Rc::clone(&running);
        *frame.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            let sample = {
                let mut slot = cb_active.borrow_mut();
                match slot.as_mut() {
                    Some(animation) => {
                        let started = *animation.started_at.get_or_insert(timestamp);
                        let sample = animation.tween.sample(timestamp - started);
                        if sample.done {
                            *slot = None;
                        }
                        Some(sample)
                    }
                    None => None,
                }
            };

            match sample {
                Some(sample) => {
                    value.set(sample.value);
                    if sample.done {
                        cb_running.set(false);
                    } else {
                        request_frame(&cb_frame);
                    }
                }
                None => cb_running.set(false),
            }
        }) as Box<dyn FnMut(f64)>));

        let inner = StoredValue::new_local(Inner { active, frame, running });
        Self { value, inner }
    }

    /// Current displayed value. Reactive — views reading this re-render
    /// every animation frame while a tween runs.
    #[must_use]
    pub fn get(&self) -> f64 {
        self.value.get()
    }

    /// Set without animating. Cancels any running tween.
    pub fn snap_to(&self, value: f64) {
        self.inner.with_value(|inner| *inner.active.borrow_mut() = None);
        self.value.set(value);
    }

    /// Animate from the currently displayed value to `end`.
    ///
    /// Supersedes any in-flight tween; the shared frame callback simply
    /// sees the replacement on its next frame.
    pub fn animate_to(&self, end: f64, duration_ms: f64) {
        let tween = Tween::new(self.value.get_untracked(), end, duration_ms);
        self.inner.with_value(|inner| {
            *inner.active.borrow_mut() = Some(Active { tween, started_at: None });
            if !inner.running.get() {
                inner.running.set(true);
                request_frame(&inner.frame);
            }
        });
    }
}

/// Schedule the next animation frame. A missing window just stops the
/// loop.
fn request_frame(frame: &FrameSlot) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(closure) = frame.borrow().as_ref() {
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    }
}
