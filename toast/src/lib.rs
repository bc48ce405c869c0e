//! Transient, auto-dismissing notification overlays ("toasts") shared by
//! both front-ends.
//!
//! The sites differ only in policy: the academic site shows at most one
//! toast at a time (a new one replaces it, 5 s timeout), the dashboard
//! stacks them (3 s timeout). Policy and timeout are host configuration;
//! everything else is identical.
//!
//! [`queue`] is the pure list model with side-file tests; [`host`] owns the
//! Leptos component, the auto-dismiss timers, and the lazy stylesheet
//! injection.

pub mod host;
pub mod queue;

pub use host::{ToastHost, Toaster, inject_styles, provide_toaster, use_toaster};
pub use queue::{Stacking, Toast, ToastKind};
