//! Client-side state models.
//!
//! Plain structs, no reactive or browser types — the app root wraps them in
//! signals. This keeps page-switching logic unit-testable.

pub mod nav;
