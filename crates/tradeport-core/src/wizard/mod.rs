//! The wizard controller and its pure helpers.
//!
//! `gating` and `preview` are side-effect-free functions so they can be
//! tested in isolation and called on every render; `controller` owns the
//! mutable state and is the only place transitions happen.

pub mod controller;
pub mod gating;
pub mod preview;

pub use controller::WizardController;
pub use preview::PreviewTemplate;
