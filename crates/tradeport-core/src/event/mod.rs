//! Event distribution for wizard lifecycle notifications.

pub mod bus;

pub use bus::WizardEventBus;
