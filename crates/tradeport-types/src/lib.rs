//! Shared domain types for the Tradeport wizard core.
//!
//! This crate contains the types used across the trade-finance application
//! flows: wizard state, field stores, checklist items, flow variants,
//! submission payloads, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod clause;
pub mod error;
pub mod event;
pub mod field;
pub mod flow;
pub mod submission;
pub mod wizard;
