//! Wizard machinery for the Tradeport trade-finance flows.
//!
//! This crate defines the "ports" (collaborator traits) the surrounding
//! application implements -- submission gateway, step source, advisor --
//! and the controller that drives a multi-step application flow against
//! them. It depends only on `tradeport-types`, never on transport or
//! storage crates.

pub mod advisor;
pub mod event;
pub mod flows;
pub mod gateway;
pub mod session;
pub mod source;
pub mod wizard;
