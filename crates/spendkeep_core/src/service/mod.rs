//! Application controllers.
//!
//! # Responsibility
//! - Own each application's in-memory collection and its slot store.
//! - Turn user actions into read-modify-write cycles with a `Notice` result.
//!
//! # Invariants
//! - Every successful mutation is persisted before the call returns.
//! - Refused actions (validation, empty collection) never touch storage.

pub mod expense_service;
pub mod keeper_service;
pub mod notice;
