//! Persistence layer: key-value slots and the JSON collections stored in them.
//!
//! # Responsibility
//! - Define the slot-store contract (`KeyValueStore`) and its backends.
//! - Load/save whole record collections as one JSON blob per slot.
//!
//! # Invariants
//! - Saves overwrite the whole slot; there are no partial updates.
//! - A missing or unparseable slot loads as an empty collection.

pub mod collection_repo;
pub mod kv_repo;
