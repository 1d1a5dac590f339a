//! Record types persisted by the expense tracker and the keeper.
//!
//! # Responsibility
//! - Define explicit record shapes with required vs optional wire fields.
//! - Reject invalid records at deserialization time instead of letting
//!   missing fields leak into views.
//!
//! # See also
//! - `repo::collection_repo` for how collections are stored.

pub mod expense;
pub mod form;
pub mod id;
pub mod note;
pub mod theme;
