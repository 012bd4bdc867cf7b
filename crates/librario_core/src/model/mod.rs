//! Domain model for the book catalog.
//!
//! # Responsibility
//! - Define the canonical data structures shared by every caller of the
//!   persistence layer.
//!
//! # Invariants
//! - A persisted `Book` always carries a store-assigned id and five valid
//!   business fields.

pub mod book;
