//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contract both front ends program against.
//! - Isolate SQLite query details from use-case orchestration.
//!
//! # Invariants
//! - Repository writes enforce model validation before persistence.
//! - Update and delete report affected rows explicitly, so callers can tell
//!   "no such id" apart from a store failure.

pub mod book_repo;
