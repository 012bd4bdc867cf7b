//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into the entry points both front ends
//!   share.
//! - Keep presentation layers decoupled from storage details.

pub mod catalog_service;
