//! Host-facing use-case services.
//!
//! # Responsibility
//! - Validate raw grade input at the model boundary.
//! - Hold host snapshots and apply grade-entry events copy-on-write.
//! - Keep UI/FFI layers decoupled from engine internals.

pub mod grade_book;
pub mod grade_input;
