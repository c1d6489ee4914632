//! Syllabus domain model.
//!
//! # Responsibility
//! - Define the Unit -> Course Element -> Assessment tree consumed by the engine.
//! - Own value validation (grade range, non-negative weights) at construction
//!   and deserialization time.
//!
//! # Invariants
//! - Snapshots are immutable values; mutation produces a new `Syllabus`.
//! - An ungraded assessment (`grade = None`) is never conflated with a zero.

pub mod grade;
pub mod syllabus;
