//! Grade aggregation engine.
//!
//! # Responsibility
//! - Reduce a syllabus snapshot into element, unit and overall grades.
//! - Derive completion and credit metrics, and format values for display.
//!
//! # Invariants
//! - Every function is pure: same snapshot in, bit-identical result out.
//! - Aggregation runs in exact decimal arithmetic; rounding happens once, in
//!   `format::round_grade`, never inside an aggregation layer.
//! - "No grade" is `None` at every level and is never coerced to zero.

pub mod aggregate;
pub mod format;
pub mod report;
pub mod weighted;
