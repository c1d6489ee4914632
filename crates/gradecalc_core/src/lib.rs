//! Core grade aggregation for hierarchical syllabi.
//! This crate is the single source of truth for grading invariants.

pub mod catalog;
pub mod engine;
pub mod logging;
pub mod model;
pub mod service;

pub use catalog::{default_syllabus, load_syllabus_file, load_syllabus_json, to_json, CatalogError};
pub use engine::aggregate::{
    collectable_points, completion, completion_ratio, element_grade, overall_grade,
    remaining_credit, unit_grade, Completion, OverallMode, PROJECTION_PLACEHOLDER,
};
pub use engine::format::{format_grade, round_grade, ABSENT_LABEL, DISPLAY_DECIMALS};
pub use engine::report::{
    build_report, summarize, ElementReport, Summary, SyllabusReport, UnitReport,
};
pub use engine::weighted::{weighted_mean, MissingPolicy};
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig, LoggingError};
pub use model::grade::{Grade, ModelError, Weight, MAX_GRADE, MAX_WEIGHT, MIN_GRADE};
pub use model::syllabus::{Assessment, CourseElement, Syllabus, Unit};
pub use rust_decimal::Decimal;
pub use service::grade_book::{GradeBook, GradeBookError};
pub use service::grade_input::{parse_grade_input, GradeInputError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
