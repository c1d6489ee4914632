//! FFI use-case API for UI hosts.
//!
//! # Responsibility
//! - Expose grade-book use-cases as sync FRB functions.
//! - Own one process-global grade book for the host session.
//! - Return display-ready strings so hosts never format grades themselves.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Every mutation replaces the whole snapshot or leaves it untouched.

use gradecalc_core::{
    core_version as core_version_inner, default_syllabus, format_grade,
    init_logging as init_logging_inner, load_syllabus_file, load_syllabus_json, to_json,
    ElementReport, GradeBook, Summary, Syllabus, UnitReport,
};
use log::warn;
use rust_decimal::Decimal;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

const SYLLABUS_PATH_ENV: &str = "GRADECALC_SYLLABUS_PATH";
static GRADE_BOOK: OnceLock<Mutex<GradeBook>> = OnceLock::new();

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Headline metrics, pre-formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeSummaryView {
    /// Current grade over graded units, or `N/A`.
    pub current: String,
    /// Projected final grade with ungraded work at the placeholder.
    pub projected: String,
    /// Points on the /20 scale still collectable.
    pub collectable: String,
    pub graded: u32,
    pub total: u32,
    pub remaining_credit: String,
    pub total_credit: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementView {
    pub name: String,
    pub weight: String,
    pub credit: Option<String>,
    pub grade: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitView {
    pub name: String,
    pub credit: String,
    pub weight: String,
    pub grade: String,
    /// Unit grade with ungraded work at the placeholder.
    pub projected: String,
    pub fully_graded: bool,
    pub elements: Vec<ElementView>,
}

/// Result envelope for grade-book mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeActionResponse {
    /// Whether the mutation was applied.
    pub ok: bool,
    /// Human-readable message for diagnostics/UI.
    pub message: String,
    /// Summary after the call; unchanged snapshot on failure.
    pub summary: GradeSummaryView,
}

/// Returns headline metrics for the current snapshot.
#[flutter_rust_bridge::frb(sync)]
pub fn grade_summary() -> GradeSummaryView {
    summary_view(&lock_grade_book().summary())
}

/// Returns per-unit and per-element grades for the current snapshot.
#[flutter_rust_bridge::frb(sync)]
pub fn grade_report() -> Vec<UnitView> {
    lock_grade_book()
        .report()
        .units
        .iter()
        .map(unit_view)
        .collect()
}

/// Sets one assessment grade from raw text input.
///
/// # FFI contract
/// - Blank `value` clears the grade.
/// - Values outside `[0, 20]` and unknown indices are rejected.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn set_grade(unit: u32, element: u32, assessment: u32, value: String) -> GradeActionResponse {
    let mut book = lock_grade_book();
    let result = book.set_grade_input(
        unit as usize,
        element as usize,
        assessment as usize,
        value.as_str(),
    );
    match result {
        Ok(_) => GradeActionResponse {
            ok: true,
            message: "Grade updated.".to_string(),
            summary: summary_view(&book.summary()),
        },
        Err(err) => GradeActionResponse {
            ok: false,
            message: format!("set_grade failed: {err}"),
            summary: summary_view(&book.summary()),
        },
    }
}

/// Resets every grade to the initial configuration.
#[flutter_rust_bridge::frb(sync)]
pub fn reset_grades() -> GradeActionResponse {
    let mut book = lock_grade_book();
    book.reset();
    GradeActionResponse {
        ok: true,
        message: "Grades reset.".to_string(),
        summary: summary_view(&book.summary()),
    }
}

/// Serializes the current snapshot for host-side persistence.
///
/// Returns an empty string when serialization fails.
#[flutter_rust_bridge::frb(sync)]
pub fn export_snapshot() -> String {
    match to_json(lock_grade_book().snapshot()) {
        Ok(json) => json,
        Err(err) => {
            warn!("event=snapshot_export module=ffi status=error error={err}");
            String::new()
        }
    }
}

/// Replaces the current snapshot with one previously exported.
#[flutter_rust_bridge::frb(sync)]
pub fn restore_snapshot(json: String) -> GradeActionResponse {
    let mut book = lock_grade_book();
    match load_syllabus_json(json.as_str()) {
        Ok(snapshot) => {
            book.restore(snapshot);
            GradeActionResponse {
                ok: true,
                message: "Snapshot restored.".to_string(),
                summary: summary_view(&book.summary()),
            }
        }
        Err(err) => GradeActionResponse {
            ok: false,
            message: format!("restore_snapshot failed: {err}"),
            summary: summary_view(&book.summary()),
        },
    }
}

fn lock_grade_book() -> MutexGuard<'static, GradeBook> {
    GRADE_BOOK
        .get_or_init(|| Mutex::new(GradeBook::new(initial_syllabus())))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

fn initial_syllabus() -> Syllabus {
    let Ok(raw) = std::env::var(SYLLABUS_PATH_ENV) else {
        return default_syllabus();
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return default_syllabus();
    }
    match load_syllabus_file(trimmed) {
        Ok(syllabus) => syllabus,
        Err(err) => {
            warn!("event=syllabus_init module=ffi status=fallback error={err}");
            default_syllabus()
        }
    }
}

fn summary_view(summary: &Summary) -> GradeSummaryView {
    GradeSummaryView {
        current: format_grade(summary.current),
        projected: format_grade(summary.projected),
        collectable: format_grade(summary.collectable),
        graded: saturating_u32(summary.completion.graded),
        total: saturating_u32(summary.completion.total),
        remaining_credit: format_value(summary.remaining_credit),
        total_credit: format_value(summary.total_credit),
    }
}

fn unit_view(unit: &UnitReport) -> UnitView {
    UnitView {
        name: unit.name.clone(),
        credit: format_value(unit.credit),
        weight: format_value(unit.weight),
        grade: format_grade(unit.grade),
        projected: format_grade(unit.projected),
        fully_graded: unit.fully_graded,
        elements: unit.elements.iter().map(element_view).collect(),
    }
}

fn element_view(element: &ElementReport) -> ElementView {
    ElementView {
        name: element.name.clone(),
        weight: format_value(element.weight),
        credit: element.credit.map(format_value),
        grade: format_grade(element.grade),
    }
}

fn format_value(value: Decimal) -> String {
    format_grade(Some(value))
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, export_snapshot, grade_report, grade_summary, init_logging, reset_grades,
        restore_snapshot, set_grade,
    };
    use std::sync::Mutex;

    // Tests share the process-global grade book.
    static SERIAL: Mutex<()> = Mutex::new(());

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "/tmp/gradecalc".to_string());
        assert!(error.contains("unsupported log level"));
    }

    #[test]
    fn set_grade_updates_summary_and_report() {
        let _guard = SERIAL.lock().unwrap_or_else(|err| err.into_inner());
        reset_grades();

        let response = set_grade(4, 0, 0, "14".to_string());
        assert!(response.ok, "{}", response.message);
        assert_eq!(response.summary.current, "14");
        assert_eq!(response.summary.graded, 1);
        assert_eq!(response.summary.total, 19);

        let report = grade_report();
        assert_eq!(report[4].grade, "14");
        assert_eq!(report[4].elements[0].grade, "14");
        assert_eq!(report[4].projected, "11.33333");
        assert_eq!(report[0].grade, "N/A");
        assert_eq!(report[0].projected, "10");

        reset_grades();
        assert_eq!(grade_summary().current, "N/A");
    }

    #[test]
    fn set_grade_rejects_bad_input_without_mutation() {
        let _guard = SERIAL.lock().unwrap_or_else(|err| err.into_inner());
        reset_grades();

        let response = set_grade(0, 0, 0, "twenty".to_string());
        assert!(!response.ok);
        assert!(response.message.contains("not a grade"));

        let response = set_grade(0, 0, 9, "12".to_string());
        assert!(!response.ok);
        assert!(response.message.contains("assessment not found"));
        assert_eq!(response.summary.graded, 0);
    }

    #[test]
    fn export_and_restore_round_trip() {
        let _guard = SERIAL.lock().unwrap_or_else(|err| err.into_inner());
        reset_grades();

        assert!(set_grade(1, 3, 0, "16.5".to_string()).ok);
        let exported = export_snapshot();
        assert!(!exported.is_empty());
        let value: serde_json::Value = serde_json::from_str(&exported).unwrap();
        assert_eq!(value[1]["UE"], "Physical Chemistry 5");

        reset_grades();
        let restored = restore_snapshot(exported);
        assert!(restored.ok, "{}", restored.message);
        assert_eq!(restored.summary.current, "16.5");

        let rejected = restore_snapshot("{".to_string());
        assert!(!rejected.ok);
        assert_eq!(rejected.summary.current, "16.5");

        reset_grades();
    }
}
