//! Grade book use-case service.
//!
//! # Responsibility
//! - Hold the initial and current syllabus snapshots for a host.
//! - Apply grade-entry events as copy-on-write snapshot replacement.
//! - Expose engine reports for the current snapshot.
//!
//! # Invariants
//! - The current snapshot is only ever replaced whole, never edited in place.
//! - A failed mutation leaves the current snapshot untouched.
//! - `reset` restores the initial configuration exactly.

use crate::engine::report::{build_report, summarize, Summary, SyllabusReport};
use crate::model::grade::{Grade, ModelError};
use crate::model::syllabus::Syllabus;
use crate::service::grade_input::{parse_grade_input, GradeInputError};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from grade book mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GradeBookError {
    /// Address or value rejected by the model.
    Model(ModelError),
    /// Raw text input rejected before reaching the model.
    Input(GradeInputError),
}

impl Display for GradeBookError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Model(err) => write!(f, "{err}"),
            Self::Input(err) => write!(f, "{err}"),
        }
    }
}

impl Error for GradeBookError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Model(err) => Some(err),
            Self::Input(err) => Some(err),
        }
    }
}

impl From<ModelError> for GradeBookError {
    fn from(value: ModelError) -> Self {
        Self::Model(value)
    }
}

impl From<GradeInputError> for GradeBookError {
    fn from(value: GradeInputError) -> Self {
        Self::Input(value)
    }
}

/// Host-side holder of the current syllabus snapshot.
#[derive(Debug, Clone)]
pub struct GradeBook {
    initial: Syllabus,
    current: Syllabus,
}

impl GradeBook {
    /// Creates a grade book whose current snapshot equals `initial`.
    pub fn new(initial: Syllabus) -> Self {
        Self {
            current: initial.clone(),
            initial,
        }
    }

    /// Creates a grade book restored from a previously saved snapshot.
    ///
    /// `reset` still returns to `initial`, not to `restored`.
    pub fn with_snapshot(initial: Syllabus, restored: Syllabus) -> Self {
        Self {
            initial,
            current: restored,
        }
    }

    pub fn snapshot(&self) -> &Syllabus {
        &self.current
    }

    pub fn initial(&self) -> &Syllabus {
        &self.initial
    }

    /// Sets or clears one assessment grade.
    ///
    /// # Errors
    /// - Returns `GradeBookError::Model` when the address does not exist.
    pub fn set_grade(
        &mut self,
        unit: usize,
        element: usize,
        assessment: usize,
        grade: Option<Grade>,
    ) -> Result<&Syllabus, GradeBookError> {
        let next = match self.current.with_grade(unit, element, assessment, grade) {
            Ok(next) => next,
            Err(err) => {
                warn!(
                    "event=grade_set module=grade_book status=error unit={unit} element={element} assessment={assessment} error={err}"
                );
                return Err(err.into());
            }
        };

        self.current = next;
        debug!(
            "event=grade_set module=grade_book status=ok unit={unit} element={element} assessment={assessment} grade={}",
            grade_label(grade)
        );
        Ok(&self.current)
    }

    /// Parses raw text and applies it as in `set_grade`.
    ///
    /// Blank text clears the grade.
    pub fn set_grade_input(
        &mut self,
        unit: usize,
        element: usize,
        assessment: usize,
        raw: &str,
    ) -> Result<&Syllabus, GradeBookError> {
        let grade = parse_grade_input(raw).map_err(|err| {
            warn!(
                "event=grade_input module=grade_book status=rejected unit={unit} element={element} assessment={assessment}"
            );
            err
        })?;
        self.set_grade(unit, element, assessment, grade)
    }

    /// Replaces the current snapshot with a fresh copy of the initial one.
    pub fn reset(&mut self) {
        self.current = self.initial.clone();
        info!(
            "event=grade_reset module=grade_book status=ok units={}",
            self.current.units.len()
        );
    }

    /// Replaces the current snapshot wholesale, e.g. after a host restore.
    pub fn restore(&mut self, snapshot: Syllabus) {
        self.current = snapshot;
        info!(
            "event=grade_restore module=grade_book status=ok graded={} total={}",
            self.current.graded_count(),
            self.current.assessment_count()
        );
    }

    pub fn report(&self) -> SyllabusReport {
        build_report(&self.current)
    }

    pub fn summary(&self) -> Summary {
        summarize(&self.current)
    }
}

fn grade_label(grade: Option<Grade>) -> String {
    grade.map_or_else(|| "none".to_string(), |value| value.to_string())
}
