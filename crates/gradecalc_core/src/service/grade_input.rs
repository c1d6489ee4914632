//! Grade text input parsing.
//!
//! # Responsibility
//! - Turn raw user text into `Option<Grade>` before it enters the model.
//!
//! # Invariants
//! - Blank input clears the grade (`Ok(None)`); it never means zero.
//! - Values outside `[0, 20]` are rejected, never clamped.

use crate::model::grade::{Grade, MAX_GRADE, MIN_GRADE};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

static GRADE_INPUT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-?(?:\d{1,3}(?:[.,]\d{0,6})?|[.,]\d{1,6})$").expect("valid grade input regex")
});

/// Rejection reasons for grade text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GradeInputError {
    /// Input is not a plain decimal number.
    NotANumber(String),
    /// Input parsed but lies outside the grading scale.
    OutOfRange(Decimal),
}

impl Display for GradeInputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotANumber(value) => write!(f, "not a grade: `{value}`"),
            Self::OutOfRange(value) => {
                write!(f, "grade {value} is outside [{MIN_GRADE}, {MAX_GRADE}]")
            }
        }
    }
}

impl Error for GradeInputError {}

/// Parses user text into a grade.
///
/// Accepts `12`, `12.5`, `12,5`, `12.` and `.5`; surrounding whitespace is
/// ignored.
pub fn parse_grade_input(raw: &str) -> Result<Option<Grade>, GradeInputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if !GRADE_INPUT_RE.is_match(trimmed) {
        return Err(GradeInputError::NotANumber(trimmed.to_string()));
    }

    let normalized = normalize_separator(trimmed);
    let value = Decimal::from_str(normalized.as_str())
        .map_err(|_| GradeInputError::NotANumber(trimmed.to_string()))?;
    Grade::new(value)
        .map(Some)
        .map_err(|_| GradeInputError::OutOfRange(value))
}

// `12,` -> `12`, `-,5` -> `-0.5`
fn normalize_separator(input: &str) -> String {
    let dotted = input.replace(',', ".");
    let (sign, digits) = match dotted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", dotted.as_str()),
    };
    let digits = digits.strip_suffix('.').unwrap_or(digits);
    if digits.starts_with('.') {
        format!("{sign}0{digits}")
    } else {
        format!("{sign}{digits}")
    }
}
