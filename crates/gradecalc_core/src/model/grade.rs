//! Validated scalar values: grades and weights.
//!
//! # Responsibility
//! - Keep out-of-range grades and negative weights out of the model.
//! - Carry exact decimal values so no floating drift enters aggregation.
//!
//! # Invariants
//! - `Grade` always lies in `[MIN_GRADE, MAX_GRADE]`.
//! - `Weight` always lies in `[0, MAX_WEIGHT]`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Lowest grade on the scale.
pub const MIN_GRADE: Decimal = Decimal::ZERO;
/// Highest grade on the scale.
pub const MAX_GRADE: Decimal = Decimal::from_parts(20, 0, 0, false, 0);
/// Largest accepted weight or credit (10^9).
///
/// Keeps every weighted sum the engine builds far below `Decimal::MAX`.
pub const MAX_WEIGHT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Validation and addressing errors raised by the syllabus model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Grade value lies outside `[0, 20]`.
    GradeOutOfRange(Decimal),
    /// Weight or credit value is negative.
    NegativeWeight(Decimal),
    /// Weight or credit value is above `MAX_WEIGHT`.
    WeightOutOfRange(Decimal),
    /// Unit index does not exist in the syllabus.
    UnitNotFound(usize),
    /// Element index does not exist in the addressed unit.
    ElementNotFound { unit: usize, element: usize },
    /// Assessment index does not exist in the addressed element.
    AssessmentNotFound {
        unit: usize,
        element: usize,
        assessment: usize,
    },
}

impl Display for ModelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GradeOutOfRange(value) => {
                write!(f, "grade {value} is outside [{MIN_GRADE}, {MAX_GRADE}]")
            }
            Self::NegativeWeight(value) => write!(f, "weight {value} must be >= 0"),
            Self::WeightOutOfRange(value) => {
                write!(f, "weight {value} must be <= {MAX_WEIGHT}")
            }
            Self::UnitNotFound(unit) => write!(f, "unit not found: {unit}"),
            Self::ElementNotFound { unit, element } => {
                write!(f, "element not found: unit {unit}, element {element}")
            }
            Self::AssessmentNotFound {
                unit,
                element,
                assessment,
            } => write!(
                f,
                "assessment not found: unit {unit}, element {element}, assessment {assessment}"
            ),
        }
    }
}

impl Error for ModelError {}

/// A present grade on the `/20` scale.
///
/// Absence is modeled by `Option<Grade>` at the owning assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Grade(Decimal);

impl Grade {
    /// Creates a grade, rejecting values outside `[0, 20]`.
    pub fn new(value: Decimal) -> Result<Self, ModelError> {
        if value < MIN_GRADE || value > MAX_GRADE {
            return Err(ModelError::GradeOutOfRange(value));
        }
        // -0 parses as a distinct sign bit
        if value.is_zero() {
            return Ok(Self(Decimal::ZERO));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Grade {
    type Error = ModelError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Grade> for Decimal {
    fn from(value: Grade) -> Self {
        value.0
    }
}

impl Display for Grade {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

/// Non-negative weight, bounded by `MAX_WEIGHT`.
///
/// Used for assessment/element/unit coefficients and for credits alike; the
/// engine decides which one applies at each layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Weight(Decimal);

impl Weight {
    pub const ZERO: Weight = Weight(Decimal::ZERO);

    /// Creates a weight, rejecting negative values and values above `MAX_WEIGHT`.
    pub fn new(value: Decimal) -> Result<Self, ModelError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(ModelError::NegativeWeight(value));
        }
        if value > MAX_WEIGHT {
            return Err(ModelError::WeightOutOfRange(value));
        }
        if value.is_zero() {
            return Ok(Self::ZERO);
        }
        Ok(Self(value))
    }

    pub fn value(self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Weight {
    type Error = ModelError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Weight> for Decimal {
    fn from(value: Weight) -> Self {
        value.0
    }
}

impl Display for Weight {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}
