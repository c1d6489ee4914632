//! Element, unit and overall aggregation plus structural metrics.
//!
//! # Responsibility
//! - Reduce the syllabus tree bottom-up into element, unit and overall grades.
//! - Derive completion, remaining credit and collectable points.
//!
//! # Invariants
//! - The missing-value policy chosen for a call is passed down unchanged.
//! - Inside a unit, elements are weighted by element `weight`; across units,
//!   only unit `credit` is used.
//! - Results are never rounded here; see `engine::format`.

use crate::engine::weighted::{weighted_mean, MissingPolicy};
use crate::model::grade::{MAX_GRADE, MIN_GRADE};
use crate::model::syllabus::{CourseElement, Syllabus, Unit};
use rust_decimal::Decimal;

/// Placeholder grade assumed for ungraded work in `OverallMode::Projected`.
pub const PROJECTION_PLACEHOLDER: Decimal = Decimal::TEN;

/// Overall aggregation modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverallMode {
    /// Graded units only; denominator is the credit of graded units.
    Current,
    /// Ungraded work counted as `PROJECTION_PLACEHOLDER`; denominator is the
    /// total program credit.
    Projected,
    /// Ungraded work counted as the scale minimum: the grade already banked.
    Secured,
    /// Ungraded work counted as the scale maximum: the best reachable grade.
    Ceiling,
}

impl OverallMode {
    /// Missing-value policy applied at every level for this mode.
    pub fn policy(self) -> MissingPolicy {
        match self {
            Self::Current => MissingPolicy::Skip,
            Self::Projected => MissingPolicy::Substitute(PROJECTION_PLACEHOLDER),
            Self::Secured => MissingPolicy::Substitute(MIN_GRADE),
            Self::Ceiling => MissingPolicy::Substitute(MAX_GRADE),
        }
    }
}

/// Weighted mean of an element's assessments.
pub fn element_grade(element: &CourseElement, policy: MissingPolicy) -> Option<Decimal> {
    weighted_mean(
        element.assessments.iter().map(|assessment| {
            (
                assessment.grade.map(|grade| grade.value()),
                assessment.weight.value(),
            )
        }),
        policy,
    )
}

/// Weighted mean of a unit's element grades, weighted by element `weight`.
pub fn unit_grade(unit: &Unit, policy: MissingPolicy) -> Option<Decimal> {
    weighted_mean(
        unit.elements
            .iter()
            .map(|element| (element_grade(element, policy), element.weight.value())),
        policy,
    )
}

/// Credit-weighted mean across all units.
///
/// `Current` skips units without a grade; every other mode substitutes its
/// placeholder, so the denominator becomes the total program credit.
pub fn overall_grade(syllabus: &Syllabus, mode: OverallMode) -> Option<Decimal> {
    let policy = mode.policy();
    weighted_mean(
        syllabus
            .units
            .iter()
            .map(|unit| (unit_grade(unit, policy), unit.credit.value())),
        policy,
    )
}

/// Graded vs. total assessment counts across the whole tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub graded: usize,
    pub total: usize,
}

impl Completion {
    /// `graded / total`, or zero for a tree without assessments.
    pub fn ratio(&self) -> Decimal {
        if self.total == 0 {
            return Decimal::ZERO;
        }
        Decimal::from(self.graded) / Decimal::from(self.total)
    }

    pub fn is_complete(&self) -> bool {
        self.graded == self.total
    }
}

pub fn completion(syllabus: &Syllabus) -> Completion {
    Completion {
        graded: syllabus.graded_count(),
        total: syllabus.assessment_count(),
    }
}

/// Share of assessments holding a grade, independent of weights.
pub fn completion_ratio(syllabus: &Syllabus) -> Decimal {
    completion(syllabus).ratio()
}

/// Credit of units with at least one ungraded assessment.
pub fn remaining_credit(syllabus: &Syllabus) -> Decimal {
    syllabus
        .units
        .iter()
        .filter(|unit| !unit.is_fully_graded())
        .map(|unit| unit.credit.value())
        .sum()
}

/// Points on the `/20` scale that ungraded work can still move.
///
/// Difference between the `Ceiling` and `Secured` overall grades; `None`
/// only when the program has no credit at all.
pub fn collectable_points(syllabus: &Syllabus) -> Option<Decimal> {
    let ceiling = overall_grade(syllabus, OverallMode::Ceiling)?;
    let secured = overall_grade(syllabus, OverallMode::Secured)?;
    Some(ceiling - secured)
}
