//! Syllabus tree: units, course elements and assessments.
//!
//! # Responsibility
//! - Define the canonical snapshot shape shared by engine, catalog and hosts.
//! - Provide copy-on-write mutation helpers (`with_grade`, `cleared`).
//! - Provide structural predicates (counts, fully-graded checks).
//!
//! # Invariants
//! - Each level owns its children exclusively, in declaration order.
//! - Mutation helpers never touch `self`; they return a new snapshot.
//! - Wire field names follow the syllabus data files (`UE`, `ects`, `coef`, `ecs`).

use crate::model::grade::{Grade, ModelError, Weight};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Single gradable item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    pub label: String,
    /// Local weight inside the owning element.
    #[serde(rename = "coef")]
    pub weight: Weight,
    /// Opaque display hint such as `1h30`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// `None` means not graded yet, which is distinct from a zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<Grade>,
}

impl Assessment {
    /// Creates an ungraded assessment.
    pub fn new(label: impl Into<String>, weight: Weight) -> Self {
        Self {
            label: label.into(),
            weight,
            duration: None,
            grade: None,
        }
    }

    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    pub fn graded(mut self, grade: Grade) -> Self {
        self.grade = Some(grade);
        self
    }

    pub fn is_graded(&self) -> bool {
        self.grade.is_some()
    }
}

/// Course element (EC): a weighted group of assessments inside a unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseElement {
    pub name: String,
    /// Informational only; never used for aggregation.
    #[serde(rename = "ects", default, skip_serializing_if = "Option::is_none")]
    pub credit: Option<Weight>,
    /// Weight of this element inside its unit mean.
    #[serde(rename = "coef")]
    pub weight: Weight,
    pub assessments: Vec<Assessment>,
}

impl CourseElement {
    pub fn new(name: impl Into<String>, weight: Weight, assessments: Vec<Assessment>) -> Self {
        Self {
            name: name.into(),
            credit: None,
            weight,
            assessments,
        }
    }

    /// Returns whether every assessment carries a grade.
    ///
    /// Vacuously true for an element without assessments.
    pub fn is_fully_graded(&self) -> bool {
        self.assessments.iter().all(Assessment::is_graded)
    }

    pub fn graded_count(&self) -> usize {
        self.assessments.iter().filter(|a| a.is_graded()).count()
    }
}

/// Teaching unit (UE): top-level group carrying program credit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    #[serde(rename = "UE")]
    pub name: String,
    /// Program credit (ECTS); the only cross-unit weighting factor.
    #[serde(rename = "ects")]
    pub credit: Weight,
    /// Unit coefficient, kept for display.
    #[serde(rename = "coef")]
    pub weight: Weight,
    #[serde(rename = "ecs")]
    pub elements: Vec<CourseElement>,
}

impl Unit {
    pub fn new(
        name: impl Into<String>,
        credit: Weight,
        weight: Weight,
        elements: Vec<CourseElement>,
    ) -> Self {
        Self {
            name: name.into(),
            credit,
            weight,
            elements,
        }
    }

    /// Returns whether every assessment of every element carries a grade.
    pub fn is_fully_graded(&self) -> bool {
        self.elements.iter().all(CourseElement::is_fully_graded)
    }

    pub fn assessment_count(&self) -> usize {
        self.elements.iter().map(|ec| ec.assessments.len()).sum()
    }

    pub fn graded_count(&self) -> usize {
        self.elements.iter().map(CourseElement::graded_count).sum()
    }
}

/// Whole program snapshot, owned by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Syllabus {
    pub units: Vec<Unit>,
}

impl Syllabus {
    pub fn new(units: Vec<Unit>) -> Self {
        Self { units }
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn assessment_count(&self) -> usize {
        self.units.iter().map(Unit::assessment_count).sum()
    }

    pub fn graded_count(&self) -> usize {
        self.units.iter().map(Unit::graded_count).sum()
    }

    /// Sum of credit over all units, graded or not.
    pub fn total_credit(&self) -> Decimal {
        self.units.iter().map(|unit| unit.credit.value()).sum()
    }

    /// Returns the grade currently stored at the given address.
    pub fn grade_at(
        &self,
        unit: usize,
        element: usize,
        assessment: usize,
    ) -> Result<Option<Grade>, ModelError> {
        let target = self
            .units
            .get(unit)
            .ok_or(ModelError::UnitNotFound(unit))?
            .elements
            .get(element)
            .ok_or(ModelError::ElementNotFound { unit, element })?
            .assessments
            .get(assessment)
            .ok_or(ModelError::AssessmentNotFound {
                unit,
                element,
                assessment,
            })?;
        Ok(target.grade)
    }

    /// Returns a new snapshot with one assessment grade replaced.
    ///
    /// # Errors
    /// - Returns a not-found variant when any index is out of range; no
    ///   snapshot is produced in that case.
    pub fn with_grade(
        &self,
        unit: usize,
        element: usize,
        assessment: usize,
        grade: Option<Grade>,
    ) -> Result<Syllabus, ModelError> {
        self.grade_at(unit, element, assessment)?;

        let mut next = self.clone();
        next.units[unit].elements[element].assessments[assessment].grade = grade;
        Ok(next)
    }

    /// Returns a copy of this snapshot with every grade removed.
    pub fn cleared(&self) -> Syllabus {
        let mut next = self.clone();
        next.units
            .iter_mut()
            .flat_map(|unit| unit.elements.iter_mut())
            .flat_map(|element| element.assessments.iter_mut())
            .for_each(|assessment| assessment.grade = None);
        next
    }
}
