//! Whole-tree report for host views.
//!
//! Collects per-unit/per-element current grades and the headline summary in
//! one pass over a snapshot, so hosts render from a single value.

use crate::engine::aggregate::{
    collectable_points, completion, element_grade, overall_grade, remaining_credit, unit_grade,
    Completion, OverallMode,
};
use crate::engine::weighted::MissingPolicy;
use crate::model::syllabus::{CourseElement, Syllabus, Unit};
use rust_decimal::Decimal;

/// Headline metrics for a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub current: Option<Decimal>,
    pub projected: Option<Decimal>,
    pub secured: Option<Decimal>,
    pub ceiling: Option<Decimal>,
    pub collectable: Option<Decimal>,
    pub completion: Completion,
    pub remaining_credit: Decimal,
    pub total_credit: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementReport {
    pub name: String,
    pub weight: Decimal,
    pub credit: Option<Decimal>,
    pub grade: Option<Decimal>,
    pub graded: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitReport {
    pub name: String,
    pub credit: Decimal,
    pub weight: Decimal,
    pub grade: Option<Decimal>,
    /// Unit grade with ungraded work at the projection placeholder.
    pub projected: Option<Decimal>,
    pub fully_graded: bool,
    pub elements: Vec<ElementReport>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyllabusReport {
    pub units: Vec<UnitReport>,
    pub summary: Summary,
}

pub fn summarize(syllabus: &Syllabus) -> Summary {
    Summary {
        current: overall_grade(syllabus, OverallMode::Current),
        projected: overall_grade(syllabus, OverallMode::Projected),
        secured: overall_grade(syllabus, OverallMode::Secured),
        ceiling: overall_grade(syllabus, OverallMode::Ceiling),
        collectable: collectable_points(syllabus),
        completion: completion(syllabus),
        remaining_credit: remaining_credit(syllabus),
        total_credit: syllabus.total_credit(),
    }
}

pub fn build_report(syllabus: &Syllabus) -> SyllabusReport {
    SyllabusReport {
        units: syllabus.units.iter().map(unit_report).collect(),
        summary: summarize(syllabus),
    }
}

fn unit_report(unit: &Unit) -> UnitReport {
    UnitReport {
        name: unit.name.clone(),
        credit: unit.credit.value(),
        weight: unit.weight.value(),
        grade: unit_grade(unit, MissingPolicy::Skip),
        projected: unit_grade(unit, OverallMode::Projected.policy()),
        fully_graded: unit.is_fully_graded(),
        elements: unit.elements.iter().map(element_report).collect(),
    }
}

fn element_report(element: &CourseElement) -> ElementReport {
    ElementReport {
        name: element.name.clone(),
        weight: element.weight.value(),
        credit: element.credit.map(|credit| credit.value()),
        grade: element_grade(element, MissingPolicy::Skip),
        graded: element.graded_count(),
        total: element.assessments.len(),
    }
}
