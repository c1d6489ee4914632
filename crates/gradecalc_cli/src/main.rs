//! CLI report entry point.
//!
//! # Responsibility
//! - Load a syllabus snapshot (first argument, `GRADECALC_SYLLABUS_PATH`, or
//!   the built-in program) and print the per-unit breakdown.
//! - Keep output deterministic for quick local sanity checks.

use gradecalc_core::{
    build_report, core_version, default_syllabus, format_grade, load_syllabus_file, Syllabus,
    SyllabusReport,
};
use std::process::ExitCode;

const SYLLABUS_PATH_ENV: &str = "GRADECALC_SYLLABUS_PATH";

fn main() -> ExitCode {
    let syllabus = match resolve_syllabus() {
        Ok(syllabus) => syllabus,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    println!("gradecalc_core version={}", core_version());
    print_report(&build_report(&syllabus));
    ExitCode::SUCCESS
}

fn resolve_syllabus() -> Result<Syllabus, String> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(SYLLABUS_PATH_ENV).ok())
        .filter(|value| !value.trim().is_empty());

    match path {
        Some(path) => load_syllabus_file(path.trim())
            .map_err(|err| format!("failed to load `{}`: {err}", path.trim())),
        None => Ok(default_syllabus()),
    }
}

fn print_report(report: &SyllabusReport) {
    for unit in &report.units {
        println!(
            "{} [{} ECTS, coef {}]: {} (projected {})",
            unit.name,
            format_grade(Some(unit.credit)),
            format_grade(Some(unit.weight)),
            format_grade(unit.grade),
            format_grade(unit.projected)
        );
        for element in &unit.elements {
            println!(
                "  {} [coef {}] {}/{} graded: {}",
                element.name,
                format_grade(Some(element.weight)),
                element.graded,
                element.total,
                format_grade(element.grade)
            );
        }
    }

    let summary = &report.summary;
    println!(
        "current={} projected={} collectable={}",
        format_grade(summary.current),
        format_grade(summary.projected),
        format_grade(summary.collectable)
    );
    println!(
        "completed={}/{} remaining_credit={}/{}",
        summary.completion.graded,
        summary.completion.total,
        format_grade(Some(summary.remaining_credit)),
        format_grade(Some(summary.total_credit))
    );
}
