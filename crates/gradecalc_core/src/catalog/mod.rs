//! Static syllabus configuration and snapshot (de)serialization.
//!
//! # Responsibility
//! - Ship the built-in `L3S1` program as embedded JSON.
//! - Restore snapshots from JSON text or files, validating every value.
//!
//! # Invariants
//! - A restored snapshot never contains out-of-range grades or negative weights.
//! - A restored snapshot has at least one unit.

use crate::model::syllabus::Syllabus;
use log::{info, warn};
use once_cell::sync::Lazy;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

const L3S1_JSON: &str = include_str!("l3s1.json");

static L3S1: Lazy<Syllabus> =
    Lazy::new(|| serde_json::from_str(L3S1_JSON).expect("valid embedded L3S1 syllabus"));

/// Errors raised while restoring a syllabus snapshot.
#[derive(Debug)]
pub enum CatalogError {
    /// Source file could not be read.
    Io(std::io::Error),
    /// JSON is malformed or violates a model invariant.
    Parse(serde_json::Error),
    /// Snapshot has no units.
    EmptySyllabus,
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read syllabus: {err}"),
            Self::Parse(err) => write!(f, "invalid syllabus json: {err}"),
            Self::EmptySyllabus => write!(f, "syllabus must contain at least one unit"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::EmptySyllabus => None,
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Returns a fresh, ungraded copy of the built-in program.
pub fn default_syllabus() -> Syllabus {
    L3S1.clone()
}

/// Restores a snapshot from JSON text.
pub fn load_syllabus_json(json: &str) -> Result<Syllabus, CatalogError> {
    let syllabus: Syllabus = serde_json::from_str(json)?;
    if syllabus.is_empty() {
        return Err(CatalogError::EmptySyllabus);
    }
    Ok(syllabus)
}

/// Restores a snapshot from a JSON file.
pub fn load_syllabus_file(path: impl AsRef<Path>) -> Result<Syllabus, CatalogError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    match load_syllabus_json(json.as_str()) {
        Ok(syllabus) => {
            info!(
                "event=syllabus_load module=catalog status=ok units={} assessments={}",
                syllabus.units.len(),
                syllabus.assessment_count()
            );
            Ok(syllabus)
        }
        Err(err) => {
            warn!("event=syllabus_load module=catalog status=error error={err}");
            Err(err)
        }
    }
}

/// Serializes a snapshot to pretty JSON.
pub fn to_json(syllabus: &Syllabus) -> Result<String, CatalogError> {
    serde_json::to_string_pretty(syllabus).map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::{default_syllabus, load_syllabus_json, CatalogError};

    #[test]
    fn embedded_program_parses() {
        let syllabus = default_syllabus();
        assert_eq!(syllabus.units.len(), 5);
        assert_eq!(syllabus.graded_count(), 0);
    }

    #[test]
    fn empty_array_is_rejected() {
        let err = load_syllabus_json("[]").unwrap_err();
        assert!(matches!(err, CatalogError::EmptySyllabus));
    }
}
