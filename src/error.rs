use std::fmt;
use thiserror::Error;

/// What kind of entity a name lookup was looking for.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Entity {
    Student,
    Assignment,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Student => write!(f, "Student"),
            Self::Assignment => write!(f, "Assignment"),
        }
    }
}

#[derive(Debug, Error)]
pub enum GradebookError {
    /// A roster or catalog record does not follow its layout. Line numbers
    /// start at 1.
    #[error("malformed record in {source_name} at line {line}: {reason}")]
    MalformedRecord {
        source_name: String,
        line: usize,
        reason: String,
    },
    #[error("{kind} not found")]
    NotFound { kind: Entity, name: String },
    #[error("No submissions found for this assignment")]
    NoData { assignment: String },
    #[error("invalid catalog: total points is {total_points}, grades are undefined")]
    InvalidCatalog { total_points: u64 },
}

impl GradebookError {
    pub fn malformed(source_name: &str, line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            source_name: source_name.to_owned(),
            line,
            reason: reason.into(),
        }
    }

    pub fn not_found(kind: Entity, name: &str) -> Self {
        Self::NotFound {
            kind,
            name: name.to_owned(),
        }
    }
}
