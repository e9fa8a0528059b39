use crate::config::Config;
use crate::error::GradebookError;
use crate::model::{Assignment, Catalog, Gradebook, Roster, Student, Submission, Submissions};
use eyre::{Result, WrapErr};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, trace};

/// Why a submission file was left out of the submission table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Rejection {
    #[error("no '|' delimiter")]
    NoDelimiter,
    #[error("expected 3 fields, found {0}")]
    FieldCount(usize),
    #[error("percentage {0:?} is not an integer")]
    Percentage(String),
}

pub struct Loader<'a> {
    config: &'a Config,
}

impl<'a> Loader<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    pub fn load(&self) -> Result<Gradebook> {
        let roster = load_roster(&self.config.students_path(), self.config.id_width)
            .wrap_err("cannot load students")?;
        let catalog =
            load_catalog(&self.config.assignments_path()).wrap_err("cannot load assignments")?;
        let submissions = load_submissions(&self.config.data_dir, &self.config.reserved_files())
            .wrap_err("cannot load submissions")?;
        info!(
            students = roster.len(),
            assignments = catalog.len(),
            total_points = catalog.total_points(),
            submissions = submissions.len(),
            "gradebook loaded"
        );
        Ok(Gradebook::new(roster, catalog, submissions))
    }
}

fn source_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}

pub fn load_roster(path: &Path, id_width: usize) -> Result<Roster> {
    let content = fs::read_to_string(path)
        .wrap_err_with(|| format!("cannot read {}", path.display()))?;
    Ok(parse_roster(&source_name(path), &content, id_width)?)
}

pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)
        .wrap_err_with(|| format!("cannot read {}", path.display()))?;
    Ok(parse_catalog(&source_name(path), &content)?)
}

/// Scan `dir` for submission files. Entries named in `reserved`, entries that
/// are not regular files, and files that do not hold a single well-formed
/// record are skipped.
pub fn load_submissions(dir: &Path, reserved: &[&str]) -> Result<Submissions> {
    let mut submissions = Submissions::default();
    for entry in fs::read_dir(dir).wrap_err_with(|| format!("cannot list {}", dir.display()))? {
        let entry = entry.wrap_err_with(|| format!("cannot list {}", dir.display()))?;
        let file_name = entry.file_name();
        if reserved.iter().any(|r| file_name == **r) {
            continue;
        }
        let path = entry.path();
        if !path.is_file() {
            trace!(path = %path.display(), "not a regular file");
            continue;
        }
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "skipping unreadable file");
                continue;
            }
        };
        match parse_submission(&content) {
            Ok(submission) => {
                trace!(path = %path.display(), ?submission, "submission");
                if let Some(previous) = submissions.record(submission) {
                    debug!(path = %path.display(), previous, "submission replaces an earlier one");
                }
            }
            Err(reason) => debug!(path = %path.display(), %reason, "skipping file"),
        }
    }
    Ok(submissions)
}

/// Parse a roster: each line is an id of `id_width` characters immediately
/// followed by the student name.
pub fn parse_roster(source: &str, content: &str, id_width: usize) -> Result<Roster, GradebookError> {
    content
        .lines()
        .enumerate()
        .map(|(n, line)| {
            let line = line.trim_end();
            let split = match line.char_indices().nth(id_width) {
                Some((idx, _)) => idx,
                None if line.chars().count() == id_width => line.len(),
                None => {
                    return Err(GradebookError::malformed(
                        source,
                        n + 1,
                        format!("line is shorter than the {id_width}-character id"),
                    ));
                }
            };
            let (id, name) = line.split_at(split);
            Ok(Student {
                id: id.into(),
                name: name.to_owned(),
            })
        })
        .collect()
}

/// Parse a catalog made of groups of three lines: name, id and points.
pub fn parse_catalog(source: &str, content: &str) -> Result<Catalog, GradebookError> {
    let lines = content.lines().collect::<Vec<_>>();
    if lines.len() % 3 != 0 {
        return Err(GradebookError::malformed(
            source,
            lines.len(),
            format!(
                "{} lines do not form groups of name, id and points",
                lines.len()
            ),
        ));
    }
    let assignments = lines
        .chunks(3)
        .enumerate()
        .map(|(group, chunk)| {
            let points = chunk[2].trim();
            Ok(Assignment {
                name: chunk[0].trim().to_owned(),
                id: chunk[1].trim().into(),
                points: points.parse().map_err(|_| {
                    GradebookError::malformed(
                        source,
                        group * 3 + 3,
                        format!("{points:?} is not a non-negative integer"),
                    )
                })?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Catalog::new(assignments)
}

/// Parse the whole content of a submission file as
/// `student|assignment|percentage`.
pub fn parse_submission(content: &str) -> Result<Submission, Rejection> {
    let content = content.trim();
    if !content.contains('|') {
        return Err(Rejection::NoDelimiter);
    }
    let fields = content.split('|').collect::<Vec<_>>();
    let &[student, assignment, percentage] = fields.as_slice() else {
        return Err(Rejection::FieldCount(fields.len()));
    };
    let percentage = percentage
        .trim()
        .parse()
        .map_err(|_| Rejection::Percentage(percentage.to_owned()))?;
    Ok(Submission {
        student: student.into(),
        assignment: assignment.into(),
        percentage,
    })
}
