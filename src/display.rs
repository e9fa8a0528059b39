use crate::model::Gradebook;
use crate::stats::{AssignmentStats, BIN_STARTS, histogram};
use serde::Serialize;
use std::io::{self, Write};

/// Format a percentage rounded half to even, as `NN%`.
pub fn percent(value: f64) -> String {
    format!("{}%", value.round_ties_even())
}

pub fn display_stats(out: &mut impl Write, stats: &AssignmentStats) -> io::Result<()> {
    writeln!(out, "Min: {}%", stats.min)?;
    writeln!(out, "Avg: {}", percent(stats.avg))?;
    writeln!(out, "Max: {}%", stats.max)
}

/// Text histogram of `scores` over the four quarter ranges.
pub fn display_histogram(out: &mut impl Write, title: &str, scores: &[i64]) -> io::Result<()> {
    let bins = histogram(scores);
    writeln!(out, "{title}")?;
    writeln!(out, "Score (%)  Number of Students")?;
    for (i, (&start, &count)) in BIN_STARTS.iter().zip(&bins).enumerate() {
        let end = BIN_STARTS.get(i + 1).map_or(100, |&next| next - 1);
        writeln!(
            out,
            "{start:>3}-{end:<3}    |{:<width$} {count}",
            "#".repeat(count),
            width = bins.iter().copied().max().unwrap_or(0),
        )?;
    }
    Ok(())
}

#[derive(Serialize)]
struct ReportRow<'a> {
    id: &'a str,
    name: &'a str,
    grade: String,
}

/// Write every student's grade as CSV.
pub fn write_report(out: impl Write, gradebook: &Gradebook) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(out);
    for (student, grade) in gradebook.grades() {
        writer.serialize(ReportRow {
            id: &student.id.0,
            name: &student.name,
            grade: format!("{grade:.2}"),
        })?;
    }
    writer.flush()?;
    Ok(())
}
