use crate::model::{Catalog, Submissions};

/// Overall percentage of `student`, weighted by assignment point values.
///
/// A student without any submission gets 0. Submissions for assignments
/// missing from the catalog are ignored.
#[allow(clippy::cast_precision_loss)]
pub fn compute_grade(student: &str, submissions: &Submissions, catalog: &Catalog) -> f64 {
    let Some(submitted) = submissions.for_student(student) else {
        return 0.0;
    };
    let earned: f64 = submitted
        .iter()
        .filter_map(|(assignment, &percentage)| {
            catalog
                .points_of(&assignment.0)
                .map(|points| percentage as f64 / 100.0 * f64::from(points))
        })
        .sum();
    earned / catalog.total_points() as f64 * 100.0
}
