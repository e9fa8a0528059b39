use crate::model::Submissions;

/// Lower bounds of the histogram bins. The last bin is closed on 100.
pub const BIN_STARTS: [i64; 4] = [0, 25, 50, 75];

#[derive(Clone, Debug, PartialEq)]
pub struct AssignmentStats {
    pub min: i64,
    pub avg: f64,
    pub max: i64,
    /// Scores in submission table order. Callers must not rely on it.
    pub scores: Vec<i64>,
}

/// Statistics over every score recorded for `assignment`, or `None` when
/// nobody submitted it.
#[allow(clippy::cast_precision_loss)]
pub fn compute_stats(assignment: &str, submissions: &Submissions) -> Option<AssignmentStats> {
    let scores = submissions.scores_for(assignment).collect::<Vec<_>>();
    let min = *scores.iter().min()?;
    let max = *scores.iter().max()?;
    let sum: i128 = scores.iter().map(|&s| i128::from(s)).sum();
    Some(AssignmentStats {
        min,
        avg: sum as f64 / scores.len() as f64,
        max,
        scores,
    })
}

/// Count scores into [0,25), [25,50), [50,75) and [75,100]. Scores below 0
/// land in the first bin, scores above 100 in the last.
pub fn histogram(scores: &[i64]) -> [usize; 4] {
    let mut bins = [0; 4];
    for &score in scores {
        let bin = BIN_STARTS
            .iter()
            .rposition(|&start| score >= start)
            .unwrap_or(0);
        bins[bin] += 1;
    }
    bins
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Submission;

    fn submissions(entries: &[(&str, &str, i64)]) -> Submissions {
        entries
            .iter()
            .map(|&(student, assignment, percentage)| Submission {
                student: student.into(),
                assignment: assignment.into(),
                percentage,
            })
            .collect()
    }

    #[test]
    fn min_avg_max() {
        let subs = submissions(&[
            ("S1", "A1", 80),
            ("S2", "A1", 60),
            ("S3", "A1", 100),
            ("S3", "A2", 5),
        ]);
        let stats = compute_stats("A1", &subs).unwrap();
        assert_eq!(stats.min, 60);
        assert_eq!(stats.max, 100);
        assert!((stats.avg - 80.0).abs() < 1e-9);
        let mut scores = stats.scores.clone();
        scores.sort_unstable();
        assert_eq!(scores, vec![60, 80, 100]);
        assert!(stats.min as f64 <= stats.avg && stats.avg <= stats.max as f64);
    }

    #[test]
    fn no_submission_is_no_data() {
        let subs = submissions(&[("S1", "A1", 80)]);
        assert_eq!(compute_stats("A2", &subs), None);
        assert_eq!(compute_stats("A1", &Submissions::default()), None);
    }

    #[test]
    fn all_zero_scores_are_data() {
        let subs = submissions(&[("S1", "A1", 0), ("S2", "A1", 0)]);
        let stats = compute_stats("A1", &subs).unwrap();
        assert_eq!((stats.min, stats.max), (0, 0));
        assert_eq!(stats.avg, 0.0);
        assert_eq!(stats.scores.len(), 2);
    }

    #[test]
    fn negative_scores() {
        let subs = submissions(&[("S1", "A1", -20), ("S2", "A1", 50), ("S3", "A1", 120)]);
        let stats = compute_stats("A1", &subs).unwrap();
        assert_eq!((stats.min, stats.max), (-20, 120));
        assert!((stats.avg - 50.0).abs() < 1e-9);
        assert!(stats.min as f64 <= stats.avg && stats.avg <= stats.max as f64);
    }

    #[test]
    fn bins() {
        assert_eq!(histogram(&[]), [0, 0, 0, 0]);
        assert_eq!(histogram(&[0, 24, 25, 49, 50, 74, 75, 99, 100]), [2, 2, 2, 3]);
        assert_eq!(histogram(&[130]), [0, 0, 0, 1]);
        assert_eq!(histogram(&[-5, -100, 10]), [3, 0, 0, 0]);
    }
}
