use super::{AssignmentId, StudentId};
use std::collections::BTreeMap;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Submission {
    pub student: StudentId,
    pub assignment: AssignmentId,
    pub percentage: i64,
}

/// Recorded percentages, keyed by student then by assignment.
#[derive(Clone, Debug, Default)]
pub struct Submissions {
    by_student: BTreeMap<StudentId, BTreeMap<AssignmentId, i64>>,
}

#[allow(dead_code)]
impl Submissions {
    /// Record a submission, replacing any earlier one for the same pair.
    pub fn record(&mut self, submission: Submission) -> Option<i64> {
        self.by_student
            .entry(submission.student)
            .or_default()
            .insert(submission.assignment, submission.percentage)
    }

    pub fn for_student(&self, student: &str) -> Option<&BTreeMap<AssignmentId, i64>> {
        self.by_student.get(student)
    }

    pub fn get(&self, student: &str, assignment: &str) -> Option<i64> {
        self.for_student(student)
            .and_then(|s| s.get(assignment))
            .copied()
    }

    /// Every percentage recorded for `assignment`, one per submitting student.
    pub fn scores_for<'a>(&'a self, assignment: &'a str) -> impl Iterator<Item = i64> + 'a {
        self.by_student
            .values()
            .filter_map(move |s| s.get(assignment).copied())
    }

    pub fn len(&self) -> usize {
        self.by_student.values().map(BTreeMap::len).sum()
    }
}

impl FromIterator<Submission> for Submissions {
    fn from_iter<I: IntoIterator<Item = Submission>>(iter: I) -> Self {
        let mut submissions = Self::default();
        for submission in iter {
            submissions.record(submission);
        }
        submissions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sub(student: &str, assignment: &str, percentage: i64) -> Submission {
        Submission {
            student: student.into(),
            assignment: assignment.into(),
            percentage,
        }
    }

    #[test]
    fn later_record_overwrites() {
        let mut submissions = Submissions::default();
        assert_eq!(submissions.record(sub("S1", "A1", 40)), None);
        assert_eq!(submissions.record(sub("S1", "A1", 90)), Some(40));
        assert_eq!(submissions.get("S1", "A1"), Some(90));
        assert_eq!(submissions.len(), 1);
    }

    #[test]
    fn scores_for_assignment() {
        let submissions: Submissions = [
            sub("S1", "A1", 80),
            sub("S2", "A1", 60),
            sub("S2", "A2", 10),
            sub("S3", "A1", 100),
        ]
        .into_iter()
        .collect();
        let mut scores = submissions.scores_for("A1").collect::<Vec<_>>();
        scores.sort_unstable();
        assert_eq!(scores, vec![60, 80, 100]);
        assert_eq!(submissions.scores_for("A3").count(), 0);
    }
}
