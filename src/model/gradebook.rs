use super::{Assignment, Catalog, Roster, Student, Submissions};
use crate::error::{Entity, GradebookError};
use crate::grade::compute_grade;
use crate::stats::{AssignmentStats, compute_stats};

/// The three tables, loaded once and read-only afterwards.
#[derive(Debug)]
pub struct Gradebook {
    pub roster: Roster,
    pub catalog: Catalog,
    pub submissions: Submissions,
}

impl Gradebook {
    pub fn new(roster: Roster, catalog: Catalog, submissions: Submissions) -> Self {
        Self {
            roster,
            catalog,
            submissions,
        }
    }

    pub fn student_by_name(&self, name: &str) -> Result<&Student, GradebookError> {
        self.roster
            .find_by_name(name)
            .ok_or_else(|| GradebookError::not_found(Entity::Student, name))
    }

    pub fn assignment_by_name(&self, name: &str) -> Result<&Assignment, GradebookError> {
        self.catalog
            .by_name(name)
            .ok_or_else(|| GradebookError::not_found(Entity::Assignment, name))
    }

    pub fn grade_of(&self, student: &Student) -> f64 {
        compute_grade(&student.id.0, &self.submissions, &self.catalog)
    }

    pub fn student_grade(&self, name: &str) -> Result<f64, GradebookError> {
        Ok(self.grade_of(self.student_by_name(name)?))
    }

    pub fn assignment_stats(&self, name: &str) -> Result<AssignmentStats, GradebookError> {
        let assignment = self.assignment_by_name(name)?;
        compute_stats(&assignment.id.0, &self.submissions).ok_or_else(|| {
            GradebookError::NoData {
                assignment: assignment.name.clone(),
            }
        })
    }

    /// Every roster student with their grade, in id order.
    pub fn grades(&self) -> impl Iterator<Item = (&Student, f64)> {
        self.roster.iter().map(|s| (s, self.grade_of(s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Submission;

    fn gradebook() -> Gradebook {
        let roster = [("001", "Alice"), ("002", "Bob"), ("003", "Carol")]
            .into_iter()
            .map(|(id, name)| Student {
                id: id.into(),
                name: name.into(),
            })
            .collect();
        let catalog = Catalog::new(vec![
            Assignment {
                id: "A1".into(),
                name: "HW1".into(),
                points: 50,
            },
            Assignment {
                id: "A2".into(),
                name: "HW2".into(),
                points: 50,
            },
        ])
        .unwrap();
        let submissions = [("001", "A1", 80), ("001", "A2", 100), ("002", "A1", 60)]
            .into_iter()
            .map(|(student, assignment, percentage)| Submission {
                student: student.into(),
                assignment: assignment.into(),
                percentage,
            })
            .collect();
        Gradebook::new(roster, catalog, submissions)
    }

    #[test]
    fn grade_by_name() {
        let gb = gradebook();
        assert!((gb.student_grade("Alice").unwrap() - 90.0).abs() < 1e-9);
        assert!((gb.student_grade("Bob").unwrap() - 30.0).abs() < 1e-9);
        assert_eq!(gb.student_grade("Carol").unwrap(), 0.0);
    }

    #[test]
    fn unknown_student() {
        assert!(matches!(
            gradebook().student_grade("Dave"),
            Err(GradebookError::NotFound {
                kind: Entity::Student,
                ..
            })
        ));
    }

    #[test]
    fn stats_by_name() {
        let gb = gradebook();
        let stats = gb.assignment_stats("HW1").unwrap();
        assert_eq!((stats.min, stats.max), (60, 80));
        assert!((stats.avg - 70.0).abs() < 1e-9);
    }

    #[test]
    fn no_data_differs_from_not_found() {
        let mut gb = gradebook();
        gb.submissions = Submissions::default();
        assert!(matches!(
            gb.assignment_stats("HW2"),
            Err(GradebookError::NoData { .. })
        ));
        assert!(matches!(
            gb.assignment_stats("A2"),
            Err(GradebookError::NotFound {
                kind: Entity::Assignment,
                ..
            })
        ));
    }

    #[test]
    fn grades_cover_whole_roster() {
        let grades = gradebook()
            .grades()
            .map(|(s, g)| (s.id.0.clone(), g.round()))
            .collect::<Vec<_>>();
        assert_eq!(
            grades,
            vec![
                ("001".to_owned(), 90.0),
                ("002".to_owned(), 30.0),
                ("003".to_owned(), 0.0)
            ]
        );
    }
}
