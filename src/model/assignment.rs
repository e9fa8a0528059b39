use crate::error::GradebookError;
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct AssignmentId(pub String);

impl Borrow<str> for AssignmentId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AssignmentId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl fmt::Display for AssignmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Assignment {
    pub id: AssignmentId,
    pub name: String,
    pub points: u32,
}

/// The assignment catalog, viewable by id and by display name.
///
/// `total_points` is the sum of the point values of every assignment read,
/// and is the denominator of every grade. A catalog can only be built with
/// a strictly positive total.
#[derive(Clone, Debug)]
pub struct Catalog {
    by_id: BTreeMap<AssignmentId, Assignment>,
    by_name: BTreeMap<String, Assignment>,
    total_points: u64,
}

impl Catalog {
    pub fn new(assignments: Vec<Assignment>) -> Result<Self, GradebookError> {
        let total_points = assignments.iter().map(|a| u64::from(a.points)).sum();
        if total_points == 0 {
            return Err(GradebookError::InvalidCatalog { total_points });
        }
        let mut by_id = BTreeMap::new();
        let mut by_name = BTreeMap::new();
        for assignment in assignments {
            by_name.insert(assignment.name.clone(), assignment.clone());
            by_id.insert(assignment.id.clone(), assignment);
        }
        Ok(Self {
            by_id,
            by_name,
            total_points,
        })
    }

    pub fn get(&self, id: &str) -> Option<&Assignment> {
        self.by_id.get(id)
    }

    pub fn points_of(&self, id: &str) -> Option<u32> {
        self.get(id).map(|a| a.points)
    }

    pub fn by_name(&self, name: &str) -> Option<&Assignment> {
        self.by_name.get(name)
    }

    pub fn total_points(&self) -> u64 {
        self.total_points
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }
}
