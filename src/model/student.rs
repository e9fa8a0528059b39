use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct StudentId(pub String);

impl Borrow<str> for StudentId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StudentId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// Students keyed by id. A repeated id replaces the earlier entry.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    students: BTreeMap<StudentId, Student>,
}

#[allow(dead_code)]
impl Roster {
    pub fn insert(&mut self, student: Student) {
        self.students.insert(student.id.clone(), student);
    }

    pub fn get(&self, id: &str) -> Option<&Student> {
        self.students.get(id)
    }

    pub fn name_of(&self, id: &str) -> Option<&str> {
        self.get(id).map(|s| s.name.as_str())
    }

    /// Linear scan by display name, first match in id order.
    pub fn find_by_name(&self, name: &str) -> Option<&Student> {
        self.students.values().find(|s| s.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Student> {
        self.students.values()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }
}

impl FromIterator<Student> for Roster {
    fn from_iter<I: IntoIterator<Item = Student>>(iter: I) -> Self {
        let mut roster = Self::default();
        for student in iter {
            roster.insert(student);
        }
        roster
    }
}
