//! Person record and its sentence form.

use std::fmt;

/// A person-like record: a name and an age.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub age: u32,
}

impl User {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

/// Writes `My name is {name} and I'm {age}`, fields verbatim.
impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "My name is {} and I'm {}", self.name, self.age)
    }
}

/// Render `user` as `My name is {name} and I'm {age}`.
pub fn format_person(user: &User) -> String {
    user.to_string()
}
