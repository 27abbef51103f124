//! The set of parameters a request carried

use std::collections::BTreeSet;

use serde::Serialize;

/// Names of the parameters a request carried explicitly, null values included
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ModifiedParameters(BTreeSet<String>);

impl ModifiedParameters {
    /// Record `name` as present
    pub fn insert(&mut self, name: &str) {
        if !self.0.contains(name) {
            self.0.insert(name.to_string());
        }
    }

    /// Whether the request carried `name`
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    /// Number of parameters present
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// No parameter was present
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parameter names in alphabetical order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<'a> FromIterator<&'a str> for ModifiedParameters {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(ToString::to_string).collect())
    }
}
