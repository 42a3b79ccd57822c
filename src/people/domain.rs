//! Core people domain types.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// A validated, non-empty person name that contains no commas.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct PersonName(String);

impl PersonName {
    /// Create a person name.
    ///
    /// Leading and trailing whitespace is removed.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyPersonName] if `name` is empty
    /// or only whitespace, and an [Error::PersonNameContainsComma] if `name`
    /// contains a comma.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            Err(Error::EmptyPersonName)
        } else if name.contains(',') {
            Err(Error::PersonNameContainsComma(name.to_owned()))
        } else {
            Ok(Self(name.to_owned()))
        }
    }

    /// Create a person name without validation.
    ///
    /// The caller should ensure that the string is trimmed and not empty.
    /// Names read back from the people table go through here so that
    /// hand-edited names containing commas still load.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for PersonName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl FromStr for PersonName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PersonName::new(s)
    }
}

impl Display for PersonName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The result of trying to add a person to the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The person was appended to the roster and the roster was saved.
    Added,
    /// The person was already in the roster, nothing was saved.
    Duplicate,
}

/// Form data for adding or removing a person.
#[derive(Debug, Serialize, Deserialize)]
pub struct PersonFormData {
    pub name: String,
}

#[cfg(test)]
mod person_name_tests {
    use crate::{Error, people::PersonName};

    #[test]
    fn new_fails_on_empty_string() {
        let name = PersonName::new("");

        assert_eq!(name, Err(Error::EmptyPersonName));
    }

    #[test]
    fn new_fails_on_just_whitespace() {
        let name = PersonName::new("\n\t \r");

        assert_eq!(name, Err(Error::EmptyPersonName));
    }

    #[test]
    fn new_fails_on_comma() {
        let name = PersonName::new("Smith, Alice");

        assert_eq!(
            name,
            Err(Error::PersonNameContainsComma("Smith, Alice".to_owned()))
        );
    }

    #[test]
    fn new_trims_whitespace() {
        let name = PersonName::new("  Alice ").unwrap();

        assert_eq!(name.as_ref(), "Alice");
    }

    #[test]
    fn new_keeps_case() {
        let lower = PersonName::new("alice").unwrap();
        let upper = PersonName::new("Alice").unwrap();

        assert_ne!(lower, upper);
    }
}
