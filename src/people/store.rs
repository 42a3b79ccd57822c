//! File operations for the roster of people.

use std::path::{Path, PathBuf};

use crate::{
    Error,
    people::{AddOutcome, PersonName},
    table::Table,
};

/// The name of the only column in the people table.
pub const PERSON_COLUMN: &str = "Person";

/// The roster of people, stored as a one-column CSV table.
#[derive(Debug, Clone)]
pub struct PeopleStore {
    path: PathBuf,
}

impl PeopleStore {
    /// Create a store backed by the CSV file at `path`.
    ///
    /// The file does not need to exist yet, it is created on the first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path of the CSV file backing the store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the roster in file order.
    ///
    /// A missing file, an empty file or a file without a `Person` column gives
    /// an empty roster. Names are trimmed and blank cells are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error only if the file exists and could not be read as CSV.
    pub fn load(&self) -> Result<Vec<PersonName>, Error> {
        let table = Table::read(&self.path)?;

        let Some(column) = table.column_index(PERSON_COLUMN) else {
            if !table.headers().is_empty() {
                tracing::warn!(
                    "People table {:?} has no \"{PERSON_COLUMN}\" column, treating it as empty",
                    self.path
                );
            }
            return Ok(Vec::new());
        };

        let people = table
            .rows()
            .iter()
            .map(|row| row[column].trim())
            .filter(|name| !name.is_empty())
            .map(PersonName::new_unchecked)
            .collect();

        Ok(people)
    }

    /// Replace the stored roster with exactly `people`, in order.
    pub fn save(&self, people: &[PersonName]) -> Result<(), Error> {
        let mut table = Table::new(&[PERSON_COLUMN]);

        for person in people {
            table.push_row(vec![person.to_string()]);
        }

        table.write(&self.path)
    }

    /// Append `name` to the roster and save it, unless it is already there.
    ///
    /// Names are compared exactly, so "alice" and "Alice" are different
    /// people. Returns the roster after the call and whether `name` was added.
    pub fn add(&self, name: PersonName) -> Result<(Vec<PersonName>, AddOutcome), Error> {
        let mut people = self.load()?;

        if people.contains(&name) {
            tracing::debug!("{name} is already in the roster");
            return Ok((people, AddOutcome::Duplicate));
        }

        people.push(name);
        self.save(&people)?;

        Ok((people, AddOutcome::Added))
    }

    /// Remove every entry equal to `name` and save the roster.
    ///
    /// The roster is saved even if `name` was not in it. Expenses that refer
    /// to `name` are left untouched.
    pub fn remove(&self, name: &str) -> Result<Vec<PersonName>, Error> {
        let mut people = self.load()?;
        people.retain(|person| person != name);
        self.save(&people)?;

        Ok(people)
    }
}

#[cfg(test)]
mod people_store_tests {
    use std::fs;

    use tempfile::TempDir;

    use crate::people::{AddOutcome, PeopleStore, PersonName};

    fn get_test_store() -> (TempDir, PeopleStore) {
        let dir = TempDir::new().expect("Could not create temporary directory");
        let store = PeopleStore::new(dir.path().join("people.csv"));

        (dir, store)
    }

    fn names(people: &[PersonName]) -> Vec<&str> {
        people.iter().map(|person| person.as_ref()).collect()
    }

    #[test]
    fn load_missing_file_is_empty() {
        let (_dir, store) = get_test_store();

        let people = store.load().expect("Could not load people");

        assert!(people.is_empty());
    }

    #[test]
    fn load_without_person_column_is_empty() {
        let (_dir, store) = get_test_store();
        fs::write(store.path(), "Name\nAlice\n").unwrap();

        let people = store.load().expect("Could not load people");

        assert!(people.is_empty());
    }

    #[test]
    fn load_skips_blank_cells() {
        let (_dir, store) = get_test_store();
        fs::write(store.path(), "Person\nAlice\n\"\"\nBob\n").unwrap();

        let people = store.load().expect("Could not load people");

        assert_eq!(names(&people), ["Alice", "Bob"]);
    }

    #[test]
    fn load_trims_names() {
        let (_dir, store) = get_test_store();
        fs::write(store.path(), "Person\n Alice\nBob \n").unwrap();

        let people = store.load().expect("Could not load people");

        assert_eq!(names(&people), ["Alice", "Bob"]);
    }

    #[test]
    fn remove_matches_padded_name_in_file() {
        let (_dir, store) = get_test_store();
        fs::write(store.path(), "Person\n Alice\nBob\n").unwrap();

        let people = store.remove("Alice").expect("Could not remove person");

        assert_eq!(names(&people), ["Bob"]);
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "Person\nBob\n");
    }

    #[test]
    fn save_replaces_roster_in_order() {
        let (_dir, store) = get_test_store();
        store
            .save(&[PersonName::new_unchecked("Zed")])
            .expect("Could not save people");

        store
            .save(&[
                PersonName::new_unchecked("Bob"),
                PersonName::new_unchecked("Alice"),
            ])
            .expect("Could not save people");

        assert_eq!(names(&store.load().unwrap()), ["Bob", "Alice"]);
        assert_eq!(
            fs::read_to_string(store.path()).unwrap(),
            "Person\nBob\nAlice\n"
        );
    }

    #[test]
    fn add_then_load_contains_name_once() {
        let (_dir, store) = get_test_store();

        let (people, outcome) = store
            .add(PersonName::new_unchecked("Alice"))
            .expect("Could not add person");

        assert_eq!(outcome, AddOutcome::Added);
        assert_eq!(names(&people), ["Alice"]);
        assert_eq!(names(&store.load().unwrap()), ["Alice"]);
    }

    #[test]
    fn add_duplicate_leaves_file_unchanged() {
        let (_dir, store) = get_test_store();
        store.add(PersonName::new_unchecked("Alice")).unwrap();
        let before = fs::read_to_string(store.path()).unwrap();

        let (people, outcome) = store
            .add(PersonName::new_unchecked("Alice"))
            .expect("Could not add person");

        assert_eq!(outcome, AddOutcome::Duplicate);
        assert_eq!(names(&people), ["Alice"]);
        assert_eq!(fs::read_to_string(store.path()).unwrap(), before);
    }

    #[test]
    fn add_is_case_sensitive() {
        let (_dir, store) = get_test_store();
        store.add(PersonName::new_unchecked("alice")).unwrap();

        let (people, outcome) = store.add(PersonName::new_unchecked("Alice")).unwrap();

        assert_eq!(outcome, AddOutcome::Added);
        assert_eq!(names(&people), ["alice", "Alice"]);
    }

    #[test]
    fn remove_missing_name_leaves_roster_unchanged() {
        let (_dir, store) = get_test_store();
        store.add(PersonName::new_unchecked("Alice")).unwrap();

        let people = store.remove("Bob").expect("Could not remove person");

        assert_eq!(names(&people), ["Alice"]);
        assert_eq!(names(&store.load().unwrap()), ["Alice"]);
    }

    #[test]
    fn add_add_remove_leaves_second_person() {
        let (_dir, store) = get_test_store();
        store.add(PersonName::new_unchecked("A")).unwrap();
        store.add(PersonName::new_unchecked("B")).unwrap();

        let people = store.remove("A").expect("Could not remove person");

        assert_eq!(names(&people), ["B"]);
        assert_eq!(names(&store.load().unwrap()), ["B"]);
    }

    #[test]
    fn remove_drops_every_occurrence() {
        let (_dir, store) = get_test_store();
        fs::write(store.path(), "Person\nAlice\nBob\nAlice\n").unwrap();

        let people = store.remove("Alice").unwrap();

        assert_eq!(names(&people), ["Bob"]);
    }

    #[test]
    fn remove_on_missing_file_creates_empty_roster() {
        let (_dir, store) = get_test_store();

        let people = store.remove("Alice").unwrap();

        assert!(people.is_empty());
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "Person\n");
    }
}
