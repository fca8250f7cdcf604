//! The read-only user directory.

use crate::engine;
use crate::types::{SearchCriteria, SearchError, SearchHit, UserRecord};

/// An explicitly constructed, read-only collection of user records.
///
/// The directory is built once at startup and never mutated, so it can be
/// shared across concurrent searches behind an `Arc` without locking. The
/// search engine takes the records as a plain slice, which keeps it testable
/// against any fixture dataset.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    users: Vec<UserRecord>,
}

impl Directory {
    /// Build a directory from an explicit record list. `id` uniqueness is
    /// assumed of the caller, not enforced.
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self { users }
    }

    /// The fixed dataset loaded at process start.
    pub fn builtin() -> Self {
        Self::new(vec![
            UserRecord::new("1", "Alice", 30, "Engineer"),
            UserRecord::new("2", "Bob", 40, "Doctor"),
            UserRecord::new("3", "Charlie", 29, "Teacher"),
            UserRecord::new("4", "Dana", 35, "Civil Engineer"),
            UserRecord::new("5", "Edward", 52, "Pharmacist"),
            UserRecord::new("6", "Fatima", 41, "Nurse"),
        ])
    }

    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Run a prioritized search over this directory.
    pub fn search(&self, criteria: &SearchCriteria) -> Result<Vec<SearchHit>, SearchError> {
        engine::search(&self.users, criteria)
    }
}
