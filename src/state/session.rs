// src/state/session.rs
use crate::model::{DatasetRecord, DatasetResult, User};

/// The single owner of shared session data: the logged-in user, the
/// dataset currently on display, and the user's upload records. Views
/// read through the accessors and replace values wholesale through the
/// setters; nothing else holds its own copy.
#[derive(Debug, Default)]
pub struct Session {
    user: User,
    data: Option<DatasetResult>,
    records: Vec<DatasetRecord>,
}

impl Session {
    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn data(&self) -> Option<&DatasetResult> {
        self.data.as_ref()
    }

    pub fn records(&self) -> &[DatasetRecord] {
        &self.records
    }

    /// Replace the user in memory. Persisting the change is the caller's
    /// job; see `SessionStore`.
    pub fn set_user(&mut self, user: User) {
        self.user = user;
    }

    pub fn set_data(&mut self, data: Option<DatasetResult>) {
        self.data = data;
    }

    pub fn set_records(&mut self, records: Vec<DatasetRecord>) {
        self.records = records;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_returns_to_logged_out_defaults() {
        let mut session = Session::default();
        session.set_user(User {
            username: "counselor".into(),
            ..User::default()
        });
        session.set_records(vec![]);
        assert!(session.user().is_logged_in());

        session.reset();
        assert!(!session.user().is_logged_in());
        assert!(session.data().is_none());
        assert!(session.records().is_empty());
    }
}
