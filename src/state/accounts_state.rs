// src/state/accounts_state.rs
use crate::api::Query;
use crate::model::User;

#[derive(Debug, Default)]
pub struct AccountsState {
    pub users: Vec<User>,
    pub form: NewAdminForm,
    /// User awaiting confirmation in the delete dialog.
    pub pending_delete: Option<User>,
    /// Id of the user whose delete request is in flight.
    pub deleting_id: Option<String>,
    /// Same latch as the records list: cleared to force a refetch.
    pub requested: bool,
    pub list_query: Query<Vec<User>>,
    pub create_query: Query<String>,
    pub delete_query: Query<String>,
}

impl AccountsState {
    /// Drop one user from the local list after the server confirmed the
    /// delete. Everyone else stays put.
    pub fn remove_user(&mut self, id: &str) {
        self.users.retain(|user| user.id != id);
    }
}

#[derive(Debug, Default)]
pub struct NewAdminForm {
    pub open: bool,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

impl NewAdminForm {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.username.trim().is_empty()
            || self.first_name.trim().is_empty()
            || self.last_name.trim().is_empty()
            || self.password.is_empty()
        {
            return Err("All fields are required");
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, username: &str) -> User {
        User {
            id: id.into(),
            username: username.into(),
            first_name: username.into(),
            last_name: "Test".into(),
            user_type: "viewer".into(),
        }
    }

    #[test]
    fn remove_user_drops_exactly_the_confirmed_row() {
        let mut state = AccountsState {
            users: vec![user("1", "ana"), user("2", "ben"), user("3", "cal")],
            ..AccountsState::default()
        };
        state.remove_user("2");
        let ids: Vec<&str> = state.users.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn remove_unknown_id_changes_nothing() {
        let mut state = AccountsState {
            users: vec![user("1", "ana")],
            ..AccountsState::default()
        };
        state.remove_user("9");
        assert_eq!(state.users.len(), 1);
    }

    #[test]
    fn admin_form_requires_every_field() {
        let mut form = NewAdminForm {
            open: true,
            username: "root".into(),
            first_name: "Root".into(),
            last_name: "Admin".into(),
            password: "hunter2".into(),
        };
        assert!(form.validate().is_ok());

        form.password.clear();
        assert_eq!(form.validate(), Err("All fields are required"));
    }
}
