// src/state/auth_state.rs
use crate::api::Query;
use crate::model::User;

#[derive(Debug, Default)]
pub struct AuthState {
    pub username: String,
    pub password: String,
    pub signup: SignupForm,
    pub login_query: Query<User>,
    pub signup_query: Query<String>,
}

impl AuthState {
    pub fn clear_login_form(&mut self) {
        self.username.clear();
        self.password.clear();
    }
}

#[derive(Debug, Default)]
pub struct SignupForm {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    /// Client-side checks that run before any request is built. A
    /// password mismatch never reaches the network.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.username.trim().is_empty()
            || self.first_name.trim().is_empty()
            || self.last_name.trim().is_empty()
            || self.password.is_empty()
        {
            return Err("All fields are required");
        }
        if self.password != self.confirm_password {
            return Err("Passwords do not match.");
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
