// src/model/user.rs
use serde::{Deserialize, Serialize};

pub const ADMIN_TYPE: &str = "admin";

/// An account as the API reports it. The all-empty default doubles as the
/// logged-out sentinel, both in memory and in the persisted session file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub user_type: String,
}

impl User {
    pub fn is_logged_in(&self) -> bool {
        !self.username.is_empty()
    }

    pub fn is_admin(&self) -> bool {
        self.user_type == ADMIN_TYPE
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_admin() -> User {
        User {
            id: "7".into(),
            username: "counselor".into(),
            first_name: "Dana".into(),
            last_name: "Reyes".into(),
            user_type: ADMIN_TYPE.into(),
        }
    }

    #[test]
    fn default_user_is_logged_out() {
        let user = User::default();
        assert!(!user.is_logged_in());
        assert!(!user.is_admin());
        assert_eq!(user.full_name(), "");
    }

    #[test]
    fn admin_type_is_recognized() {
        let mut user = sample_admin();
        assert!(user.is_logged_in());
        assert!(user.is_admin());

        user.user_type = "viewer".into();
        assert!(!user.is_admin());
    }

    #[test]
    fn deserializes_with_missing_fields() {
        let user: User = serde_json::from_str(r#"{"username": "jo", "user_type": "viewer"}"#)
            .expect("partial user should deserialize");
        assert_eq!(user.username, "jo");
        assert_eq!(user.id, "");
        assert!(user.is_logged_in());
    }
}
