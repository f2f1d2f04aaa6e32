// src/storage.rs
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::model::User;

const APP_DIR: &str = "guidance-gui";
const SESSION_FILE: &str = "session.json";

/// Durable copy of the logged-in user, read once at startup. Logout does
/// not remove the file; it writes the empty default user back, which
/// hydration then treats as logged out.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new() -> Self {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            path: base.join(APP_DIR).join(SESSION_FILE),
        }
    }

    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// The persisted user, if a readable one exists. Missing or corrupt
    /// files mean nobody is logged in.
    pub fn load(&self) -> Option<User> {
        let raw = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&raw).ok()
    }

    pub fn save(&self, user: &User) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let raw = serde_json::to_string_pretty(user)?;
        fs::write(&self.path, raw)
            .with_context(|| format!("failed to write {}", self.path.display()))
    }

    pub fn clear(&self) -> Result<()> {
        self.save(&User::default())
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn scratch_store() -> (PathBuf, SessionStore) {
        let dir = std::env::temp_dir().join(format!("guidance-gui-test-{}", Uuid::new_v4()));
        let store = SessionStore::at(dir.join(SESSION_FILE));
        (dir, store)
    }

    fn sample_user() -> User {
        User {
            id: "12".into(),
            username: "counselor".into(),
            first_name: "Dana".into(),
            last_name: "Reyes".into(),
            user_type: "viewer".into(),
        }
    }

    #[test]
    fn round_trips_saved_user() {
        let (dir, store) = scratch_store();
        store.save(&sample_user()).unwrap();
        assert_eq!(store.load(), Some(sample_user()));
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn missing_file_loads_nothing() {
        let (dir, store) = scratch_store();
        assert_eq!(store.load(), None);
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn corrupt_file_loads_nothing() {
        let (dir, store) = scratch_store();
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(SESSION_FILE), "not json").unwrap();
        assert_eq!(store.load(), None);
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn clear_resets_to_logged_out_default() {
        let (dir, store) = scratch_store();
        store.save(&sample_user()).unwrap();
        store.clear().unwrap();
        let user = store.load().expect("default user should still parse");
        assert!(!user.is_logged_in());
        fs::remove_dir_all(dir).ok();
    }
}
