// src/state/mod.rs
use std::time::{Duration, Instant};

use crate::api::ApiClient;
use crate::model::{cluster, Cluster, DatasetResult, User};
use crate::storage::SessionStore;

pub mod accounts_state;
pub mod answers_state;
pub mod auth_state;
pub mod records_state;
pub mod session;
pub mod student_state;
pub mod upload_state;

pub use accounts_state::AccountsState;
pub use answers_state::AnswersState;
pub use auth_state::AuthState;
pub use records_state::RecordsState;
pub use session::Session;
pub use student_state::StudentState;
pub use upload_state::UploadState;

// Screen tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Signup,
    Dashboard,
    Records,
    ManageAccounts,
}

impl Screen {
    pub fn is_protected(self) -> bool {
        matches!(
            self,
            Screen::Dashboard | Screen::Records | Screen::ManageAccounts
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Allow,
    Redirect(Screen),
}

/// Route guard: may `screen` render for this session? Anonymous users are
/// sent to the login screen, non-admins away from account management.
/// This gates rendering only; the API stays the authority on every write.
pub fn gate(screen: Screen, session: &Session) -> Gate {
    match screen {
        Screen::Login | Screen::Signup => Gate::Allow,
        Screen::ManageAccounts => {
            if !session.user().is_logged_in() {
                Gate::Redirect(Screen::Login)
            } else if !session.user().is_admin() {
                Gate::Redirect(Screen::Dashboard)
            } else {
                Gate::Allow
            }
        }
        Screen::Dashboard | Screen::Records => {
            if session.user().is_logged_in() {
                Gate::Allow
            } else {
                Gate::Redirect(Screen::Login)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashLevel {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Flash {
    pub level: FlashLevel,
    pub text: String,
    expires_at: Instant,
}

/// Short-lived status messages, drawn as toasts and dropped after a few
/// seconds.
#[derive(Debug, Default)]
pub struct FlashQueue {
    entries: Vec<Flash>,
}

impl FlashQueue {
    pub const TTL: Duration = Duration::from_secs(3);

    pub fn push(&mut self, level: FlashLevel, text: impl Into<String>) {
        self.entries.push(Flash {
            level,
            text: text.into(),
            expires_at: Instant::now() + Self::TTL,
        });
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.push(FlashLevel::Success, text);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(FlashLevel::Error, text);
    }

    /// Drop expired messages. Called once per frame.
    pub fn sweep(&mut self) {
        let now = Instant::now();
        self.entries.retain(|flash| flash.expires_at > now);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Flash> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Core application state
#[derive(Debug)]
pub struct AppState {
    // Shared session data
    pub session: Session,
    pub clusters: Vec<Cluster>,

    // Minimal UI state
    pub current_screen: Screen,
    pub flash: FlashQueue,

    // Per-view state
    pub auth: AuthState,
    pub upload: UploadState,
    pub answers: AnswersState,
    pub student: StudentState,
    pub records: RecordsState,
    pub accounts: AccountsState,

    // Services
    pub api: ApiClient,
    pub store: SessionStore,
}

impl AppState {
    /// Hydrate the session from disk exactly once, at construction. A
    /// stored login lands on the dashboard, anything else on the login
    /// screen.
    pub fn new(api: ApiClient, store: SessionStore) -> Self {
        let mut session = Session::default();
        let current_screen = match store.load() {
            Some(user) if user.is_logged_in() => {
                session.set_user(user);
                Screen::Dashboard
            }
            _ => Screen::Login,
        };
        Self {
            session,
            clusters: Vec::new(),
            current_screen,
            flash: FlashQueue::default(),
            auth: AuthState::default(),
            upload: UploadState::default(),
            answers: AnswersState::default(),
            student: StudentState::default(),
            records: RecordsState::default(),
            accounts: AccountsState::default(),
            api,
            store,
        }
    }

    pub fn navigate(&mut self, screen: Screen) {
        match screen {
            Screen::Records => self.records.requested = false,
            Screen::ManageAccounts => self.accounts.requested = false,
            _ => {}
        }
        self.current_screen = screen;
    }

    /// Replace the dataset on display. Dependent view state goes back to
    /// its initial position; `None` returns the dashboard to the upload
    /// prompt.
    pub fn install_dataset(&mut self, data: Option<DatasetResult>) {
        self.clusters = data
            .as_ref()
            .map(|result| cluster::derive(&result.data_summary.cluster_summary))
            .unwrap_or_default();
        self.answers.reset();
        self.student.reset();
        self.session.set_data(data);
    }

    /// "Change Colors": re-derive the display clusters, which rolls a new
    /// color per cluster.
    pub fn reroll_colors(&mut self) {
        if let Some(result) = self.session.data() {
            self.clusters = cluster::derive(&result.data_summary.cluster_summary);
        }
    }

    pub fn complete_login(&mut self, user: User) {
        if let Err(err) = self.store.save(&user) {
            log::warn!("failed to persist session: {err:#}");
        }
        self.session.set_user(user);
        self.auth.clear_login_form();
        self.navigate(Screen::Dashboard);
    }

    /// Log out: write the logged-out default back to disk and drop every
    /// piece of per-session state.
    pub fn logout(&mut self) {
        if let Err(err) = self.store.clear() {
            log::warn!("failed to clear stored session: {err:#}");
        }
        self.session.reset();
        self.clusters.clear();
        self.upload.reset_form();
        self.answers.reset();
        self.student.reset();
        self.records = RecordsState::default();
        self.accounts = AccountsState::default();
        self.current_screen = Screen::Login;
    }
}
