use std::sync::Arc;

use tracing::debug;

use crate::auth::dto::SessionUser;
use crate::auth::repo::UserStore;
use crate::auth::services::validate_credentials;
use crate::toast::{Notifier, ToastLevel};

/// Which form the modal is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

/// Labels the presenter renders for the current mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeLabels {
    pub title: &'static str,
    pub submit: &'static str,
    pub toggle_prompt: &'static str,
}

impl AuthMode {
    pub fn labels(self) -> ModeLabels {
        match self {
            AuthMode::Login => ModeLabels {
                title: "Log in",
                submit: "Log in",
                toggle_prompt: "No account? Sign up",
            },
            AuthMode::Signup => ModeLabels {
                title: "Create a new account",
                submit: "Sign up",
                toggle_prompt: "Already have an account? Log in",
            },
        }
    }

    fn flipped(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        }
    }
}

/// Presentation port: everything the mode machine needs from the page.
pub trait AuthPresenter {
    fn apply_mode(&mut self, labels: &ModeLabels);
    fn close_modal(&mut self);
    fn refresh_session(&mut self, session: Option<&SessionUser>);
}

/// Two-mode state machine behind the auth modal. Validation and store
/// failures both surface as toasts; the controller only forwards the
/// message text.
pub struct AuthController<P: AuthPresenter> {
    store: UserStore,
    notifier: Arc<dyn Notifier>,
    presenter: P,
    mode: AuthMode,
}

impl<P: AuthPresenter> AuthController<P> {
    pub fn new(store: UserStore, notifier: Arc<dyn Notifier>, mut presenter: P) -> Self {
        presenter.refresh_session(store.current_user().as_ref());
        Self {
            store,
            notifier,
            presenter,
            mode: AuthMode::Login,
        }
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Opening the modal always starts from the login form.
    pub fn open(&mut self) {
        self.mode = AuthMode::Login;
        self.presenter.apply_mode(&self.mode.labels());
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.flipped();
        debug!(mode = ?self.mode, "auth mode toggled");
        self.presenter.apply_mode(&self.mode.labels());
    }

    /// Validates the form, then dispatches to the store by mode.
    pub fn submit(&mut self, email: &str, password: &str) {
        let email = email.trim().to_lowercase();
        if let Err(e) = validate_credentials(&email, password) {
            self.notifier.notify(ToastLevel::Error, &e.to_string());
            return;
        }
        match self.mode {
            AuthMode::Login => self.handle_login(&email, password),
            AuthMode::Signup => self.handle_signup(&email, password),
        }
    }

    fn handle_login(&mut self, email: &str, password: &str) {
        match self.store.login(email, password) {
            Ok(session) => {
                self.notifier
                    .notify(ToastLevel::Success, "Logged in successfully");
                self.presenter.close_modal();
                self.presenter.refresh_session(Some(&session));
            }
            Err(e) => self.notifier.notify(ToastLevel::Error, &e.to_string()),
        }
    }

    fn handle_signup(&mut self, email: &str, password: &str) {
        match self.store.register(email, password) {
            Ok(_) => {
                self.notifier
                    .notify(ToastLevel::Success, "Account created successfully");
                // back to the login form so the new account can sign in
                self.mode = AuthMode::Login;
                self.presenter.apply_mode(&self.mode.labels());
                self.presenter.close_modal();
                self.presenter
                    .refresh_session(self.store.current_user().as_ref());
            }
            Err(e) => self.notifier.notify(ToastLevel::Error, &e.to_string()),
        }
    }

    pub fn logout(&mut self) {
        self.store.logout();
        self.notifier
            .notify(ToastLevel::Success, "Logged out successfully");
        self.presenter.refresh_session(None);
    }
}
