use std::sync::Arc;

use time::OffsetDateTime;
use tracing::{debug, error, info, warn};

use crate::auth::dto::{ProfileUpdate, SessionUser, UserStats};
use crate::auth::password::{hash_password, is_legacy_digest, verify_password};
use crate::auth::repo_types::{User, UserId};
use crate::error::AuthError;
use crate::storage::{StorageBackend, CURRENT_USER_KEY, USERS_KEY};

pub const MIN_PASSWORD_LEN: usize = 6;

/// Record-based persistence layer over the key-value storage backend.
///
/// The whole collection is read, modified and rewritten on every mutation,
/// the way the web page kept it under a single localStorage key. The session is
/// a separate key holding a redacted copy of the active record; its presence
/// is the only logged-in signal.
#[derive(Clone)]
pub struct UserStore {
    storage: Arc<dyn StorageBackend>,
}

impl UserStore {
    pub fn new(storage: Arc<dyn StorageBackend>) -> Self {
        Self { storage }
    }

    /// All persisted user records. Corrupt or missing data reads as empty.
    pub fn all_users(&self) -> Vec<User> {
        let Some(raw) = self.storage.get(USERS_KEY) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(users) => users,
            Err(e) => {
                warn!(error = %e, "user collection unparsable, treating as empty");
                Vec::new()
            }
        }
    }

    fn persist(&self, users: &[User]) {
        match serde_json::to_string(users) {
            Ok(raw) => self.storage.set(USERS_KEY, &raw),
            Err(e) => error!(error = %e, "failed to encode user collection"),
        }
    }

    /// Ids are creation timestamps in milliseconds, clamped above the last
    /// issued id so same-millisecond registrations stay unique.
    fn next_id(users: &[User]) -> UserId {
        let now_ms = (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64;
        let last = users.iter().map(|u| u.id.0).max().unwrap_or(0);
        UserId(now_ms.max(last + 1))
    }

    /// Creates a record without establishing a session.
    pub fn register(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let mut users = self.all_users();

        if users.iter().any(|u| u.email == email) {
            warn!(email = %email, "email already registered");
            return Err(AuthError::DuplicateEmail);
        }

        if password.chars().count() < MIN_PASSWORD_LEN {
            warn!("password too short");
            return Err(AuthError::WeakPassword);
        }

        let user = User {
            id: Self::next_id(&users),
            email: email.to_string(),
            password: hash_password(password)?,
            created_at: OffsetDateTime::now_utc(),
            last_login: None,
            profile: Default::default(),
        };
        users.push(user.clone());
        self.persist(&users);

        info!(user_id = %user.id, email = %user.email, "user registered");
        Ok(user)
    }

    /// Unknown email and wrong password fail identically.
    pub fn login(&self, email: &str, password: &str) -> Result<SessionUser, AuthError> {
        let mut users = self.all_users();

        let Some(idx) = users.iter().position(|u| u.email == email) else {
            warn!(email = %email, "login unknown email");
            return Err(AuthError::InvalidCredentials);
        };

        if !verify_password(password, &users[idx].password)? {
            warn!(email = %email, user_id = %users[idx].id, "login invalid password");
            return Err(AuthError::InvalidCredentials);
        }

        if is_legacy_digest(&users[idx].password) {
            // we hold the plaintext now, so migrated records get a real digest
            users[idx].password = hash_password(password)?;
            debug!(user_id = %users[idx].id, "legacy digest upgraded");
        }

        users[idx].last_login = Some(OffsetDateTime::now_utc());
        self.persist(&users);

        let session = SessionUser::from(&users[idx]);
        self.set_current_user(&session);
        info!(user_id = %session.id, email = %session.email, "user logged in");
        Ok(session)
    }

    fn set_current_user(&self, session: &SessionUser) {
        match serde_json::to_string(session) {
            Ok(raw) => self.storage.set(CURRENT_USER_KEY, &raw),
            Err(e) => error!(error = %e, "failed to encode session record"),
        }
    }

    /// The active session, or None when absent or unparsable.
    pub fn current_user(&self) -> Option<SessionUser> {
        let raw = self.storage.get(CURRENT_USER_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    pub fn is_logged_in(&self) -> bool {
        self.current_user().is_some()
    }

    /// Idempotent.
    pub fn logout(&self) {
        self.storage.remove(CURRENT_USER_KEY);
        debug!("session cleared");
    }

    /// Shallow merge: only supplied fields overwrite. Refreshes the session
    /// copy when the updated user is the active one.
    pub fn update_profile(&self, id: UserId, update: ProfileUpdate) -> Result<User, AuthError> {
        let mut users = self.all_users();

        let Some(user) = users.iter_mut().find(|u| u.id == id) else {
            warn!(user_id = %id, "profile update for unknown user");
            return Err(AuthError::UserNotFound);
        };

        if let Some(name) = update.name {
            user.profile.name = name;
        }
        if let Some(avatar) = update.avatar {
            user.profile.avatar = avatar;
        }
        if let Some(bio) = update.bio {
            user.profile.bio = bio;
        }
        let updated = user.clone();
        self.persist(&users);

        if self.current_user().is_some_and(|s| s.id == id) {
            self.set_current_user(&SessionUser::from(&updated));
        }

        info!(user_id = %id, "profile updated");
        Ok(updated)
    }

    /// Removes the record and logs out if it held the session. Deleting an
    /// absent id is a no-op.
    pub fn delete_account(&self, id: UserId) {
        let mut users = self.all_users();
        users.retain(|u| u.id != id);
        self.persist(&users);

        if self.current_user().is_some_and(|s| s.id == id) {
            self.logout();
        }
        info!(user_id = %id, "account deleted");
    }

    pub fn user_stats(&self, id: UserId) -> Option<UserStats> {
        self.all_users()
            .iter()
            .find(|u| u.id == id)
            .map(UserStats::from)
    }
}
