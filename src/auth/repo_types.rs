use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::auth::dto::Profile;

/// Millisecond unix timestamp doubling as the record's unique id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// User record as persisted in the collection. Field names match the JSON
/// the web page wrote, so an existing collection parses unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: String,
    /// Password digest. Argon2 for records created here; records imported
    /// from the old page carry its "hash_"-prefixed rolling hash until
    /// their first successful login.
    pub password: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub last_login: Option<OffsetDateTime>,
    #[serde(default)]
    pub profile: Profile,
}
