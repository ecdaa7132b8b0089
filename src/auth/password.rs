use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;
use tracing::error;

/// Prefix of digests written by the old web page.
pub const LEGACY_PREFIX: &str = "hash_";

pub fn hash_password(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| {
            error!(error = %e, "argon2 hash_password error");
            anyhow::anyhow!(e.to_string())
        })?
        .to_string();
    Ok(hash)
}

pub fn verify_password(plain: &str, digest: &str) -> anyhow::Result<bool> {
    if is_legacy_digest(digest) {
        return Ok(legacy_digest(plain) == digest);
    }
    let parsed = PasswordHash::new(digest).map_err(|e| {
        error!(error = %e, "argon2 parse hash error");
        anyhow::anyhow!(e.to_string())
    })?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}

pub fn is_legacy_digest(digest: &str) -> bool {
    digest.starts_with(LEGACY_PREFIX)
}

/// The old page's digest: a 32-bit rolling hash over UTF-16 code units,
/// base-36 encoded. Kept only to verify records migrated from localStorage;
/// new records always get argon2.
pub fn legacy_digest(plain: &str) -> String {
    let mut hash: i32 = 0;
    for unit in plain.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit));
    }
    format!("{LEGACY_PREFIX}{}", to_base36(hash.unsigned_abs()))
}

fn to_base36(mut value: u32) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.iter().rev().map(|&b| b as char).collect()
}
