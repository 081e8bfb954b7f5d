//! Salted password hashing.
//!
//! Stored form is `hex(salt)$hex(sha256(salt || password))`. The service
//! contract only requires that the plain password and its hash never leave
//! the process; the concrete scheme is an internal detail.

use rand::RngCore;
use sha2::{Digest, Sha256};

const SALT_BYTES: usize = 16;

/// Hashes a plain password with a fresh random salt.
pub fn hash_password(plain: &str) -> String {
    let mut salt = [0u8; SALT_BYTES];
    rand::rng().fill_bytes(&mut salt);

    format!(
        "{}${}",
        hex::encode(salt),
        hex::encode(digest(&salt, plain))
    )
}

/// Verifies a plain password against a stored hash.
///
/// No route authenticates yet; this is the read side of the stored format,
/// kept next to [`hash_password`] so the two cannot drift. The registration
/// tests use it to check that stored hashes are actually verifiable.
///
/// Malformed stored values verify as false rather than erroring.
pub fn verify_password(plain: &str, stored: &str) -> bool {
    let Some((salt_hex, digest_hex)) = stored.split_once('$') else {
        return false;
    };
    let Ok(salt) = hex::decode(salt_hex) else {
        return false;
    };

    hex::encode(digest(&salt, plain)) == digest_hex
}

fn digest(salt: &[u8], plain: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(plain.as_bytes());
    hasher.finalize().into()
}
