//! Hashing utilities — SHA-256 and secret fingerprints.
//!
//! The engine itself uses no cryptographic hash. SHA-256 is used only
//! to derive a short, non-reversible identifier for a secret, which is
//! what logs and the session registry show instead of the secret.

use sha2::{Digest, Sha256};

use crate::constants::FINGERPRINT_LENGTH;
use crate::encoding;
use crate::secret::Secret;

/// Lowercase hex SHA-256 of `data`.
pub fn sha256_hex(data: &[u8]) -> String {
    encoding::to_hex(&Sha256::digest(data))
}

/// First [`FINGERPRINT_LENGTH`] hex characters of
/// `SHA-256("{k:.6}:{gamma:.6}:{seed}")`.
///
/// Coefficients are rendered with six decimals, so secrets that differ
/// only below that precision share a fingerprint.
pub fn secret_fingerprint(secret: &Secret) -> String {
    let canonical = format!("{:.6}:{:.6}:{}", secret.k, secret.gamma, secret.seed);
    let mut hex = sha256_hex(canonical.as_bytes());
    hex.truncate(FINGERPRINT_LENGTH);
    hex
}
