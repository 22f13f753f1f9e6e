//! Wire encodings — hex and little-endian f32 frames.
//!
//! Every float crosses the wire as its IEEE-754 bit pattern in
//! little-endian order, so decoding reproduces the exact value that was
//! encoded.
//!
//! | Frame | Layout | Size |
//! |-------|--------|------|
//! | secret | `k ‖ gamma ‖ seed` (`f32`, `f32`, `u32`) | 12 |
//! | challenge | `c[0] ‖ … ‖ c[n-1]` | `4·n` |
//! | response | channels in protocol order | 16 or 32 |

use crate::constants::{BASELINE_CHANNELS, HARDENED_CHANNELS, SECRET_WIRE_LENGTH};
use crate::errors::AuthError;
use crate::response::Response;
use crate::secret::Secret;

/// Encode bytes to lowercase hex string.
pub fn to_hex(data: &[u8]) -> String {
    data.iter().map(|b| format!("{b:02x}")).collect()
}

/// Decode hex string to bytes.
///
/// # Errors
/// Returns `AuthError::Encoding` on invalid hex input.
pub fn from_hex(encoded: &str) -> Result<Vec<u8>, AuthError> {
    if encoded.len() % 2 != 0 {
        return Err(AuthError::Encoding("odd-length hex string".into()));
    }
    (0..encoded.len())
        .step_by(2)
        .map(|i| {
            encoded
                .get(i..i + 2)
                .ok_or_else(|| AuthError::Encoding("invalid hex: non-ascii input".into()))
                .and_then(|pair| {
                    u8::from_str_radix(pair, 16)
                        .map_err(|e| AuthError::Encoding(format!("invalid hex: {e}")))
                })
        })
        .collect()
}

/// Bit pattern of `value` as 8 lowercase hex digits (big-endian, as
/// printed by `{:08x}`). Used by golden vector files.
pub fn f32_bits_hex(value: f32) -> String {
    format!("{:08x}", value.to_bits())
}

/// Inverse of [`f32_bits_hex`].
///
/// # Errors
/// Returns `AuthError::Encoding` unless `encoded` is exactly 8 hex digits.
pub fn f32_from_bits_hex(encoded: &str) -> Result<f32, AuthError> {
    if encoded.len() != 8 {
        return Err(AuthError::Encoding(format!(
            "f32 bit pattern must be 8 hex digits, got {}",
            encoded.len()
        )));
    }
    u32::from_str_radix(encoded, 16)
        .map(f32::from_bits)
        .map_err(|e| AuthError::Encoding(format!("invalid hex: {e}")))
}

fn encode_f32s(values: &[f32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

fn decode_f32s(bytes: &[u8]) -> Vec<f32> {
    bytes
        .chunks_exact(4)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}

pub fn encode_secret(secret: &Secret) -> [u8; SECRET_WIRE_LENGTH] {
    let mut out = [0u8; SECRET_WIRE_LENGTH];
    out[0..4].copy_from_slice(&secret.k.to_le_bytes());
    out[4..8].copy_from_slice(&secret.gamma.to_le_bytes());
    out[8..12].copy_from_slice(&secret.seed.to_le_bytes());
    out
}

/// Decodes a 12-byte secret frame. Values are not range-checked here;
/// the engine validates them on use.
///
/// # Errors
/// Returns `AuthError::Encoding` if `bytes` is not 12 bytes long.
pub fn decode_secret(bytes: &[u8]) -> Result<Secret, AuthError> {
    let frame: [u8; SECRET_WIRE_LENGTH] = bytes.try_into().map_err(|_| {
        AuthError::Encoding(format!(
            "secret frame must be {SECRET_WIRE_LENGTH} bytes, got {}",
            bytes.len()
        ))
    })?;
    Ok(Secret {
        k: f32::from_le_bytes([frame[0], frame[1], frame[2], frame[3]]),
        gamma: f32::from_le_bytes([frame[4], frame[5], frame[6], frame[7]]),
        seed: u32::from_le_bytes([frame[8], frame[9], frame[10], frame[11]]),
    })
}

pub fn encode_challenge(challenge: &[f32]) -> Vec<u8> {
    encode_f32s(challenge)
}

/// Decodes a challenge frame of any whole number of floats. Length is
/// checked against the engine configuration by `respond`.
///
/// # Errors
/// Returns `AuthError::Encoding` if the length is not a multiple of 4.
pub fn decode_challenge(bytes: &[u8]) -> Result<Vec<f32>, AuthError> {
    if bytes.len() % 4 != 0 {
        return Err(AuthError::Encoding(format!(
            "challenge frame length {} is not a multiple of 4",
            bytes.len()
        )));
    }
    Ok(decode_f32s(bytes))
}

pub fn encode_response(response: &Response) -> Vec<u8> {
    encode_f32s(response.channels())
}

/// Decodes a response frame, inferring the variant from its length.
///
/// # Errors
/// Returns `AuthError::Encoding` unless `bytes` is 16 (baseline) or 32
/// (hardened) bytes long.
pub fn decode_response(bytes: &[u8]) -> Result<Response, AuthError> {
    match bytes.len() {
        n if n == BASELINE_CHANNELS * 4 || n == HARDENED_CHANNELS * 4 => {
            Response::from_channels(&decode_f32s(bytes)).ok_or_else(|| {
                AuthError::Encoding(format!("response frame of {n} bytes"))
            })
        }
        n => Err(AuthError::Encoding(format!(
            "response frame must be {} or {} bytes, got {n}",
            BASELINE_CHANNELS * 4,
            HARDENED_CHANNELS * 4
        ))),
    }
}
