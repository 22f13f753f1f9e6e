//! Authenticator — device registry, challenge issue and verification.
//!
//! The authenticator keeps no clock. Every time-dependent call takes the
//! caller's current time in milliseconds.

use std::collections::HashMap;

use rand_core::{OsRng, RngCore};

use super::types::{IssuedChallenge, SessionConfig, VerificationOutcome};
use crate::challenge::generate_challenge;
use crate::engine::Engine;
use crate::errors::AuthError;
use crate::hash::secret_fingerprint;
use crate::response::Response;
use crate::secret::Secret;
use crate::verifier::verify_response;

#[derive(Debug, Clone)]
struct DeviceRecord {
    secret: Secret,
    fingerprint: String,
}

#[derive(Debug, Clone)]
struct PendingChallenge {
    device_id: String,
    expected: Response,
    expires_at_ms: u64,
}

/// Server side of the challenge–response exchange.
///
/// # Contract
///
/// - The expected response is computed when the challenge is issued and
///   never leaves the authenticator.
/// - A challenge id is consumed by the first verification attempt that
///   names the right device, whether or not the response matches. Every
///   later attempt reports `ReplayDetected`.
/// - Ids embed a monotonic counter, so consumed ids are recognised from
///   the counter alone. Bookkeeping is bounded by the pending challenges.
/// - A challenge presented by another device reports `DeviceMismatch`
///   and is not consumed.
/// - A challenge presented after `issued_at + ttl` reports
///   `ChallengeExpired` and is consumed.
#[derive(Debug)]
pub struct Authenticator {
    config: SessionConfig,
    engine: Engine,
    devices: HashMap<String, DeviceRecord>,
    pending: HashMap<String, PendingChallenge>,
    counter: u64,
}

impl Authenticator {
    /// # Errors
    /// Returns `AuthError::InvalidConfig` if `config` fails validation.
    pub fn new(config: SessionConfig) -> Result<Self, AuthError> {
        config.validate()?;
        Ok(Self {
            config,
            engine: Engine::new(config.variant),
            devices: HashMap::new(),
            pending: HashMap::new(),
            counter: 0,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Registers a device and returns its secret fingerprint.
    ///
    /// # Errors
    /// - `AuthError::InvalidInput` if the secret fails
    ///   [`Secret::validate_for`] the configured variant.
    /// - `AuthError::Session` if the device id is already registered.
    pub fn register_device(&mut self, device_id: &str, secret: Secret) -> Result<String, AuthError> {
        secret.validate_for(self.config.variant)?;
        if self.devices.contains_key(device_id) {
            return Err(AuthError::Session(format!(
                "device {device_id} already registered"
            )));
        }
        let fingerprint = secret_fingerprint(&secret);
        tracing::info!(device = %device_id, fingerprint = %fingerprint, "device registered");
        self.devices.insert(
            device_id.to_string(),
            DeviceRecord {
                secret,
                fingerprint: fingerprint.clone(),
            },
        );
        Ok(fingerprint)
    }

    /// Removes a device. Challenges already issued to it stay pending and
    /// verify as `UnknownDevice`.
    pub fn unregister_device(&mut self, device_id: &str) -> bool {
        self.devices.remove(device_id).is_some()
    }

    pub fn is_registered(&self, device_id: &str) -> bool {
        self.devices.contains_key(device_id)
    }

    pub fn fingerprint(&self, device_id: &str) -> Option<&str> {
        self.devices.get(device_id).map(|d| d.fingerprint.as_str())
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Issues a fresh challenge from the operating system RNG.
    pub fn issue_challenge(&mut self, device_id: &str, now_ms: u64) -> Result<IssuedChallenge, AuthError> {
        self.issue_challenge_with_rng(device_id, now_ms, &mut OsRng)
    }

    /// Issues a challenge drawn from `rng` and precomputes its expected
    /// response.
    ///
    /// # Errors
    /// - `AuthError::Session` if the device is not registered.
    /// - Any error of [`Engine::respond`].
    pub fn issue_challenge_with_rng<R: RngCore + ?Sized>(
        &mut self,
        device_id: &str,
        now_ms: u64,
        rng: &mut R,
    ) -> Result<IssuedChallenge, AuthError> {
        let record = self
            .devices
            .get(device_id)
            .ok_or_else(|| AuthError::Session(format!("unknown device {device_id}")))?;

        let values = generate_challenge(rng, self.engine.config().challenge_length);
        let expected = self.engine.respond(&record.secret, &values)?;

        self.counter += 1;
        let id = format!("CH-{:08}-{}", self.counter, now_ms / 1000);
        let expires_at_ms = now_ms.saturating_add(self.config.challenge_ttl_ms);
        self.pending.insert(
            id.clone(),
            PendingChallenge {
                device_id: device_id.to_string(),
                expected,
                expires_at_ms,
            },
        );
        tracing::debug!(device = %device_id, challenge = %id, expires_at_ms, "challenge issued");

        Ok(IssuedChallenge {
            id,
            device_id: device_id.to_string(),
            values,
            issued_at_ms: now_ms,
            expires_at_ms,
        })
    }

    /// Verifies `response` from `device_id` to challenge `challenge_id`.
    ///
    /// Checks run in order: replay, unknown challenge, device binding,
    /// device registration, expiry, response match.
    pub fn verify_response(
        &mut self,
        device_id: &str,
        challenge_id: &str,
        response: &Response,
        now_ms: u64,
    ) -> VerificationOutcome {
        if self.is_consumed(challenge_id) {
            tracing::warn!(device = %device_id, challenge = %challenge_id, "replayed challenge");
            return VerificationOutcome::ReplayDetected;
        }
        let Some(pending) = self.pending.get(challenge_id) else {
            tracing::warn!(device = %device_id, challenge = %challenge_id, "unknown challenge");
            return VerificationOutcome::UnknownChallenge;
        };
        if pending.device_id != device_id {
            tracing::warn!(
                device = %device_id,
                bound_to = %pending.device_id,
                challenge = %challenge_id,
                "challenge presented by another device"
            );
            return VerificationOutcome::DeviceMismatch;
        }

        let Some(pending) = self.pending.remove(challenge_id) else {
            return VerificationOutcome::UnknownChallenge;
        };

        if !self.devices.contains_key(device_id) {
            tracing::warn!(device = %device_id, challenge = %challenge_id, "device no longer registered");
            return VerificationOutcome::UnknownDevice;
        }
        if now_ms > pending.expires_at_ms {
            tracing::warn!(
                device = %device_id,
                challenge = %challenge_id,
                late_by_ms = now_ms - pending.expires_at_ms,
                "challenge expired"
            );
            return VerificationOutcome::ChallengeExpired;
        }

        match verify_response(response, &pending.expected, self.config.tolerance) {
            Ok(true) => {
                tracing::info!(device = %device_id, challenge = %challenge_id, "authenticated");
                VerificationOutcome::Success
            }
            Ok(false) => {
                tracing::warn!(device = %device_id, challenge = %challenge_id, "response mismatch");
                VerificationOutcome::InvalidResponse
            }
            Err(e) => {
                tracing::warn!(device = %device_id, challenge = %challenge_id, error = %e, "malformed response");
                VerificationOutcome::InvalidResponse
            }
        }
    }

    /// Drops every pending challenge that expired before `now_ms`. A
    /// dropped id reports `ReplayDetected` from then on. Returns the
    /// number dropped.
    pub fn prune_expired(&mut self, now_ms: u64) -> usize {
        let before = self.pending.len();
        self.pending.retain(|_, p| now_ms <= p.expires_at_ms);
        let dropped = before - self.pending.len();
        if dropped > 0 {
            tracing::debug!(count = dropped, remaining = self.pending.len(), "pruned expired challenges");
        }
        dropped
    }

    /// True for an id this authenticator issued that is no longer pending.
    fn is_consumed(&self, challenge_id: &str) -> bool {
        match issued_counter(challenge_id) {
            Some(n) => n <= self.counter && !self.pending.contains_key(challenge_id),
            None => false,
        }
    }
}

/// Counter of a canonical `CH-{counter:08}-{seconds}` id.
fn issued_counter(challenge_id: &str) -> Option<u64> {
    let (counter, seconds) = challenge_id.strip_prefix("CH-")?.split_once('-')?;
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !digits(counter) || !digits(seconds) {
        return None;
    }
    let n: u64 = counter.parse().ok()?;
    (n > 0 && format!("{n:08}") == counter).then_some(n)
}
