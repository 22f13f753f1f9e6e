//! Device side of the exchange: holds a secret and answers challenges.

use super::types::IssuedChallenge;
use crate::engine::Engine;
use crate::errors::AuthError;
use crate::response::Response;
use crate::secret::Secret;
use crate::tuning::Variant;

/// A provisioned device.
#[derive(Debug, Clone)]
pub struct Device {
    id: String,
    secret: Secret,
    engine: Engine,
}

impl Device {
    pub fn new(id: impl Into<String>, secret: Secret, variant: Variant) -> Self {
        Self {
            id: id.into(),
            secret,
            engine: Engine::new(variant),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Computes the response to `challenge`.
    ///
    /// # Errors
    /// Same as [`Engine::respond`].
    pub fn respond(&self, challenge: &IssuedChallenge) -> Result<Response, AuthError> {
        self.engine.respond(&self.secret, &challenge.values)
    }
}
