//! Response-generation engine.
//!
//! [`Engine::respond`] maps `(Secret, challenge)` to a [`Response`]:
//! it validates both inputs, initializes a fresh state from the seed,
//! runs a fixed number of ticks and extracts the channels. The engine
//! holds only its validated configuration, so one engine can serve any
//! number of threads at once.
//!
//! The number of ticks depends on the configuration alone. Tests count
//! them through a [`StepObserver`] rather than by timing.

use crate::challenge::validate_challenge;
use crate::errors::AuthError;
use crate::response::Response;
use crate::secret::Secret;
use crate::state::SimulationState;
use crate::tuning::{EngineConfig, Variant};

/// Receives a callback after every evolution tick.
pub trait StepObserver {
    /// Called after tick `tick` (0-based, counted across the whole call)
    /// fed with challenge element `element`.
    fn on_step(&mut self, tick: usize, element: usize);
}

impl StepObserver for () {
    fn on_step(&mut self, _tick: usize, _element: usize) {}
}

/// Counts ticks.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StepCounter {
    pub steps: usize,
}

impl StepObserver for StepCounter {
    fn on_step(&mut self, _tick: usize, _element: usize) {
        self.steps += 1;
    }
}

/// Deterministic response engine for one variant.
#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Engine with the standard configuration for `variant`.
    pub fn new(variant: Variant) -> Self {
        Self {
            config: EngineConfig::new(variant),
        }
    }

    /// Engine with a custom configuration.
    ///
    /// # Errors
    /// Returns `AuthError::InvalidConfig` if `config` fails
    /// [`EngineConfig::validate`].
    pub fn with_config(config: EngineConfig) -> Result<Self, AuthError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn variant(&self) -> Variant {
        self.config.variant
    }

    /// Computes the response of `secret` to `challenge`.
    ///
    /// # Errors
    /// - `AuthError::InvalidInput` for a secret rejected by
    ///   [`Secret::validate_for`], or a challenge of the wrong length or
    ///   with a non-finite or out-of-envelope value.
    /// - `AuthError::Diverged` if a response channel is not finite. Only
    ///   reachable through a custom tuning.
    pub fn respond(&self, secret: &Secret, challenge: &[f32]) -> Result<Response, AuthError> {
        self.respond_with_observer(secret, challenge, &mut ())
    }

    /// Same as [`Engine::respond`], reporting every tick to `observer`.
    pub fn respond_with_observer<O: StepObserver + ?Sized>(
        &self,
        secret: &Secret,
        challenge: &[f32],
        observer: &mut O,
    ) -> Result<Response, AuthError> {
        if let Err(e) = secret
            .validate_for(self.config.variant)
            .and_then(|()| validate_challenge(challenge, self.config.challenge_length))
        {
            tracing::debug!(variant = self.config.variant.name(), error = %e, "respond rejected input");
            return Err(e);
        }

        let config = &self.config;
        let sub_steps = config.sub_steps();
        let modulation = config.chaos.substep_modulation;
        let mut state = SimulationState::initialize(secret.seed, config);
        let mut tick = 0;
        for (element, &c) in challenge.iter().enumerate() {
            match config.variant {
                Variant::Baseline => {
                    state.step(secret.k, secret.gamma, c, config);
                    observer.on_step(tick, element);
                    tick += 1;
                }
                Variant::Hardened => {
                    for j in 0..sub_steps {
                        let cj = c * (1.0 + modulation * j as f32);
                        state.step(secret.k, secret.gamma, cj, config);
                        observer.on_step(tick, element);
                        tick += 1;
                    }
                }
            }
        }

        tracing::debug!(
            variant = config.variant.name(),
            challenge_length = challenge.len(),
            steps = tick,
            "response computed"
        );

        let response = state.extract(config);
        if let Some(channel) = response.first_non_finite() {
            return Err(AuthError::Diverged(format!(
                "response channel {channel} is not finite"
            )));
        }
        Ok(response)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Variant::Hardened)
    }
}
