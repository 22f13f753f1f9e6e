//! Tuning constants — fixed coefficients of the state recurrence.
//!
//! These are NOT secrets. They are public, versioned protocol
//! parameters: any change alters the statistical behavior of the engine
//! and every response it produces, so a change MUST bump the matching
//! `*_TUNING_VERSION` and regenerate the golden vectors.
//!
//! Fields are public so experiments can build non-standard
//! configurations; [`EngineConfig::validate`] guards every engine built
//! from one.

use crate::constants::{CHALLENGE_LENGTH, HARDENED_STEP_BUDGET};
use crate::errors::AuthError;

/// Tuning version of the baseline variant.
pub const BASELINE_TUNING_VERSION: u32 = 1;

/// Tuning version of the hardened variant.
pub const HARDENED_TUNING_VERSION: u32 = 2;

/// Engine variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Coupled three-variable recurrence plus field; 4 response channels.
    Baseline,
    /// Baseline plus Lorenz flow, logistic injection, seed noise, modular
    /// wrapping and entropy accumulation; 8 response channels.
    Hardened,
}

impl Variant {
    /// Stable lowercase name, used in logs and golden vector files.
    pub fn name(self) -> &'static str {
        match self {
            Variant::Baseline => "baseline",
            Variant::Hardened => "hardened",
        }
    }

    /// Tuning version of the default constants for this variant.
    pub fn tuning_version(self) -> u32 {
        match self {
            Variant::Baseline => BASELINE_TUNING_VERSION,
            Variant::Hardened => HARDENED_TUNING_VERSION,
        }
    }
}

/// Coefficients shared by both variants: the scalar recurrence and the
/// field relaxation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoreTuning {
    /// Integration step `Δt`.
    pub dt: f32,
    /// Initial value of `I`, `R` and `Ψ`.
    pub initial_scalar: f32,
    /// Field cells start in `[0, field_init_scale]`.
    pub field_init_scale: f32,
    /// `I` decay rate (`U_E / I_char`).
    pub excitation_decay: f32,
    /// Multiplier applied after the `I` decay term.
    pub excitation_decay_gain: f32,
    /// `I·Ψ` production rate of `R`.
    pub reaction_gain: f32,
    /// `R` decay rate (`2·U_E / R_char`).
    pub reaction_decay: f32,
    /// Multiplier applied after the `R` decay term.
    pub reaction_decay_gain: f32,
    /// `I` drive of `Ψ`.
    pub attention_drive: f32,
    /// `R` inhibition of `Ψ`.
    pub attention_inhibition: f32,
    /// Field target is `fast_tanh(Ψ·field_target_gain − Φ[i])`.
    pub field_target_gain: f32,
    /// Weight of the relaxation source in the field update.
    pub field_relax_gain: f32,
    /// Weight of the challenge value in the baseline field update.
    pub field_input_gain: f32,
}

impl CoreTuning {
    /// Version-1 constants. Bit-compatible with the reference engine.
    pub const BASELINE: CoreTuning = CoreTuning {
        dt: 0.1,
        initial_scalar: 0.1,
        field_init_scale: 0.1,
        excitation_decay: 86.4 / 8.0,
        excitation_decay_gain: 0.5,
        reaction_gain: 0.1,
        reaction_decay: 2.0 * 86.4 / 8.0,
        reaction_decay_gain: 0.3,
        attention_drive: 3.0,
        attention_inhibition: 0.5,
        field_target_gain: 0.5,
        field_relax_gain: 0.1,
        field_input_gain: 0.01,
    };

    fn values(&self) -> [(&'static str, f32); 13] {
        [
            ("dt", self.dt),
            ("initial_scalar", self.initial_scalar),
            ("field_init_scale", self.field_init_scale),
            ("excitation_decay", self.excitation_decay),
            ("excitation_decay_gain", self.excitation_decay_gain),
            ("reaction_gain", self.reaction_gain),
            ("reaction_decay", self.reaction_decay),
            ("reaction_decay_gain", self.reaction_decay_gain),
            ("attention_drive", self.attention_drive),
            ("attention_inhibition", self.attention_inhibition),
            ("field_target_gain", self.field_target_gain),
            ("field_relax_gain", self.field_relax_gain),
            ("field_input_gain", self.field_input_gain),
        ]
    }
}

impl Default for CoreTuning {
    fn default() -> Self {
        Self::BASELINE
    }
}

/// Coefficients of the hardened variant's chaotic subsystems.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChaosTuning {
    /// Lorenz `σ`.
    pub lorenz_sigma: f32,
    /// Lorenz `ρ`.
    pub lorenz_rho: f32,
    /// Lorenz `β`.
    pub lorenz_beta: f32,
    /// Euler step of the flow.
    pub lorenz_dt: f32,
    /// Weight of the challenge value in `dLx`.
    pub lorenz_challenge_coupling: f32,
    /// Flow starts at `(origin, origin, origin)` plus a seed perturbation.
    pub lorenz_origin: f32,
    /// Full width of the seed perturbation band around the origin.
    pub lorenz_perturbation: f32,
    /// Wrap threshold of `Lx`, `Ly`, `Lz`.
    pub flow_wrap: f32,
    /// `Ψ` is scaled by this before being squashed into the unit interval.
    pub attention_squash: f32,
    /// Half-width of the squashed `Ψ` band around 0.5.
    pub unit_margin: f32,
    /// Lower end of the logistic control band.
    pub logistic_r_min: f32,
    /// Width of the logistic control band.
    pub logistic_r_span: f32,
    /// Logistic iterations per tick.
    pub logistic_iterations: usize,
    /// Scale of the chaos kick injected into `dI`.
    pub chaos_kick_gain: f32,
    /// Scale of the per-tick seed noise injected into `dI`.
    pub noise_gain: f32,
    /// Wrap threshold of `I` and `Ψ`.
    pub scalar_wrap: f32,
    /// Phase increment between adjacent field cells.
    pub field_phase_step: f32,
    /// Weight of the challenge value in the hardened field update.
    pub field_input_gain: f32,
    /// Wrap threshold of every field cell.
    pub field_wrap: f32,
    /// `Ψ` weight inside the entropy mixer.
    pub entropy_attention_weight: f32,
    /// `Lx` weight inside the entropy mixer.
    pub entropy_flow_weight: f32,
    /// Challenge weight inside the entropy mixer.
    pub entropy_challenge_weight: f32,
    /// Wrap threshold of the entropy accumulator.
    pub entropy_wrap: f32,
    /// Weight of the raw accumulator in the final entropy hash.
    pub hash_accumulator_weight: f32,
    /// Sub-step `j` feeds `c·(1 + substep_modulation·j)`.
    pub substep_modulation: f32,
}

impl ChaosTuning {
    /// Version-2 constants.
    pub const HARDENED: ChaosTuning = ChaosTuning {
        lorenz_sigma: 10.0,
        lorenz_rho: 28.0,
        lorenz_beta: 8.0 / 3.0,
        lorenz_dt: 0.025,
        lorenz_challenge_coupling: 1.0,
        lorenz_origin: 1.0,
        lorenz_perturbation: 0.02,
        flow_wrap: 40.0,
        attention_squash: 0.25,
        unit_margin: 0.49,
        logistic_r_min: 3.81,
        logistic_r_span: 0.18,
        logistic_iterations: 3,
        chaos_kick_gain: 80.0,
        noise_gain: 0.5,
        scalar_wrap: 10.0,
        field_phase_step: 0.37,
        field_input_gain: 0.05,
        field_wrap: 2.0,
        entropy_attention_weight: 3.7,
        entropy_flow_weight: 1.3,
        entropy_challenge_weight: 0.7,
        entropy_wrap: 64.0,
        hash_accumulator_weight: 0.001,
        substep_modulation: 0.05,
    };

    fn values(&self) -> [(&'static str, f32); 24] {
        [
            ("lorenz_sigma", self.lorenz_sigma),
            ("lorenz_rho", self.lorenz_rho),
            ("lorenz_beta", self.lorenz_beta),
            ("lorenz_dt", self.lorenz_dt),
            ("lorenz_challenge_coupling", self.lorenz_challenge_coupling),
            ("lorenz_origin", self.lorenz_origin),
            ("lorenz_perturbation", self.lorenz_perturbation),
            ("flow_wrap", self.flow_wrap),
            ("attention_squash", self.attention_squash),
            ("unit_margin", self.unit_margin),
            ("logistic_r_min", self.logistic_r_min),
            ("logistic_r_span", self.logistic_r_span),
            ("chaos_kick_gain", self.chaos_kick_gain),
            ("noise_gain", self.noise_gain),
            ("scalar_wrap", self.scalar_wrap),
            ("field_phase_step", self.field_phase_step),
            ("field_input_gain", self.field_input_gain),
            ("field_wrap", self.field_wrap),
            ("entropy_attention_weight", self.entropy_attention_weight),
            ("entropy_flow_weight", self.entropy_flow_weight),
            ("entropy_challenge_weight", self.entropy_challenge_weight),
            ("entropy_wrap", self.entropy_wrap),
            ("hash_accumulator_weight", self.hash_accumulator_weight),
            ("substep_modulation", self.substep_modulation),
        ]
    }
}

impl Default for ChaosTuning {
    fn default() -> Self {
        Self::HARDENED
    }
}

/// Full engine configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Which recurrence to run.
    pub variant: Variant,
    /// Exact challenge length accepted by `respond`.
    pub challenge_length: usize,
    /// Total hardened ticks per response. Ignored by the baseline
    /// variant, which runs one tick per challenge element.
    pub step_budget: usize,
    /// Scalar and field coefficients.
    pub core: CoreTuning,
    /// Chaotic subsystem coefficients (hardened only).
    pub chaos: ChaosTuning,
}

impl EngineConfig {
    /// Standard configuration for `variant`.
    pub const fn new(variant: Variant) -> Self {
        Self {
            variant,
            challenge_length: CHALLENGE_LENGTH,
            step_budget: HARDENED_STEP_BUDGET,
            core: CoreTuning::BASELINE,
            chaos: ChaosTuning::HARDENED,
        }
    }

    /// Ticks run per challenge element.
    pub fn sub_steps(&self) -> usize {
        match self.variant {
            Variant::Baseline => 1,
            Variant::Hardened => self.step_budget / self.challenge_length,
        }
    }

    /// Total ticks per response. Depends on nothing but the
    /// configuration: never on the secret or the challenge values.
    pub fn total_steps(&self) -> usize {
        self.sub_steps() * self.challenge_length
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns `AuthError::InvalidConfig` when the challenge length is
    /// zero, when the hardened step budget is smaller than or not a
    /// multiple of the challenge length, or when a tuning constant is
    /// not finite.
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.challenge_length == 0 {
            return Err(AuthError::InvalidConfig(
                "challenge length must be positive".into(),
            ));
        }
        if self.variant == Variant::Hardened {
            if self.step_budget < self.challenge_length {
                return Err(AuthError::InvalidConfig(format!(
                    "step budget {} is smaller than challenge length {}",
                    self.step_budget, self.challenge_length
                )));
            }
            if self.step_budget % self.challenge_length != 0 {
                return Err(AuthError::InvalidConfig(format!(
                    "step budget {} is not a multiple of challenge length {}",
                    self.step_budget, self.challenge_length
                )));
            }
        }
        let core = self.core.values();
        let chaos = self.chaos.values();
        let checked = match self.variant {
            Variant::Baseline => &chaos[..0],
            Variant::Hardened => &chaos[..],
        };
        for (name, value) in core.iter().chain(checked) {
            if !value.is_finite() {
                return Err(AuthError::InvalidConfig(format!(
                    "tuning constant {name} is not finite"
                )));
            }
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(Variant::Hardened)
    }
}
