//! Simulation state and the single-tick evolution function.
//!
//! A state is created by [`SimulationState::initialize`], advanced by
//! [`SimulationState::step`] and consumed by
//! [`SimulationState::extract`]. It is owned by exactly one `respond`
//! call and never escapes it.
//!
//! ## Parity
//!
//! Every expression below is evaluated in `f32`, left to right, in the
//! order written. Reordering an addition or hoisting a product changes
//! the low bits of a tick, and the hardened variant amplifies that into
//! a different response. The golden vectors in
//! `tests/conformance/golden.rs` pin the exact order.

use crate::constants::FIELD_SIZE;
use crate::nonlinear::{fast_sin, fast_tanh, logistic, wrap};
use crate::prng::Xorshift32;
use crate::response::Response;
use crate::tuning::{ChaosTuning, CoreTuning, EngineConfig, Variant};

// Final entropy-hash mixing weights.
const HASH_ATTENTION_WEIGHT: f32 = 7.3;
const HASH_REACTION_WEIGHT: f32 = 13.1;
const HASH_FLOW_WEIGHT: f32 = 0.01;
const HASH_FIELD_WEIGHT: f32 = 97.0;

/// Coupled scalars and the potential field. Shared by both variants.
#[derive(Debug, Clone, PartialEq)]
pub struct CoreState {
    /// Excitation `I`.
    pub excitation: f32,
    /// Reaction `R`.
    pub reaction: f32,
    /// Attention `Ψ`.
    pub attention: f32,
    /// Potential field `Φ`.
    pub field: [f32; FIELD_SIZE],
}

/// Lorenz flow coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowState {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Hardened state: the core plus the chaotic subsystems and the running
/// noise stream.
#[derive(Debug, Clone, PartialEq)]
pub struct HardenedState {
    pub core: CoreState,
    pub flow: FlowState,
    /// Running entropy accumulator.
    pub entropy: f32,
    running: Xorshift32,
}

/// Per-call simulation state.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationState {
    Baseline(CoreState),
    Hardened(HardenedState),
}

impl CoreState {
    fn initialize(init: &mut Xorshift32, tuning: &CoreTuning) -> Self {
        let mut field = [0.0_f32; FIELD_SIZE];
        for cell in field.iter_mut() {
            *cell = init.next_unit() * tuning.field_init_scale;
        }
        Self {
            excitation: tuning.initial_scalar,
            reaction: tuning.initial_scalar,
            attention: tuning.initial_scalar,
            field,
        }
    }

    /// Mean of the field: left-to-right sum from `+0.0`, divided by `N`.
    pub fn field_mean(&self) -> f32 {
        self.field.iter().fold(0.0_f32, |acc, &v| acc + v) / FIELD_SIZE as f32
    }

    /// Scalar derivatives `(dI, dR, dΨ)` from the current values.
    fn derivatives(&self, k: f32, gamma: f32, mean: f32, t: &CoreTuning) -> (f32, f32, f32) {
        let (i, r, p) = (self.excitation, self.reaction, self.attention);
        let di = k * mean - t.excitation_decay * i * t.excitation_decay_gain;
        let dr = t.reaction_gain * i * p - t.reaction_decay * r * t.reaction_decay_gain;
        let dp = t.attention_drive * i - t.attention_inhibition * r - gamma * p;
        (di, dr, dp)
    }

    fn relax_source(&self, cell: f32, t: &CoreTuning) -> f32 {
        fast_tanh(self.attention * t.field_target_gain - cell)
    }

    fn step(&mut self, k: f32, gamma: f32, c: f32, t: &CoreTuning) {
        let mean = self.field_mean();
        let (di, dr, dp) = self.derivatives(k, gamma, mean, t);
        self.excitation += di * t.dt;
        self.reaction += dr * t.dt;
        self.attention += dp * t.dt;

        for idx in 0..FIELD_SIZE {
            let cell = self.field[idx];
            let src = self.relax_source(cell, t);
            self.field[idx] = cell + (src * t.field_relax_gain + c * t.field_input_gain) * t.dt;
        }
    }
}

impl HardenedState {
    fn initialize(seed: u32, tuning: &CoreTuning, chaos: &ChaosTuning) -> Self {
        let mut init = Xorshift32::new(seed);
        let core = CoreState::initialize(&mut init, tuning);
        let mut perturbed =
            || chaos.lorenz_origin + (init.next_unit() - 0.5) * chaos.lorenz_perturbation;
        let x = perturbed();
        let y = perturbed();
        let z = perturbed();
        Self {
            core,
            flow: FlowState { x, y, z },
            entropy: 0.0,
            running: Xorshift32::new(seed),
        }
    }

    fn advance_flow(&mut self, c: f32, ch: &ChaosTuning) {
        let FlowState { x, y, z } = self.flow;
        let dx = ch.lorenz_sigma * (y - x) + ch.lorenz_challenge_coupling * c;
        let dy = x * (ch.lorenz_rho - z) - y;
        let dz = x * y - ch.lorenz_beta * z;
        self.flow = FlowState {
            x: wrap(x + dx * ch.lorenz_dt, ch.flow_wrap),
            y: wrap(y + dy * ch.lorenz_dt, ch.flow_wrap),
            z: wrap(z + dz * ch.lorenz_dt, ch.flow_wrap),
        };
    }

    /// Squashes `Ψ` into the unit interval, runs the logistic map with a
    /// flow-controlled parameter and maps the result back to a signed kick.
    fn chaos_kick(&self, ch: &ChaosTuning) -> f32 {
        let u = 0.5 + ch.unit_margin * fast_tanh(self.core.attention * ch.attention_squash);
        let r = ch.logistic_r_min + ch.logistic_r_span * (0.5 + 0.5 * fast_sin(self.flow.x));
        let u = logistic(u, r, ch.logistic_iterations);
        (u - 0.5) * ch.chaos_kick_gain
    }

    fn step(&mut self, k: f32, gamma: f32, c: f32, t: &CoreTuning, ch: &ChaosTuning) {
        self.advance_flow(c, ch);
        let kick = self.chaos_kick(ch);
        let noise = (self.running.next_unit() - 0.5) * ch.noise_gain;

        let core = &mut self.core;
        let mean = core.field_mean();
        let (di, dr, dp) = core.derivatives(k, gamma, mean, t);
        let di = di + kick + noise;
        core.excitation = wrap(core.excitation + di * t.dt, ch.scalar_wrap);
        core.reaction += dr * t.dt;
        core.attention = wrap(core.attention + dp * t.dt, ch.scalar_wrap);

        let lx = self.flow.x;
        for idx in 0..FIELD_SIZE {
            let cell = core.field[idx];
            let src = core.relax_source(cell, t);
            let phase = fast_sin(idx as f32 * ch.field_phase_step + lx);
            let next = cell + (src * t.field_relax_gain + c * ch.field_input_gain * phase) * t.dt;
            core.field[idx] = wrap(next, ch.field_wrap);
        }

        let p = core.attention;
        let mix = fast_sin(
            p * ch.entropy_attention_weight + lx * ch.entropy_flow_weight + c * ch.entropy_challenge_weight,
        ) * fast_sin(lx * p + c);
        self.entropy = wrap(self.entropy + mix, ch.entropy_wrap);
    }

    /// Final nonlinear hash of the scalar, flow, field and entropy state.
    pub fn entropy_hash(&self, mean: f32, ch: &ChaosTuning) -> f32 {
        let core = &self.core;
        let FlowState { x, y, z } = self.flow;
        let m1 = fast_sin(core.attention * core.excitation * HASH_ATTENTION_WEIGHT + x);
        let m2 = fast_sin(core.reaction * HASH_REACTION_WEIGHT + y * z * HASH_FLOW_WEIGHT);
        let m3 = fast_sin(mean * HASH_FIELD_WEIGHT + self.entropy);
        fast_tanh(m1 + m2 + m3) + self.entropy * ch.hash_accumulator_weight
    }
}

impl SimulationState {
    /// Builds the initial state for `seed`. Scalars start at a fixed
    /// value; the field (and, hardened, the flow offset) comes from the
    /// seed's initialization stream. Never fails.
    pub fn initialize(seed: u32, config: &EngineConfig) -> Self {
        match config.variant {
            Variant::Baseline => {
                let mut init = Xorshift32::new(seed);
                SimulationState::Baseline(CoreState::initialize(&mut init, &config.core))
            }
            Variant::Hardened => {
                SimulationState::Hardened(HardenedState::initialize(seed, &config.core, &config.chaos))
            }
        }
    }

    /// Advances the state by one tick, fed with challenge value `c`.
    pub fn step(&mut self, k: f32, gamma: f32, c: f32, config: &EngineConfig) {
        match self {
            SimulationState::Baseline(core) => core.step(k, gamma, c, &config.core),
            SimulationState::Hardened(state) => state.step(k, gamma, c, &config.core, &config.chaos),
        }
    }

    pub fn variant(&self) -> Variant {
        match self {
            SimulationState::Baseline(_) => Variant::Baseline,
            SimulationState::Hardened(_) => Variant::Hardened,
        }
    }

    pub fn core(&self) -> &CoreState {
        match self {
            SimulationState::Baseline(core) => core,
            SimulationState::Hardened(state) => &state.core,
        }
    }

    /// Extracts the response channels in protocol order.
    pub fn extract(&self, config: &EngineConfig) -> Response {
        match self {
            SimulationState::Baseline(core) => Response::Baseline([
                core.attention,
                core.excitation,
                core.reaction,
                core.field_mean(),
            ]),
            SimulationState::Hardened(state) => {
                let core = &state.core;
                let mean = core.field_mean();
                Response::Hardened([
                    core.attention,
                    core.excitation,
                    core.reaction,
                    mean,
                    state.flow.x,
                    state.flow.y,
                    state.flow.z,
                    state.entropy_hash(mean, &config.chaos),
                ])
            }
        }
    }
}
