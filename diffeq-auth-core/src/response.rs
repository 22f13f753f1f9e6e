//! Response vector.

use crate::constants::{BASELINE_CHANNELS, HARDENED_CHANNELS};
use crate::tuning::Variant;

/// Channel names in protocol order. The baseline variant uses the first
/// [`BASELINE_CHANNELS`] entries.
pub const CHANNEL_NAMES: [&str; HARDENED_CHANNELS] = [
    "attention",
    "excitation",
    "reaction",
    "field_mean",
    "flow_x",
    "flow_y",
    "flow_z",
    "entropy_hash",
];

/// Fixed-size response produced by one `respond` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Response {
    /// `(Ψ, I, R, Φ̄)`.
    Baseline([f32; BASELINE_CHANNELS]),
    /// `(Ψ, I, R, Φ̄, Lx, Ly, Lz, entropy_hash)`.
    Hardened([f32; HARDENED_CHANNELS]),
}

impl Response {
    /// Builds a response from a channel slice, inferring the variant from
    /// its length. Returns `None` for any other length.
    pub fn from_channels(channels: &[f32]) -> Option<Self> {
        match channels.len() {
            BASELINE_CHANNELS => {
                let mut out = [0.0; BASELINE_CHANNELS];
                out.copy_from_slice(channels);
                Some(Response::Baseline(out))
            }
            HARDENED_CHANNELS => {
                let mut out = [0.0; HARDENED_CHANNELS];
                out.copy_from_slice(channels);
                Some(Response::Hardened(out))
            }
            _ => None,
        }
    }

    pub fn channels(&self) -> &[f32] {
        match self {
            Response::Baseline(c) => c,
            Response::Hardened(c) => c,
        }
    }

    pub fn variant(&self) -> Variant {
        match self {
            Response::Baseline(_) => Variant::Baseline,
            Response::Hardened(_) => Variant::Hardened,
        }
    }

    pub fn attention(&self) -> f32 {
        self.channels()[0]
    }

    pub fn excitation(&self) -> f32 {
        self.channels()[1]
    }

    pub fn reaction(&self) -> f32 {
        self.channels()[2]
    }

    pub fn field_mean(&self) -> f32 {
        self.channels()[3]
    }

    /// `(Lx, Ly, Lz)`; hardened only.
    pub fn flow(&self) -> Option<[f32; 3]> {
        match self {
            Response::Baseline(_) => None,
            Response::Hardened(c) => Some([c[4], c[5], c[6]]),
        }
    }

    /// Final entropy hash; hardened only.
    pub fn entropy_hash(&self) -> Option<f32> {
        match self {
            Response::Baseline(_) => None,
            Response::Hardened(c) => Some(c[7]),
        }
    }

    /// Channel names paired with values, in protocol order.
    pub fn named_channels(&self) -> impl Iterator<Item = (&'static str, f32)> + '_ {
        CHANNEL_NAMES.iter().copied().zip(self.channels().iter().copied())
    }

    /// Index of the first non-finite channel, if any.
    pub fn first_non_finite(&self) -> Option<usize> {
        self.channels().iter().position(|v| !v.is_finite())
    }
}
