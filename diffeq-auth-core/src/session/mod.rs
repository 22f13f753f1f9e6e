//! Authentication session — the stateful flow around the engine.
//!
//! The server registers devices, issues challenges bound to a device
//! and verifies each answer at most once. The engine and verifier stay
//! pure; all bookkeeping lives here. No IO and no clocks: callers pass
//! the current time in milliseconds.

pub mod authenticator;
pub mod device;
pub mod types;

pub use authenticator::Authenticator;
pub use device::Device;
pub use types::{IssuedChallenge, SessionConfig, VerificationOutcome};
