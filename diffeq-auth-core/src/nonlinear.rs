//! Bounded nonlinearities used by the recurrence.
//!
//! Only `+ - * /`, `abs`, `floor` and `%` are used here. Platform
//! `tanh`/`sin` implementations differ in their last bits, and the
//! hardened evolution amplifies any such difference into a completely
//! different response, so the approximations below are part of the
//! protocol, not an optimisation.

/// `1 / (2π)` rounded to f32.
const FRAC_1_TAU: f32 = 0.159_154_94;

/// Rational tanh approximation, saturating to exactly `±1` outside
/// `[-3, 3]`. Maximum absolute error ≈ 0.024.
pub fn fast_tanh(x: f32) -> f32 {
    if x < -3.0 {
        return -1.0;
    }
    if x > 3.0 {
        return 1.0;
    }
    let x2 = x * x;
    x * (27.0 + x2) / (27.0 + 9.0 * x2)
}

/// Periodic sine approximation (period 2π). Maximum absolute error
/// ≈ 0.0011.
///
/// The argument is reduced to turns in `[-0.5, 0.5)`, evaluated with a
/// parabola and refined once.
pub fn fast_sin(x: f32) -> f32 {
    let turns = x * FRAC_1_TAU;
    let t = turns - (turns + 0.5).floor();
    let u = 2.0 * t;
    let y = 4.0 * u * (1.0 - u.abs());
    0.225 * (y * y.abs() - y) + y
}

/// Modular wrap: values whose magnitude exceeds `limit` are reduced
/// with `%` (sign-preserving remainder); all others pass unchanged.
///
/// Wrapping is discontinuous at the boundary, unlike clamping, which
/// would flatten the response surface near it.
pub fn wrap(x: f32, limit: f32) -> f32 {
    if x.abs() > limit {
        x % limit
    } else {
        x
    }
}

/// Iterates the logistic map `u ← r·u·(1 − u)`.
pub fn logistic(mut u: f32, r: f32, iterations: usize) -> f32 {
    for _ in 0..iterations {
        u = r * u * (1.0 - u);
    }
    u
}
