//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Scalar helpers and small geometry primitives

mod aligned_box;

pub use self::aligned_box::{AlignedBox3d, Size2u, Vector3d};

use std::f64::consts;

pub const PI: f64 = consts::PI;
pub const HALF_PI: f64 = consts::FRAC_PI_2;
pub const TWO_PI: f64 = 2.0 * consts::PI;

/// Wrap `value` into the range `[lower, upper)`.
///
/// Returns `lower` for an empty range.
pub fn wrap(value: f64, lower: f64, upper: f64) -> f64 {
    if lower >= upper {
        return lower;
    }
    let range = upper - lower;
    if value < lower {
        upper - (lower - value) % range
    } else {
        lower + (value - lower) % range
    }
}

/// Limit `value` to `[lower, upper]`. NaN stays NaN.
pub fn clamp(value: f64, lower: f64, upper: f64) -> f64 {
    if value < lower {
        lower
    } else if value > upper {
        upper
    } else {
        value
    }
}

pub fn epsilon_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < f64::EPSILON
}

/// Next representable value after `x` in the direction of `toward`.
pub fn next_after(x: f64, toward: f64) -> f64 {
    if x.is_nan() || toward.is_nan() {
        return f64::NAN;
    }
    if x == toward {
        return toward;
    }
    if x == 0.0 {
        let smallest = f64::from_bits(1);
        return if toward > 0.0 { smallest } else { -smallest };
    }
    let bits = x.to_bits();
    // the magnitude grows when moving away from zero
    if (toward > x) == (x > 0.0) {
        f64::from_bits(bits + 1)
    } else {
        f64::from_bits(bits - 1)
    }
}
