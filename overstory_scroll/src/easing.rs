// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing curves over normalized progress.

/// An easing function over `t` in `[0, 1]`.
///
/// Implementations should map `0.0` to `0.0` and `1.0` to `1.0`; values in
/// between shape the motion.
pub type EasingFn = fn(f64) -> f64;

/// Easing presets, plus an escape hatch for custom curves.
///
/// The presets are polynomial so they stay available without a math
/// library in `no_std` builds.
#[derive(Copy, Clone, Debug)]
pub enum Easing {
    /// Constant velocity.
    Linear,
    /// Quadratic ease-in-out. The default: gentle on both ends.
    InOutQuad,
    /// Cubic ease-in-out; more pronounced acceleration.
    InOutCubic,
    /// A caller-supplied curve.
    Custom(EasingFn),
}

impl Default for Easing {
    fn default() -> Self {
        Self::InOutQuad
    }
}

impl Easing {
    /// Applies the curve to `t`, which is clamped into `[0, 1]` first.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    (4.0 - 2.0 * t) * t - 1.0
                }
            }
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = 2.0 - 2.0 * t;
                    1.0 - u * u * u / 2.0
                }
            }
            Self::Custom(f) => f(t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Easing;

    #[test]
    fn presets_fix_the_endpoints() {
        for easing in [Easing::Linear, Easing::InOutQuad, Easing::InOutCubic] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(0.5), 0.5);
        }
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        assert_eq!(Easing::InOutQuad.apply(-2.0), 0.0);
        assert_eq!(Easing::InOutQuad.apply(7.5), 1.0);
    }

    #[test]
    fn in_out_curves_start_slow() {
        // At a quarter of the way through, eased progress lags linear.
        assert!(Easing::InOutQuad.apply(0.25) < 0.25);
        assert!(Easing::InOutCubic.apply(0.25) < Easing::InOutQuad.apply(0.25));
    }

    #[test]
    fn custom_curves_are_applied() {
        fn square(t: f64) -> f64 {
            t * t
        }
        assert_eq!(Easing::Custom(square).apply(0.5), 0.25);
    }
}
