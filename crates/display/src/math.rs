//! Numeric helpers for UI and animation interpolation.
//!
//! Operands follow host number semantics: NaN in, NaN out. Inverted bounds are
//! not validated, so `f64::clamp` (which panics when `min > max`) is never used.

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[inline]
fn max_of(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() { f64::NAN } else { a.max(b) }
}

#[inline]
fn min_of(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() { f64::NAN } else { a.min(b) }
}

/// Restrict `value` to `[min, max]`.
///
/// The lower bound is applied first, then the upper bound. With `min > max` the
/// result is always `max`.
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    min_of(max_of(min, value), max)
}

/// Linear interpolation between `value1` and `value2`.
///
/// With `is_clamped` the amount is first restricted to `[0, 1]`; otherwise
/// amounts outside that range extrapolate.
#[inline]
pub fn lerp(value1: f64, value2: f64, amount: f64, is_clamped: bool) -> f64 {
    let amount = if is_clamped { clamp(amount, 0.0, 1.0) } else { amount };
    (1.0 - amount) * value1 + amount * value2
}

/// Position of `value` inside `[min, max]` as a fraction.
/// A zero-width range divides by zero and yields infinity or NaN.
#[inline]
pub fn inverse_lerp(value: f64, min: f64, max: f64) -> f64 {
    (value - min) / (max - min)
}

/// Remap `value` from `[min1, max1]` onto `[min2, max2]`.
#[inline]
pub fn map(value: f64, min1: f64, max1: f64, min2: f64, max2: f64, is_clamped: bool) -> f64 {
    lerp(min2, max2, inverse_lerp(value, min1, max1), is_clamped)
}

/// Component-wise [`lerp`] for screen positions.
pub fn lerp_vec2(a: Vec2, b: Vec2, amount: f32, is_clamped: bool) -> Vec2 {
    let amount = f64::from(amount);
    Vec2::new(
        lerp(f64::from(a.x), f64::from(b.x), amount, is_clamped) as f32,
        lerp(f64::from(a.y), f64::from(b.y), amount, is_clamped) as f32,
    )
}

/// A stored [`map`] call, e.g. a scroll-to-opacity curve kept in UI config.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Remap {
    pub from: [f64; 2],
    pub to: [f64; 2],
    #[serde(default)]
    pub clamped: bool,
}

impl Remap {
    pub const fn new(from: [f64; 2], to: [f64; 2], clamped: bool) -> Self {
        Self { from, to, clamped }
    }

    #[inline]
    pub fn apply(&self, value: f64) -> f64 {
        map(value, self.from[0], self.from[1], self.to[0], self.to[1], self.clamped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_inside_and_outside() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-3.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(15.0, 0.0, 10.0), 10.0);
        assert_eq!(clamp(0.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(10.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn test_clamp_inverted_bounds_returns_max() {
        // Lower bound wins first, then the (smaller) upper bound.
        assert_eq!(clamp(5.0, 10.0, 0.0), 0.0);
        assert_eq!(clamp(-20.0, 10.0, 0.0), 0.0);
        assert_eq!(clamp(20.0, 10.0, 0.0), 0.0);
    }

    #[test]
    fn test_clamp_nan_propagates() {
        assert!(clamp(f64::NAN, 0.0, 1.0).is_nan());
        assert!(clamp(0.5, f64::NAN, 1.0).is_nan());
    }

    #[test]
    fn test_lerp_endpoints() {
        for (a, b) in [(0.0, 10.0), (-4.5, 3.25), (100.0, -100.0), (7.0, 7.0)] {
            assert_eq!(lerp(a, b, 0.0, false), a);
            assert_eq!(lerp(a, b, 1.0, false), b);
        }
        assert_eq!(lerp(0.0, 10.0, 0.5, false), 5.0);
    }

    #[test]
    fn test_lerp_extrapolates_when_unclamped() {
        assert_eq!(lerp(0.0, 10.0, 2.0, false), 20.0);
        assert_eq!(lerp(0.0, 10.0, -1.0, false), -10.0);
    }

    #[test]
    fn test_lerp_clamped_stays_in_range() {
        assert_eq!(lerp(0.0, 10.0, 2.0, true), 10.0);
        assert_eq!(lerp(0.0, 10.0, -2.0, true), 0.0);

        let (a, b) = (10.0, -4.0);
        for amount in [-3.0, -0.1, 0.0, 0.25, 0.7, 1.0, 1.5, 50.0, f64::INFINITY] {
            let v = lerp(a, b, amount, true);
            assert!((-4.0..=10.0).contains(&v), "amount {amount} gave {v}");
        }
    }

    #[test]
    fn test_map_linear() {
        assert_eq!(map(5.0, 0.0, 10.0, 0.0, 100.0, false), 50.0);
        assert_eq!(map(0.0, 0.0, 10.0, 0.0, 100.0, false), 0.0);
        assert_eq!(map(10.0, 0.0, 10.0, 0.0, 100.0, false), 100.0);
        assert_eq!(map(20.0, 0.0, 10.0, 0.0, 100.0, false), 200.0);
        // Descending target range
        assert_eq!(map(2.5, 0.0, 10.0, 100.0, 0.0, false), 75.0);
    }

    #[test]
    fn test_map_clamped() {
        assert_eq!(map(20.0, 0.0, 10.0, 0.0, 100.0, true), 100.0);
        assert_eq!(map(-20.0, 0.0, 10.0, 0.0, 100.0, true), 0.0);
    }

    #[test]
    fn test_map_zero_width_range_is_not_trapped() {
        assert!(inverse_lerp(5.0, 3.0, 3.0).is_infinite());
        assert!(map(5.0, 3.0, 3.0, 0.0, 100.0, false).is_nan());
        assert!(map(3.0, 3.0, 3.0, 0.0, 100.0, false).is_nan());
        // An infinite amount still clamps to the upper end.
        assert_eq!(map(5.0, 3.0, 3.0, 0.0, 100.0, true), 100.0);
    }

    #[test]
    fn test_lerp_vec2() {
        let v = lerp_vec2(Vec2::new(0.0, 10.0), Vec2::new(10.0, 20.0), 0.5, false);
        assert_eq!(v, Vec2::new(5.0, 15.0));
        let v = lerp_vec2(Vec2::ZERO, Vec2::new(4.0, -4.0), 3.0, true);
        assert_eq!(v, Vec2::new(4.0, -4.0));
    }

    #[test]
    fn test_remap_apply() {
        let fade = Remap::new([0.0, 200.0], [1.0, 0.0], true);
        assert_eq!(fade.apply(0.0), 1.0);
        assert_eq!(fade.apply(100.0), 0.5);
        assert_eq!(fade.apply(400.0), 0.0);
    }
}
