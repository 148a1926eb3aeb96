//! Math re-exports.
//!
//! Pixel-space vectors use [`glam`]'s `f32` types; data-space values stay in
//! `f64` and live in the chart crate's own types.
//!
//! ```
//! use panplot_core::math::Vec2;
//!
//! let touch = Vec2::new(50.0, 50.0);
//! let inset = Vec2::new(10.0, 5.0);
//! assert_eq!(touch - inset, Vec2::new(40.0, 45.0));
//! ```
//!
//! [`glam`]: https://docs.rs/glam

pub use glam::{DVec2, Vec2};

/// Clamp `value` into `[lo, hi]` without panicking when `lo > hi`.
///
/// Mirrors the usual "min then max" clamp: when the bounds conflict the
/// lower bound wins. `f64::clamp` would panic in that case.
#[inline]
pub fn clamp_lenient(value: f64, lo: f64, hi: f64) -> f64 {
    value.min(hi).max(lo)
}

/// `f32` variant of [`clamp_lenient`].
#[inline]
pub fn clamp_lenient_f32(value: f32, lo: f32, hi: f32) -> f32 {
    value.min(hi).max(lo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_lenient_in_range() {
        assert_eq!(clamp_lenient(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp_lenient(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp_lenient(11.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn test_clamp_lenient_conflicting_bounds() {
        // Lower bound wins, no panic
        assert_eq!(clamp_lenient(5.0, 3.0, 1.0), 3.0);
        assert_eq!(clamp_lenient_f32(5.0, 3.0, 1.0), 3.0);
    }
}
