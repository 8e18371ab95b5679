//! Pure scaling helpers shared by every viewport consumer.

#[cfg(test)]
#[path = "scaling_test.rs"]
mod scaling_test;

use std::fmt;

use crate::consts::{DEFAULT_BASE_WIDTH, DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE};
use crate::tier::Tier;

/// An absolute size in CSS pixels. Displays as `"<n>px"`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Px(pub f64);

impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

/// Scale `base` by `width / base_width`, hard-clamped to `[min_scale, max_scale]`.
///
/// The clamp is applied as floor-then-ceiling, so inverted bounds resolve to
/// `max_scale` instead of panicking like `f64::clamp` would. A non-positive
/// `base_width` is treated as an unbounded ratio and lands on the ceiling.
#[must_use]
pub fn scale_value(base: f64, width: f64, base_width: f64, min_scale: f64, max_scale: f64) -> f64 {
    let ratio = if base_width > 0.0 { width / base_width } else { f64::INFINITY };
    base * ratio.max(min_scale).min(max_scale)
}

/// [`scale_value`] with the desktop reference width and the `0.75..=2.5` range.
#[must_use]
pub fn scale_value_default(base: f64, width: f64) -> f64 {
    scale_value(base, width, DEFAULT_BASE_WIDTH, DEFAULT_MIN_SCALE, DEFAULT_MAX_SCALE)
}

/// Font size for `base` pixels at the given viewport width.
#[must_use]
pub fn responsive_font_size(base: f64, width: u32) -> Px {
    Px(base * Tier::for_width(width).font_multiplier())
}

/// Whether `width` falls inside the named breakpoint's half-open interval.
///
/// Unknown names never match.
#[must_use]
pub fn matches_breakpoint(name: &str, width: u32) -> bool {
    name.parse::<Tier>().is_ok_and(|tier| tier.contains(width))
}
