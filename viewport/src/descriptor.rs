//! Immutable viewport snapshots.

#[cfg(test)]
#[path = "descriptor_test.rs"]
mod descriptor_test;

use serde::Serialize;

use crate::scaling::matches_breakpoint;
use crate::tier::Tier;

/// Current viewport measurements plus the derived tier and scale.
///
/// Only [`classify`] builds one, so `tier` and `scale` always agree with
/// `width`. A new descriptor replaces the old one on every geometry change.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ViewportDescriptor {
    width: u32,
    height: u32,
    tier: Tier,
    scale: f64,
}

/// Derive a complete descriptor from raw display geometry.
#[must_use]
pub fn classify(width: u32, height: u32) -> ViewportDescriptor {
    let tier = Tier::for_width(width);
    ViewportDescriptor { width, height, tier, scale: tier.scale() }
}

impl ViewportDescriptor {
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn tier(&self) -> Tier {
        self.tier
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Canonical name of the active breakpoint.
    #[must_use]
    pub fn breakpoint(&self) -> &'static str {
        self.tier.name()
    }

    #[must_use]
    pub fn is_mobile(&self) -> bool {
        self.tier == Tier::Mobile
    }

    #[must_use]
    pub fn is_tablet(&self) -> bool {
        self.tier == Tier::Tablet
    }

    #[must_use]
    pub fn is_desktop(&self) -> bool {
        self.tier == Tier::Desktop
    }

    #[must_use]
    pub fn is_widescreen(&self) -> bool {
        self.tier == Tier::Widescreen
    }

    #[must_use]
    pub fn is_ultrawide(&self) -> bool {
        self.tier == Tier::Ultrawide
    }

    #[must_use]
    pub fn is_uhd(&self) -> bool {
        self.tier == Tier::Uhd
    }

    #[must_use]
    pub fn is_four_k(&self) -> bool {
        self.tier == Tier::FourK
    }

    /// Breakpoint membership test against this descriptor's width.
    #[must_use]
    pub fn is_breakpoint(&self, name: &str) -> bool {
        matches_breakpoint(name, self.width)
    }
}

impl Default for ViewportDescriptor {
    /// Placeholder geometry used before the host reports a real size.
    fn default() -> Self {
        classify(1024, 768)
    }
}
