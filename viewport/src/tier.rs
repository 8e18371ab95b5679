//! Ordered display-width tiers.
//!
//! DESIGN
//! ======
//! One enum replaces a family of independently computed `isX` booleans, so
//! the per-tier flags are projections of a single value and can never
//! disagree with each other.

#[cfg(test)]
#[path = "tier_test.rs"]
mod tier_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DESKTOP_MIN_WIDTH, FOUR_K_MIN_WIDTH, MOBILE_MIN_WIDTH, TABLET_MIN_WIDTH, UHD_MIN_WIDTH,
    ULTRAWIDE_MIN_WIDTH, WIDESCREEN_MIN_WIDTH,
};

/// A display-width category. Variants are declared smallest first, so the
/// derived ordering matches the breakpoint ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tier {
    Mobile,
    Tablet,
    Desktop,
    Widescreen,
    Ultrawide,
    Uhd,
    FourK,
}

/// Returned when a breakpoint name does not name any tier.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown breakpoint: {0}")]
pub struct UnknownTier(pub String);

impl Tier {
    /// Every tier in ascending order.
    pub const ALL: [Tier; 7] = [
        Tier::Mobile,
        Tier::Tablet,
        Tier::Desktop,
        Tier::Widescreen,
        Tier::Ultrawide,
        Tier::Uhd,
        Tier::FourK,
    ];

    /// Inclusive lower-bound width of this tier.
    #[must_use]
    pub const fn threshold(self) -> u32 {
        match self {
            Tier::Mobile => MOBILE_MIN_WIDTH,
            Tier::Tablet => TABLET_MIN_WIDTH,
            Tier::Desktop => DESKTOP_MIN_WIDTH,
            Tier::Widescreen => WIDESCREEN_MIN_WIDTH,
            Tier::Ultrawide => ULTRAWIDE_MIN_WIDTH,
            Tier::Uhd => UHD_MIN_WIDTH,
            Tier::FourK => FOUR_K_MIN_WIDTH,
        }
    }

    /// The next larger tier, or `None` for the unbounded top tier.
    #[must_use]
    pub const fn next(self) -> Option<Tier> {
        match self {
            Tier::Mobile => Some(Tier::Tablet),
            Tier::Tablet => Some(Tier::Desktop),
            Tier::Desktop => Some(Tier::Widescreen),
            Tier::Widescreen => Some(Tier::Ultrawide),
            Tier::Ultrawide => Some(Tier::Uhd),
            Tier::Uhd => Some(Tier::FourK),
            Tier::FourK => None,
        }
    }

    /// Classify a width: the greatest tier whose threshold is `<= width`.
    #[must_use]
    pub fn for_width(width: u32) -> Tier {
        Tier::ALL
            .into_iter()
            .rev()
            .find(|tier| tier.threshold() <= width)
            .unwrap_or(Tier::Mobile)
    }

    /// Whether `width` lies in `[threshold, next.threshold)`.
    #[must_use]
    pub fn contains(self, width: u32) -> bool {
        width >= self.threshold() && self.next().is_none_or(|next| width < next.threshold())
    }

    /// Layout scale factor. Non-decreasing across the tier ordering.
    #[must_use]
    pub const fn scale(self) -> f64 {
        match self {
            Tier::Mobile | Tier::Tablet | Tier::Desktop => 1.0,
            Tier::Widescreen => 1.1,
            Tier::Ultrawide => 1.25,
            Tier::Uhd => 1.5,
            Tier::FourK => 2.0,
        }
    }

    /// Typography multiplier applied by `responsive_font_size`.
    #[must_use]
    pub const fn font_multiplier(self) -> f64 {
        match self {
            Tier::Mobile | Tier::Tablet | Tier::Desktop | Tier::Widescreen => 1.0,
            Tier::Ultrawide => 1.15,
            Tier::Uhd => 1.35,
            Tier::FourK => 1.75,
        }
    }

    /// Canonical breakpoint name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Tier::Mobile => "mobile",
            Tier::Tablet => "tablet",
            Tier::Desktop => "desktop",
            Tier::Widescreen => "widescreen",
            Tier::Ultrawide => "ultrawide",
            Tier::Uhd => "uhd",
            Tier::FourK => "fourK",
        }
    }

    /// Short badge label for overlays (`"4K"` for the top tier).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Tier::Mobile => "MOBILE",
            Tier::Tablet => "TABLET",
            Tier::Desktop => "DESKTOP",
            Tier::Widescreen => "WIDESCREEN",
            Tier::Ultrawide => "ULTRAWIDE",
            Tier::Uhd => "UHD",
            Tier::FourK => "4K",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tier {
    type Err = UnknownTier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if wanted.eq_ignore_ascii_case("4k") {
            return Ok(Tier::FourK);
        }
        Tier::ALL
            .into_iter()
            .find(|tier| tier.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownTier(s.to_owned()))
    }
}
