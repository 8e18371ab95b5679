//! Breakpoint table and scaling defaults.

// ── Breakpoints (inclusive lower bounds, CSS pixels) ─────────────

pub const MOBILE_MIN_WIDTH: u32 = 0;
pub const TABLET_MIN_WIDTH: u32 = 640;
pub const DESKTOP_MIN_WIDTH: u32 = 768;
pub const WIDESCREEN_MIN_WIDTH: u32 = 1024;
pub const ULTRAWIDE_MIN_WIDTH: u32 = 1280;
pub const UHD_MIN_WIDTH: u32 = 1536;
pub const FOUR_K_MIN_WIDTH: u32 = 2560;

/// Native 4K panel width.
///
/// Older layouts used this as the start of the 4K tier while the breakpoint
/// table starts `fourK` at [`FOUR_K_MIN_WIDTH`]. Classification follows the
/// table; this value only marks a physical 3840px surface and never splits a tier.
pub const RESERVED_4K_WIDTH: u32 = 3840;

// ── scale_value defaults ─────────────────────────────────────────

/// Reference width at which `scale_value_default` returns its input unchanged.
pub const DEFAULT_BASE_WIDTH: f64 = 1024.0;
pub const DEFAULT_MIN_SCALE: f64 = 0.75;
pub const DEFAULT_MAX_SCALE: f64 = 2.5;
