//! Viewport classification and scaling engine.
//!
//! The display surface is sorted into one of seven ordered width tiers, and
//! every visual surface reads the derived scale factors from a single
//! [`ViewportDescriptor`]. The host (browser window, test harness) reports raw
//! geometry; this crate never touches the DOM.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`consts`] | Breakpoint table and scaling defaults |
//! | [`tier`] | The ordered [`Tier`] enum and its classification rule |
//! | [`scaling`] | Pure value/font scaling helpers and breakpoint membership |
//! | [`descriptor`] | Immutable [`ViewportDescriptor`] snapshots |
//! | [`broadcast`] | Publish/subscribe store holding the current descriptor |

pub mod broadcast;
pub mod consts;
pub mod descriptor;
pub mod scaling;
pub mod tier;

pub use broadcast::{Subscription, ViewportBroadcast};
pub use descriptor::{ViewportDescriptor, classify};
pub use scaling::{Px, matches_breakpoint, responsive_font_size, scale_value, scale_value_default};
pub use tier::Tier;
