//! Presentation values derived from the current viewport descriptor.
//!
//! DESIGN
//! ======
//! Components never branch on raw widths. They ask these functions for the
//! container box, debug overlay rows, or demo metrics of a descriptor, and
//! every answer is a pure projection of its tier and width.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use viewport::consts::RESERVED_4K_WIDTH;
use viewport::{Px, Tier, ViewportDescriptor, responsive_font_size, scale_value};

/// Inline style of a `ViewportContainer`.
#[derive(Clone, Debug, PartialEq)]
pub struct ContainerStyle {
    pub max_width: Option<u32>,
    pub padding_rem: f64,
    pub font_size: Px,
    pub line_height: &'static str,
}

impl ContainerStyle {
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        if let Some(max) = self.max_width {
            css.push_str(&format!("max-width: {max}px; "));
        }
        css.push_str(&format!(
            "margin: 0 auto; padding: 0 {}rem; font-size: {}; line-height: {};",
            self.padding_rem, self.font_size, self.line_height
        ));
        css
    }
}

/// Container box for `viewport`; `fluid` drops the width cap.
pub fn container_style(viewport: &ViewportDescriptor, fluid: bool) -> ContainerStyle {
    let max_width = if fluid { None } else { max_content_width(viewport.tier()) };
    let width = f64::from(viewport.width());
    ContainerStyle {
        max_width,
        padding_rem: scale_value(1.0, width, 1024.0, 1.0, 2.5),
        font_size: responsive_font_size(16.0, viewport.width()),
        line_height: match viewport.tier() {
            Tier::FourK => "1.8",
            Tier::Uhd => "1.7",
            _ => "1.6",
        },
    }
}

/// Content width cap per tier; narrow tiers fill the window.
pub fn max_content_width(tier: Tier) -> Option<u32> {
    match tier {
        Tier::FourK => Some(RESERVED_4K_WIDTH),
        Tier::Uhd => Some(2560),
        Tier::Ultrawide => Some(1536),
        Tier::Widescreen => Some(1280),
        Tier::Desktop | Tier::Tablet | Tier::Mobile => None,
    }
}

/// Accent colour of the debug overlay.
pub fn tier_color(tier: Tier) -> &'static str {
    match tier {
        Tier::FourK => "#6200ea",
        Tier::Uhd => "#2962ff",
        Tier::Ultrawide => "#00bfa5",
        Tier::Widescreen => "#00c853",
        Tier::Desktop => "#ffab00",
        Tier::Tablet => "#ff6d00",
        Tier::Mobile => "#dd2c00",
    }
}

/// One line of the debug overlay's breakpoint table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BreakpointRow {
    pub tier: Tier,
    pub min_width: u32,
    pub active: bool,
}

/// Breakpoint table, largest first, with the current tier marked.
pub fn breakpoint_rows(viewport: &ViewportDescriptor) -> Vec<BreakpointRow> {
    Tier::ALL
        .into_iter()
        .rev()
        .map(|tier| BreakpointRow { tier, min_width: tier.threshold(), active: tier == viewport.tier() })
        .collect()
}

/// `"1920×1080"`
pub fn dimension_label(viewport: &ViewportDescriptor) -> String {
    format!("{}×{}", viewport.width(), viewport.height())
}

/// Sizes used by the viewport demo page, in rem.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DemoMetrics {
    pub hero_padding: f64,
    pub hero_title: f64,
    pub hero_title_gap: f64,
    pub hero_text: f64,
    pub card_padding: f64,
    pub card_title: f64,
    pub card_text: f64,
}

impl DemoMetrics {
    pub fn for_tier(tier: Tier) -> Self {
        match tier {
            Tier::FourK => Self {
                hero_padding: 3.0,
                hero_title: 4.0,
                hero_title_gap: 2.0,
                hero_text: 1.5,
                card_padding: 2.0,
                card_title: 1.8,
                card_text: 1.2,
            },
            Tier::Uhd => Self {
                hero_padding: 2.5,
                hero_title: 3.0,
                hero_title_gap: 1.0,
                hero_text: 1.1,
                card_padding: 1.5,
                card_title: 1.5,
                card_text: 1.0,
            },
            _ => Self {
                hero_padding: 2.0,
                hero_title: 2.0,
                hero_title_gap: 1.0,
                hero_text: 1.1,
                card_padding: 1.0,
                card_title: 1.25,
                card_text: 1.0,
            },
        }
    }
}

/// Hero background of the demo page.
pub fn demo_gradient(tier: Tier) -> &'static str {
    match tier {
        Tier::FourK => "linear-gradient(135deg, #6200ea 0%, #3700b3 100%)",
        Tier::Uhd => "linear-gradient(135deg, #2962ff 0%, #0039cb 100%)",
        Tier::Ultrawide => "linear-gradient(135deg, #00bfa5 0%, #008e76 100%)",
        _ => "linear-gradient(135deg, #ff6d00 0%, #c43e00 100%)",
    }
}
