#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::RESERVED_4K_WIDTH;

// =============================================================
// Classification
// =============================================================

#[test]
fn zero_width_is_mobile() {
    assert_eq!(Tier::for_width(0), Tier::Mobile);
}

#[test]
fn thresholds_are_inclusive() {
    for tier in Tier::ALL {
        assert_eq!(Tier::for_width(tier.threshold()), tier, "at {}", tier.threshold());
    }
}

#[test]
fn one_below_threshold_is_previous_tier() {
    for pair in Tier::ALL.windows(2) {
        assert_eq!(Tier::for_width(pair[1].threshold() - 1), pair[0]);
    }
}

#[test]
fn width_1024_is_widescreen_not_desktop() {
    assert_eq!(Tier::for_width(1023), Tier::Desktop);
    assert_eq!(Tier::for_width(1024), Tier::Widescreen);
}

#[test]
fn huge_width_is_top_tier() {
    assert_eq!(Tier::for_width(u32::MAX), Tier::FourK);
}

#[test]
fn classification_is_monotonic() {
    let mut previous = Tier::for_width(0);
    for width in 0..=5000 {
        let tier = Tier::for_width(width);
        assert!(tier >= previous, "tier regressed at {width}");
        previous = tier;
    }
}

#[test]
fn exactly_one_tier_contains_each_width() {
    for width in (0..=5000).chain([u32::MAX]) {
        let hits: Vec<Tier> = Tier::ALL.into_iter().filter(|t| t.contains(width)).collect();
        assert_eq!(hits, vec![Tier::for_width(width)], "width {width}");
    }
}

// The legacy 3840px "true 4K" boundary disagrees with the table, which starts
// fourK at 2560. The table wins: 3840 does not open another tier.
#[test]
fn reserved_4k_width_does_not_split_top_tier() {
    assert_eq!(Tier::for_width(FOUR_K_MIN_WIDTH), Tier::FourK);
    assert_eq!(Tier::for_width(RESERVED_4K_WIDTH - 1), Tier::FourK);
    assert_eq!(Tier::for_width(RESERVED_4K_WIDTH), Tier::FourK);
    assert_eq!(Tier::FourK.scale(), 2.0);
}

// =============================================================
// Ordering and derived factors
// =============================================================

#[test]
fn all_is_sorted_with_increasing_thresholds() {
    for pair in Tier::ALL.windows(2) {
        assert!(pair[0] < pair[1]);
        assert!(pair[0].threshold() < pair[1].threshold());
    }
}

#[test]
fn next_walks_the_table() {
    for pair in Tier::ALL.windows(2) {
        assert_eq!(pair[0].next(), Some(pair[1]));
    }
    assert_eq!(Tier::FourK.next(), None);
}

#[test]
fn scale_is_non_decreasing() {
    for pair in Tier::ALL.windows(2) {
        assert!(pair[0].scale() <= pair[1].scale());
    }
}

#[test]
fn scale_steps() {
    let scales: Vec<f64> = Tier::ALL.into_iter().map(Tier::scale).collect();
    assert_eq!(scales, vec![1.0, 1.0, 1.0, 1.1, 1.25, 1.5, 2.0]);
}

#[test]
fn font_multiplier_is_non_decreasing_and_tops_out_at_1_75() {
    for pair in Tier::ALL.windows(2) {
        assert!(pair[0].font_multiplier() <= pair[1].font_multiplier());
    }
    assert_eq!(Tier::Mobile.font_multiplier(), 1.0);
    assert_eq!(Tier::FourK.font_multiplier(), 1.75);
}

// =============================================================
// Names
// =============================================================

#[test]
fn names_round_trip_through_from_str() {
    for tier in Tier::ALL {
        assert_eq!(tier.name().parse::<Tier>(), Ok(tier));
        assert_eq!(tier.to_string(), tier.name());
    }
}

#[test]
fn parse_is_case_insensitive_and_accepts_4k_alias() {
    assert_eq!("FOURK".parse::<Tier>(), Ok(Tier::FourK));
    assert_eq!("4k".parse::<Tier>(), Ok(Tier::FourK));
    assert_eq!("4K".parse::<Tier>(), Ok(Tier::FourK));
    assert_eq!(" Tablet ".parse::<Tier>(), Ok(Tier::Tablet));
}

#[test]
fn parse_rejects_unknown_name() {
    assert_eq!("8k".parse::<Tier>(), Err(UnknownTier("8k".to_owned())));
}

#[test]
fn serde_uses_camel_case_names() {
    let json = serde_json::to_string(&Tier::FourK).unwrap_or_default();
    assert_eq!(json, "\"fourK\"");
}
