#![allow(clippy::float_cmp)]

use super::*;

fn flags(d: &ViewportDescriptor) -> [bool; 7] {
    [
        d.is_mobile(),
        d.is_tablet(),
        d.is_desktop(),
        d.is_widescreen(),
        d.is_ultrawide(),
        d.is_uhd(),
        d.is_four_k(),
    ]
}

#[test]
fn classify_keeps_geometry() {
    let d = classify(1920, 1080);
    assert_eq!(d.width(), 1920);
    assert_eq!(d.height(), 1080);
}

#[test]
fn classify_derives_tier_and_scale_from_width() {
    let d = classify(1600, 900);
    assert_eq!(d.tier(), Tier::Uhd);
    assert_eq!(d.scale(), 1.5);
    assert_eq!(d.breakpoint(), "uhd");
}

#[test]
fn exactly_one_flag_is_set_for_every_width() {
    for width in (0..6000).step_by(3) {
        let d = classify(width, 600);
        let set = flags(&d).into_iter().filter(|f| *f).count();
        assert_eq!(set, 1, "width {width}");
    }
}

#[test]
fn flag_position_matches_tier_order() {
    for tier in Tier::ALL {
        let d = classify(tier.threshold(), 600);
        let index = Tier::ALL.iter().position(|t| *t == tier).unwrap_or(usize::MAX);
        assert!(flags(&d)[index], "{tier}");
    }
}

#[test]
fn boundary_1024_sets_widescreen_flag() {
    let d = classify(1024, 768);
    assert!(d.is_widescreen());
    assert!(!d.is_desktop());
    assert!(d.is_breakpoint("widescreen"));
    assert!(!d.is_breakpoint("desktop"));
}

#[test]
fn scale_is_non_decreasing_in_width() {
    let mut previous = classify(0, 0).scale();
    for width in 0..=4000 {
        let scale = classify(width, 0).scale();
        assert!(scale >= previous, "scale regressed at {width}");
        previous = scale;
    }
}

#[test]
fn descriptor_serializes_for_debug_surfaces() {
    let json = serde_json::to_value(classify(2560, 1440)).unwrap_or_default();
    assert_eq!(json["tier"], "fourK");
    assert_eq!(json["width"], 2560);
    assert_eq!(json["scale"], 2.0);
}

#[test]
fn default_is_a_valid_classification() {
    let d = ViewportDescriptor::default();
    assert_eq!(d, classify(d.width(), d.height()));
}
