//! Aspect-ratio calculator tests.
//!
//! Pure math, no fixtures required.

use stillcut::{
    LARGE_WIDTH, MEDIUM_WIDTH, SMALL_WIDTH, SizePreset, StillcutError, scaled_height,
};

#[test]
fn pinned_small_geometry_for_650x488() {
    // round(488 * 250 / 650) = round(187.69...) = 188.
    assert_eq!(scaled_height(250, 650, 488).expect("valid ratio"), 188);
}

#[test]
fn matches_reference_formula() {
    let cases = [
        (250u32, 650u32, 488u32),
        (350, 650, 488),
        (650, 650, 488),
        (1280, 1920, 1080),
        (100, 4096, 2160),
        (333, 1000, 707),
    ];

    for (target_width, original_width, original_height) in cases {
        let expected = (f64::from(original_height) * f64::from(target_width)
            / f64::from(original_width))
        .round() as u32;
        assert_eq!(
            scaled_height(target_width, original_width, original_height).expect("valid ratio"),
            expected,
            "target={target_width} original={original_width}x{original_height}",
        );
    }
}

#[test]
fn identity_when_target_equals_source_width() {
    assert_eq!(scaled_height(1920, 1920, 1080).expect("valid ratio"), 1080);
    assert_eq!(scaled_height(650, 650, 488).expect("valid ratio"), 488);
}

#[test]
fn ties_round_away_from_zero() {
    // 1 * 1 / 2 = 0.5 → 1.
    assert_eq!(scaled_height(1, 2, 1).expect("valid ratio"), 1);
    // 3 * 1 / 2 = 1.5 → 2.
    assert_eq!(scaled_height(1, 2, 3).expect("valid ratio"), 2);
}

#[test]
fn zero_source_width_is_a_configuration_error() {
    let result = scaled_height(250, 0, 488);
    assert!(matches!(result, Err(StillcutError::ZeroWidthSource)));
}

#[test]
fn preset_width_constants() {
    assert_eq!(SMALL_WIDTH, 250);
    assert_eq!(MEDIUM_WIDTH, 350);
    assert_eq!(LARGE_WIDTH, 650);

    assert_eq!(SizePreset::Small.preset_width(), Some(SMALL_WIDTH));
    assert_eq!(SizePreset::Medium.preset_width(), Some(MEDIUM_WIDTH));
    assert_eq!(SizePreset::Large.preset_width(), Some(LARGE_WIDTH));
}

#[test]
fn preset_labels() {
    assert_eq!(SizePreset::Small.label(), "small");
    assert_eq!(SizePreset::Medium.label(), "medium");
    assert_eq!(SizePreset::Large.label(), "large");
    assert_eq!(
        SizePreset::Custom {
            width: 10,
            height: 20
        }
        .label(),
        "custom",
    );
}
