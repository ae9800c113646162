//! Resize pipeline integration tests.
//!
//! The fixture is a 650x488 test pattern, chosen so the preset geometry
//! matches the hand-computed values below. Generate it with
//! `tests/fixtures/generate_fixtures.sh`; tests skip themselves when it is
//! absent.

use std::path::Path;

use stillcut::{
    SizePreset, probe_dimensions, resize_video_frame, resize_video_frame_to, scaled_height,
};

fn sample_video_path() -> &'static str {
    "tests/fixtures/sample_video.mp4"
}

#[test]
fn small_preset_matches_pinned_geometry() {
    let path = sample_video_path();
    if !Path::new(path).exists() {
        return;
    }

    let temporary_directory = tempfile::tempdir().expect("Failed to create temp dir");
    let output = temporary_directory.path().join("small.jpg");

    let written =
        resize_video_frame(path, &output, SizePreset::Small).expect("Failed to resize");

    // 650x488 at target width 250 → height round(488 * 250 / 650) = 188.
    assert_eq!(written.width, 250);
    assert_eq!(written.height, 188);

    let image = image::open(&output).expect("Failed to decode output JPEG");
    assert_eq!(image.width(), 250);
    assert_eq!(image.height(), 188);
}

#[test]
fn preset_widths_are_exact_and_heights_preserve_ratio() {
    let path = sample_video_path();
    if !Path::new(path).exists() {
        return;
    }

    let original = probe_dimensions(path).expect("Failed to probe fixture");
    let temporary_directory = tempfile::tempdir().expect("Failed to create temp dir");

    for (preset, expected_width) in [
        (SizePreset::Small, 250u32),
        (SizePreset::Medium, 350),
        (SizePreset::Large, 650),
    ] {
        let output = temporary_directory
            .path()
            .join(format!("{}.jpg", preset.label()));
        let written = resize_video_frame(path, &output, preset).expect("Failed to resize");

        assert_eq!(written.width, expected_width, "{preset:?} width");

        let expected_height =
            scaled_height(expected_width, original.width, original.height).expect("valid ratio");
        let difference = written.height.abs_diff(expected_height);
        assert!(
            difference <= 1,
            "{preset:?} height {} deviates from ratio-preserving {expected_height}",
            written.height,
        );

        let image = image::open(&output).expect("Failed to decode output JPEG");
        assert_eq!(image.width(), written.width);
        assert_eq!(image.height(), written.height);
    }
}

#[test]
fn custom_size_is_used_verbatim() {
    let path = sample_video_path();
    if !Path::new(path).exists() {
        return;
    }

    let temporary_directory = tempfile::tempdir().expect("Failed to create temp dir");
    let output = temporary_directory.path().join("custom.jpg");

    let written = resize_video_frame_to(path, &output, 123, 77).expect("Failed to resize");
    assert_eq!(written.width, 123);
    assert_eq!(written.height, 77);

    let image = image::open(&output).expect("Failed to decode output JPEG");
    assert_eq!(image.width(), 123);
    assert_eq!(image.height(), 77);
}

#[test]
fn repeated_resizes_do_not_exhaust_native_handles() {
    let path = sample_video_path();
    if !Path::new(path).exists() {
        return;
    }

    // Every demuxer/decoder/scaler/encoder handle is scoped to one
    // invocation, so sequential runs must neither leak nor fail.
    let temporary_directory = tempfile::tempdir().expect("Failed to create temp dir");
    let output = temporary_directory.path().join("repeat.jpg");

    for iteration in 0..100 {
        resize_video_frame(path, &output, SizePreset::Small)
            .unwrap_or_else(|error| panic!("Iteration {iteration} failed: {error}"));
    }
}
