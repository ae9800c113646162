//! Thumbnail extraction integration tests.
//!
//! Fixtures come from `tests/fixtures/generate_fixtures.sh`; tests skip
//! themselves when the files are absent.

use std::path::Path;

use stillcut::{StillcutError, extract_thumbnails};

fn sample_video_path() -> &'static str {
    "tests/fixtures/sample_video.mp4"
}

#[test]
fn extracts_base_still_and_three_derivatives() {
    let path = sample_video_path();
    if !Path::new(path).exists() {
        return;
    }

    let temporary_directory = tempfile::tempdir().expect("Failed to create temp dir");
    let base = temporary_directory.path().join("thumbnail.jpg");

    let set = extract_thumbnails(path, &base).expect("Failed to extract thumbnails");

    for output in [&set.base, &set.small, &set.medium, &set.large] {
        assert!(output.exists(), "Missing output: {}", output.display());
    }

    // The base still keeps the fixture's native 650x488 resolution.
    let base_image = image::open(&set.base).expect("Failed to decode base still");
    assert_eq!(base_image.width(), 650);
    assert_eq!(base_image.height(), 488);

    // Derivatives carry the preset widths exactly.
    for (output, expected_width) in [(&set.small, 250), (&set.medium, 350), (&set.large, 650)] {
        let image = image::open(output).expect("Failed to decode derivative");
        assert_eq!(image.width(), expected_width, "{}", output.display());
    }
}

#[test]
fn derivatives_are_siblings_of_the_base() {
    let path = sample_video_path();
    if !Path::new(path).exists() {
        return;
    }

    let temporary_directory = tempfile::tempdir().expect("Failed to create temp dir");
    let base = temporary_directory.path().join("thumbnail.jpg");

    let set = extract_thumbnails(path, &base).expect("Failed to extract thumbnails");

    assert_eq!(set.base, base);
    assert_eq!(set.small, temporary_directory.path().join("thumbnail_small.jpg"));
    assert_eq!(
        set.medium,
        temporary_directory.path().join("thumbnail_medium.jpg"),
    );
    assert_eq!(set.large, temporary_directory.path().join("thumbnail_large.jpg"));
}

#[test]
fn unknown_duration_falls_back_to_stream_start() {
    // Raw H.264 elementary stream: the container reports no duration, so
    // the seek target degrades to 0 and frame 0 is used.
    let path = "tests/fixtures/sample_video.h264";
    if !Path::new(path).exists() {
        return;
    }

    let temporary_directory = tempfile::tempdir().expect("Failed to create temp dir");
    let base = temporary_directory.path().join("thumbnail.jpg");

    let set = extract_thumbnails(path, &base).expect("Extraction should survive unknown duration");
    assert!(set.base.exists());
    assert!(set.small.exists());
}

#[test]
fn audio_only_input_has_no_video_stream() {
    let path = "tests/fixtures/sample_audio_only.m4a";
    if !Path::new(path).exists() {
        return;
    }

    let temporary_directory = tempfile::tempdir().expect("Failed to create temp dir");
    let base = temporary_directory.path().join("thumbnail.jpg");

    let result = extract_thumbnails(path, &base);
    assert!(matches!(result, Err(StillcutError::NoVideoStream)));
    assert!(!base.exists(), "No output should exist after a failure");
}
