//! Container remux integration tests.
//!
//! Fixtures come from `tests/fixtures/generate_fixtures.sh`; tests skip
//! themselves when the files are absent.

use std::path::Path;

use stillcut::{Remuxer, StillcutError, probe_dimensions};

fn sample_video_path() -> &'static str {
    "tests/fixtures/sample_video.mp4"
}

#[test]
fn remux_mp4_to_mkv() {
    let path = sample_video_path();
    if !Path::new(path).exists() {
        return;
    }

    let temporary_directory = tempfile::tempdir().expect("Failed to create temp dir");
    let output = temporary_directory.path().join("output.mkv");

    let report = Remuxer::new(path, &output)
        .expect("Failed to create remuxer")
        .run()
        .expect("Failed to remux");

    assert_eq!(report.streams_mapped, 1);
    assert!(report.packets_written > 0);

    // The remuxed file is a readable container with the same video geometry.
    let dimensions = probe_dimensions(&output).expect("Failed to probe remuxed output");
    let original = probe_dimensions(path).expect("Failed to probe fixture");
    assert_eq!(dimensions, original);
}

#[test]
fn remux_with_forced_format() {
    let path = sample_video_path();
    if !Path::new(path).exists() {
        return;
    }

    let temporary_directory = tempfile::tempdir().expect("Failed to create temp dir");
    // No extension: the format must come from with_format.
    let output = temporary_directory.path().join("converted");

    let report = Remuxer::new(path, &output)
        .expect("Failed to create remuxer")
        .with_format("matroska")
        .run()
        .expect("Failed to remux with forced format");

    assert_eq!(report.streams_mapped, 1);
    probe_dimensions(&output).expect("Forced-format output should be readable");
}

#[test]
fn remux_nonexistent_input() {
    let result = Remuxer::new("this_file_does_not_exist.mkv", "out.mp4");
    assert!(result.is_err());

    let error_message = result.err().map(|e| e.to_string()).unwrap_or_default();
    assert!(
        error_message.contains("Failed to open media file"),
        "Error should mention file open failure: {error_message}",
    );
}

#[test]
fn remux_audio_only_input_has_nothing_to_map() {
    let path = "tests/fixtures/sample_audio_only.m4a";
    if !Path::new(path).exists() {
        return;
    }

    let temporary_directory = tempfile::tempdir().expect("Failed to create temp dir");
    let output = temporary_directory.path().join("output.mp4");

    let result = Remuxer::new(path, &output)
        .expect("Failed to create remuxer")
        .run();
    assert!(matches!(result, Err(StillcutError::NoVideoStream)));
}

#[test]
fn remux_into_incompatible_container_fails_explicitly() {
    let path = sample_video_path();
    if !Path::new(path).exists() {
        return;
    }

    let temporary_directory = tempfile::tempdir().expect("Failed to create temp dir");
    let output = temporary_directory.path().join("output.mp3");

    // MP3 is an audio-only container; carrying H.264 into it must surface
    // an explicit sink error, never a silently corrupt file.
    let result = Remuxer::new(path, &output)
        .expect("Failed to create remuxer")
        .run();
    assert!(
        matches!(result, Err(StillcutError::Sink(_))),
        "Expected an explicit sink error, got: {result:?}",
    );
}
