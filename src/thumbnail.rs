//! Representative-thumbnail extraction.
//!
//! Pulls one frame from roughly 10% into a video, writes it out as a
//! full-resolution base still, and derives the three preset sizes from that
//! base as sibling files.

use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use ffmpeg_next::format::Pixel;

use crate::{
    decode,
    error::StillcutError,
    resize::{self, SizePreset},
    scale::Scaler,
    source::MediaSource,
    still,
};

/// Divisor applied to the container duration to pick the seek target
/// (1/10th of the stream).
const SEEK_DIVISOR: i64 = 10;

/// Output paths produced by one thumbnail extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailSet {
    /// Full-resolution base still image.
    pub base: PathBuf,
    /// 250 px wide derivative.
    pub small: PathBuf,
    /// 350 px wide derivative.
    pub medium: PathBuf,
    /// 650 px wide derivative.
    pub large: PathBuf,
}

/// Extract a representative still from `input`, then derive the three
/// preset sizes.
///
/// The representative frame is sampled at approximately 10% of the
/// container's reported duration, snapping backward to the nearest
/// keyframe. Two degradations are deliberate:
///
/// - unknown or zero duration → the seek target falls back to the start of
///   the stream and frame 0 is used;
/// - a failed seek → decoding proceeds from wherever the demuxer is
///   positioned (logged as a warning, not an error).
///
/// The derivatives are written next to `base_output` as
/// `<stem>_small.<ext>`, `<stem>_medium.<ext>` and `<stem>_large.<ext>`.
///
/// # Errors
///
/// Input-side failures mirror [`resize_video_frame`](crate::resize_video_frame):
/// unreadable input, no video stream, decoder failures.
/// [`StillcutError::NoFrameDecoded`] if no frame arrives before end of
/// stream.
///
/// # Example
///
/// ```no_run
/// use stillcut::extract_thumbnails;
///
/// let set = extract_thumbnails("movie.webm", "thumbnail.jpg")?;
/// println!("base: {}", set.base.display());
/// println!("small: {}", set.small.display());
/// # Ok::<(), stillcut::StillcutError>(())
/// ```
pub fn extract_thumbnails<P1: AsRef<Path>, P2: AsRef<Path>>(
    input: P1,
    base_output: P2,
) -> Result<ThumbnailSet, StillcutError> {
    let input = input.as_ref();
    let base_output = base_output.as_ref().to_path_buf();

    let mut source = MediaSource::open(input)?;
    let mut decoder = source.video_decoder()?;

    // Seek to ~10% of the reported duration (AV_TIME_BASE units).
    let duration = source.input.duration();
    let seek_target = if duration > 0 { duration / SEEK_DIVISOR } else { 0 };
    if seek_target > 0 {
        if let Err(error) = source.input.seek(seek_target, ..seek_target) {
            log::warn!(
                "Seek to {seek_target} in {} failed ({error}); decoding from current position",
                input.display(),
            );
        }
    } else {
        log::debug!(
            "Container duration unknown for {}; sampling from the start",
            input.display(),
        );
    }

    let frame = decode::first_frame(&mut source, &mut decoder)?;

    // Base still keeps the native resolution; only the pixel format changes.
    let mut converter = Scaler::new(
        frame.format(),
        frame.width(),
        frame.height(),
        Pixel::RGB24,
        frame.width(),
        frame.height(),
    )?;
    let rgb_frame = converter.run(&frame)?;
    still::write_jpeg(&rgb_frame, &base_output)?;

    let set = ThumbnailSet {
        small: sibling_with_suffix(&base_output, SizePreset::Small.label()),
        medium: sibling_with_suffix(&base_output, SizePreset::Medium.label()),
        large: sibling_with_suffix(&base_output, SizePreset::Large.label()),
        base: base_output,
    };

    resize::resize_video_frame(&set.base, &set.small, SizePreset::Small)?;
    resize::resize_video_frame(&set.base, &set.medium, SizePreset::Medium)?;
    resize::resize_video_frame(&set.base, &set.large, SizePreset::Large)?;

    log::info!(
        "Extracted thumbnail set from {} (base {})",
        input.display(),
        set.base.display(),
    );

    Ok(set)
}

/// `thumb.jpg` → `thumb_small.jpg`, next to the original.
fn sibling_with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(OsStr::to_str)
        .unwrap_or("thumbnail");
    let extension = path.extension().and_then(OsStr::to_str).unwrap_or("jpg");
    path.with_file_name(format!("{stem}_{suffix}.{extension}"))
}
