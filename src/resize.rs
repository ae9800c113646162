//! Still-image resize pipeline.
//!
//! Decodes the first video frame of a media file, scales it to a target
//! size, and writes it out as a JPEG. Targets are either one of three fixed
//! preset widths (height derived from the source aspect ratio) or explicit
//! caller-supplied dimensions.

use std::path::Path;

use ffmpeg_next::format::Pixel;

use crate::{
    decode,
    error::StillcutError,
    probe::{self, Dimensions},
    scale::Scaler,
    source::MediaSource,
    still,
};

/// Target width of [`SizePreset::Small`], in pixels.
pub const SMALL_WIDTH: u32 = 250;
/// Target width of [`SizePreset::Medium`], in pixels.
pub const MEDIUM_WIDTH: u32 = 350;
/// Target width of [`SizePreset::Large`], in pixels.
pub const LARGE_WIDTH: u32 = 650;

/// Target size selector for the resize pipeline.
///
/// The three named presets fix the width and derive the height from the
/// source's aspect ratio; [`Custom`](SizePreset::Custom) takes both
/// dimensions as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizePreset {
    /// 250 px wide, height preserves the source aspect ratio.
    Small,
    /// 350 px wide, height preserves the source aspect ratio.
    Medium,
    /// 650 px wide, height preserves the source aspect ratio.
    Large,
    /// Exact caller-supplied dimensions. Both must be non-zero.
    Custom {
        /// Target width in pixels.
        width: u32,
        /// Target height in pixels.
        height: u32,
    },
}

impl SizePreset {
    /// Fixed width of a named preset, or `None` for `Custom`.
    pub fn preset_width(self) -> Option<u32> {
        match self {
            SizePreset::Small => Some(SMALL_WIDTH),
            SizePreset::Medium => Some(MEDIUM_WIDTH),
            SizePreset::Large => Some(LARGE_WIDTH),
            SizePreset::Custom { .. } => None,
        }
    }

    /// Suffix used when deriving sibling output file names.
    pub fn label(self) -> &'static str {
        match self {
            SizePreset::Small => "small",
            SizePreset::Medium => "medium",
            SizePreset::Large => "large",
            SizePreset::Custom { .. } => "custom",
        }
    }
}

/// Compute the height that preserves the source aspect ratio at
/// `target_width`.
///
/// Evaluates `round(original_height * target_width / original_width)` with
/// `f64` intermediates; ties round away from zero (`f64::round`).
///
/// # Errors
///
/// Returns [`StillcutError::ZeroWidthSource`] when `original_width` is zero:
/// the ratio is undefined and the caller's configuration is broken.
///
/// # Example
///
/// ```
/// use stillcut::scaled_height;
///
/// assert_eq!(scaled_height(250, 650, 488)?, 188);
/// # Ok::<(), stillcut::StillcutError>(())
/// ```
pub fn scaled_height(
    target_width: u32,
    original_width: u32,
    original_height: u32,
) -> Result<u32, StillcutError> {
    if original_width == 0 {
        return Err(StillcutError::ZeroWidthSource);
    }

    let height =
        (f64::from(original_height) * f64::from(target_width) / f64::from(original_width)).round();
    Ok(height as u32)
}

/// Resolve a preset against the source file's native dimensions.
fn resolve_target(input: &Path, preset: SizePreset) -> Result<Dimensions, StillcutError> {
    let target_width = match preset {
        SizePreset::Small => SMALL_WIDTH,
        SizePreset::Medium => MEDIUM_WIDTH,
        SizePreset::Large => LARGE_WIDTH,
        SizePreset::Custom { width, height } => {
            if width == 0 || height == 0 {
                return Err(StillcutError::InvalidTargetSize(format!(
                    "{width}x{height} (both dimensions must be non-zero)"
                )));
            }
            return Ok(Dimensions { width, height });
        }
    };

    let original = probe::probe_dimensions(input)?;
    let height = scaled_height(target_width, original.width, original.height)?;
    Ok(Dimensions {
        width: target_width,
        height,
    })
}

/// Resize the first video frame of `input` into a JPEG at `output`.
///
/// For the named presets the source is probed first and the target height
/// derived via [`scaled_height`]; probing failures abort before any decoder
/// is built. Returns the dimensions of the written image.
///
/// All native handles acquired along the way (demuxer, decoder, scaler,
/// frames, encoder) are released when this function returns, whether it
/// succeeds or fails.
///
/// # Errors
///
/// - [`StillcutError::FileOpen`] — input unreadable.
/// - [`StillcutError::NoVideoStream`] — no video stream present.
/// - [`StillcutError::Decode`] — decoder unavailable or failed.
/// - [`StillcutError::Scale`] — scaler construction failed.
/// - [`StillcutError::NoFrameDecoded`] — stream ended without a frame.
/// - [`StillcutError::Encode`] / [`StillcutError::Io`] — output unwritable.
///
/// # Example
///
/// ```no_run
/// use stillcut::{SizePreset, resize_video_frame};
///
/// let written = resize_video_frame("input.mp4", "small.jpg", SizePreset::Small)?;
/// println!("wrote {}x{}", written.width, written.height);
/// # Ok::<(), stillcut::StillcutError>(())
/// ```
pub fn resize_video_frame<P1: AsRef<Path>, P2: AsRef<Path>>(
    input: P1,
    output: P2,
    preset: SizePreset,
) -> Result<Dimensions, StillcutError> {
    let input = input.as_ref();
    let output = output.as_ref();

    let target = resolve_target(input, preset)?;

    log::debug!(
        "Resizing {} -> {} at {}x{}",
        input.display(),
        output.display(),
        target.width,
        target.height,
    );

    let mut source = MediaSource::open(input)?;
    let mut decoder = source.video_decoder()?;

    let mut scaler = Scaler::new(
        decoder.format(),
        decoder.width(),
        decoder.height(),
        Pixel::RGB24,
        target.width,
        target.height,
    )?;

    let frame = decode::first_frame(&mut source, &mut decoder)?;
    let rgb_frame = scaler.run(&frame)?;
    still::write_jpeg(&rgb_frame, output)?;

    log::info!(
        "Wrote {}x{} still image to {}",
        target.width,
        target.height,
        output.display(),
    );

    Ok(target)
}

/// Explicit-geometry form of [`resize_video_frame`].
///
/// Equivalent to passing [`SizePreset::Custom`]; no probing occurs.
pub fn resize_video_frame_to<P1: AsRef<Path>, P2: AsRef<Path>>(
    input: P1,
    output: P2,
    width: u32,
    height: u32,
) -> Result<Dimensions, StillcutError> {
    resize_video_frame(input, output, SizePreset::Custom { width, height })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_widths() {
        assert_eq!(SizePreset::Small.preset_width(), Some(250));
        assert_eq!(SizePreset::Medium.preset_width(), Some(350));
        assert_eq!(SizePreset::Large.preset_width(), Some(650));
        assert_eq!(
            SizePreset::Custom {
                width: 10,
                height: 10
            }
            .preset_width(),
            None,
        );
    }

    #[test]
    fn custom_size_must_be_non_zero() {
        let result = resolve_target(
            std::path::Path::new("unused.mp4"),
            SizePreset::Custom {
                width: 0,
                height: 10,
            },
        );
        assert!(matches!(result, Err(StillcutError::InvalidTargetSize(_))));
    }
}
