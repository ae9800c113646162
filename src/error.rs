//! Error types for the `stillcut` crate.
//!
//! This module defines [`StillcutError`], the unified error type returned by
//! all fallible operations in the crate. Variants map onto the stages of the
//! pipeline: configuration, source, decode, scale, encode, and sink.

use std::{io::Error as IoError, path::PathBuf};

use ffmpeg_next::Error as FfmpegError;
use thiserror::Error;

/// The unified error type for all `stillcut` operations.
///
/// Every public method that can fail returns `Result<T, StillcutError>`.
/// Variants carry enough context to diagnose the problem without needing
/// additional logging at the call site.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StillcutError {
    /// The media file could not be opened or parsed.
    #[error("Failed to open media file at {path}: {reason}")]
    FileOpen {
        /// Path that was passed to the pipeline.
        path: PathBuf,
        /// Underlying reason the open failed.
        reason: String,
    },

    /// The file does not contain a video stream.
    #[error("No video stream found in file")]
    NoVideoStream,

    /// A caller-supplied target size is unusable (e.g. a zero dimension).
    #[error("Invalid target size: {0}")]
    InvalidTargetSize(String),

    /// The source width is zero, so no aspect ratio can be derived.
    #[error("Aspect ratio is undefined: source width is zero")]
    ZeroWidthSource,

    /// The decoder could not be constructed, fed, or drained.
    ///
    /// The expected per-packet "no frame yet" signal is recovered internally
    /// and never surfaces through this variant.
    #[error("Failed to decode video frame: {0}")]
    Decode(String),

    /// The stream ended before a single video frame could be decoded.
    #[error("No video frame could be decoded before end of stream")]
    NoFrameDecoded,

    /// A scaling context could not be built for the requested conversion.
    #[error("Failed to build scaling context: {0}")]
    Scale(String),

    /// Still-image encoding failed.
    #[error("Failed to encode still image: {0}")]
    Encode(String),

    /// The output container could not be created or written.
    #[error("Failed to write output container: {0}")]
    Sink(String),

    /// An I/O error occurred while reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// An error from the FFmpeg libraries that escaped targeted mapping.
    #[error("FFmpeg error: {0}")]
    Ffmpeg(String),
}

impl From<FfmpegError> for StillcutError {
    fn from(error: FfmpegError) -> Self {
        StillcutError::Ffmpeg(error.to_string())
    }
}
