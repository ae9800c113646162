//! Opened media source with video stream selection.
//!
//! [`MediaSource`] is the shared front end of every pipeline in the crate:
//! it opens a container, locates the first video stream, and hands out a
//! decoder bound to that stream. The demuxer is released when the value is
//! dropped, on every exit path.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use ffmpeg_next::{
    codec::context::Context as CodecContext,
    decoder,
    format::{self, context::Input},
    media::Type,
};

use crate::{error::StillcutError, probe::Dimensions};

/// An opened, readable media container bound to its first video stream.
///
/// Each pipeline invocation owns its own `MediaSource`; sources are never
/// shared or reused across pipelines.
///
/// # Example
///
/// ```no_run
/// use stillcut::MediaSource;
///
/// let source = MediaSource::open("input.mp4")?;
/// let dimensions = source.dimensions()?;
/// println!("{}x{}", dimensions.width, dimensions.height);
/// # Ok::<(), stillcut::StillcutError>(())
/// ```
pub struct MediaSource {
    /// The opened FFmpeg input (demuxer) context.
    pub(crate) input: Input,
    /// Index of the selected video stream.
    pub(crate) video_stream_index: usize,
    /// Path to the opened media file (kept for error messages).
    pub(crate) path: PathBuf,
}

impl MediaSource {
    /// Open a media file and locate its first video stream.
    ///
    /// Initializes FFmpeg (idempotent), opens the container, and scans the
    /// streams in container order for the first video-typed stream.
    ///
    /// # Errors
    ///
    /// Returns [`StillcutError::FileOpen`] if the file cannot be opened or
    /// parsed, and [`StillcutError::NoVideoStream`] if no stream in the
    /// container carries video.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StillcutError> {
        let path = path.as_ref();
        let owned_path = path.to_path_buf();

        // Initialise ffmpeg (safe to call multiple times).
        ffmpeg_next::init().map_err(|error| StillcutError::FileOpen {
            path: owned_path.clone(),
            reason: format!("FFmpeg initialisation failed: {error}"),
        })?;

        let input = format::input(&path).map_err(|error| StillcutError::FileOpen {
            path: owned_path.clone(),
            reason: error.to_string(),
        })?;

        // First video stream in container order, not FFmpeg's "best" pick.
        let video_stream_index = input
            .streams()
            .find(|stream| stream.parameters().medium() == Type::Video)
            .map(|stream| stream.index())
            .ok_or(StillcutError::NoVideoStream)?;

        log::debug!(
            "Opened {} (format={}, video stream #{})",
            owned_path.display(),
            input.format().name(),
            video_stream_index,
        );

        Ok(Self {
            input,
            video_stream_index,
            path: owned_path,
        })
    }

    /// Path this source was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Index of the selected video stream within the container.
    pub fn video_stream_index(&self) -> usize {
        self.video_stream_index
    }

    /// Container duration, when the demuxer knows it.
    pub fn duration(&self) -> Option<Duration> {
        let microseconds = self.input.duration();
        (microseconds > 0).then(|| Duration::from_micros(microseconds as u64))
    }

    /// Native dimensions of the selected video stream.
    ///
    /// Read from the stream's codec parameters; no frame is decoded.
    pub fn dimensions(&self) -> Result<Dimensions, StillcutError> {
        let decoder = self.video_decoder()?;
        Ok(Dimensions {
            width: decoder.width(),
            height: decoder.height(),
        })
    }

    /// Construct and open a decoder bound to the selected video stream.
    ///
    /// # Errors
    ///
    /// Returns [`StillcutError::Decode`] if the stream's codec parameters
    /// cannot be applied or no decoder exists for its codec.
    pub fn video_decoder(&self) -> Result<decoder::Video, StillcutError> {
        let stream = self
            .input
            .stream(self.video_stream_index)
            .ok_or(StillcutError::NoVideoStream)?;

        let decoder_context =
            CodecContext::from_parameters(stream.parameters()).map_err(|error| {
                StillcutError::Decode(format!(
                    "codec parameters for stream {}: {error}",
                    self.video_stream_index,
                ))
            })?;

        decoder_context.decoder().video().map_err(|error| {
            StillcutError::Decode(format!(
                "no usable decoder for stream {}: {error}",
                self.video_stream_index,
            ))
        })
    }
}
