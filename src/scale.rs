//! Pixel-format and resolution conversion.
//!
//! A thin wrapper around FFmpeg's software scaler. All conversions in the
//! crate use bilinear resampling; pure format conversions pass identical
//! source and destination geometry.

use ffmpeg_next::{
    format::Pixel,
    frame::Video as VideoFrame,
    software::scaling::{Context as ScalingContext, Flags as ScalingFlags},
};

use crate::error::StillcutError;

/// Bilinear converter between two (resolution, pixel format) pairs.
///
/// The underlying `SwsContext` is released when the value is dropped.
pub(crate) struct Scaler {
    context: ScalingContext,
}

impl Scaler {
    /// Build a scaler for the given conversion.
    ///
    /// # Errors
    ///
    /// Returns [`StillcutError::Scale`] when FFmpeg cannot construct a
    /// context for the format/size combination.
    pub(crate) fn new(
        source_format: Pixel,
        source_width: u32,
        source_height: u32,
        target_format: Pixel,
        target_width: u32,
        target_height: u32,
    ) -> Result<Self, StillcutError> {
        let context = ScalingContext::get(
            source_format,
            source_width,
            source_height,
            target_format,
            target_width,
            target_height,
            ScalingFlags::BILINEAR,
        )
        .map_err(|error| {
            StillcutError::Scale(format!(
                "{source_width}x{source_height} {source_format:?} -> \
                 {target_width}x{target_height} {target_format:?}: {error}"
            ))
        })?;

        Ok(Self { context })
    }

    /// Convert `source` into a freshly-allocated destination frame.
    pub(crate) fn run(&mut self, source: &VideoFrame) -> Result<VideoFrame, StillcutError> {
        let mut destination = VideoFrame::empty();
        self.context
            .run(source, &mut destination)
            .map_err(|error| StillcutError::Scale(error.to_string()))?;
        Ok(destination)
    }
}
