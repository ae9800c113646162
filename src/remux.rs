//! Container format conversion (remuxing).
//!
//! This module provides [`Remuxer`] for rewrapping a media file's video
//! streams into a different container format without re-encoding. This is
//! equivalent to `ffmpeg -i input.webm -c:v copy -an output.mp4`.
//!
//! # Example
//!
//! ```no_run
//! use stillcut::Remuxer;
//!
//! // Rewrap WebM video into MP4 without re-encoding.
//! Remuxer::new("input.webm", "output.mp4")?.run()?;
//! # Ok::<(), stillcut::StillcutError>(())
//! ```

use std::path::{Path, PathBuf};

use ffmpeg_next::{codec::Id, media::Type};

use crate::error::StillcutError;

/// Lossless container converter for video streams.
///
/// Copies every video stream's codec parameters and packets from the input
/// into a new output container. Audio and subtitle streams are not carried
/// over. The output format is inferred from the output file extension
/// unless forced via [`with_format`](Remuxer::with_format).
///
/// # Limitations
///
/// Remux only: codec/container compatibility is not validated upfront. A
/// codec the target container cannot carry surfaces as a
/// [`StillcutError::Sink`] from the header or packet write, never as a
/// silently corrupt file.
pub struct Remuxer {
    input_path: PathBuf,
    output_path: PathBuf,
    output_format: Option<String>,
}

/// Summary of a completed remux.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemuxReport {
    /// Number of video streams mapped into the output.
    pub streams_mapped: usize,
    /// Number of packets written to the output.
    pub packets_written: u64,
}

impl Remuxer {
    /// Create a new remuxer from an input to an output file.
    ///
    /// # Errors
    ///
    /// Returns [`StillcutError::FileOpen`] if the input does not exist or
    /// FFmpeg cannot be initialised.
    pub fn new<P1: AsRef<Path>, P2: AsRef<Path>>(
        input: P1,
        output: P2,
    ) -> Result<Self, StillcutError> {
        let input_path = input.as_ref().to_path_buf();
        let output_path = output.as_ref().to_path_buf();

        ffmpeg_next::init().map_err(|error| StillcutError::FileOpen {
            path: input_path.clone(),
            reason: format!("FFmpeg initialisation failed: {error}"),
        })?;

        if !input_path.exists() {
            return Err(StillcutError::FileOpen {
                path: input_path,
                reason: "File does not exist".to_string(),
            });
        }

        Ok(Self {
            input_path,
            output_path,
            output_format: None,
        })
    }

    /// Force the output container format by name (e.g. `"mp4"`, `"matroska"`)
    /// instead of inferring it from the output file extension.
    #[must_use]
    pub fn with_format<S: Into<String>>(mut self, format: S) -> Self {
        self.output_format = Some(format.into());
        self
    }

    /// Execute the remuxing operation.
    ///
    /// Maps every video stream of the input to an output stream with
    /// verbatim codec parameters, then copies packets with timestamps
    /// rescaled into the output stream's time base, interleaved for correct
    /// ordering. A packet that fails to write aborts the remux — dropping
    /// packets would produce a corrupt output.
    ///
    /// # Errors
    ///
    /// [`StillcutError::FileOpen`] if the input cannot be opened,
    /// [`StillcutError::NoVideoStream`] if nothing can be mapped, and
    /// [`StillcutError::Sink`] for output-side failures (context creation,
    /// header, packet, trailer).
    pub fn run(&self) -> Result<RemuxReport, StillcutError> {
        let mut input =
            ffmpeg_next::format::input(&self.input_path).map_err(|error| {
                StillcutError::FileOpen {
                    path: self.input_path.clone(),
                    reason: error.to_string(),
                }
            })?;

        let mut output = match &self.output_format {
            Some(format) => ffmpeg_next::format::output_as(&self.output_path, format),
            None => ffmpeg_next::format::output(&self.output_path),
        }
        .map_err(|error| {
            StillcutError::Sink(format!(
                "cannot create output {}: {error}",
                self.output_path.display(),
            ))
        })?;

        log::debug!(
            "Remuxing {} -> {} (format={})",
            self.input_path.display(),
            self.output_path.display(),
            output.format().name(),
        );

        // Build stream mapping: input stream index → output stream index.
        // Non-video streams get None.
        let mut stream_map: Vec<Option<usize>> = Vec::new();
        let mut streams_mapped: usize = 0;

        for stream in input.streams() {
            if stream.parameters().medium() != Type::Video {
                stream_map.push(None);
                continue;
            }

            let mut output_stream = output
                .add_stream(ffmpeg_next::encoder::find(Id::None))
                .map_err(|error| {
                    StillcutError::Sink(format!("cannot add output stream: {error}"))
                })?;
            output_stream.set_parameters(stream.parameters());
            // Clear the container-specific codec tag so the target muxer
            // picks its own.
            unsafe {
                (*output_stream.parameters().as_mut_ptr()).codec_tag = 0;
            }

            stream_map.push(Some(streams_mapped));
            streams_mapped += 1;
        }

        if streams_mapped == 0 {
            return Err(StillcutError::NoVideoStream);
        }

        output
            .write_header()
            .map_err(|error| StillcutError::Sink(format!("cannot write header: {error}")))?;

        // Copy packets, remapping stream indices and time bases.
        let mut packets_written: u64 = 0;
        for (stream, mut packet) in input.packets() {
            let Some(output_index) = stream_map.get(stream.index()).copied().flatten() else {
                continue;
            };

            let input_time_base = stream.time_base();
            let output_time_base = output
                .stream(output_index)
                .ok_or_else(|| {
                    StillcutError::Sink(format!("output stream {output_index} vanished"))
                })?
                .time_base();

            packet.set_stream(output_index);
            packet.rescale_ts(input_time_base, output_time_base);
            packet.set_position(-1);
            packet
                .write_interleaved(&mut output)
                .map_err(|error| StillcutError::Sink(format!("packet write failed: {error}")))?;
            packets_written += 1;
        }

        output
            .write_trailer()
            .map_err(|error| StillcutError::Sink(format!("cannot write trailer: {error}")))?;

        log::info!(
            "Remuxed {} video stream(s), {} packet(s) to {}",
            streams_mapped,
            packets_written,
            self.output_path.display(),
        );

        Ok(RemuxReport {
            streams_mapped,
            packets_written,
        })
    }
}
