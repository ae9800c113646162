//! Packet-to-frame decoding.
//!
//! FFmpeg's send-packet/receive-frame model means a packet may yield zero
//! or one frames: the decoder can legitimately answer "feed me more input"
//! without anything being wrong. [`DecodePoll`] keeps that non-terminal
//! signal apart from genuine decode failures, which always propagate as
//! [`StillcutError::Decode`].

use ffmpeg_next::{
    Error as FfmpegError, decoder, frame::Video as VideoFrame, util::error::EAGAIN,
};

use crate::{error::StillcutError, source::MediaSource};

/// Outcome of polling the decoder for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DecodePoll {
    /// A complete frame was written into the caller's buffer.
    Frame,
    /// The decoder needs more packets before it can produce a frame.
    NeedsMoreInput,
    /// The decoder has been fully drained (end of stream).
    Drained,
}

/// Poll the decoder for the next frame.
///
/// EAGAIN and EOF are expected states, not errors; anything else is fatal.
pub(crate) fn poll_frame(
    decoder: &mut decoder::Video,
    frame: &mut VideoFrame,
) -> Result<DecodePoll, StillcutError> {
    match decoder.receive_frame(frame) {
        Ok(()) => Ok(DecodePoll::Frame),
        Err(FfmpegError::Other { errno: EAGAIN }) => Ok(DecodePoll::NeedsMoreInput),
        Err(FfmpegError::Eof) => Ok(DecodePoll::Drained),
        Err(error) => Err(StillcutError::Decode(format!("receive_frame: {error}"))),
    }
}

/// Decode the first available frame of the source's video stream.
///
/// Reads packets from the demuxer's current position, skipping packets that
/// belong to other streams and packets that yield no frame yet. When the
/// packet supply runs out the decoder is flushed, so codecs that buffer
/// frames (B-frame reordering) still surface their first picture.
///
/// # Errors
///
/// [`StillcutError::Decode`] on send/receive failures,
/// [`StillcutError::NoFrameDecoded`] if the stream ends without producing a
/// single frame.
pub(crate) fn first_frame(
    source: &mut MediaSource,
    decoder: &mut decoder::Video,
) -> Result<VideoFrame, StillcutError> {
    let stream_index = source.video_stream_index;
    let mut frame = VideoFrame::empty();

    for (stream, packet) in source.input.packets() {
        if stream.index() != stream_index {
            continue;
        }

        decoder
            .send_packet(&packet)
            .map_err(|error| StillcutError::Decode(format!("send_packet: {error}")))?;

        match poll_frame(decoder, &mut frame)? {
            DecodePoll::Frame => return Ok(frame),
            DecodePoll::NeedsMoreInput | DecodePoll::Drained => continue,
        }
    }

    // End of stream: flush buffered frames out of the decoder.
    decoder
        .send_eof()
        .map_err(|error| StillcutError::Decode(format!("send_eof: {error}")))?;

    match poll_frame(decoder, &mut frame)? {
        DecodePoll::Frame => Ok(frame),
        DecodePoll::NeedsMoreInput | DecodePoll::Drained => Err(StillcutError::NoFrameDecoded),
    }
}
