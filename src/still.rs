//! Still-image (JPEG) encoding.
//!
//! Encodes one RGB frame as a single JPEG via FFmpeg's MJPEG encoder. The
//! encoder wants planar 4:2:0 input, so the frame passes through a pure
//! format conversion first; dimensions never change here.

use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use ffmpeg_next::{
    Packet, Rational,
    codec::{Id, context::Context as CodecContext},
    format::Pixel,
    frame::Video as VideoFrame,
};

use crate::{error::StillcutError, scale::Scaler};

/// Encode an RGB24 frame as a JPEG file at its own resolution.
///
/// The compressed bytes are staged into a sibling `.tmp` file and renamed
/// over `path` once fully written, so a failed write never leaves a partial
/// image at the destination.
///
/// # Errors
///
/// [`StillcutError::Scale`] if the RGB→YUV conversion cannot be set up,
/// [`StillcutError::Encode`] if the MJPEG encoder is unavailable or
/// produces no packet, [`StillcutError::Io`] if the file cannot be written.
pub(crate) fn write_jpeg(rgb_frame: &VideoFrame, path: &Path) -> Result<(), StillcutError> {
    let width = rgb_frame.width();
    let height = rgb_frame.height();

    // Format conversion only: dimensions are unchanged.
    let mut converter = Scaler::new(
        Pixel::RGB24,
        width,
        height,
        Pixel::YUVJ420P,
        width,
        height,
    )?;
    let mut yuv_frame = converter.run(rgb_frame)?;
    yuv_frame.set_pts(Some(0));

    let codec = ffmpeg_next::encoder::find(Id::MJPEG)
        .ok_or_else(|| StillcutError::Encode("MJPEG encoder not available".to_string()))?;

    let mut encoder = CodecContext::new_with_codec(codec)
        .encoder()
        .video()
        .map_err(|error| {
            StillcutError::Encode(format!("cannot create encoder context: {error}"))
        })?;

    encoder.set_width(width);
    encoder.set_height(height);
    encoder.set_format(Pixel::YUVJ420P);
    // The encoder requires a time base even for a single image.
    encoder.set_time_base(Rational::new(1, 25));

    let mut encoder = encoder
        .open_as(codec)
        .map_err(|error| StillcutError::Encode(format!("cannot open MJPEG encoder: {error}")))?;

    encoder
        .send_frame(&yuv_frame)
        .map_err(|error| StillcutError::Encode(format!("send_frame: {error}")))?;
    encoder
        .send_eof()
        .map_err(|error| StillcutError::Encode(format!("send_eof: {error}")))?;

    let mut packet = Packet::empty();
    encoder
        .receive_packet(&mut packet)
        .map_err(|error| StillcutError::Encode(format!("encoder produced no packet: {error}")))?;

    let data = packet
        .data()
        .ok_or_else(|| StillcutError::Encode("encoder produced an empty packet".to_string()))?;

    let staging_path = staging_sibling(path);
    if let Err(error) = fs::write(&staging_path, data) {
        let _ = fs::remove_file(&staging_path);
        return Err(error.into());
    }
    fs::rename(&staging_path, path)?;

    log::debug!(
        "Wrote {}x{} JPEG ({} bytes) to {}",
        width,
        height,
        data.len(),
        path.display(),
    );

    Ok(())
}

/// `thumb.jpg` → `thumb.jpg.tmp`, in the same directory.
fn staging_sibling(path: &Path) -> PathBuf {
    let mut file_name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("still"));
    file_name.push(".tmp");
    path.with_file_name(file_name)
}
