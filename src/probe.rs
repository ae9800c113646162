//! Lightweight media probing.
//!
//! Probing opens a container, reads what it needs from the stream
//! parameters, and closes the container again. No decoding takes place, so
//! probing many files is cheap.

use std::{path::Path, time::Duration};

use crate::{error::StillcutError, source::MediaSource};

/// Pixel dimensions of a video stream or output image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Probe the native dimensions of the first video stream in a file.
///
/// The container is opened read-only and released before this function
/// returns, on every path.
///
/// # Errors
///
/// Returns [`StillcutError::FileOpen`] if the file cannot be opened and
/// [`StillcutError::NoVideoStream`] if it carries no video stream.
///
/// # Example
///
/// ```no_run
/// use stillcut::probe_dimensions;
///
/// let dimensions = probe_dimensions("input.mp4")?;
/// println!("{}x{}", dimensions.width, dimensions.height);
/// # Ok::<(), stillcut::StillcutError>(())
/// ```
pub fn probe_dimensions<P: AsRef<Path>>(path: P) -> Result<Dimensions, StillcutError> {
    let source = MediaSource::open(path)?;
    source.dimensions()
    // `source` drops here, closing the container.
}

/// Probe the container duration of a media file.
///
/// Returns `None` when the container does not report a (positive) duration,
/// e.g. for raw elementary streams.
///
/// # Errors
///
/// Same as [`probe_dimensions`].
pub fn probe_duration<P: AsRef<Path>>(path: P) -> Result<Option<Duration>, StillcutError> {
    let source = MediaSource::open(path)?;
    Ok(source.duration())
}
