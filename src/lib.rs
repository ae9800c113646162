//! # stillcut
//!
//! Cut stills from media files — extract a representative frame, resize it
//! to preset widths while preserving aspect ratio, and rewrap video
//! containers without re-encoding, powered by FFmpeg via the
//! [`ffmpeg-next`](https://crates.io/crates/ffmpeg-next) crate.
//!
//! ## Quick Start
//!
//! ### Resize the first frame of a video
//!
//! ```no_run
//! use stillcut::{SizePreset, resize_video_frame};
//!
//! resize_video_frame("input.mp4", "small.jpg", SizePreset::Small).unwrap();
//! ```
//!
//! ### Convert a container and extract thumbnails
//!
//! ```no_run
//! use stillcut::{Remuxer, extract_thumbnails};
//!
//! Remuxer::new("movie.webm", "movie.mp4").unwrap().run().unwrap();
//! let set = extract_thumbnails("movie.webm", "thumbnail.jpg").unwrap();
//! assert!(set.small.ends_with("thumbnail_small.jpg"));
//! ```
//!
//! ### Probe dimensions without decoding
//!
//! ```no_run
//! use stillcut::probe_dimensions;
//!
//! let dimensions = probe_dimensions("input.mp4").unwrap();
//! println!("{}x{}", dimensions.width, dimensions.height);
//! ```
//!
//! ## Pipeline model
//!
//! Every operation composes the same small set of stages: open a container
//! and select its first video stream ([`MediaSource`]), decode the first
//! available frame, convert resolution/pixel format with FFmpeg's bilinear
//! software scaler, and encode exactly one JPEG. Each stage's native handle
//! is an owning wrapper released on drop, so a failure at any step unwinds
//! cleanly without leaking demuxers, codec contexts, or frame buffers.
//!
//! ## Size presets
//!
//! | Preset | Width | Height |
//! |--------|-------|--------|
//! | [`SizePreset::Small`] | 250 px | derived from aspect ratio |
//! | [`SizePreset::Medium`] | 350 px | derived from aspect ratio |
//! | [`SizePreset::Large`] | 650 px | derived from aspect ratio |
//! | [`SizePreset::Custom`] | caller-supplied | caller-supplied |
//!
//! ## Requirements
//!
//! FFmpeg development libraries must be installed on your system.

mod decode;
pub mod error;
pub mod ffmpeg;
pub mod probe;
pub mod remux;
pub mod resize;
mod scale;
pub mod source;
mod still;
pub mod thumbnail;

pub use error::StillcutError;
pub use ffmpeg::{FfmpegLogLevel, get_ffmpeg_log_level, set_ffmpeg_log_level};
pub use probe::{Dimensions, probe_dimensions, probe_duration};
pub use remux::{RemuxReport, Remuxer};
pub use resize::{
    LARGE_WIDTH, MEDIUM_WIDTH, SMALL_WIDTH, SizePreset, resize_video_frame,
    resize_video_frame_to, scaled_height,
};
pub use source::MediaSource;
pub use thumbnail::{ThumbnailSet, extract_thumbnails};
