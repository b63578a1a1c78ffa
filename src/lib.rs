//! # zenpnm-export
//!
//! Write raw pixel buffers as PGM/PPM files that any image editor can open.
//!
//! ## Supported Output
//!
//! - **P5** / **P2** (PGM binary / plain) — from gray or gray+alpha input
//! - **P6** / **P3** (PPM binary / plain) — from RGB or RGBA input
//! - 8-bit (maxval 255) and 16-bit (maxval 65535) samples
//!
//! Input is a tightly packed, row-major byte buffer. 16-bit samples are
//! big-endian, which is also what Netpbm stores, so binary output of
//! alpha-free images is a straight copy. Alpha is dropped on export.
//!
//! The buffer length must be exactly
//! `height * width * channels * bytes_per_sample`; anything else is a
//! [`PnmError::ShapeMismatch`].
//!
//! ## Non-Goals
//!
//! - Decoding pixel data (only headers can be parsed, see [`ImageInfo`])
//! - Color conversion, compression, PAM/PFM/PBM
//!
//! ## Usage
//!
//! ```no_run
//! use zenpnm_export::{ChannelSize, ColorType, export_ascii, export_binary};
//!
//! let rgba = [10u8, 20, 30, 255];
//! let path = export_binary("frame", &rgba, 1, 1, ColorType::Rgba, ChannelSize::Eight)?;
//! assert_eq!(path.to_str(), Some("frame.ppm"));
//!
//! let gray16 = [0x00u8, 0xFF, 0x12, 0x34];
//! export_ascii("depth", &gray16, 2, 1, ColorType::Gray, ChannelSize::Sixteen)?;
//! # Ok::<(), zenpnm_export::PnmError>(())
//! ```

#![forbid(unsafe_code)]

mod encode;
mod error;
mod header;
mod info;
mod limits;
mod pixel;
mod pnm;
mod sink;

use std::path::{Path, PathBuf};

// Re-exports
pub use encode::EncodeRequest;
pub use enough::{Stop, Unstoppable};
pub use error::PnmError;
pub use header::{Encoding, Header, NetpbmFormat};
pub use info::ImageInfo;
pub use limits::Limits;
pub use pixel::{ChannelSize, ColorType};

/// Write `<name>.pgm` or `<name>.ppm` in binary (`P5`/`P6`) encoding.
///
/// Returns the path of the file written.
pub fn export_binary(
    name: impl AsRef<Path>,
    pixels: &[u8],
    width: u32,
    height: u32,
    color: ColorType,
    size: ChannelSize,
) -> Result<PathBuf, PnmError> {
    EncodeRequest::binary().export(name, pixels, width, height, color, size, Unstoppable)
}

/// Write `<name>.pgm` or `<name>.ppm` in plain-text (`P2`/`P3`) encoding.
///
/// Returns the path of the file written.
pub fn export_ascii(
    name: impl AsRef<Path>,
    pixels: &[u8],
    width: u32,
    height: u32,
    color: ColorType,
    size: ChannelSize,
) -> Result<PathBuf, PnmError> {
    EncodeRequest::ascii().export(name, pixels, width, height, color, size, Unstoppable)
}

/// Encode to binary PGM/PPM in memory.
pub fn encode_binary(
    pixels: &[u8],
    width: u32,
    height: u32,
    color: ColorType,
    size: ChannelSize,
    stop: impl Stop,
) -> Result<Vec<u8>, PnmError> {
    EncodeRequest::binary().encode(pixels, width, height, color, size, stop)
}

/// Encode to plain-text PGM/PPM in memory.
pub fn encode_ascii(
    pixels: &[u8],
    width: u32,
    height: u32,
    color: ColorType,
    size: ChannelSize,
    stop: impl Stop,
) -> Result<Vec<u8>, PnmError> {
    EncodeRequest::ascii().encode(pixels, width, height, color, size, stop)
}
