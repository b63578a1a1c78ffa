//! Netpbm header builder: extension, magic number and maxval.

use std::io::{self, Write};

use crate::pixel::{ChannelSize, ColorType};

/// Sample encoding of the pixel data section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Packed raw samples (`P5`/`P6`).
    Binary,
    /// Whitespace-separated decimal samples (`P2`/`P3`).
    Ascii,
}

/// Which Netpbm file type is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NetpbmFormat {
    /// Portable Gray Map.
    Pgm,
    /// Portable Pixel Map.
    Ppm,
}

impl NetpbmFormat {
    /// PPM for RGB/RGBA input, PGM for gray/gray+alpha.
    pub fn for_color(color: ColorType) -> Self {
        if color.is_color() {
            Self::Ppm
        } else {
            Self::Pgm
        }
    }

    /// File extension, without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Pgm => "pgm",
            Self::Ppm => "ppm",
        }
    }

    /// Two-byte magic number, e.g. `P5` for binary PGM.
    pub fn magic(self, encoding: Encoding) -> &'static str {
        match (self, encoding) {
            (Self::Pgm, Encoding::Binary) => "P5",
            (Self::Ppm, Encoding::Binary) => "P6",
            (Self::Pgm, Encoding::Ascii) => "P2",
            (Self::Ppm, Encoding::Ascii) => "P3",
        }
    }

    /// Channels per pixel stored in the file.
    pub fn channels(self) -> usize {
        match self {
            Self::Pgm => 1,
            Self::Ppm => 3,
        }
    }
}

/// The three-line header `"<magic>\n<width> <height>\n<maxval>\n"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    pub encoding: Encoding,
    pub format: NetpbmFormat,
    pub width: u32,
    pub height: u32,
    pub maxval: u16,
}

impl Header {
    /// Header for a `width`×`height` image; maxval follows the sample size.
    pub fn new(
        encoding: Encoding,
        color: ColorType,
        size: ChannelSize,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            encoding,
            format: NetpbmFormat::for_color(color),
            width,
            height,
            maxval: size.maxval(),
        }
    }

    /// Magic number for this format and encoding.
    pub fn magic(&self) -> &'static str {
        self.format.magic(self.encoding)
    }

    /// File extension, without the leading dot.
    pub fn extension(&self) -> &'static str {
        self.format.extension()
    }

    /// Exact length of the serialized header in bytes.
    pub fn encoded_len(&self) -> usize {
        // magic + three separators/terminators after the numbers + one after magic
        self.magic().len()
            + 4
            + decimal_len(self.width)
            + decimal_len(self.height)
            + decimal_len(u32::from(self.maxval))
    }

    /// Write the three header lines, each terminated by a single `\n`.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        write!(
            out,
            "{}\n{} {}\n{}\n",
            self.magic(),
            self.width,
            self.height,
            self.maxval
        )
    }
}

/// Number of decimal digits in `value`.
pub(crate) fn decimal_len(value: u32) -> usize {
    value.checked_ilog10().map_or(1, |d| d as usize + 1)
}

/// Append `value` as plain decimal (no padding, no sign).
pub(crate) fn push_decimal(out: &mut Vec<u8>, value: u32) {
    let mut digits = [0u8; 10];
    let mut i = digits.len();
    let mut v = value;
    loop {
        i -= 1;
        digits[i] = b'0' + (v % 10) as u8;
        v /= 10;
        if v == 0 {
            break;
        }
    }
    out.extend_from_slice(&digits[i..]);
}
