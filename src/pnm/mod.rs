//! PGM/PPM encoders: binary (P5/P6) and plain text (P2/P3).

mod ascii;
mod binary;

use std::io::Write;

use enough::Stop;

use crate::error::PnmError;
use crate::header::{Encoding, Header};
use crate::limits::Limits;
use crate::pixel::{ChannelSize, ColorType};

/// Validated sizes for one encode call.
#[derive(Clone, Debug)]
pub(crate) struct EncodePlan {
    pub header: Header,
    pub color: ColorType,
    pub size: ChannelSize,
    /// Input bytes per row.
    pub row_bytes: usize,
    /// Output bytes per row (upper bound for plain text).
    pub out_row_bytes: usize,
    /// Header plus pixel data (upper bound for plain text).
    pub output_len: usize,
}

impl EncodePlan {
    /// Validate the buffer shape against the image parameters.
    ///
    /// The buffer must be exactly `height * width * channels * bytes` long;
    /// trailing data is rejected rather than silently dropped.
    pub fn new(
        encoding: Encoding,
        pixels_len: usize,
        width: u32,
        height: u32,
        color: ColorType,
        size: ChannelSize,
        limits: Option<&Limits>,
    ) -> Result<Self, PnmError> {
        if width == 0 || height == 0 {
            return Err(PnmError::InvalidDimensions { width, height });
        }
        if let Some(limits) = limits {
            limits.check(width, height)?;
        }

        let too_large = PnmError::DimensionsTooLarge { width, height };
        let w = width as usize;
        let h = height as usize;
        let header = Header::new(encoding, color, size, width, height);

        let row_bytes = w
            .checked_mul(color.channels())
            .and_then(|wc| wc.checked_mul(size.bytes()))
            .ok_or(too_large)?;
        let expected = row_bytes
            .checked_mul(h)
            .ok_or(PnmError::DimensionsTooLarge { width, height })?;
        if pixels_len != expected {
            return Err(PnmError::ShapeMismatch {
                expected,
                actual: pixels_len,
            });
        }

        let bytes_per_token = match encoding {
            Encoding::Binary => size.bytes(),
            // digits plus one separator
            Encoding::Ascii => crate::header::decimal_len(u32::from(size.maxval())) + 1,
        };
        let out_row_bytes = w
            .checked_mul(color.output_channels())
            .and_then(|wc| wc.checked_mul(bytes_per_token))
            .ok_or(PnmError::DimensionsTooLarge { width, height })?;
        let output_len = out_row_bytes
            .checked_mul(h)
            .and_then(|n| n.checked_add(header.encoded_len()))
            .ok_or(PnmError::DimensionsTooLarge { width, height })?;

        Ok(Self {
            header,
            color,
            size,
            row_bytes,
            out_row_bytes,
            output_len,
        })
    }

    /// Bytes of per-row scratch the encoder needs.
    pub fn scratch_len(&self) -> usize {
        match self.header.encoding {
            Encoding::Binary if !self.color.has_alpha() => 0,
            Encoding::Binary | Encoding::Ascii => self.out_row_bytes,
        }
    }

    /// Reserve the row scratch buffer up front, so allocation failure is
    /// reported before any output is produced.
    pub fn alloc_scratch(&self, limits: Option<&Limits>) -> Result<Vec<u8>, PnmError> {
        if let Some(limits) = limits {
            limits.check_memory("row scratch", self.scratch_len())?;
        }
        let mut scratch = Vec::new();
        scratch.try_reserve_exact(self.scratch_len())?;
        Ok(scratch)
    }
}

/// Write header and pixel data for `plan` into `out`.
pub(crate) fn write_pnm<W: Write + ?Sized>(
    pixels: &[u8],
    plan: &EncodePlan,
    scratch: &mut Vec<u8>,
    out: &mut W,
    stop: &dyn Stop,
) -> Result<(), PnmError> {
    stop.check()?;
    plan.header.write_to(out)?;
    match plan.header.encoding {
        Encoding::Binary => binary::write_binary(pixels, plan, scratch, out, stop),
        Encoding::Ascii => ascii::write_ascii(pixels, plan, scratch, out, stop),
    }
}
