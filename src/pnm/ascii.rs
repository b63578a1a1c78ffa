//! Plain-text encoder: P2 (PGM) and P3 (PPM).

use std::io::Write;

use enough::Stop;
use log::trace;

use super::EncodePlan;
use crate::error::PnmError;
use crate::header::push_decimal;
use crate::pixel::ChannelSize;

/// Write decimal samples after the header, one text line per pixel row.
///
/// Tokens within a row are separated by a single space; the last non-alpha
/// sample of the row is followed by `\n` instead. Alpha samples produce no
/// output and do not count towards the row length.
pub(super) fn write_ascii<W: Write + ?Sized>(
    pixels: &[u8],
    plan: &EncodePlan,
    line: &mut Vec<u8>,
    out: &mut W,
    stop: &dyn Stop,
) -> Result<(), PnmError> {
    let sample = plan.size.bytes();
    let channels = plan.color.channels();
    let alpha = plan.color.has_alpha().then(|| channels - 1);
    let tokens_per_row = plan.header.width as usize * plan.color.output_channels();
    trace!("ascii, {tokens_per_row} samples per row");

    for (y, row) in pixels.chunks_exact(plan.row_bytes).enumerate() {
        if y % 16 == 0 {
            stop.check()?;
        }
        line.clear();
        let mut column = 0;
        for px in row.chunks_exact(channels * sample) {
            for (c, bytes) in px.chunks_exact(sample).enumerate() {
                if Some(c) == alpha {
                    continue;
                }
                column += 1;
                push_decimal(line, u32::from(read_sample(bytes, plan.size)));
                let row_end = column == tokens_per_row;
                line.push(if row_end { b'\n' } else { b' ' });
            }
        }
        out.write_all(line)?;
    }

    Ok(())
}

/// Decode one sample; two-byte samples are big-endian on every host.
#[inline]
pub(crate) fn read_sample(bytes: &[u8], size: ChannelSize) -> u16 {
    match size {
        ChannelSize::Eight => u16::from(bytes[0]),
        ChannelSize::Sixteen => u16::from_be_bytes([bytes[0], bytes[1]]),
    }
}
