//! Binary encoder: P5 (PGM) and P6 (PPM).

use std::io::Write;

use enough::Stop;
use log::trace;

use super::EncodePlan;
use crate::error::PnmError;

/// Write raw samples after the header.
///
/// Without alpha the rows go out untouched (16-bit samples are already
/// big-endian, as Netpbm wants them). With alpha each row is compacted into
/// `scratch`, which is reused for every row.
pub(super) fn write_binary<W: Write + ?Sized>(
    pixels: &[u8],
    plan: &EncodePlan,
    scratch: &mut Vec<u8>,
    out: &mut W,
    stop: &dyn Stop,
) -> Result<(), PnmError> {
    let rows = pixels.chunks_exact(plan.row_bytes);

    if !plan.color.has_alpha() {
        trace!("binary passthrough, {} rows", rows.len());
        for (y, row) in rows.enumerate() {
            if y % 16 == 0 {
                stop.check()?;
            }
            out.write_all(row)?;
        }
        return Ok(());
    }

    let sample = plan.size.bytes();
    let pixel_bytes = plan.color.channels() * sample;
    let keep = plan.color.output_channels() * sample;
    trace!("binary alpha strip, {pixel_bytes} -> {keep} bytes");

    for (y, row) in rows.enumerate() {
        if y % 16 == 0 {
            stop.check()?;
        }
        scratch.clear();
        for px in row.chunks_exact(pixel_bytes) {
            scratch.extend_from_slice(&px[..keep]);
        }
        out.write_all(scratch)?;
    }

    Ok(())
}
