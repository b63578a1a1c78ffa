use std::io::Write;
use std::path::{Path, PathBuf};

use enough::Stop;
use log::debug;

use crate::error::PnmError;
use crate::header::Encoding;
use crate::limits::Limits;
use crate::pixel::{ChannelSize, ColorType};
use crate::pnm::{self, EncodePlan};
use crate::sink::{self, FileSink};

/// Builder for a PGM/PPM encode.
///
/// Every call validates the buffer shape first, then reserves its scratch,
/// and only then touches the output.
#[derive(Clone, Debug)]
pub struct EncodeRequest<'a> {
    encoding: Encoding,
    limits: Option<&'a Limits>,
}

impl<'a> EncodeRequest<'a> {
    pub fn new(encoding: Encoding) -> Self {
        Self {
            encoding,
            limits: None,
        }
    }

    /// Packed binary output (`P5`/`P6`).
    pub fn binary() -> Self {
        Self::new(Encoding::Binary)
    }

    /// Plain-text output (`P2`/`P3`).
    pub fn ascii() -> Self {
        Self::new(Encoding::Ascii)
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Encode into a new buffer.
    pub fn encode(
        &self,
        pixels: &[u8],
        width: u32,
        height: u32,
        color: ColorType,
        size: ChannelSize,
        stop: impl Stop,
    ) -> Result<Vec<u8>, PnmError> {
        let plan = self.plan(pixels, width, height, color, size)?;
        if let Some(limits) = self.limits {
            let total = plan.output_len.saturating_add(plan.scratch_len());
            limits.check_memory("output buffer and row scratch", total)?;
        }
        let mut scratch = plan.alloc_scratch(self.limits)?;
        let mut out = Vec::new();
        out.try_reserve_exact(plan.output_len)?;
        pnm::write_pnm(pixels, &plan, &mut scratch, &mut out, &stop)?;
        Ok(out)
    }

    /// Encode into any writer. The writer is not flushed.
    #[allow(clippy::too_many_arguments)]
    pub fn encode_to<W: Write + ?Sized>(
        &self,
        out: &mut W,
        pixels: &[u8],
        width: u32,
        height: u32,
        color: ColorType,
        size: ChannelSize,
        stop: impl Stop,
    ) -> Result<(), PnmError> {
        let plan = self.plan(pixels, width, height, color, size)?;
        let mut scratch = plan.alloc_scratch(self.limits)?;
        pnm::write_pnm(pixels, &plan, &mut scratch, out, &stop)
    }

    /// Write `<name>.pgm` or `<name>.ppm` and return the path written.
    ///
    /// Validation and scratch allocation happen before the file is created.
    /// A write failure leaves the partial file in place.
    #[allow(clippy::too_many_arguments)]
    pub fn export(
        &self,
        name: impl AsRef<Path>,
        pixels: &[u8],
        width: u32,
        height: u32,
        color: ColorType,
        size: ChannelSize,
        stop: impl Stop,
    ) -> Result<PathBuf, PnmError> {
        let plan = self.plan(pixels, width, height, color, size)?;
        let mut scratch = plan.alloc_scratch(self.limits)?;
        let path = sink::output_path(name.as_ref(), plan.header.format);
        debug!(
            "exporting {}x{} {:?} {:?} as {} to {}",
            width,
            height,
            color,
            size,
            plan.header.magic(),
            path.display()
        );

        let mut file = FileSink::create(&path)?;
        pnm::write_pnm(pixels, &plan, &mut scratch, &mut file, &stop)?;
        file.finish()?;
        Ok(path)
    }

    fn plan(
        &self,
        pixels: &[u8],
        width: u32,
        height: u32,
        color: ColorType,
        size: ChannelSize,
    ) -> Result<EncodePlan, PnmError> {
        EncodePlan::new(
            self.encoding,
            pixels.len(),
            width,
            height,
            color,
            size,
            self.limits,
        )
    }
}
