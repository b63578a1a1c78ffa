use crate::error::PnmError;

/// Resource limits for encode/export operations.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum bytes allocated by one call.
    ///
    /// Streaming calls (`encode_to`, `export`) allocate only the row scratch.
    /// In-memory `encode` also counts the whole output buffer, using the
    /// widest possible token for plain text.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Check image dimensions. Returns Ok(()) or LimitExceeded error.
    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), PnmError> {
        let pixels = u64::from(width) * u64::from(height);
        within("width", u64::from(width), self.max_width)?;
        within("height", u64::from(height), self.max_height)?;
        within("pixel count", pixels, self.max_pixels)
    }

    /// Check that an allocation of `bytes` for `what` fits the memory limit.
    pub(crate) fn check_memory(&self, what: &str, bytes: usize) -> Result<(), PnmError> {
        if let Some(max_mem) = self.max_memory_bytes {
            if bytes as u64 > max_mem {
                return Err(PnmError::LimitExceeded(format!(
                    "{what} of {bytes} bytes exceeds memory limit {max_mem}"
                )));
            }
        }
        Ok(())
    }
}

fn within(what: &str, value: u64, limit: Option<u64>) -> Result<(), PnmError> {
    if let Some(max) = limit {
        if value > max {
            return Err(PnmError::LimitExceeded(format!(
                "{what} {value} exceeds limit {max}"
            )));
        }
    }
    Ok(())
}
