//! File sink for the `export_*` entry points.

use std::ffi::OsString;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::PnmError;
use crate::header::NetpbmFormat;

/// `name` with `.pgm`/`.ppm` appended. An existing extension is kept.
pub(crate) fn output_path(name: &Path, format: NetpbmFormat) -> PathBuf {
    let mut path = OsString::from(name.as_os_str());
    path.push(".");
    path.push(format.extension());
    PathBuf::from(path)
}

/// Buffered, exclusively owned output file.
///
/// The handle is closed when the sink is dropped, on success and failure
/// alike. A failed export leaves whatever was written on disk.
pub(crate) struct FileSink {
    inner: BufWriter<File>,
}

impl FileSink {
    /// Create (or truncate) the file at `path`.
    pub fn create(path: &Path) -> Result<Self, PnmError> {
        let file = File::create(path).map_err(|source| PnmError::Create {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            inner: BufWriter::new(file),
        })
    }

    /// Flush buffered data, surfacing any deferred write error.
    pub fn finish(mut self) -> Result<(), PnmError> {
        self.inner.flush()?;
        Ok(())
    }
}

impl Write for FileSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.inner.write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
