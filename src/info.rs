use crate::error::PnmError;
use crate::header::{Encoding, NetpbmFormat};
use crate::pixel::ChannelSize;

/// Header fields recovered from PGM/PPM bytes, without touching pixel data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub maxval: u16,
    pub format: NetpbmFormat,
    pub encoding: Encoding,
    /// Offset of the first pixel byte (or first sample token).
    pub data_offset: usize,
}

impl ImageInfo {
    /// Parse a `P2`, `P3`, `P5` or `P6` header.
    ///
    /// Tokens may be separated by any ASCII whitespace, and `#` starts a
    /// comment running to the end of the line.
    pub fn from_bytes(data: &[u8]) -> Result<Self, PnmError> {
        let magic = data.get(..2).ok_or(PnmError::UnexpectedEof)?;
        let (format, encoding) = match magic {
            b"P2" => (NetpbmFormat::Pgm, Encoding::Ascii),
            b"P3" => (NetpbmFormat::Ppm, Encoding::Ascii),
            b"P5" => (NetpbmFormat::Pgm, Encoding::Binary),
            b"P6" => (NetpbmFormat::Ppm, Encoding::Binary),
            _ => return Err(PnmError::UnrecognizedFormat),
        };

        let mut cursor = HeaderCursor { data, pos: 2 };
        let width = cursor.next_number("width")?;
        let height = cursor.next_number("height")?;
        let maxval = cursor.next_number("maxval")?;

        if width == 0 || height == 0 {
            return Err(PnmError::InvalidHeader(format!(
                "zero dimension {width}x{height}"
            )));
        }
        let maxval = match u16::try_from(maxval) {
            Ok(v) if v > 0 => v,
            _ => {
                return Err(PnmError::InvalidHeader(format!(
                    "maxval {maxval} out of range 1..=65535"
                )));
            }
        };

        // exactly one whitespace byte separates maxval from the data
        match data.get(cursor.pos) {
            Some(b) if b.is_ascii_whitespace() => {}
            Some(_) => {
                return Err(PnmError::InvalidHeader(
                    "missing whitespace after maxval".into(),
                ));
            }
            None => return Err(PnmError::UnexpectedEof),
        }

        Ok(Self {
            width,
            height,
            maxval,
            format,
            encoding,
            data_offset: cursor.pos + 1,
        })
    }

    /// Sample size implied by maxval.
    pub fn channel_size(&self) -> ChannelSize {
        ChannelSize::for_maxval(self.maxval)
    }

    /// Bytes of raw pixel data a binary file of this shape carries.
    pub fn binary_data_len(&self) -> Option<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)?
            .checked_mul(self.format.channels())?
            .checked_mul(self.channel_size().bytes())
    }
}

struct HeaderCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl HeaderCursor<'_> {
    fn skip_separators(&mut self) {
        while let Some(&b) = self.data.get(self.pos) {
            if b == b'#' {
                while self.data.get(self.pos).is_some_and(|&c| c != b'\n') {
                    self.pos += 1;
                }
            } else if b.is_ascii_whitespace() {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn next_number(&mut self, what: &str) -> Result<u32, PnmError> {
        let start = self.pos;
        self.skip_separators();
        if self.pos == start {
            return match self.data.get(self.pos) {
                None => Err(PnmError::UnexpectedEof),
                Some(_) => Err(PnmError::InvalidHeader(format!(
                    "expected whitespace before {what}"
                ))),
            };
        }

        let digits_start = self.pos;
        let mut value: u32 = 0;
        while let Some(&b) = self.data.get(self.pos) {
            if !b.is_ascii_digit() {
                break;
            }
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(u32::from(b - b'0')))
                .ok_or_else(|| PnmError::InvalidHeader(format!("{what} overflows u32")))?;
            self.pos += 1;
        }

        if self.pos == digits_start {
            return match self.data.get(self.pos) {
                None => Err(PnmError::UnexpectedEof),
                Some(&b) => Err(PnmError::InvalidHeader(format!(
                    "expected {what}, found byte 0x{b:02x}"
                ))),
            };
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_header() {
        let info = ImageInfo::from_bytes(b"P5\n2 1\n255\n\x00\xff").unwrap();
        assert_eq!(info.width, 2);
        assert_eq!(info.height, 1);
        assert_eq!(info.maxval, 255);
        assert_eq!(info.format, NetpbmFormat::Pgm);
        assert_eq!(info.encoding, Encoding::Binary);
        assert_eq!(info.data_offset, 11);
        assert_eq!(info.binary_data_len(), Some(2));
    }

    #[test]
    fn comments_and_mixed_whitespace() {
        let data = b"P3 # made by hand\n  4\t3 # size\r\n65535\n1 2 3";
        let info = ImageInfo::from_bytes(data).unwrap();
        assert_eq!((info.width, info.height, info.maxval), (4, 3, 65535));
        assert_eq!(info.encoding, Encoding::Ascii);
        assert_eq!(info.channel_size(), ChannelSize::Sixteen);
        assert_eq!(&data[info.data_offset..], b"1 2 3");
    }

    #[test]
    fn rejects_bad_magic() {
        assert!(matches!(
            ImageInfo::from_bytes(b"P7\nWIDTH 1\n"),
            Err(PnmError::UnrecognizedFormat)
        ));
        assert!(matches!(
            ImageInfo::from_bytes(b"P"),
            Err(PnmError::UnexpectedEof)
        ));
    }

    #[test]
    fn truncated_header() {
        assert!(matches!(
            ImageInfo::from_bytes(b"P6\n2 2\n255"),
            Err(PnmError::UnexpectedEof)
        ));
        assert!(matches!(
            ImageInfo::from_bytes(b"P6\n2 "),
            Err(PnmError::UnexpectedEof)
        ));
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(matches!(
            ImageInfo::from_bytes(b"P5\n0 1\n255\n"),
            Err(PnmError::InvalidHeader(_))
        ));
        assert!(matches!(
            ImageInfo::from_bytes(b"P5\n1 1\n65536\n"),
            Err(PnmError::InvalidHeader(_))
        ));
        assert!(matches!(
            ImageInfo::from_bytes(b"P5\n1 1\n99999999999\n"),
            Err(PnmError::InvalidHeader(_))
        ));
        assert!(matches!(
            ImageInfo::from_bytes(b"P5\nx 1\n255\n"),
            Err(PnmError::InvalidHeader(_))
        ));
    }
}
