use std::io::{self, Write};

use enough::Unstoppable;
use zenpnm_export::*;

const GRAY: ColorType = ColorType::Gray;
const EIGHT: ChannelSize = ChannelSize::Eight;
const SIXTEEN: ChannelSize = ChannelSize::Sixteen;

#[test]
fn gray8_binary_two_pixels() {
    let encoded = encode_binary(&[0x00, 0xFF], 2, 1, GRAY, EIGHT, Unstoppable).unwrap();
    assert_eq!(encoded, b"P5\n2 1\n255\n\x00\xff");
}

#[test]
fn gray8_ascii_two_pixels() {
    let encoded = encode_ascii(&[0x00, 0xFF], 2, 1, GRAY, EIGHT, Unstoppable).unwrap();
    assert_eq!(encoded, b"P2\n2 1\n255\n0 255\n");
}

#[test]
fn rgba8_binary_drops_alpha() {
    let pixels = [10, 20, 30, 255];
    let encoded = encode_binary(&pixels, 1, 1, ColorType::Rgba, EIGHT, Unstoppable).unwrap();
    assert_eq!(encoded, b"P6\n1 1\n255\n\x0a\x14\x1e");
}

#[test]
fn gray16_ascii_big_endian() {
    let pixels = [0x00, 0xFF, 0x12, 0x34];
    let encoded = encode_ascii(&pixels, 2, 1, GRAY, SIXTEEN, Unstoppable).unwrap();
    assert_eq!(encoded, b"P2\n2 1\n65535\n255 4660\n");
}

#[test]
fn header_parse_recovers_dimensions() {
    let w = 7;
    let h = 3;
    for size in [EIGHT, SIXTEEN] {
        let pixels = vec![0x5Au8; w * h * 3 * size.bytes()];
        let (w32, h32) = (w as u32, h as u32);
        let encoded = encode_binary(&pixels, w32, h32, ColorType::Rgb, size, Unstoppable).unwrap();

        let info = ImageInfo::from_bytes(&encoded).unwrap();
        assert_eq!(info.width, w32);
        assert_eq!(info.height, h32);
        assert_eq!(info.maxval, size.maxval());
        assert_eq!(info.format, NetpbmFormat::Ppm);
        assert_eq!(info.encoding, Encoding::Binary);
        assert_eq!(&encoded[info.data_offset..], &pixels[..]);
    }
}

#[test]
fn ascii_header_parses() {
    let encoded = encode_ascii(&[1, 2, 3, 4], 2, 2, GRAY, EIGHT, Unstoppable).unwrap();
    let info = ImageInfo::from_bytes(&encoded).unwrap();
    assert_eq!((info.width, info.height, info.maxval), (2, 2, 255));
    assert_eq!(info.encoding, Encoding::Ascii);
    assert_eq!(&encoded[info.data_offset..], b"1 2\n3 4\n");
}

#[test]
fn shape_mismatch_is_an_error() {
    let result = encode_binary(&[0u8; 5], 2, 1, ColorType::Rgb, EIGHT, Unstoppable);
    match result.unwrap_err() {
        PnmError::ShapeMismatch { expected, actual } => {
            assert_eq!(expected, 6);
            assert_eq!(actual, 5);
        }
        other => panic!("expected ShapeMismatch, got {other:?}"),
    }

    // trailing bytes are not silently written out
    let result = encode_ascii(&[0u8; 7], 2, 1, ColorType::Rgb, EIGHT, Unstoppable);
    assert!(matches!(result, Err(PnmError::ShapeMismatch { .. })));
}

#[test]
fn zero_dimensions_rejected() {
    let result = encode_binary(&[], 0, 0, GRAY, EIGHT, Unstoppable);
    assert!(matches!(result, Err(PnmError::InvalidDimensions { .. })));
}

#[test]
fn limits_reject_large() {
    let pixels = vec![255u8; 6];
    let limits = Limits {
        max_pixels: Some(1),
        ..Default::default()
    };

    let request = EncodeRequest::binary().with_limits(&limits);
    let result = request.encode(&pixels, 1, 2, ColorType::Rgb, EIGHT, Unstoppable);
    match result.unwrap_err() {
        PnmError::LimitExceeded(_) => {}
        other => panic!("expected LimitExceeded, got {other:?}"),
    }
}

#[test]
fn memory_limit_counts_output_only_when_buffered() {
    // 16 pixel bytes + 11 header bytes, no scratch for alpha-free binary
    let pixels = [7u8; 16];
    let limits = Limits {
        max_memory_bytes: Some(20),
        ..Default::default()
    };
    let request = EncodeRequest::binary().with_limits(&limits);

    let result = request.encode(&pixels, 4, 4, GRAY, EIGHT, Unstoppable);
    assert!(matches!(result, Err(PnmError::LimitExceeded(_))));

    let mut streamed = Vec::new();
    request
        .encode_to(&mut streamed, &pixels, 4, 4, GRAY, EIGHT, Unstoppable)
        .unwrap();
    assert_eq!(streamed.len(), 27);
}

#[test]
fn encode_to_matches_encode() {
    let pixels: Vec<u8> = (0..4 * 3 * 2).map(|i| (i * 37) as u8).collect();
    let color = ColorType::GrayAlpha;
    for request in [EncodeRequest::binary(), EncodeRequest::ascii()] {
        let direct = request
            .encode(&pixels, 4, 3, color, EIGHT, Unstoppable)
            .unwrap();
        let mut streamed = Vec::new();
        request
            .encode_to(&mut streamed, &pixels, 4, 3, color, EIGHT, Unstoppable)
            .unwrap();
        assert_eq!(direct, streamed, "{:?}", request.encoding());
    }
}

/// Accepts `remaining` bytes, then fails every write.
struct FailAfter {
    written: Vec<u8>,
    remaining: usize,
}

impl Write for FailAfter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.remaining == 0 {
            return Err(io::Error::other("disk full"));
        }
        let n = buf.len().min(self.remaining);
        self.written.extend_from_slice(&buf[..n]);
        self.remaining -= n;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn write_failure_mid_stream_keeps_partial_output() {
    let pixels: Vec<u8> = (0..3 * 4 * 4).map(|i| i as u8).collect();
    let color = ColorType::Rgba;
    for request in [EncodeRequest::binary(), EncodeRequest::ascii()] {
        let full = request
            .encode(&pixels, 3, 4, color, EIGHT, Unstoppable)
            .unwrap();

        let mut sink = FailAfter {
            written: Vec::new(),
            remaining: 15,
        };
        let result = request.encode_to(&mut sink, &pixels, 3, 4, color, EIGHT, Unstoppable);
        match result {
            Err(PnmError::Write(e)) => assert_eq!(e.to_string(), "disk full"),
            other => panic!("expected Write error, got {other:?}"),
        }
        assert_eq!(sink.written, &full[..15], "{:?}", request.encoding());
    }
}

struct AlwaysStop;

impl Stop for AlwaysStop {
    fn check(&self) -> Result<(), enough::StopReason> {
        Err(enough::StopReason::Cancelled)
    }
}

#[test]
fn cancelled_before_output() {
    let mut out = Vec::new();
    let request = EncodeRequest::ascii();
    let result = request.encode_to(&mut out, &[1, 2, 3], 3, 1, GRAY, EIGHT, AlwaysStop);
    assert!(matches!(result, Err(PnmError::Cancelled(_))));
    assert!(out.is_empty());
}
