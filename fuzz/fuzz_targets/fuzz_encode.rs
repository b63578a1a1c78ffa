#![no_main]
use enough::Unstoppable;
use libfuzzer_sys::fuzz_target;
use zenpnm_export::*;

fuzz_target!(|data: &[u8]| {
    // First two bytes pick width, color type and sample size; the rest is pixels
    let [w, mode, pixels @ ..] = data else {
        return;
    };
    let color = match mode & 3 {
        0 => ColorType::Gray,
        1 => ColorType::Rgb,
        2 => ColorType::GrayAlpha,
        _ => ColorType::Rgba,
    };
    let size = if mode & 4 == 0 {
        ChannelSize::Eight
    } else {
        ChannelSize::Sixteen
    };
    let width = u32::from(*w).max(1);
    let row = width as usize * color.channels() * size.bytes();
    let height = (pixels.len() / row) as u32;
    if height == 0 {
        return;
    }
    let pixels = &pixels[..row * height as usize];

    let binary = encode_binary(pixels, width, height, color, size, Unstoppable)
        .expect("valid shape must encode");
    let info = ImageInfo::from_bytes(&binary).expect("own header must parse");
    let parsed = (info.width, info.height, info.maxval);
    assert_eq!(parsed, (width, height, size.maxval()));
    let body_len = binary.len() - info.data_offset;
    assert_eq!(Some(body_len), info.binary_data_len());

    let ascii = encode_ascii(pixels, width, height, color, size, Unstoppable)
        .expect("valid shape must encode");
    let info = ImageInfo::from_bytes(&ascii).expect("own header must parse");
    let body = &ascii[info.data_offset..];
    let newlines = body.iter().filter(|&&b| b == b'\n').count();
    assert_eq!(newlines, height as usize);
});
