#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Header parsing must never panic
    if let Ok(info) = zenpnm_export::ImageInfo::from_bytes(data) {
        assert!(info.width > 0 && info.height > 0 && info.maxval > 0);
        assert!(info.data_offset <= data.len());
    }
});
