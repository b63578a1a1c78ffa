#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

use std::fs;

fn write_all(dir: &str, seeds: &[(&str, &[u8])]) {
    fs::create_dir_all(dir).unwrap();
    for (name, bytes) in seeds {
        fs::write(format!("{dir}/{name}"), bytes).unwrap();
    }
}

fn main() {
    write_all(
        "fuzz/corpus/fuzz_parse_header",
        &[
            ("pgm_2x1.pgm", b"P5\n2 1\n255\n\x00\xff"),
            ("ppm_1x1.ppm", b"P6\n1 1\n255\n\x0a\x14\x1e"),
            ("plain_pgm16.pgm", b"P2\n2 1\n65535\n255 4660\n"),
            ("plain_ppm_comment.ppm", b"P3 # c\n1 1\n255\n1 2 3\n"),
            // Truncated/malformed seeds for edge coverage
            ("empty.bin", b""),
            ("just_p6.bin", b"P6"),
            ("no_maxval.bin", b"P5\n4 4\n"),
            ("huge_width.bin", b"P5\n99999999999 1\n255\n"),
        ],
    );

    write_all(
        "fuzz/corpus/fuzz_encode",
        &[
            // width 2, rgba 8-bit, two pixels
            ("rgba8_2x1.bin", &[2, 3, 1, 2, 3, 4, 5, 6, 7, 8]),
            // width 1, gray 16-bit, two rows
            ("gray16_1x2.bin", &[1, 4, 0x12, 0x34, 0x00, 0xff]),
        ],
    );

    println!("Generated seed corpora under fuzz/corpus/");
}
