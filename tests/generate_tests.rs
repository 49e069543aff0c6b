//! Integration tests for QR symbol generation
//!
//! These tests check generated symbols against the structural rules a reader
//! relies on (function patterns, format information, masking) and read the
//! payload back out of the finished grid.

use rust_qr_gen::encoder::format::FormatInfoEncoder;
use rust_qr_gen::encoder::function_patterns::MatrixBuilder;
use rust_qr_gen::encoder::gf256::Gf256;
use rust_qr_gen::encoder::mask::{MaskSelector, apply_mask, penalty};
use rust_qr_gen::encoder::placement::DataPlacer;
use rust_qr_gen::encoder::qr_encoder::QrEncoder;
use rust_qr_gen::encoder::tables::ec_block_info;
use rust_qr_gen::{
    ECLevel, EncodeOptions, LevelPolicy, MaskPattern, Module, QrError, QrMatrix,
    generate_with_options,
};

fn options() -> EncodeOptions {
    EncodeOptions::new(ECLevel::L)
        .with_level_policy(LevelPolicy::Normalize)
        .with_min_version(1)
}

fn encode(payload: &[u8]) -> QrMatrix {
    generate_with_options(payload, &options()).expect("payload fits")
}

/// Read the payload back: zigzag walk, unmask, check ECC, parse byte mode
fn read_back(qr: &QrMatrix) -> Vec<u8> {
    let version = qr.version();
    let info = ec_block_info(version);
    let builder = MatrixBuilder::new(version);
    let mask = qr.mask_pattern();

    let mut bits = Vec::new();
    DataPlacer::walk(version.size(), builder.reserved(), |x, y| {
        let raw = qr.is_dark(x as u32, y as u32);
        bits.push(raw ^ mask.is_masked(x, y));
    });

    let codewords: Vec<u8> = bits
        .chunks(8)
        .take(info.total_codewords())
        .map(|byte| byte.iter().fold(0u8, |acc, &b| (acc << 1) | u8::from(b)))
        .collect();
    assert_eq!(codewords.len(), info.total_codewords());

    // Single block: every syndrome of the full codeword is zero
    for i in 0..info.ecc_per_block {
        let alpha = Gf256::exp(i);
        let syndrome = codewords
            .iter()
            .fold(0u8, |acc, &c| Gf256::mul(acc, alpha) ^ c);
        assert_eq!(syndrome, 0, "syndrome {} is non-zero", i);
    }

    let data = &codewords[..info.data_codewords];
    assert_eq!(data[0] >> 4, 0b0100, "byte mode indicator");
    let count = (((data[0] & 0x0F) << 4) | (data[1] >> 4)) as usize;
    let payload: Vec<u8> = (0..count)
        .map(|i| (data[1 + i] << 4) | (data[2 + i] >> 4))
        .collect();

    // Terminator nibble, then alternating pad bytes
    assert_eq!(data[1 + count] & 0x0F, 0);
    for (i, &pad) in data[2 + count..].iter().enumerate() {
        assert_eq!(pad, if i % 2 == 0 { 0xEC } else { 0x11 });
    }
    payload
}

fn assert_finder(qr: &QrMatrix, left: u32, top: u32) {
    for dy in 0..7 {
        for dx in 0..7 {
            let ring = (dx as i32 - 3).abs().max((dy as i32 - 3).abs());
            let expected = ring != 2;
            assert_eq!(
                qr.is_dark(left + dx, top + dy),
                expected,
                "finder at ({}, {}) offset ({}, {})",
                left,
                top,
                dx,
                dy
            );
        }
    }
}

#[test]
fn test_single_byte_symbol() {
    let qr = encode(b"A");
    assert_eq!(qr.version().number(), 1);
    assert_eq!(qr.module_count(), 21);
    assert_eq!(qr.ec_level(), ECLevel::L);
    assert_eq!(read_back(&qr), b"A");
}

#[test]
fn test_version_boundaries() {
    let cases = [
        (0, 1),
        (17, 1),
        (18, 2),
        (32, 2),
        (33, 3),
        (53, 3),
        (54, 4),
        (78, 4),
    ];
    for (length, version) in cases {
        let qr = encode(&vec![b'q'; length]);
        assert_eq!(qr.version().number(), version, "length {}", length);
        assert_eq!(qr.module_count() as usize, 4 * version as usize + 17);
    }
}

#[test]
fn test_too_long_is_rejected() {
    for length in [79, 80, 200] {
        let result = generate_with_options(&vec![b'x'; length], &options());
        assert_eq!(
            result,
            Err(QrError::DataTooLong {
                length,
                capacity: 78
            })
        );
    }
}

fn assert_alignment(qr: &QrMatrix, center: i32) {
    for dy in -2i32..=2 {
        for dx in -2i32..=2 {
            let ring = dx.abs().max(dy.abs());
            let dark = qr.is_dark((center + dx) as u32, (center + dy) as u32);
            assert_eq!(
                dark,
                ring != 1,
                "alignment at ({}, {}) offset ({}, {})",
                center,
                center,
                dx,
                dy
            );
        }
    }
}

#[test]
fn test_version_two_alignment_pattern() {
    let qr = encode(&[b'0'; 20]);
    assert_eq!(qr.module_count(), 25);
    assert_alignment(&qr, 18);
}

#[test]
fn test_alignment_centres_versions_three_and_four() {
    let v3 = encode(&[b'3'; 40]);
    assert_eq!(v3.module_count(), 29);
    assert_alignment(&v3, 22);

    let v4 = encode(&[b'4'; 70]);
    assert_eq!(v4.module_count(), 33);
    assert_alignment(&v4, 26);
}

#[test]
fn test_function_patterns() {
    for payload in [&b"A"[..], &[b'x'; 30], &[b'y'; 50], &[b'z'; 78]] {
        let qr = encode(payload);
        let size = qr.module_count();
        assert_finder(&qr, 0, 0);
        assert_finder(&qr, size - 7, 0);
        assert_finder(&qr, 0, size - 7);

        // Separators
        for i in 0..8 {
            assert!(!qr.is_dark(i, 7));
            assert!(!qr.is_dark(7, i));
            assert!(!qr.is_dark(size - 1 - i, 7));
            assert!(!qr.is_dark(size - 8, i));
            assert!(!qr.is_dark(i, size - 8));
            assert!(!qr.is_dark(7, size - 1 - i));
        }

        // Timing patterns alternate starting dark
        for i in 8..size - 8 {
            assert_eq!(qr.is_dark(i, 6), i % 2 == 0);
            assert_eq!(qr.is_dark(6, i), i % 2 == 0);
        }

        let version = u32::from(qr.version().number());
        assert!(qr.is_dark(8, 4 * version + 9), "dark module");
    }
}

#[test]
fn test_format_information() {
    for payload in [&b""[..], b"hello", &[0xFF; 40], &[0x00; 70]] {
        let qr = encode(payload);
        let (first, second) = FormatInfoEncoder::read(qr.modules());
        assert_eq!(first, second);
        assert_eq!(
            FormatInfoEncoder::decode(first),
            Some((ECLevel::L, qr.mask_pattern()))
        );
    }
}

#[test]
fn test_every_module_set() {
    for length in [0, 9, 17, 25, 40, 61, 78] {
        let qr = encode(&vec![0xA5; length]);
        assert!(qr.modules().is_complete());
        assert!(qr.rows().flatten().all(|m| *m != Module::Unset));
    }
}

#[test]
fn test_deterministic() {
    let payload = b"0123456789";
    let first = encode(payload);
    for _ in 0..5 {
        assert_eq!(encode(payload), first);
    }
}

#[test]
fn test_committed_mask_has_lowest_penalty() {
    for payload in [&b"A"[..], b"https://example.com/path", &[0u8; 53], &[0xFF; 78]] {
        let prepared = QrEncoder::prepare(payload, &options()).unwrap();
        let candidates = MaskSelector::evaluate(&prepared.grid, &prepared.data_modules);
        let best = MaskSelector::best(&candidates).unwrap();

        let qr = QrEncoder::finish(prepared.clone(), None);
        assert_eq!(qr.mask_pattern(), best.pattern);

        // Scores are taken before format information is written
        let mut scratch = prepared.grid.clone();
        apply_mask(&mut scratch, &prepared.data_modules, best.pattern);
        assert_eq!(penalty(&scratch).total(), best.penalty);
    }
}

#[test]
fn test_forced_mask_round_trip() {
    for mask in MaskPattern::ALL {
        let qr = generate_with_options(b"forced mask", &options().with_mask(mask)).unwrap();
        assert_eq!(qr.mask_pattern(), mask);
        assert_eq!(read_back(&qr), b"forced mask");
    }
}

#[test]
fn test_read_back_all_versions() {
    let payloads: [&[u8]; 5] = [
        b"",
        b"HELLO WORLD",
        b"https://www.rust-lang.org/learn",
        &[0x00, 0xFF, 0x80, 0x7F, 0x01, 0xFE, 0x55, 0xAA, 0x10, 0x20, 0x30, 0x40, 0x50,
            0x60, 0x70, 0x80, 0x90, 0xA0, 0xB0, 0xC0, 0xD0, 0xE0, 0xF0, 0x0F, 0x1F, 0x2F,
            0x3F, 0x4F, 0x5F, 0x6F, 0x7F, 0x8F, 0x9F, 0xAF, 0xBF, 0xCF, 0xDF, 0xEF, 0xFF,
            0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xAA],
        &[b'~'; 78],
    ];
    for payload in payloads {
        let qr = encode(payload);
        assert_eq!(read_back(&qr), payload);
    }
}

#[test]
fn test_min_version_option() {
    let qr = generate_with_options(b"A", &options().with_min_version(3)).unwrap();
    assert_eq!(qr.version().number(), 3);
    assert_eq!(read_back(&qr), b"A");
}

#[test]
fn test_other_levels_encode_at_l() {
    let at_l = encode(b"level");
    for level in [ECLevel::M, ECLevel::Q, ECLevel::H] {
        let opts = EncodeOptions { level, ..options() };
        assert_eq!(generate_with_options(b"level", &opts), Ok(at_l.clone()));
    }
}
