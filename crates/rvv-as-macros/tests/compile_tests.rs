//! Integration tests for `rvv_word!` and `rvv_bytes!` proc-macros.

use rvv_as_macros::{rvv_bytes, rvv_word};

// ── rvv_word! ───────────────────────────────────────────────────────────────

#[test]
fn word_vand() {
    const W: u32 = rvv_word!("vand.vv v31, v0, v0");
    assert_eq!(W, 0x26000fd7);
}

#[test]
fn word_vxor() {
    const W: u32 = rvv_word!("vxor.vv v0, v15, v0");
    assert_eq!(W, 0x2ef00057);
}

#[test]
fn word_vrgather() {
    const W: u32 = rvv_word!("vrgather.vv v1, v0, v0");
    assert_eq!(W, 0x320000d7);
}

#[test]
fn word_vsrl() {
    const W: u32 = rvv_word!("vsrl.vi v0, v0, 31");
    assert_eq!(W, 0xa20fb057);
}

#[test]
fn word_raw_string() {
    const W: u32 = rvv_word!(r"vand.vv v0, v0, v31");
    assert_eq!(W, 0x260f8057);
}

#[test]
fn word_raw_string_with_hashes() {
    const W: u32 = rvv_word!(r#"vsrl.vi v0, v0, 1"#);
    assert_eq!(W, 0xa200b057);
}

#[test]
fn word_forwarded_through_macro_rules() {
    macro_rules! enc {
        ($line:expr) => {
            rvv_word!($line)
        };
    }
    const W: u32 = enc!("vxor.vv v0, v15, v0");
    assert_eq!(W, 0x2ef00057);
}

#[test]
fn word_escaped_whitespace() {
    const W: u32 = rvv_word!("vand.vv\tv0,\tv31,\tv0");
    assert_eq!(W, 0x27f00057);
}

#[test]
fn word_trailing_comma() {
    const W: u32 = rvv_word!("vsrl.vi v0, v0, 0",);
    assert_eq!(W, 0xa2003057);
}

#[test]
fn word_matches_runtime_encoder() {
    const W: u32 = rvv_word!("vsrl.vi v7, v3, 12");
    assert_eq!(Ok(W), rvv_as::assemble("vsrl.vi v7, v3, 12"));
}

// ── rvv_bytes! ──────────────────────────────────────────────────────────────

#[test]
fn bytes_little_endian() {
    const B: [u8; 4] = rvv_bytes!("vand.vv v0, v0, v0");
    assert_eq!(B, [0x57, 0x00, 0x00, 0x26]);
}

#[test]
fn bytes_match_word() {
    const B: [u8; 4] = rvv_bytes!("vrgather.vv v1, v0, v0");
    const W: u32 = rvv_word!("vrgather.vv v1, v0, v0");
    assert_eq!(u32::from_le_bytes(B), W);
}

// ── Usable in const contexts ────────────────────────────────────────────────

const PROGRAM: [u32; 4] = [
    rvv_word!("vand.vv v1, v2, v3"),
    rvv_word!("vxor.vv v1, v1, v1"),
    rvv_word!("vrgather.vv v4, v1, v2"),
    rvv_word!("vsrl.vi v4, v4, 3"),
];

#[test]
fn const_array() {
    for word in PROGRAM {
        assert_eq!(word & 0x7f, 0x57);
    }
    assert_eq!(PROGRAM[3], 0xa2003057 | (4 << 20) | (3 << 15) | (4 << 7));
}
