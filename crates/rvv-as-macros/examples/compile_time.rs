//! Compile-time encoding with `rvv_word!` and `rvv_bytes!`.
//!
//! These macros encode instructions at compile time, producing `u32` or
//! `[u8; 4]` constants with zero runtime overhead.
//!
//! Run with: `cargo run --example compile_time -p rvv-as-macros`

use rvv_as_macros::{rvv_bytes, rvv_word};

// ── Compile-time constants ──────────────────────────────────────────────

/// Clear v1 (x ^ x == 0).
const CLEAR_V1: u32 = rvv_word!("vxor.vv v1, v1, v1");

/// Halve every lane of v2 into v3.
const HALVE: u32 = rvv_word!("vsrl.vi v3, v2, 1");

/// Permute v8 by the indices in v9.
const GATHER: [u8; 4] = rvv_bytes!("vrgather.vv v10, v8, v9");

/// A short kernel, encoded word by word.
const KERNEL: [u32; 3] = [
    rvv_word!("vand.vv v4, v5, v6"),
    rvv_word!("vsrl.vi v4, v4, 4"),
    rvv_word!("vxor.vv v7, v4, v5"),
];

fn main() {
    println!("=== rvv_as_macros compile-time encoding ===\n");

    println!("vxor.vv v1, v1, v1      0x{CLEAR_V1:08x}");
    println!("vsrl.vi v3, v2, 1       0x{HALVE:08x}");
    println!("vrgather.vv v10, v8, v9 {}", hex(&GATHER));

    println!("\nKernel:");
    for word in KERNEL {
        println!("   0x{word:08x}");
    }
}

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}
