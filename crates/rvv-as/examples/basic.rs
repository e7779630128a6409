//! Basic encoding example — one word per supported instruction form.
//!
//! Run with: `cargo run --example basic`

use rvv_as::{assemble, assemble_bytes, lookup};

fn main() {
    println!("=== rvv_as basic example ===\n");

    let instruction = "vand.vv v31, v0, v0";
    match assemble(instruction) {
        Ok(word) => println!("Opcode: 0x{:08x}", word),
        Err(e) => {
            println!("Error: {}", e);
            return;
        }
    }

    println!("\nAll forms:");
    for line in [
        "vand.vv v1, v2, v3",
        "vxor.vv v0, v15, v0",
        "vrgather.vv v1, v0, v0",
        "vsrl.vi v4, v8, 31",
    ] {
        let word = assemble(line).unwrap();
        let mnemonic = line.split_whitespace().next().unwrap_or_default();
        let syntax = lookup(mnemonic).map(|f| f.syntax()).unwrap_or_default();
        println!("   {:<24} 0x{:08x}   ({})", line, word, syntax);
    }

    println!("\nInstruction-stream bytes (little-endian):");
    let bytes = assemble_bytes("vsrl.vi v0, v0, 1").unwrap();
    print_hex("   ", &bytes);

    println!("\nErrors are values, not panics:");
    for bad in ["vadd.vv v0, v0, v0", "vand.vv v32, v0, v0", "vsrl.vi v0, v0, 40"] {
        println!("   {:<24} {}", bad, assemble(bad).unwrap_err());
    }
}

fn print_hex(prefix: &str, bytes: &[u8]) {
    let hex: Vec<String> = bytes.iter().map(|b| format!("{:02X}", b)).collect();
    println!("{}{}", prefix, hex.join(" "));
}
