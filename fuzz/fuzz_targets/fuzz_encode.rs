#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Must never panic, only return Ok/Err.
    let word = rvv_as::assemble(data);

    // Byte form agrees with the word form.
    assert_eq!(
        rvv_as::assemble_bytes(data),
        word.clone().map(u32::to_le_bytes)
    );

    // Every accepted line is an unmasked OP-V instruction.
    if let Ok(w) = word {
        assert_eq!(w & 0x7f, 0x57);
        assert_eq!((w >> 25) & 1, 1);
    }

    // Per-line encoding, the way a batch front end drives it.
    for line in data.lines() {
        let _ = rvv_as::encode(line);
    }
});
