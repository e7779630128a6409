//! # rvv-as — RISC-V Vector Instruction Encoder
//!
//! `rvv-as` turns one line of RISC-V vector (RVV) assembly into its 32-bit
//! machine word. Each line is encoded independently: there are no labels,
//! sections, or object files.
//!
//! ## Quick Start
//!
//! ```rust
//! use rvv_as::assemble;
//!
//! let word = assemble("vand.vv v31, v0, v0").unwrap();
//! assert_eq!(word, 0x26000fd7);
//! ```
//!
//! ## Supported instructions
//!
//! | Mnemonic      | Syntax                     |
//! |---------------|----------------------------|
//! | `vand.vv`     | `vand.vv vd, vs2, vs1`     |
//! | `vxor.vv`     | `vxor.vv vd, vs2, vs1`     |
//! | `vrgather.vv` | `vrgather.vv vd, vs2, vs1` |
//! | `vsrl.vi`     | `vsrl.vi vd, vs2, zimm5`   |
//!
//! All forms are unmasked. Register operands may carry a trailing comma.
//!
//! ## Features
//!
//! - **`std`** (default) — implements `std::error::Error` for [`EncodeError`].
//!   Without it the crate is `no_std` + `alloc`.
//! - **`serde`** — `Serialize`/`Deserialize` for operand and error types.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
// Encoders shift and narrow small integers constantly and write opcodes as
// dense hex literals.
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::unreadable_literal,
    clippy::module_name_repetitions,
    clippy::uninlined_format_args,
    clippy::must_use_candidate
)]

extern crate alloc;

/// Table-driven encoder: instruction formats and the mnemonic table.
pub mod encoder;
/// Error type for every encoding failure.
pub mod error;
/// Register and immediate operand parsers.
pub mod operand;

// Re-exports
pub use encoder::{lookup, Field, InstrFormat, OperandKind, FORMATS};
pub use error::EncodeError;
pub use operand::{parse_immediate, parse_register, VReg, Zimm5};

use alloc::string::String;
use alloc::vec::Vec;

/// Encode one line of vector assembly into a 32-bit instruction word.
///
/// The line is split on whitespace; the first token selects the instruction
/// format and the remaining tokens are its operands.
///
/// # Errors
///
/// Returns [`EncodeError::UnknownMnemonic`] for an unsupported mnemonic,
/// [`EncodeError::MalformedInstruction`] for an empty line or a wrong operand
/// count, and [`EncodeError::InvalidRegister`] /
/// [`EncodeError::InvalidImmediate`] for a bad operand.
///
/// # Examples
///
/// ```rust
/// use rvv_as::{assemble, EncodeError};
///
/// assert_eq!(assemble("vsrl.vi v0, v0, 31"), Ok(0xa20fb057));
/// assert!(matches!(
///     assemble("vadd.vv v0, v0, v0"),
///     Err(EncodeError::UnknownMnemonic { .. })
/// ));
/// ```
pub fn assemble(text: &str) -> Result<u32, EncodeError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let Some(&mnemonic) = tokens.first() else {
        return Err(EncodeError::MalformedInstruction {
            detail: String::from("empty instruction"),
        });
    };
    let format = lookup(mnemonic).ok_or_else(|| EncodeError::UnknownMnemonic {
        mnemonic: String::from(mnemonic),
    })?;
    format.encode(&tokens)
}

/// Encode one line; the entry point front ends call per input line.
///
/// Identical to [`assemble`].
///
/// # Errors
///
/// See [`assemble`].
#[inline]
pub fn encode(line: &str) -> Result<u32, EncodeError> {
    assemble(line)
}

/// Encode one line and return the word in instruction-stream byte order
/// (little-endian).
///
/// # Errors
///
/// See [`assemble`].
///
/// # Examples
///
/// ```rust
/// use rvv_as::assemble_bytes;
///
/// let bytes = assemble_bytes("vrgather.vv v1, v0, v0").unwrap();
/// assert_eq!(bytes, [0xd7, 0x00, 0x00, 0x32]);
/// ```
pub fn assemble_bytes(text: &str) -> Result<[u8; 4], EncodeError> {
    assemble(text).map(u32::to_le_bytes)
}

/// The supported mnemonics, in table order.
pub fn mnemonics() -> impl Iterator<Item = &'static str> {
    FORMATS.iter().map(|f| f.mnemonic)
}
