//! Error types for instruction encoding.

use alloc::string::String;
use core::fmt;

/// Encoding error with the offending token and a descriptive message.
///
/// Every failure is reported through this type; nothing in the crate panics
/// on malformed input.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EncodeError {
    /// Token is not a vector register `v0`–`v31`.
    InvalidRegister {
        /// The rejected token, as written (trailing comma removed).
        token: String,
    },

    /// Token is not a base-10 integer in `0..=31`.
    InvalidImmediate {
        /// The rejected token, as written.
        token: String,
    },

    /// Wrong operand count, empty line, or a line handed to the wrong format.
    MalformedInstruction {
        /// Description of what is wrong with the line.
        detail: String,
    },

    /// No instruction format is registered for the mnemonic.
    UnknownMnemonic {
        /// The mnemonic that was not recognized.
        mnemonic: String,
    },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::InvalidRegister { token } => {
                write!(f, "invalid vector register '{}' (expected v0-v31)", token)
            }
            EncodeError::InvalidImmediate { token } => {
                write!(f, "invalid immediate '{}' (expected 0-31)", token)
            }
            EncodeError::MalformedInstruction { detail } => {
                write!(f, "malformed instruction: {}", detail)
            }
            EncodeError::UnknownMnemonic { mnemonic } => {
                write!(f, "unknown mnemonic '{}'", mnemonic)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EncodeError {}
