//! Table-driven RISC-V vector (V extension) instruction encoder.
//!
//! Every supported mnemonic is described by an [`InstrFormat`]: a fixed
//! template holding the bits that never change for that instruction, plus an
//! ordered list of operand fields. Encoding parses each operand token and ORs
//! it into the template at its field offset.
//!
//! ## OP-V arithmetic format
//!
//! ```text
//!  31    26  25  24   20 19   15 14  12 11  7 6      0
//! [ funct6 | vm | vs2   | vs1/imm| funct3| vd  | 1010111 ]
//! ```
//!
//! The assembler operand order is `vd, vs2, vs1` (or `vd, vs2, imm`): the
//! first source token lands in bits 20–24, the second in bits 15–19.

use alloc::format;
use alloc::string::String;

use crate::error::EncodeError;
use crate::operand::{parse_immediate, parse_register};

// ── Opcodes ─────────────────────────────────────────────────────────────

const OP_V: u32 = 0b101_0111; // Vector arithmetic

// ── funct3 operand categories ───────────────────────────────────────────

const OPIVV: u32 = 0b000; // vector-vector
const OPIVI: u32 = 0b011; // vector-immediate

// ── Field offsets ───────────────────────────────────────────────────────

const VD: u32 = 7;
const VS1: u32 = 15;
const VS2: u32 = 20;

/// Unmasked operation (`vm` = 1).
const UNMASKED: u32 = 1;

/// Compose the constant part of an OP-V arithmetic instruction.
const fn op_v(funct6: u32, funct3: u32) -> u32 {
    (funct6 << 26) | (UNMASKED << 25) | (funct3 << 12) | OP_V
}

/// What an operand token must parse as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OperandKind {
    /// Vector register `v0`–`v31`.
    VReg,
    /// 5-bit unsigned immediate `0`–`31`.
    Zimm5,
}

/// One operand slot: its kind and the bit offset of its 5-bit field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// How the token is parsed.
    pub kind: OperandKind,
    /// Bit position of the field's least significant bit.
    pub shift: u32,
    /// Operand name used in syntax strings (`vd`, `vs2`, `zimm5`).
    pub name: &'static str,
}

impl Field {
    const fn vreg(name: &'static str, shift: u32) -> Self {
        Field {
            kind: OperandKind::VReg,
            shift,
            name,
        }
    }

    const fn zimm5(shift: u32) -> Self {
        Field {
            kind: OperandKind::Zimm5,
            shift,
            name: "zimm5",
        }
    }

    /// Parse `token` and return its value shifted into place.
    fn place(&self, token: &str) -> Result<u32, EncodeError> {
        let value = match self.kind {
            OperandKind::VReg => parse_register(token)?.num(),
            OperandKind::Zimm5 => parse_immediate(token)?.value(),
        };
        Ok(u32::from(value) << self.shift)
    }
}

/// Declarative description of one instruction form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstrFormat {
    /// Assembler mnemonic, e.g. `vand.vv`.
    pub mnemonic: &'static str,
    /// Bits fixed for this form: funct6, vm, funct3 and opcode.
    pub template: u32,
    /// Operand fields in assembler order.
    pub operands: [Field; 3],
}

const VV: [Field; 3] = [
    Field::vreg("vd", VD),
    Field::vreg("vs2", VS2),
    Field::vreg("vs1", VS1),
];

const VI: [Field; 3] = [Field::vreg("vd", VD), Field::vreg("vs2", VS2), Field::zimm5(VS1)];

/// All supported instruction forms.
pub static FORMATS: &[InstrFormat] = &[
    InstrFormat {
        mnemonic: "vand.vv",
        template: op_v(0b001001, OPIVV),
        operands: VV,
    },
    InstrFormat {
        mnemonic: "vxor.vv",
        template: op_v(0b001011, OPIVV),
        operands: VV,
    },
    InstrFormat {
        mnemonic: "vrgather.vv",
        template: op_v(0b001100, OPIVV),
        operands: VV,
    },
    InstrFormat {
        mnemonic: "vsrl.vi",
        template: op_v(0b101000, OPIVI),
        operands: VI,
    },
];

/// Find the format registered for `mnemonic` (case-sensitive).
#[must_use]
pub fn lookup(mnemonic: &str) -> Option<&'static InstrFormat> {
    FORMATS.iter().find(|f| f.mnemonic == mnemonic)
}

impl InstrFormat {
    /// Number of operand tokens the form takes.
    #[must_use]
    pub fn operand_count(&self) -> usize {
        self.operands.len()
    }

    /// Assembler syntax, e.g. `vsrl.vi vd, vs2, zimm5`.
    #[must_use]
    pub fn syntax(&self) -> String {
        let names: alloc::vec::Vec<&str> = self.operands.iter().map(|f| f.name).collect();
        format!("{} {}", self.mnemonic, names.join(", "))
    }

    /// Encode a tokenized line: `tokens[0]` is the mnemonic, the rest are
    /// operands.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::MalformedInstruction`] if `tokens[0]` is not this
    /// form's mnemonic or the operand count is wrong, otherwise the first
    /// operand parse error.
    pub fn encode(&self, tokens: &[&str]) -> Result<u32, EncodeError> {
        let Some((&mnemonic, ops)) = tokens.split_first() else {
            return Err(EncodeError::MalformedInstruction {
                detail: String::from("empty instruction"),
            });
        };
        if mnemonic != self.mnemonic {
            return Err(EncodeError::MalformedInstruction {
                detail: format!("'{}' is not encoded by '{}'", mnemonic, self.mnemonic),
            });
        }
        if ops.len() != self.operand_count() {
            return Err(EncodeError::MalformedInstruction {
                detail: format!(
                    "'{}' takes {} operand(s), got {} (expected `{}`)",
                    self.mnemonic,
                    self.operand_count(),
                    ops.len(),
                    self.syntax()
                ),
            });
        }

        let mut word = self.template;
        for (field, token) in self.operands.iter().zip(ops) {
            word |= field.place(token)?;
        }
        Ok(word)
    }
}
