//! Operand parsing: vector register names and 5-bit unsigned immediates.
//!
//! Both parsers are pure functions of their input token. A register token may
//! carry one trailing comma (`v3,`), which is stripped before interpretation.
//! The immediate parser does not strip commas: the immediate is always the
//! last operand of its line.

use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

use crate::error::EncodeError;

/// Highest encodable value of a 5-bit operand field.
const FIELD5_MAX: i64 = 31;

/// A RISC-V vector register (`v0`–`v31`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct VReg(u8);

impl VReg {
    /// Register number (0–31).
    #[must_use]
    pub fn num(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for VReg {
    type Error = EncodeError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        if i64::from(n) <= FIELD5_MAX {
            Ok(VReg(n))
        } else {
            Err(EncodeError::InvalidRegister {
                token: alloc::format!("v{}", n),
            })
        }
    }
}

impl From<VReg> for u8 {
    fn from(r: VReg) -> u8 {
        r.0
    }
}

impl fmt::Display for VReg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl FromStr for VReg {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_register(s)
    }
}

/// A 5-bit unsigned immediate (`zimm5`, 0–31).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct Zimm5(u8);

impl Zimm5 {
    /// Immediate value (0–31).
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Zimm5 {
    type Error = EncodeError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        if i64::from(v) <= FIELD5_MAX {
            Ok(Zimm5(v))
        } else {
            Err(EncodeError::InvalidImmediate {
                token: v.to_string(),
            })
        }
    }
}

impl From<Zimm5> for u8 {
    fn from(z: Zimm5) -> u8 {
        z.0
    }
}

impl fmt::Display for Zimm5 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Zimm5 {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_immediate(s)
    }
}

/// Parse a base-10 integer and check it fits a 5-bit unsigned field.
fn field5(digits: &str) -> Option<u8> {
    match digits.parse::<i64>() {
        Ok(v) if (0..=FIELD5_MAX).contains(&v) => Some(v as u8),
        _ => None,
    }
}

/// Parse a vector register token such as `v7` or `v7,`.
///
/// # Errors
///
/// Returns [`EncodeError::InvalidRegister`] if the `v` prefix is missing, the
/// remainder is not a base-10 integer, or the number is outside `0..=31`.
pub fn parse_register(token: &str) -> Result<VReg, EncodeError> {
    let name = token.strip_suffix(',').unwrap_or(token);
    name.strip_prefix('v')
        .and_then(field5)
        .map(VReg)
        .ok_or_else(|| EncodeError::InvalidRegister {
            token: name.to_string(),
        })
}

/// Parse a `zimm5` immediate token such as `17`.
///
/// # Errors
///
/// Returns [`EncodeError::InvalidImmediate`] if the token is not a base-10
/// integer or lies outside `0..=31`.
pub fn parse_immediate(token: &str) -> Result<Zimm5, EncodeError> {
    field5(token)
        .map(Zimm5)
        .ok_or_else(|| EncodeError::InvalidImmediate {
            token: token.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    fn bad_reg(token: &str) -> EncodeError {
        EncodeError::InvalidRegister {
            token: token.into(),
        }
    }

    fn bad_imm(token: &str) -> EncodeError {
        EncodeError::InvalidImmediate {
            token: token.into(),
        }
    }

    #[test]
    fn register_bounds() {
        assert_eq!(parse_register("v0").unwrap().num(), 0);
        assert_eq!(parse_register("v31").unwrap().num(), 31);
        assert_eq!(parse_register("v32"), Err(bad_reg("v32")));
    }

    #[test]
    fn register_strips_one_trailing_comma() {
        assert_eq!(parse_register("v5,").unwrap().num(), 5);
        assert_eq!(parse_register("v5,,"), Err(bad_reg("v5,")));
    }

    #[test]
    fn register_rejects_malformed() {
        assert_eq!(parse_register("v-1"), Err(bad_reg("v-1")));
        assert_eq!(parse_register("vx"), Err(bad_reg("vx")));
        assert_eq!(parse_register("v"), Err(bad_reg("v")));
        assert_eq!(parse_register("x5"), Err(bad_reg("x5")));
        assert_eq!(parse_register("5"), Err(bad_reg("5")));
        assert_eq!(parse_register(""), Err(bad_reg("")));
        assert_eq!(parse_register("V5"), Err(bad_reg("V5")));
        assert_eq!(parse_register("v0x1"), Err(bad_reg("v0x1")));
    }

    #[test]
    fn register_accepts_signed_decimal() {
        assert_eq!(parse_register("v+3").unwrap().num(), 3);
        assert_eq!(parse_register("v-0").unwrap().num(), 0);
        assert_eq!(parse_register("v007").unwrap().num(), 7);
    }

    #[test]
    fn register_huge_number_rejected() {
        let token = "v99999999999999999999999";
        assert_eq!(parse_register(token), Err(bad_reg(token)));
    }

    #[test]
    fn immediate_bounds() {
        assert_eq!(parse_immediate("0").unwrap().value(), 0);
        assert_eq!(parse_immediate("31").unwrap().value(), 31);
        assert_eq!(parse_immediate("32"), Err(bad_imm("32")));
        assert_eq!(parse_immediate("-1"), Err(bad_imm("-1")));
        assert_eq!(parse_immediate("abc"), Err(bad_imm("abc")));
    }

    #[test]
    fn immediate_keeps_trailing_comma() {
        assert_eq!(parse_immediate("1,"), Err(bad_imm("1,")));
    }

    #[test]
    fn immediate_rejects_prefixed_forms() {
        assert_eq!(parse_immediate("0x1f"), Err(bad_imm("0x1f")));
        assert_eq!(parse_immediate(""), Err(bad_imm("")));
    }

    #[test]
    fn try_from_enforces_range() {
        assert_eq!(VReg::try_from(31u8).map(u8::from), Ok(31));
        assert_eq!(VReg::try_from(32u8), Err(bad_reg("v32")));
        assert_eq!(Zimm5::try_from(12u8).map(u8::from), Ok(12));
        assert_eq!(Zimm5::try_from(200u8), Err(bad_imm("200")));
    }

    #[test]
    fn display_and_from_str() {
        let r: VReg = "v19".parse().unwrap();
        assert_eq!(format!("{}", r), "v19");
        let z: Zimm5 = "9".parse().unwrap();
        assert_eq!(format!("{}", z), "9");
    }
}
