use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// How register operands are spelled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegNames {
    /// `x0` .. `x31`
    #[default]
    Numeric,
    /// Calling-convention names (`zero`, `ra`, `sp`, ...).
    Abi,
}

const ABI: [&str; 32] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", //
    "fp", "s1", "a0", "a1", "a2", "a3", "a4", "a5", //
    "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", //
    "s8", "s9", "s10", "s11", "t3", "t4", "t5", "t6",
];

/// Name of register `reg`. Only the low 5 bits are used.
pub fn reg_name(reg: u8, names: RegNames) -> Cow<'static, str> {
    let reg = reg & 0x1F;
    match names {
        RegNames::Abi => Cow::Borrowed(ABI[reg as usize]),
        RegNames::Numeric => Cow::Owned(format!("x{reg}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abi_names_follow_calling_convention() {
        let n = |r| reg_name(r, RegNames::Abi);
        assert_eq!(n(0), "zero");
        assert_eq!(n(1), "ra");
        assert_eq!(n(2), "sp");
        assert_eq!(n(3), "gp");
        assert_eq!(n(4), "tp");
        assert_eq!(n(5), "t0");
        assert_eq!(n(7), "t2");
        assert_eq!(n(8), "fp");
        assert_eq!(n(9), "s1");
        assert_eq!(n(10), "a0");
        assert_eq!(n(17), "a7");
        assert_eq!(n(18), "s2");
        assert_eq!(n(27), "s11");
        assert_eq!(n(28), "t3");
        assert_eq!(n(31), "t6");
    }

    #[test]
    fn numeric_names() {
        assert_eq!(reg_name(0, RegNames::Numeric), "x0");
        assert_eq!(reg_name(31, RegNames::Numeric), "x31");
    }

    #[test]
    fn index_is_masked() {
        assert_eq!(reg_name(33, RegNames::Abi), "ra");
        assert_eq!(reg_name(0xFF, RegNames::Numeric), "x31");
    }
}
