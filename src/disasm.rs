use serde::{Deserialize, Serialize};

use crate::config::DisasmConfig;
use crate::decoder::{Decoded, Decoder};
use crate::instructions::Operands;
use crate::regs::{reg_name, RegNames};
use crate::stream::{Word, WordStream};

/// Text rendered for a word that matches no rule.
pub const UNRECOGNIZED: &str = "???";

/// Rendered form of one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedInstruction {
    pub mnemonic: String,
    pub recognized: bool,
}

impl DecodedInstruction {
    pub fn unrecognized() -> Self {
        Self {
            mnemonic: UNRECOGNIZED.to_string(),
            recognized: false,
        }
    }
}

pub fn fmt_decoded(d: &Decoded, names: RegNames) -> String {
    let r = |n| reg_name(n, names);
    let f = &d.fields;
    let mn = d.mnemonic();
    // two's-complement bit pattern, no minus sign
    let imm = d.imm as u32;
    match d.operands() {
        Operands::RegRegReg => format!("{mn} {},{},{}", r(f.rd), r(f.rs1), r(f.rs2)),
        Operands::RegRegImm => format!("{mn} {},{},#${imm:08x}", r(f.rd), r(f.rs1)),
        Operands::Shift => format!("{mn} {},{},#${:08x}", r(f.rd), r(f.rs1), f.rs2),
        Operands::Load => format!("{mn} {},{imm:08x}({})", r(f.rd), r(f.rs1)),
        Operands::Store => format!("{mn} {},{imm:08x}({})", r(f.rs2), r(f.rs1)),
        Operands::Branch => format!("{mn} {},{},*+${imm:08x}", r(f.rs1), r(f.rs2)),
        Operands::Jump => format!("{mn} {},*+${imm:08x}", r(f.rd)),
        Operands::Upper => format!("{mn} {},#${:08x}", r(f.rd), imm >> 12),
        Operands::UpperPc => format!("{mn} {},*+${:08x}", r(f.rd), imm >> 12),
        Operands::LoadReserved => format!("{mn} {},{}", r(f.rd), r(f.rs1)),
        Operands::None => mn.to_string(),
    }
}

/// Decodes and renders a single word.
pub fn disassemble_word<D: Decoder>(dec: &D, raw32: u32, cfg: &DisasmConfig) -> DecodedInstruction {
    match dec.decode(raw32) {
        Some(d) => DecodedInstruction {
            mnemonic: fmt_decoded(&d, cfg.reg_names()),
            recognized: true,
        },
        None => DecodedInstruction::unrecognized(),
    }
}

/// Linear sweep over `bytes` starting at `cfg.start_address`.
pub fn disassemble<D: Decoder>(
    dec: &D,
    bytes: &[u8],
    cfg: &DisasmConfig,
) -> Vec<(Word, DecodedInstruction)> {
    if cfg.pseudo {
        tracing::debug!("pseudo-instruction rendering is reserved and has no effect");
    }
    let words = WordStream::new(bytes, cfg.start_address);
    let tail = words.remainder();
    let out: Vec<_> = words
        .map(|w| (w, disassemble_word(dec, w.raw, cfg)))
        .collect();
    if tail != 0 {
        tracing::debug!(tail, "dropping incomplete trailing word");
    }
    out
}
