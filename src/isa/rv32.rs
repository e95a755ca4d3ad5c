use std::collections::HashMap;

use crate::decoder::{Decoded, Decoder, FieldSet};
use crate::imm;
use crate::instructions::{
    InstrDesc, Key, Sub, OPC_AMO, OPC_BRANCH, OPC_JALR, OPC_LOAD, OPC_OP, OPC_OP_IMM, OPC_STORE,
    OPC_SYSTEM, TABLE,
};

/// RV32I decoder with the M and A extensions.
///
/// Each word is reduced to a [`Key`] whose shape depends only on the major
/// opcode, then looked up in a map built from [`TABLE`]. A word matches one
/// rule or none; table order never matters.
#[derive(Debug, Clone)]
pub struct Rv32Decoder {
    rules: HashMap<Key, &'static InstrDesc>,
}

impl Rv32Decoder {
    pub fn new() -> Self {
        let rules = TABLE.iter().map(|d| (d.key, d)).collect();
        Self { rules }
    }

    /// Number of distinct encodings this decoder recognizes.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

impl Default for Rv32Decoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the lookup key for a word. Opcodes outside the table get a key
/// with no sub-fields, which never matches.
pub fn key_of(f: &FieldSet, raw32: u32) -> Key {
    let (funct3, sub) = match f.opcode {
        OPC_OP => (Some(f.funct3), Sub::Funct7(f.funct7)),
        // slli/srli/srai: imm[11:5] picks logical vs arithmetic
        OPC_OP_IMM if matches!(f.funct3, 0x1 | 0x5) => (Some(f.funct3), Sub::Funct7(f.funct7)),
        OPC_OP_IMM | OPC_LOAD | OPC_STORE | OPC_BRANCH | OPC_JALR => (Some(f.funct3), Sub::None),
        OPC_SYSTEM => (Some(f.funct3), Sub::Imm12((raw32 >> 20) as u16)),
        OPC_AMO => (Some(f.funct3), Sub::Funct5(f.funct5)),
        // lui, auipc and jal have no sub-fields
        _ => (None, Sub::None),
    };
    Key { opcode: f.opcode, funct3, sub }
}

impl Decoder for Rv32Decoder {
    fn decode(&self, raw32: u32) -> Option<Decoded> {
        let fields = FieldSet::from_word(raw32);
        let key = key_of(&fields, raw32);
        let Some(&desc) = self.rules.get(&key) else {
            tracing::trace!(raw32, ?key, "no rule");
            return None;
        };
        Some(Decoded {
            desc,
            raw: raw32,
            fields,
            imm: imm::for_format(desc.format, raw32),
        })
    }
}
