use serde::{Deserialize, Serialize};

use crate::instructions::{InstrDesc, Operands};

/// Encoding layout of a 32-bit instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Format {
    R,
    I,
    S,
    B,
    U,
    J,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Op {
    // RV32I
    Add,
    Sub,
    Sll,
    Slt,
    Sltu,
    Xor,
    Srl,
    Sra,
    Or,
    And,
    Addi,
    Slti,
    Sltiu,
    Xori,
    Ori,
    Andi,
    Slli,
    Srli,
    Srai,
    Lb,
    Lh,
    Lw,
    Lbu,
    Lhu,
    Sb,
    Sh,
    Sw,
    Beq,
    Bne,
    Blt,
    Bge,
    Bltu,
    Bgeu,
    Jal,
    Jalr,
    Lui,
    Auipc,
    Ecall,
    Ebreak,
    // M
    Mul,
    Mulh,
    Mulhsu,
    Mulhu,
    Div,
    Divu,
    Rem,
    Remu,
    // A
    LrW,
    ScW,
    AmoswapW,
    AmoaddW,
    AmoxorW,
    AmoandW,
    AmoorW,
    AmominW,
    AmomaxW,
    AmominuW,
    AmomaxuW,
}

/// The fixed bit-fields of an instruction word, each masked to its width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSet {
    pub opcode: u8,
    pub rd: u8,
    pub funct3: u8,
    pub rs1: u8,
    pub rs2: u8,
    pub funct7: u8,
    /// Only meaningful for atomics.
    pub funct5: u8,
}

impl FieldSet {
    pub fn from_word(raw32: u32) -> Self {
        Self {
            opcode: (raw32 & 0x7F) as u8,
            rd: ((raw32 >> 7) & 0x1F) as u8,
            funct3: ((raw32 >> 12) & 0x7) as u8,
            rs1: ((raw32 >> 15) & 0x1F) as u8,
            rs2: ((raw32 >> 20) & 0x1F) as u8,
            funct7: ((raw32 >> 25) & 0x7F) as u8,
            funct5: ((raw32 >> 27) & 0x1F) as u8,
        }
    }
}

/// A word matched against exactly one rule of the instruction table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    pub desc: &'static InstrDesc,
    pub raw: u32,
    pub fields: FieldSet,
    /// Sign-extended immediate for the rule's format; 0 for R-type.
    pub imm: i32,
}

impl Decoded {
    pub fn op(&self) -> Op {
        self.desc.op
    }

    pub fn mnemonic(&self) -> &'static str {
        self.desc.mnemonic
    }

    pub fn format(&self) -> Format {
        self.desc.format
    }

    pub fn operands(&self) -> Operands {
        self.desc.operands
    }
}

pub trait Decoder {
    fn decode(&self, raw32: u32) -> Option<Decoded>;
}
