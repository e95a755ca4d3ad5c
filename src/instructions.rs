use crate::decoder::{Format, Op};

pub const OPC_LOAD: u8 = 0b000_0011;
pub const OPC_OP_IMM: u8 = 0b001_0011;
pub const OPC_AUIPC: u8 = 0b001_0111;
pub const OPC_STORE: u8 = 0b010_0011;
pub const OPC_AMO: u8 = 0b010_1111;
pub const OPC_OP: u8 = 0b011_0011;
pub const OPC_LUI: u8 = 0b011_0111;
pub const OPC_BRANCH: u8 = 0b110_0011;
pub const OPC_JALR: u8 = 0b110_0111;
pub const OPC_JAL: u8 = 0b110_1111;
pub const OPC_SYSTEM: u8 = 0b111_0011;

/// Sub-field that narrows an `(opcode, funct3)` pair down to one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sub {
    None,
    Funct7(u8),
    Funct5(u8),
    Imm12(u16),
}

/// Composite lookup key of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
    pub opcode: u8,
    pub funct3: Option<u8>,
    pub sub: Sub,
}

/// Operand shape used when rendering a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operands {
    /// `rd,rs1,rs2`
    RegRegReg,
    /// `rd,rs1,#$imm`
    RegRegImm,
    /// `rd,rs1,#$shamt`
    Shift,
    /// `rd,imm(rs1)`
    Load,
    /// `rs2,imm(rs1)`
    Store,
    /// `rs1,rs2,*+$imm`
    Branch,
    /// `rd,*+$imm`
    Jump,
    /// `rd,#$imm20`
    Upper,
    /// `rd,*+$imm20`
    UpperPc,
    /// `rd,rs1`
    LoadReserved,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstrDesc {
    pub key: Key,
    pub op: Op,
    pub mnemonic: &'static str,
    pub format: Format,
    pub operands: Operands,
}

const fn key(opcode: u8, funct3: Option<u8>, sub: Sub) -> Key {
    Key { opcode, funct3, sub }
}

const fn rtype(funct3: u8, funct7: u8, op: Op, mnemonic: &'static str) -> InstrDesc {
    InstrDesc {
        key: key(OPC_OP, Some(funct3), Sub::Funct7(funct7)),
        op,
        mnemonic,
        format: Format::R,
        operands: Operands::RegRegReg,
    }
}

const fn itype(opcode: u8, funct3: u8, op: Op, mnemonic: &'static str, operands: Operands) -> InstrDesc {
    InstrDesc {
        key: key(opcode, Some(funct3), Sub::None),
        op,
        mnemonic,
        format: Format::I,
        operands,
    }
}

const fn shift(funct3: u8, funct7: u8, op: Op, mnemonic: &'static str) -> InstrDesc {
    InstrDesc {
        key: key(OPC_OP_IMM, Some(funct3), Sub::Funct7(funct7)),
        op,
        mnemonic,
        format: Format::I,
        operands: Operands::Shift,
    }
}

const fn store(funct3: u8, op: Op, mnemonic: &'static str) -> InstrDesc {
    InstrDesc {
        key: key(OPC_STORE, Some(funct3), Sub::None),
        op,
        mnemonic,
        format: Format::S,
        operands: Operands::Store,
    }
}

const fn branch(funct3: u8, op: Op, mnemonic: &'static str) -> InstrDesc {
    InstrDesc {
        key: key(OPC_BRANCH, Some(funct3), Sub::None),
        op,
        mnemonic,
        format: Format::B,
        operands: Operands::Branch,
    }
}

const fn system(imm: u16, op: Op, mnemonic: &'static str) -> InstrDesc {
    InstrDesc {
        key: key(OPC_SYSTEM, Some(0), Sub::Imm12(imm)),
        op,
        mnemonic,
        format: Format::I,
        operands: Operands::None,
    }
}

const fn amo(funct5: u8, op: Op, mnemonic: &'static str) -> InstrDesc {
    InstrDesc {
        key: key(OPC_AMO, Some(0x2), Sub::Funct5(funct5)),
        op,
        mnemonic,
        format: Format::R,
        operands: if funct5 == 0x02 { Operands::LoadReserved } else { Operands::RegRegReg },
    }
}

/// Every recognized encoding. Keys are unique; see `tests::keys_are_unique`.
pub const TABLE: &[InstrDesc] = &[
    // RV32I register-register
    rtype(0x0, 0x00, Op::Add, "add"),
    rtype(0x0, 0x20, Op::Sub, "sub"),
    rtype(0x1, 0x00, Op::Sll, "sll"),
    rtype(0x2, 0x00, Op::Slt, "slt"),
    rtype(0x3, 0x00, Op::Sltu, "sltu"),
    rtype(0x4, 0x00, Op::Xor, "xor"),
    rtype(0x5, 0x00, Op::Srl, "srl"),
    rtype(0x5, 0x20, Op::Sra, "sra"),
    rtype(0x6, 0x00, Op::Or, "or"),
    rtype(0x7, 0x00, Op::And, "and"),
    // RV32I register-immediate
    itype(OPC_OP_IMM, 0x0, Op::Addi, "addi", Operands::RegRegImm),
    itype(OPC_OP_IMM, 0x2, Op::Slti, "slti", Operands::RegRegImm),
    itype(OPC_OP_IMM, 0x3, Op::Sltiu, "sltiu", Operands::RegRegImm),
    itype(OPC_OP_IMM, 0x4, Op::Xori, "xori", Operands::RegRegImm),
    itype(OPC_OP_IMM, 0x6, Op::Ori, "ori", Operands::RegRegImm),
    itype(OPC_OP_IMM, 0x7, Op::Andi, "andi", Operands::RegRegImm),
    shift(0x1, 0x00, Op::Slli, "slli"),
    shift(0x5, 0x00, Op::Srli, "srli"),
    shift(0x5, 0x20, Op::Srai, "srai"),
    // loads
    itype(OPC_LOAD, 0x0, Op::Lb, "lb", Operands::Load),
    itype(OPC_LOAD, 0x1, Op::Lh, "lh", Operands::Load),
    itype(OPC_LOAD, 0x2, Op::Lw, "lw", Operands::Load),
    itype(OPC_LOAD, 0x4, Op::Lbu, "lbu", Operands::Load),
    itype(OPC_LOAD, 0x5, Op::Lhu, "lhu", Operands::Load),
    // stores
    store(0x0, Op::Sb, "sb"),
    store(0x1, Op::Sh, "sh"),
    store(0x2, Op::Sw, "sw"),
    // branches
    branch(0x0, Op::Beq, "beq"),
    branch(0x1, Op::Bne, "bne"),
    branch(0x4, Op::Blt, "blt"),
    branch(0x5, Op::Bge, "bge"),
    branch(0x6, Op::Bltu, "bltu"),
    branch(0x7, Op::Bgeu, "bgeu"),
    // jumps and upper immediates
    InstrDesc {
        key: key(OPC_JAL, None, Sub::None),
        op: Op::Jal,
        mnemonic: "jal",
        format: Format::J,
        operands: Operands::Jump,
    },
    itype(OPC_JALR, 0x0, Op::Jalr, "jalr", Operands::Load),
    InstrDesc {
        key: key(OPC_LUI, None, Sub::None),
        op: Op::Lui,
        mnemonic: "lui",
        format: Format::U,
        operands: Operands::Upper,
    },
    InstrDesc {
        key: key(OPC_AUIPC, None, Sub::None),
        op: Op::Auipc,
        mnemonic: "auipc",
        format: Format::U,
        operands: Operands::UpperPc,
    },
    system(0x000, Op::Ecall, "ecall"),
    system(0x001, Op::Ebreak, "ebreak"),
    // M extension
    rtype(0x0, 0x01, Op::Mul, "mul"),
    rtype(0x1, 0x01, Op::Mulh, "mulh"),
    rtype(0x2, 0x01, Op::Mulhsu, "mulhsu"),
    rtype(0x3, 0x01, Op::Mulhu, "mulhu"),
    rtype(0x4, 0x01, Op::Div, "div"),
    rtype(0x5, 0x01, Op::Divu, "divu"),
    rtype(0x6, 0x01, Op::Rem, "rem"),
    rtype(0x7, 0x01, Op::Remu, "remu"),
    // A extension
    amo(0x02, Op::LrW, "lr.w"),
    amo(0x03, Op::ScW, "sc.w"),
    amo(0x01, Op::AmoswapW, "amoswap.w"),
    amo(0x00, Op::AmoaddW, "amoadd.w"),
    amo(0x04, Op::AmoxorW, "amoxor.w"),
    amo(0x0c, Op::AmoandW, "amoand.w"),
    amo(0x0a, Op::AmoorW, "amoor.w"),
    amo(0x10, Op::AmominW, "amomin.w"),
    amo(0x14, Op::AmomaxW, "amomax.w"),
    amo(0x18, Op::AmominuW, "amominu.w"),
    amo(0x1c, Op::AmomaxuW, "amomaxu.w"),
];
