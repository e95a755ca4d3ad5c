pub mod config;
pub mod decoder;
pub mod disasm;
pub mod error;
pub mod imm;
pub mod instructions;
pub mod regs;
pub mod stream;

pub mod isa {
    pub mod rv32; // RV32I + M + A
}

pub use config::DisasmConfig;
pub use decoder::{Decoded, Decoder, FieldSet, Format, Op};
pub use disasm::{disassemble, disassemble_word, fmt_decoded, DecodedInstruction, UNRECOGNIZED};
pub use error::DisasmError;
pub use isa::rv32::Rv32Decoder;
pub use regs::{reg_name, RegNames};
pub use stream::{Word, WordStream};
