use pretty_assertions::assert_eq;

use riscv_disasm::{
    disassemble, disassemble_word, DecodedInstruction, DisasmConfig, Rv32Decoder, UNRECOGNIZED,
};

fn abi() -> DisasmConfig {
    DisasmConfig { abi_names: true, ..DisasmConfig::default() }
}

fn enc_r(f7: u32, f3: u32, rd: u32, rs1: u32, rs2: u32) -> u32 {
    (f7 << 25) | (rs2 << 20) | (rs1 << 15) | (f3 << 12) | (rd << 7) | 0b011_0011
}

fn text(raw32: u32, cfg: &DisasmConfig) -> String {
    disassemble_word(&Rv32Decoder::new(), raw32, cfg).mnemonic
}

#[test]
fn addi_from_le_bytes() {
    let bytes = [0x13, 0x05, 0x05, 0x00];
    let out = disassemble(&Rv32Decoder::new(), &bytes, &abi());
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].0.address, 0);
    assert_eq!(out[0].0.raw, 0x0005_0513);
    assert_eq!(out[0].1.mnemonic, "addi a0,a0,#$00000000");
    assert!(out[0].1.recognized);
}

#[test]
fn add_abi_and_numeric() {
    let add = enc_r(0, 0, 1, 2, 3);
    assert_eq!(text(add, &abi()), "add ra,sp,gp");
    assert_eq!(text(add, &DisasmConfig::default()), "add x1,x2,x3");
}

#[test]
fn ecall_and_ebreak() {
    assert_eq!(text(0x0000_0073, &abi()), "ecall");
    assert_eq!(text(0x0010_0073, &abi()), "ebreak");
    // imm = 2 under funct3 = 0 is not ecall/ebreak
    assert_eq!(text(0x0020_0073, &abi()), UNRECOGNIZED);
    // csrrw (funct3 = 1) is not supported
    assert_eq!(text(0x3400_1073, &abi()), UNRECOGNIZED);
}

#[test]
fn unrecognized_word_does_not_stop_scan() {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&0xFFFF_FFFFu32.to_le_bytes());
    bytes.extend_from_slice(&0x0005_0513u32.to_le_bytes());
    let cfg = DisasmConfig { start_address: 0x100, ..abi() };
    let out = disassemble(&Rv32Decoder::new(), &bytes, &cfg);
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].0.address, 0x100);
    assert_eq!(out[0].1, DecodedInstruction::unrecognized());
    assert_eq!(out[1].0.address, 0x104);
    assert_eq!(out[1].1.mnemonic, "addi a0,a0,#$00000000");
}

#[test]
fn trailing_bytes_produce_no_output() {
    for tail in 1..=3usize {
        let mut bytes = 0x0010_0073u32.to_le_bytes().to_vec();
        bytes.extend(std::iter::repeat(0x13).take(tail));
        let out = disassemble(&Rv32Decoder::new(), &bytes, &abi());
        assert_eq!(out.len(), 1, "tail of {tail} bytes");
        assert_eq!(out[0].1.mnemonic, "ebreak");
    }
}

#[test]
fn decode_is_idempotent() {
    let dec = Rv32Decoder::new();
    let cfg = abi();
    for raw in [0x0005_0513, 0xFFDF_F06F, 0x1234_5537, 0xDEAD_BEEF, 0] {
        assert_eq!(disassemble_word(&dec, raw, &cfg), disassemble_word(&dec, raw, &cfg));
    }
}

#[test]
fn pseudo_flag_does_not_change_output() {
    let cfg = DisasmConfig { pseudo: true, ..abi() };
    // addi zero,zero,0 would be `nop` as a pseudo-instruction
    assert_eq!(text(0x0000_0013, &cfg), "addi zero,zero,#$00000000");
}
