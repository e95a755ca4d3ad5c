//! Immediate reassembly for each encoding format.
//!
//! Every builder takes the sign from bit 31 of the word. The returned value
//! is already sign-extended to 32 bits.

use crate::decoder::Format;

/// Sign-extends the low `bits` bits of `v`.
#[inline]
pub fn sign_extend(v: u32, bits: u32) -> i32 {
    let s = 32 - bits;
    ((v << s) as i32) >> s
}

/// I-type: bits 31..20.
pub fn i_imm(raw32: u32) -> i32 {
    (raw32 as i32) >> 20
}

/// S-type: bits 31..25 concatenated above bits 11..7.
pub fn s_imm(raw32: u32) -> i32 {
    let hi7 = (raw32 >> 25) & 0x7F;
    let lo5 = (raw32 >> 7) & 0x1F;
    sign_extend((hi7 << 5) | lo5, 12)
}

/// B-type: 13-bit even offset.
pub fn b_imm(raw32: u32) -> i32 {
    let bit12 = (raw32 >> 31) & 0x1;
    let bit11 = (raw32 >> 7) & 0x1;
    let bits10_5 = (raw32 >> 25) & 0x3F;
    let bits4_1 = (raw32 >> 8) & 0xF;
    let off = (bit12 << 12) | (bit11 << 11) | (bits10_5 << 5) | (bits4_1 << 1);
    sign_extend(off, 13)
}

/// U-type: bits 31..12 in place, low 12 bits zero.
pub fn u_imm(raw32: u32) -> i32 {
    (raw32 & 0xFFFF_F000) as i32
}

/// J-type: 21-bit even offset.
pub fn j_imm(raw32: u32) -> i32 {
    let bit20 = (raw32 >> 31) & 0x1;
    let bits10_1 = (raw32 >> 21) & 0x3FF;
    let bit11 = (raw32 >> 20) & 0x1;
    let bits19_12 = (raw32 >> 12) & 0xFF;
    let off = (bit20 << 20) | (bits19_12 << 12) | (bit11 << 11) | (bits10_1 << 1);
    sign_extend(off, 21)
}

pub fn for_format(format: Format, raw32: u32) -> i32 {
    match format {
        Format::R => 0,
        Format::I => i_imm(raw32),
        Format::S => s_imm(raw32),
        Format::B => b_imm(raw32),
        Format::U => u_imm(raw32),
        Format::J => j_imm(raw32),
    }
}
