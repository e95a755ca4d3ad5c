use std::fmt::Write as _;

use serde::Serialize;

use riscv_disasm::{disassemble, Decoder, DisasmConfig};

use crate::model::Image;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingLine {
    pub address: u32,
    pub word: u32,
    pub mnemonic: String,
    pub recognized: bool,
}

/// Linear listing of every whole word in `img`.
pub fn listing<D: Decoder>(img: &Image, dec: &D, cfg: &DisasmConfig) -> Vec<ListingLine> {
    let cfg = DisasmConfig { start_address: img.base, ..*cfg };
    disassemble(dec, &img.bytes, &cfg)
        .into_iter()
        .map(|(w, d)| ListingLine {
            address: w.address,
            word: w.raw,
            mnemonic: d.mnemonic,
            recognized: d.recognized,
        })
        .collect()
}

pub fn format_line(line: &ListingLine, list_bytes: bool) -> String {
    if list_bytes {
        format!("{:08x}  {:08x}  {}", line.address, line.word, line.mnemonic)
    } else {
        format!(" {}", line.mnemonic)
    }
}

pub fn render_text(lines: &[ListingLine], list_bytes: bool) -> String {
    let mut buf = String::new();
    for l in lines {
        let _ = writeln!(buf, "{}", format_line(l, list_bytes));
    }
    buf
}

pub fn render_json(lines: &[ListingLine]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use riscv_disasm::Rv32Decoder;

    fn image(words: &[u32], tail: &[u8]) -> Image {
        let mut bytes: Vec<u8> = words.iter().flat_map(|w| w.to_le_bytes()).collect();
        bytes.extend_from_slice(tail);
        Image { base: 0x8000_0000, bytes }
    }

    #[test]
    fn text_listing_with_and_without_bytes() {
        let img = image(&[0x0005_0513, 0xFFFF_FFFF, 0x0010_0073], &[0xAA, 0xBB]);
        let cfg = DisasmConfig { abi_names: true, ..DisasmConfig::default() };
        let lines = listing(&img, &Rv32Decoder::new(), &cfg);
        assert_eq!(
            render_text(&lines, true),
            "80000000  00050513  addi a0,a0,#$00000000\n\
             80000004  ffffffff  ???\n\
             80000008  00100073  ebreak\n"
        );
        assert_eq!(
            render_text(&lines, false),
            " addi a0,a0,#$00000000\n ???\n ebreak\n"
        );
    }

    #[test]
    fn json_listing_has_records() {
        let img = image(&[0x0000_0073], &[]);
        let lines = listing(&img, &Rv32Decoder::new(), &DisasmConfig::default());
        let v: serde_json::Value = serde_json::from_str(&render_json(&lines).unwrap()).unwrap();
        assert_eq!(v[0]["address"], 0x8000_0000u32);
        assert_eq!(v[0]["word"], 0x73);
        assert_eq!(v[0]["mnemonic"], "ecall");
        assert_eq!(v[0]["recognized"], true);
    }
}
