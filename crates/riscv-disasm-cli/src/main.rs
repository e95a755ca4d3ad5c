use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use std::io::Write as _;
use std::path::PathBuf;

use riscv_disasm::{DisasmConfig, Rv32Decoder};
use riscv_disasm_cli::{listing, load_raw_bin, render_json, render_text};

#[derive(Parser, Debug)]
#[command(author, version, about = "RV32IMA disassembler", long_about = None)]
struct Cli {
    /// Binary file to disassemble
    #[arg(value_name = "FILE")]
    input: PathBuf,
    /// Starting address (decimal or 0x-prefixed hex)
    #[arg(short, long, default_value = "0", value_parser = parse_u32)]
    address: u32,
    /// Don't list address and instruction bytes (output suitable for an assembler)
    #[arg(short, long)]
    nolist: bool,
    /// Use common pseudo instructions (reserved, no effect yet)
    #[arg(short, long)]
    pseudo: bool,
    /// Use ABI register names (e.g. sp)
    #[arg(short = 'r', long)]
    abinames: bool,
    /// Skip N bytes at start of file before decoding
    #[arg(long, default_value_t = 0usize)]
    skip: usize,
    /// Limit bytes decoded (default: to EOF after --skip)
    #[arg(long)]
    len: Option<usize>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Write output to file instead of stdout
    #[arg(long, value_name = "FILE")]
    out: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    fn config(&self) -> DisasmConfig {
        DisasmConfig {
            start_address: self.address,
            list_bytes: !self.nolist,
            abi_names: self.abinames,
            pseudo: self.pseudo,
        }
    }
}

fn parse_u32(s: &str) -> Result<u32> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Ok(u32::from_str_radix(hex, 16)?)
    } else {
        Ok(s.parse::<u32>()?)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = cli.config();
    let img = load_raw_bin(&cli.input, cfg.start_address, cli.skip, cli.len)?;

    let dec = Rv32Decoder::new();
    let lines = listing(&img, &dec, &cfg);
    let text = match cli.format {
        OutputFormat::Text => render_text(&lines, cfg.list_bytes),
        OutputFormat::Json => render_json(&lines)? + "\n",
    };

    match &cli.out {
        Some(path) => std::fs::write(path, text)
            .with_context(|| format!("cannot write '{}'", path.display()))?,
        None => std::io::stdout().lock().write_all(text.as_bytes())?,
    }

    Ok(())
}
