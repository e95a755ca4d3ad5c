use std::path::Path;

use riscv_disasm::{DisasmError, WordStream};

/// A raw binary mapped at a single base address.
#[derive(Debug, Clone)]
pub struct Image {
    pub base: u32,
    pub bytes: Vec<u8>,
}

impl Image {
    pub fn words(&self) -> WordStream<'_> {
        WordStream::new(&self.bytes, self.base)
    }
}

pub fn load_raw_bin(path: &Path, base: u32, skip: usize, len: Option<usize>) -> Result<Image, DisasmError> {
    let file = std::fs::read(path).map_err(|e| DisasmError::from_io(path, e))?;
    if skip > file.len() {
        return Err(DisasmError::SkipOutOfRange { skip, size: file.len() });
    }
    let mut payload = &file[skip..];
    if let Some(lim) = len {
        if lim > payload.len() {
            return Err(DisasmError::LenOutOfRange { len: lim, remaining: payload.len() });
        }
        payload = &payload[..lim];
    }
    tracing::info!(path = %path.display(), bytes = payload.len(), base, "loaded");
    Ok(Image { base, bytes: payload.to_vec() })
}
