use std::io;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum DisasmError {
    #[error("input file '{}' not found", path.display())]
    NotFound { path: PathBuf },
    #[error("cannot read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("skip of {skip} bytes exceeds file size {size}")]
    SkipOutOfRange { skip: usize, size: usize },
    #[error("length {len} exceeds the {remaining} bytes left after skip")]
    LenOutOfRange { len: usize, remaining: usize },
}

impl DisasmError {
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Read { path, source },
        }
    }
}
