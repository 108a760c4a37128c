use pfnc_unpack_codec::UnpackError;
use pfnc_unpack_formats::FormatError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    FileHandle(#[from] lightweight_mmap::handles::HandleOpenError),
    #[error(transparent)]
    MemoryMapping(#[from] lightweight_mmap::mmap::MmapError),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("Unknown pixel format name: {0}")]
    UnknownFormatName(String),
    #[error("{path}: {source}")]
    Unpack {
        path: PathBuf,
        #[source]
        source: UnpackError,
    },
    #[error("either --name or --code must be given")]
    MissingQuery,
    #[error("--width and --height must be given together")]
    IncompleteDimensions,
}
