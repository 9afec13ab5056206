// src/error.rs
use std::io;
use std::string::FromUtf8Error;

use thiserror::Error;

/// A failure while cleaning a single file. Never fatal to the run.
#[derive(Debug, Error)]
pub enum FileProcessingError {
    #[error("could not read file: {source}")]
    Read {
        #[source]
        source: io::Error,
    },
    #[error("file is not valid UTF-8: {source}")]
    Decode {
        #[source]
        source: FromUtf8Error,
    },
    #[error("could not write file: {source}")]
    Write {
        #[source]
        source: io::Error,
    },
}
