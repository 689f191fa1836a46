use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Where in the input a failure happened.
#[derive(Debug, Clone, Copy)]
pub struct IoContext {
    pub byte_pos: u64,
    pub line_num: u64,
}

#[derive(Debug, Error)]
pub enum RnaDnaError {
    #[error("cannot open input {}", .path.display())]
    Open {
        #[source]
        source: io::Error,
        path: PathBuf,
    },
    #[error("read failure after {} lines (byte {})", .ctx.line_num, .ctx.byte_pos)]
    Read {
        #[source]
        source: io::Error,
        ctx: IoContext,
    },
    #[error("cannot write output after {line_num} lines")]
    Write {
        #[source]
        source: io::Error,
        line_num: u64,
    },
}

impl RnaDnaError {
    pub(crate) fn open_err(source: io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Open {
            source,
            path: path.into(),
        }
    }
    pub(crate) fn read_err(source: io::Error, ctx: IoContext) -> Self {
        Self::Read { source, ctx }
    }
    pub(crate) fn write_err(source: io::Error, line_num: u64) -> Self {
        Self::Write { source, line_num }
    }
}
