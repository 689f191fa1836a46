//! Convert the sequence lines of a FASTQ stream between DNA and RNA.
//!
//! - Line-oriented: every input line produces exactly one output line.
//! - Only the second line of each 4-line record is rewritten (`T`<->`U`, case kept).
//! - Plain and `.gz` (auto-detect), file or stdin (`-`).
//! - Lines of any length; no FASTQ validation is performed.
//! - Optional `mmap` for plain files; `zlib` feature for system-zlib parity.
//! - Optional async API behind `async` feature.

pub mod error;
pub mod policy;
pub mod reader;
pub mod record;
pub mod table;
pub mod transform;
mod util;

#[cfg(feature = "async")]
pub mod async_reader;

pub use crate::error::{IoContext, RnaDnaError};
pub use crate::policy::{ConvertOptions, Direction};
pub use crate::reader::{LineReader, STDIN_SENTINEL, Source};
pub use crate::record::LineKind;
pub use crate::table::SubstitutionTable;
pub use crate::transform::{ConvertStats, Converter, convert};

#[cfg(feature = "async")]
pub use crate::async_reader::{AsyncLineReader, convert_async};
