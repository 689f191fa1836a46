use clap::Parser;
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use std::path::PathBuf;

use fastq_rnadna::{ConvertOptions, Direction};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default().bold())
    .usage(AnsiColor::BrightMagenta.on_default().bold())
    .literal(AnsiColor::BrightMagenta.on_default())
    .placeholder(AnsiColor::White.on_default());

/// Convert sequence representation of a FASTQ file to DNA or RNA.
///
/// Only sequence lines (the 2nd line of every 4-line record) are touched.
/// Output goes to standard output.
#[derive(Parser, Debug)]
#[command(
    name = "fastq-rnadna",
    version = VERSION,
    arg_required_else_help = true,
    styles = STYLES
)]
pub struct Cli {
    /// input file, plain or gzip (STDIN if -)
    pub input: PathBuf,

    /// convert to RNA (T -> U); without it, RNA is converted to DNA (U -> T)
    #[arg(long)]
    pub rna: bool,
}

impl Cli {
    pub fn options(&self) -> ConvertOptions {
        ConvertOptions {
            direction: Direction::from_rna_flag(self.rna),
        }
    }
}
