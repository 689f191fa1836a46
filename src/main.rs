#[macro_use]
extern crate log;

use std::io::{BufWriter, stdout};

use anyhow::Result;
use clap::Parser;

use fastq_rnadna::{LineReader, convert};

mod cli;

use cli::Cli;

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let opts = cli.options();
    debug!("fastq-rnadna v{}, {:?}", cli::VERSION, opts.direction);

    // input is released on drop, on the error paths too
    let mut reader = LineReader::from_path(&cli.input)?;

    let out = stdout();
    let writer = BufWriter::with_capacity(256 * 1024, out.lock());
    let stats = convert(&mut reader, writer, &opts)?;

    info!(
        "converted {} lines ({} records, {} bases substituted)",
        stats.lines,
        stats.complete_records(),
        stats.substituted
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_target(false)
        .init();

    if let Err(err) = try_main() {
        error!("{}", err);

        // report any errors that are produced
        err.chain()
            .skip(1)
            .for_each(|cause| error!("  because: {}", cause));
        std::process::exit(1);
    }
}
