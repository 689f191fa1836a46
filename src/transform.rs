use crate::error::RnaDnaError;
use crate::policy::ConvertOptions;
use crate::reader::LineReader;
use crate::record::LineKind;
use crate::table::SubstitutionTable;

use std::io::Write;

/// Counters gathered over one conversion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertStats {
    pub lines: u64,
    pub sequence_lines: u64,
    pub substituted: u64,
}

impl ConvertStats {
    pub fn complete_records(&self) -> u64 {
        self.lines / 4
    }
    /// True when the input stopped in the middle of a 4-line record.
    pub fn is_truncated(&self) -> bool {
        self.lines % 4 != 0
    }
}

/// Record-aware transformer: rewrites sequence lines, passes the rest through.
pub struct Converter<W: Write> {
    table: &'static SubstitutionTable,
    out: W,
    position: u64,
    stats: ConvertStats,
}

impl<W: Write> Converter<W> {
    pub fn new(out: W, opts: &ConvertOptions) -> Self {
        Self {
            table: SubstitutionTable::for_direction(opts.direction),
            out,
            position: 0,
            stats: ConvertStats::default(),
        }
    }

    /// Index of the next line to be processed.
    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn stats(&self) -> ConvertStats {
        self.stats
    }

    /// Transform (when it is a sequence line) and emit one line.
    ///
    /// `line` is rewritten in place and written followed by `\n`.
    pub fn process_line(&mut self, line: &mut [u8]) -> Result<(), RnaDnaError> {
        if LineKind::from_position(self.position).is_sequence() {
            let changed = self.table.apply(line);
            self.stats.sequence_lines += 1;
            self.stats.substituted += changed as u64;
        }
        self.out
            .write_all(line)
            .and_then(|()| self.out.write_all(b"\n"))
            .map_err(|e| RnaDnaError::write_err(e, self.position))?;
        self.position += 1;
        self.stats.lines += 1;
        Ok(())
    }

    /// Flush the sink and hand it back with the run counters.
    pub fn finish(mut self) -> Result<(ConvertStats, W), RnaDnaError> {
        self.out
            .flush()
            .map_err(|e| RnaDnaError::write_err(e, self.position))?;
        Ok((self.stats, self.out))
    }
}

/// Drive `reader` to exhaustion through a [`Converter`] writing to `out`.
pub fn convert<W: Write>(
    reader: &mut LineReader,
    out: W,
    opts: &ConvertOptions,
) -> Result<ConvertStats, RnaDnaError> {
    let mut conv = Converter::new(out, opts);
    let mut line = Vec::with_capacity(256);
    while reader.read_line(&mut line)? {
        conv.process_line(&mut line)?;
    }
    let (stats, _) = conv.finish()?;
    if stats.is_truncated() {
        log::warn!(
            "input ended mid-record: {} lines is not a multiple of 4",
            stats.lines
        );
    }
    Ok(stats)
}
