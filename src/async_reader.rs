#![cfg(feature = "async")]

use crate::error::{IoContext, RnaDnaError};
use crate::policy::ConvertOptions;
use crate::record::LineKind;
use crate::table::SubstitutionTable;
use crate::transform::ConvertStats;
use crate::util::{BUF_CAPACITY, GZIP_MAGIC, is_gzip_head};

use async_compression::tokio::bufread::GzipDecoder;
use memchr::memchr;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{
    self, AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AsyncSource {
    Path(PathBuf),
    Reader,
}

/// Async line reader (plain/.gz), streaming.
pub struct AsyncLineReader {
    src: AsyncSource,
    rdr: Box<dyn AsyncBufRead + Unpin + Send>,
    line_num: u64,
    byte_pos: u64,
    finished: bool,
}

impl AsyncLineReader {
    /// Open async from path; gzip is detected by magic bytes.
    pub async fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, RnaDnaError> {
        let path = path.as_ref().to_path_buf();
        let mut f = File::open(&path)
            .await
            .map_err(|e| RnaDnaError::open_err(e, &path))?;

        // pull the magic bytes out whole, then put them back in front
        let mut head = Vec::with_capacity(GZIP_MAGIC.len());
        (&mut f)
            .take(GZIP_MAGIC.len() as u64)
            .read_to_end(&mut head)
            .await
            .map_err(|e| RnaDnaError::open_err(e, &path))?;
        let is_gz = is_gzip_head(&head);
        let plain = BufReader::with_capacity(BUF_CAPACITY, std::io::Cursor::new(head).chain(f));

        let rdr: Box<dyn AsyncBufRead + Unpin + Send> = if is_gz {
            log::debug!("gzip input detected");
            let mut gz = GzipDecoder::new(plain);
            gz.multiple_members(true);
            Box::new(BufReader::with_capacity(BUF_CAPACITY, gz))
        } else {
            Box::new(plain)
        };

        Ok(Self {
            src: AsyncSource::Path(path),
            rdr,
            line_num: 0,
            byte_pos: 0,
            finished: false,
        })
    }

    /// Wrap any async `AsyncBufRead`.
    pub fn from_async_bufread<R>(reader: R) -> Self
    where
        R: AsyncBufRead + Unpin + Send + 'static,
    {
        Self {
            src: AsyncSource::Reader,
            rdr: Box::new(reader),
            line_num: 0,
            byte_pos: 0,
            finished: false,
        }
    }

    pub fn source(&self) -> &AsyncSource {
        &self.src
    }

    /// Async counterpart of [`crate::LineReader::read_line`].
    pub async fn read_line(&mut self, buf: &mut Vec<u8>) -> Result<bool, RnaDnaError> {
        buf.clear();
        if self.finished {
            return Ok(false);
        }
        let ctx = self.ctx();
        let mut read = 0usize;
        loop {
            let step = {
                let available = match self.rdr.fill_buf().await {
                    Ok(n) => n,
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => {
                        self.finished = true;
                        return Err(RnaDnaError::read_err(e, ctx));
                    }
                };
                if available.is_empty() {
                    None
                } else {
                    match memchr(b'\n', available) {
                        Some(i) => {
                            buf.extend_from_slice(&available[..i]);
                            Some((true, i + 1))
                        }
                        None => {
                            buf.extend_from_slice(available);
                            Some((false, available.len()))
                        }
                    }
                }
            };

            match step {
                Some((done, used)) => {
                    self.rdr.consume(used);
                    read += used;
                    if done {
                        break;
                    }
                }
                None if read > 0 => break,
                None => {
                    self.finished = true;
                    return Ok(false);
                }
            }
        }

        self.line_num += 1;
        self.byte_pos += read as u64;
        if buf.ends_with(b"\r") {
            buf.pop();
        }
        Ok(true)
    }

    #[inline]
    fn ctx(&self) -> IoContext {
        IoContext {
            byte_pos: self.byte_pos,
            line_num: self.line_num,
        }
    }
}

/// Async counterpart of [`crate::convert`]; same positional rule and output.
pub async fn convert_async<W>(
    reader: &mut AsyncLineReader,
    mut out: W,
    opts: &ConvertOptions,
) -> Result<ConvertStats, RnaDnaError>
where
    W: AsyncWrite + Unpin,
{
    let table = SubstitutionTable::for_direction(opts.direction);
    let mut stats = ConvertStats::default();
    let mut line = Vec::with_capacity(256);

    while reader.read_line(&mut line).await? {
        if LineKind::from_position(stats.lines).is_sequence() {
            stats.substituted += table.apply(&mut line) as u64;
            stats.sequence_lines += 1;
        }
        line.push(b'\n');
        out.write_all(&line)
            .await
            .map_err(|e| RnaDnaError::write_err(e, stats.lines))?;
        stats.lines += 1;
    }
    out.flush()
        .await
        .map_err(|e| RnaDnaError::write_err(e, stats.lines))?;

    if stats.is_truncated() {
        log::warn!(
            "input ended mid-record: {} lines is not a multiple of 4",
            stats.lines
        );
    }
    Ok(stats)
}
