use crate::error::{IoContext, RnaDnaError};
use crate::util::{BUF_CAPACITY, maybe_decompress, open_file};

use memchr::memchr;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

/// Path token that means "read standard input".
pub const STDIN_SENTINEL: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Path(PathBuf),
    Stdin,
    Reader,
}

/// Sync line reader (plain/.gz), streaming.
///
/// Lines have no length limit: a line longer than the read buffer is
/// assembled from as many buffer fills as it takes.
pub struct LineReader {
    src: Source,
    rdr: Box<dyn BufRead + Send>,
    line_num: u64,
    byte_pos: u64,
    finished: bool,
}

impl LineReader {
    /// Open from a file path, or stdin for `-`. Gzip is detected by magic bytes.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, RnaDnaError> {
        let path = path.as_ref();
        if path == Path::new(STDIN_SENTINEL) {
            return Self::from_stdin();
        }
        let f = open_file(path).map_err(|e| RnaDnaError::open_err(e, path))?;

        #[cfg(feature = "mmap")]
        let plain: Box<dyn BufRead + Send> = {
            use memmap2::Mmap;
            use std::io::Cursor;
            // Own the Mmap inside Cursor to avoid self-ref problems
            let mmap = unsafe { Mmap::map(&f) }.map_err(|e| RnaDnaError::open_err(e, path))?;
            Box::new(Cursor::new(mmap))
        };
        #[cfg(not(feature = "mmap"))]
        let plain: Box<dyn BufRead + Send> = Box::new(BufReader::with_capacity(BUF_CAPACITY, f));

        let rdr = maybe_decompress(plain).map_err(|e| RnaDnaError::open_err(e, path))?;
        log::debug!("reading {}", path.display());
        Ok(Self::with_source(Source::Path(path.to_path_buf()), rdr))
    }

    /// Standard input; gzip is still detected by magic bytes.
    pub fn from_stdin() -> Result<Self, RnaDnaError> {
        let stdin = BufReader::with_capacity(BUF_CAPACITY, io::stdin());
        let rdr = maybe_decompress(Box::new(stdin))
            .map_err(|e| RnaDnaError::open_err(e, STDIN_SENTINEL))?;
        log::debug!("reading standard input");
        Ok(Self::with_source(Source::Stdin, rdr))
    }

    /// Wrap an arbitrary unbuffered `Read` (pipe, socket, ...), detecting gzip
    /// the same way as stdin.
    pub fn from_read<R: Read + Send + 'static>(reader: R) -> Result<Self, RnaDnaError> {
        let buffered = BufReader::with_capacity(BUF_CAPACITY, reader);
        let rdr = maybe_decompress(Box::new(buffered))
            .map_err(|e| RnaDnaError::open_err(e, "<reader>"))?;
        Ok(Self::with_source(Source::Reader, rdr))
    }

    /// Wrap an arbitrary `BufRead`. No decompression is attempted.
    pub fn from_bufread<R: BufRead + Send + 'static>(reader: R) -> Self {
        Self::with_source(Source::Reader, Box::new(reader))
    }

    fn with_source(src: Source, rdr: Box<dyn BufRead + Send>) -> Self {
        Self {
            src,
            rdr,
            line_num: 0,
            byte_pos: 0,
            finished: false,
        }
    }

    pub fn source(&self) -> &Source {
        &self.src
    }

    /// Lines returned so far.
    pub fn line_num(&self) -> u64 {
        self.line_num
    }

    /// Read the next line into `buf` (cleared first), terminator stripped.
    ///
    /// `Ok(false)` means end of input. After end of input or an error the
    /// reader stays exhausted.
    pub fn read_line(&mut self, buf: &mut Vec<u8>) -> Result<bool, RnaDnaError> {
        buf.clear();
        if self.finished {
            return Ok(false);
        }
        let ctx = self.ctx();
        let mut read = 0usize;
        loop {
            let step = {
                let available = match self.rdr.fill_buf() {
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
                    log::trace!("line {} continues past {read} bytes", self.line_num + 1);
                }
                // EOF: a pending unterminated tail is still a line
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

impl Iterator for LineReader {
    type Item = Result<Vec<u8>, RnaDnaError>;
    fn next(&mut self) -> Option<Self::Item> {
        let mut line = Vec::new();
        match self.read_line(&mut line) {
            Ok(true) => Some(Ok(line)),
            Ok(false) => None,
            Err(e) => Some(Err(e)),
        }
    }
}
