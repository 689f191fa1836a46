use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor, Read};
use std::path::Path;

#[cfg(feature = "gzip")]
use flate2::read::MultiGzDecoder;

pub(crate) const BUF_CAPACITY: usize = 256 * 1024;
pub(crate) const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];

pub(crate) fn is_gzip_head(head: &[u8]) -> bool {
    head.len() >= 2 && head[..2] == GZIP_MAGIC
}

/// Make sure at least the 2 magic bytes (or everything up to EOF) can be
/// peeked. A single `fill_buf` on a pipe may hand back only 1 byte, so a
/// short head is pulled out and chained back in front of the rest.
pub fn with_full_head(mut rdr: Box<dyn BufRead + Send>) -> io::Result<Box<dyn BufRead + Send>> {
    let buffered = loop {
        match rdr.fill_buf() {
            Ok(b) => break b.len(),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    };
    if buffered == 0 || buffered >= GZIP_MAGIC.len() {
        return Ok(rdr);
    }
    let mut head = Vec::with_capacity(GZIP_MAGIC.len());
    rdr.by_ref()
        .take(GZIP_MAGIC.len() as u64)
        .read_to_end(&mut head)?;
    Ok(Box::new(BufReader::with_capacity(
        BUF_CAPACITY,
        Cursor::new(head).chain(rdr),
    )))
}

pub fn open_file(path: &Path) -> io::Result<File> {
    std::fs::File::open(path)
}

/// Wrap `rdr` in a gzip decoder when the stream starts with the gzip magic.
pub fn maybe_decompress(rdr: Box<dyn BufRead + Send>) -> io::Result<Box<dyn BufRead + Send>> {
    let mut rdr = with_full_head(rdr)?;
    if !is_gzip_head(rdr.fill_buf()?) {
        return Ok(rdr);
    }
    log::debug!("gzip input detected");
    #[cfg(feature = "gzip")]
    {
        let dec = MultiGzDecoder::new(rdr);
        Ok(Box::new(BufReader::with_capacity(BUF_CAPACITY, dec)))
    }
    #[cfg(not(feature = "gzip"))]
    {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "gzip input requires the `gzip` feature",
        ))
    }
}
