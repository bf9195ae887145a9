use crate::error::{FingerprintError, Result};
use std::io::{self, BufRead, BufReader, Read};

/// Number of leading lines handed to the format sniffer.
pub const SNIFF_LINES: usize = 50;

const READ_BUFFER: usize = 256 * 1024;

/// A decompressed, line-oriented view over a genomic file.
///
/// The first [`SNIFF_LINES`] lines are read eagerly so the sniffer can look
/// at them; [`GenomicInput::into_lines`] then replays them ahead of the rest
/// of the stream, so the file is only ever scanned once.
pub struct GenomicInput<'a> {
    head: Vec<String>,
    rest: Box<dyn BufRead + 'a>,
}

impl<'a> GenomicInput<'a> {
    pub fn new<R: Read + 'a>(reader: R) -> Result<Self> {
        let (inner, compression) = match niffler::get_reader(Box::new(reader)) {
            Ok(pair) => pair,
            Err(niffler::Error::FileTooShort) => return Err(FingerprintError::UnsupportedFormat),
            Err(niffler::Error::IOError(e)) => return Err(FingerprintError::Io(e)),
            Err(e) => {
                return Err(FingerprintError::Io(io::Error::new(
                    io::ErrorKind::InvalidData,
                    e.to_string(),
                )))
            }
        };
        log::debug!("Input compression: {:?}", compression);

        let mut rest: Box<dyn BufRead + 'a> =
            Box::new(BufReader::with_capacity(READ_BUFFER, inner));
        let mut head = Vec::with_capacity(SNIFF_LINES);
        let mut buf = Vec::new();
        while head.len() < SNIFF_LINES {
            let Some(line) = read_lossy_line(&mut rest, &mut buf)? else {
                break;
            };
            let line = if head.is_empty() {
                line.trim_start_matches('\u{feff}').to_string()
            } else {
                line
            };
            head.push(line);
        }

        Ok(Self { head, rest })
    }

    pub fn head(&self) -> &[String] {
        &self.head
    }

    pub fn into_lines(self) -> GenomicLines<'a> {
        GenomicLines {
            head: self.head.into_iter(),
            rest: self.rest,
            buf: Vec::new(),
        }
    }
}

/// Iterator over every line of the input, line endings stripped.
pub struct GenomicLines<'a> {
    head: std::vec::IntoIter<String>,
    rest: Box<dyn BufRead + 'a>,
    buf: Vec<u8>,
}

impl Iterator for GenomicLines<'_> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(line) = self.head.next() {
            return Some(Ok(line));
        }

        read_lossy_line(&mut self.rest, &mut self.buf).transpose()
    }
}

/// Next line with its ending stripped, or `None` at end of input.
///
/// Bytes that are not valid UTF-8 (Latin-1 names in vendor headers) are
/// replaced rather than failing the read.
fn read_lossy_line<R: BufRead + ?Sized>(
    reader: &mut R,
    buf: &mut Vec<u8>,
) -> io::Result<Option<String>> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(buf);
    Ok(Some(
        line.trim_end_matches('\n')
            .trim_end_matches('\r')
            .to_string(),
    ))
}
