use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::str;

use lazyseq::{concat, Sequence};
use log::{debug, warn};

use crate::error::{Error, Result};

/// The characters of a file, read as they are queried.
///
/// The file is not opened until the sequence is first queried. It is read
/// a line at a time and closed as soon as the end is reached, reading
/// fails, or the sequence is dropped, whichever comes first.
///
/// A failure to open or read the file shows up as a single `Err` element
/// at the position where it happened, and the sequence ends there.
pub fn read_file<P: AsRef<Path>>(path: P) -> Sequence<Result<char>> {
    let path = path.as_ref().to_path_buf();
    Sequence::delay(move || {
        let name = path.display().to_string();
        match File::open(&path) {
            Ok(file) => {
                debug!("opened {}", name);
                next_line(LineSource::new(BufReader::new(file), name))
            }
            Err(error) => {
                warn!("cannot open {}: {}", name, error);
                failed(error.into())
            }
        }
    })
}

/// The characters of `reader`, read as they are queried.
///
/// Behaves like [`read_file`]; the reader is dropped once the sequence no
/// longer needs it.
pub fn read_stream<R: Read + 'static>(reader: R) -> Sequence<Result<char>> {
    Sequence::delay(move || next_line(LineSource::new(BufReader::new(reader), "stream".into())))
}

struct LineSource<R> {
    reader: R,
    name: String,
    line: usize,
}

impl<R: BufRead> LineSource<R> {
    fn new(reader: R, name: String) -> Self {
        LineSource {
            reader,
            name,
            line: 0,
        }
    }
}

impl<R> Drop for LineSource<R> {
    fn drop(&mut self) {
        debug!("closed {} after {} lines", self.name, self.line);
    }
}

fn next_line<R: BufRead + 'static>(mut source: LineSource<R>) -> Sequence<Result<char>> {
    let mut bytes = Vec::new();
    match source.reader.read_until(b'\n', &mut bytes) {
        Ok(0) => Sequence::empty(),
        Ok(_) => {
            source.line += 1;
            match String::from_utf8(bytes) {
                Ok(line) => {
                    let chars: Sequence<Result<char>> = line.chars().map(Ok).collect();
                    concat(chars, move || next_line(source))
                }
                Err(error) => {
                    let line = source.line;
                    warn!("invalid UTF-8 in {} on line {}", source.name, line);
                    let valid = error.utf8_error().valid_up_to();
                    let bytes = error.into_bytes();
                    // everything before `valid` was checked already
                    let prefix: Sequence<Result<char>> = str::from_utf8(&bytes[..valid])
                        .unwrap_or_default()
                        .chars()
                        .map(Ok)
                        .collect();
                    concat(prefix, move || failed(Error::InvalidUtf8 { line }))
                }
            }
        }
        Err(error) => {
            warn!("cannot read {}: {}", source.name, error);
            failed(error.into())
        }
    }
}

fn failed(error: Error) -> Sequence<Result<char>> {
    Sequence::cons_with(Err(error), Sequence::empty())
}
