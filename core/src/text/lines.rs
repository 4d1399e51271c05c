//! text/lines.rs
//! Line iterator over any `BufRead`.

use std::io::{self, BufRead};

/// Yields each line without its trailing `\n`.
///
/// Lines may be arbitrarily long. A final line without a terminator is still
/// yielded; an empty input yields nothing.
#[derive(Debug)]
pub struct LineReader<R> {
    inner: R,
    done: bool,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, done: false }
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut line = Vec::new();
        match self.inner.read_until(b'\n', &mut line) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                if line.last() == Some(&b'\n') {
                    line.pop();
                }
                Some(Ok(line))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Convenience constructor.
pub fn read_lines<R: BufRead>(reader: R) -> LineReader<R> {
    LineReader::new(reader)
}
