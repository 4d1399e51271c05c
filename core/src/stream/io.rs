//! stream/io.rs
//! Normalized input sources.

use std::fmt;
use std::io::{self, Read};
use std::path::PathBuf;

/// Canonical input abstraction
pub enum InputSource {
    Reader(Box<dyn Read>),
    File(PathBuf),
    Memory(Vec<u8>),
    Stdin,
}

impl InputSource {
    /// Human-readable name, used in errors and logs.
    pub fn name(&self) -> String {
        match self {
            InputSource::Reader(_) => "<reader>".into(),
            InputSource::File(p) => p.display().to_string(),
            InputSource::Memory(b) => format!("<memory:{}>", b.len()),
            InputSource::Stdin => "<stdin>".into(),
        }
    }
}

impl fmt::Debug for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InputSource({})", self.name())
    }
}

impl From<PathBuf> for InputSource {
    fn from(p: PathBuf) -> Self {
        InputSource::File(p)
    }
}

impl From<Vec<u8>> for InputSource {
    fn from(b: Vec<u8>) -> Self {
        InputSource::Memory(b)
    }
}

impl From<&[u8]> for InputSource {
    fn from(b: &[u8]) -> Self {
        InputSource::Memory(b.to_vec())
    }
}

/// Normalize input source into a boxed reader
pub fn open_input(src: InputSource) -> io::Result<Box<dyn Read>> {
    let reader: Box<dyn Read> = match src {
        InputSource::Reader(r) => r,
        InputSource::File(p) => Box::new(std::fs::File::open(p)?),
        InputSource::Memory(b) => Box::new(io::Cursor::new(b)),
        InputSource::Stdin => Box::new(io::stdin()),
    };
    Ok(reader)
}

/// Fill `buf` from `r` until it is full or the reader hits EOF.
///
/// Returns the number of bytes read; anything below `buf.len()` means EOF.
pub fn read_full<R: Read + ?Sized>(r: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut off = 0;

    while off < buf.len() {
        match r.read(&mut buf[off..]) {
            Ok(0) => break,
            Ok(n) => off += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(off)
}
