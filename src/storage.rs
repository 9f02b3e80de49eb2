// src/storage.rs

//! Verbatim persistence of encoded streams.
//!
//! A stream is written to disk exactly as produced: no header, length
//! prefix, or checksum. Reading trims surrounding whitespace so an editor's
//! trailing newline cannot shift the positional scan.

use std::fs;
use std::io;
use std::path::Path;

/// Writes `stream` to `path`, replacing any existing file.
pub fn write_stream(path: &Path, stream: &str) -> io::Result<()> {
    fs::write(path, stream)
}

/// Reads a stream back from `path`, trimming surrounding whitespace.
pub fn read_stream(path: &Path) -> io::Result<String> {
    let raw = fs::read_to_string(path)?;
    Ok(raw.trim().to_string())
}
