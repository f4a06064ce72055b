use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use crate::close::{Close, Closing};
use crate::encoding::Encoding;
use crate::errors::{require, Result};

const KILOBYTE: usize = 1024;
/// Size of the buffer each read is issued into
pub const CHUNK_SIZE: usize = 4 * KILOBYTE;

/// Read `input` to exhaustion and close it.
///
/// The stream is closed quietly on every path: after end-of-stream is
/// reached, and before a read failure is returned. A failure while closing
/// never replaces the outcome of the reads.
pub fn to_byte_array<R: Read + Close>(input: Option<R>) -> Result<Vec<u8>> {
    let input = require(input, "input")?;
    let mut input = Closing::new(input);

    let mut chunk = [0u8; CHUNK_SIZE];
    let mut output = Vec::with_capacity(CHUNK_SIZE);
    loop {
        match input.read(&mut chunk) {
            Ok(0) => break,
            Ok(read) => output.extend_from_slice(&chunk[..read]),
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => {
                log::trace!(
                    "read failed after {} bytes: {}",
                    output.len(),
                    err
                );
                return Err(err.into());
            }
        }
    }
    drop(input);

    log::trace!("{} bytes has been read", output.len());
    Ok(output)
}

/// Open the file at `path` and read all of it
pub fn read_file(path: Option<&Path>) -> Result<Vec<u8>> {
    let path = require(path, "path")?;
    log::trace!("reading {}", path.display());
    to_byte_array(Some(File::open(path)?))
}

/// Read `input` to exhaustion and decode it with `encoding`
pub fn read_to_string<R: Read + Close>(
    input: Option<R>,
    encoding: Option<Encoding>,
) -> Result<String> {
    let encoding = require(encoding, "encoding")?;
    let bytes = to_byte_array(input)?;
    Ok(encoding.decode(&bytes))
}
