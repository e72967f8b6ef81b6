use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter};
use std::path::Path;

use data_error::{DataError, Result};

/// Read the whole content of `path` into memory
pub fn read_source(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => DataError::SourceNotFound(path.to_owned()),
        _ => DataError::Io(err),
    })
}

/// Open a new file for writing, failing if anything already exists at `path`.
///
/// The existing file, if any, is left untouched.
pub fn create_destination(path: &Path) -> Result<BufWriter<File>> {
    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|err| match err.kind() {
            io::ErrorKind::AlreadyExists => {
                DataError::DestinationExists(path.to_owned())
            }
            _ => DataError::Io(err),
        })?;
    Ok(BufWriter::new(file))
}
