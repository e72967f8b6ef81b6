use std::io::Write;

use data_error::{DataError, Result};
use log::{debug, info};

use crate::config::PackConfig;
use crate::parse::parse_records;
use crate::utils::{create_destination, read_source};

/// Outcome of a successful [`pack`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackReport {
    pub records_read: usize,
    pub bytes_written: usize,
}

/// Turn dumped text back into the bytes it was made from.
///
/// The whole source is parsed before the destination is created.
pub fn pack(config: &PackConfig) -> Result<PackReport> {
    let raw = read_source(&config.source)?;
    let text = std::str::from_utf8(&raw).map_err(|err| {
        let line = raw[..err.valid_up_to()]
            .iter()
            .filter(|&&b| b == b'\n')
            .count()
            + 1;
        DataError::from(err).at_line(line)
    })?;

    let records = parse_records(text)?;
    let bytes: Vec<u8> = records
        .iter()
        .flat_map(|record| record.values().iter().copied())
        .collect();
    debug!(
        "{} records parsed from {}",
        records.len(),
        config.source.display()
    );

    let mut writer = create_destination(&config.destination)?;
    writer.write_all(&bytes)?;
    writer.flush()?;

    info!(
        "{} bytes written to {}",
        bytes.len(),
        config.destination.display()
    );

    Ok(PackReport {
        records_read: records.len(),
        bytes_written: bytes.len(),
    })
}
