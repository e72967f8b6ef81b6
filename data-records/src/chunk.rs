use std::fmt;

use data_error::{DataError, Result};
use log::trace;

use crate::config::RemainderPolicy;

/// Number of bytes in a full record
pub const RECORD_WIDTH: usize = 3;

/// Up to [`RECORD_WIDTH`] consecutive bytes of the input.
///
/// Only the last record of an input may be shorter, and only when it was
/// produced with [`RemainderPolicy::Keep`] or parsed from such output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    values: [u8; RECORD_WIDTH],
    len: usize,
}

impl Record {
    /// Build a record from a slice of 1 to [`RECORD_WIDTH`] bytes
    pub fn new(bytes: &[u8]) -> Option<Self> {
        if bytes.is_empty() || bytes.len() > RECORD_WIDTH {
            return None;
        }
        let mut values = [0u8; RECORD_WIDTH];
        values[..bytes.len()].copy_from_slice(bytes);
        Some(Self {
            values,
            len: bytes.len(),
        })
    }

    /// Zero-filled copy of this record
    pub fn padded(&self) -> Self {
        Self {
            values: self.values,
            len: RECORD_WIDTH,
        }
    }

    pub fn values(&self) -> &[u8] {
        &self.values[..self.len]
    }

    pub fn is_full(&self) -> bool {
        self.len == RECORD_WIDTH
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, value) in self.values().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", value)?;
        }
        f.write_str(")")
    }
}

/// Split `bytes` into records of [`RECORD_WIDTH`] bytes, in order.
///
/// The trailing `bytes.len() % RECORD_WIDTH` bytes are handled by `policy`.
/// With [`RemainderPolicy::Error`] an uneven input fails as a whole, so
/// callers can check the input before they touch the destination.
pub fn chunk(bytes: &[u8], policy: RemainderPolicy) -> Result<Vec<Record>> {
    let stray = bytes.len() % RECORD_WIDTH;
    let (whole, rest) = bytes.split_at(bytes.len() - stray);

    let mut records: Vec<Record> = whole
        .chunks_exact(RECORD_WIDTH)
        .filter_map(Record::new)
        .collect();

    if stray == 0 {
        return Ok(records);
    }

    trace!(
        "{} stray bytes after {} records, policy: {}",
        stray,
        records.len(),
        policy
    );

    match policy {
        RemainderPolicy::Error => {
            return Err(DataError::PartialRecord {
                len: bytes.len(),
                stray,
            })
        }
        RemainderPolicy::Truncate => {}
        RemainderPolicy::Pad => {
            records.extend(Record::new(rest).map(|record| record.padded()))
        }
        RemainderPolicy::Keep => records.extend(Record::new(rest)),
    }

    Ok(records)
}
