use std::{num::ParseIntError, path::PathBuf, str::Utf8Error};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DataError>;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Source not found: {}", .0.display())]
    SourceNotFound(PathBuf),
    #[error("Destination already exists: {}", .0.display())]
    DestinationExists(PathBuf),
    #[error(
        "Input of {len} bytes is not a whole number of records ({stray} stray bytes)"
    )]
    PartialRecord { len: usize, stray: usize },
    #[error("Parsing error at line {line}: {reason}")]
    Parse { line: usize, reason: String },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<Utf8Error> for DataError {
    fn from(e: Utf8Error) -> Self {
        Self::Parse {
            line: 0,
            reason: e.to_string(),
        }
    }
}

impl From<ParseIntError> for DataError {
    fn from(e: ParseIntError) -> Self {
        Self::Parse {
            line: 0,
            reason: e.to_string(),
        }
    }
}

impl DataError {
    /// Attach a 1-based line number to a parse error,
    /// leaving other variants as they are
    pub fn at_line(self, line: usize) -> Self {
        match self {
            Self::Parse { reason, .. } => Self::Parse { line, reason },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_record_message() {
        let err = DataError::PartialRecord { len: 4, stray: 1 };
        assert_eq!(
            err.to_string(),
            "Input of 4 bytes is not a whole number of records (1 stray bytes)"
        );
    }

    #[test]
    fn parse_int_error_gets_line_number() {
        let err: DataError = "300".parse::<u8>().unwrap_err().into();
        match err.at_line(7) {
            DataError::Parse { line, .. } => assert_eq!(line, 7),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn at_line_keeps_other_variants() {
        let err = DataError::DestinationExists(PathBuf::from("pal.txt"));
        assert!(matches!(err.at_line(3), DataError::DestinationExists(_)));
    }
}
