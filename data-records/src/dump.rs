use std::io::Write;

use data_error::Result;
use log::{debug, info};

use crate::chunk::{chunk, RECORD_WIDTH};
use crate::config::DumpConfig;
use crate::format::write_records;
use crate::utils::{create_destination, read_source};

/// Outcome of a successful [`dump`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DumpReport {
    pub bytes_read: usize,
    pub records_written: usize,
    pub stray_bytes: usize,
}

/// Read `config.source`, split it into records and write them as text
/// to a newly created `config.destination`.
///
/// The configuration and the input length are checked before the
/// destination is created, so a rejected input leaves nothing behind.
/// An I/O error while writing leaves a partially written destination.
pub fn dump(config: &DumpConfig) -> Result<DumpReport> {
    config.validate()?;

    let bytes = read_source(&config.source)?;
    info!("{} bytes read from {}", bytes.len(), config.source.display());

    let records = chunk(&bytes, config.remainder)?;
    debug!(
        "{} records with remainder policy {}",
        records.len(),
        config.remainder
    );

    let mut writer = create_destination(&config.destination)?;
    write_records(&mut writer, &records, &config.layout)?;
    writer.flush()?;

    info!(
        "{} records written to {}",
        records.len(),
        config.destination.display()
    );

    Ok(DumpReport {
        bytes_read: bytes.len(),
        records_written: records.len(),
        stray_bytes: bytes.len() % RECORD_WIDTH,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use data_error::DataError;
    use rstest::rstest;
    use tempdir::TempDir;

    use super::*;
    use crate::config::{Layout, RemainderPolicy};

    fn setup(name: &str, input: &[u8]) -> (TempDir, DumpConfig) {
        let dir = TempDir::new(name).unwrap();
        let source = dir.path().join("pal.pal");
        fs::write(&source, input).unwrap();
        let config = DumpConfig::new(source, dir.path().join("pal.txt"));
        (dir, config)
    }

    #[test]
    fn dump_two_records() {
        let (_dir, config) = setup("dump_two", &[1, 2, 3, 250, 0, 10]);

        let report = dump(&config).unwrap();
        assert_eq!(
            report,
            DumpReport {
                bytes_read: 6,
                records_written: 2,
                stray_bytes: 0,
            }
        );

        let text = fs::read_to_string(&config.destination).unwrap();
        assert_eq!(text, "(1, 2, 3),\n(250, 0, 10),\n");
    }

    #[test]
    fn dump_empty_input_creates_empty_file() {
        let (_dir, config) = setup("dump_empty", &[]);

        let report = dump(&config).unwrap();
        assert_eq!(report.records_written, 0);
        assert!(config.destination.exists());
        assert_eq!(fs::read_to_string(&config.destination).unwrap(), "");
    }

    #[test]
    fn existing_destination_is_left_unchanged() {
        let (_dir, config) = setup("dump_exists", &[1, 2, 3]);
        fs::write(&config.destination, "keep me").unwrap();

        let result = dump(&config);
        assert!(matches!(result, Err(DataError::DestinationExists(_))));
        assert_eq!(
            fs::read_to_string(&config.destination).unwrap(),
            "keep me"
        );
    }

    #[test]
    fn missing_source_is_reported() {
        let dir = TempDir::new("dump_missing").unwrap();
        let config = DumpConfig::new(
            dir.path().join("nope.pal"),
            dir.path().join("pal.txt"),
        );

        let result = dump(&config);
        assert!(matches!(result, Err(DataError::SourceNotFound(_))));
        assert!(!config.destination.exists());
    }

    #[test]
    fn partial_record_creates_no_file() {
        let (_dir, config) = setup("dump_partial", &[1, 2, 3, 4]);

        match dump(&config) {
            Err(DataError::PartialRecord { len, stray }) => {
                assert_eq!((len, stray), (4, 1));
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(!config.destination.exists());
    }

    #[rstest]
    #[case(RemainderPolicy::Pad, "(1, 2, 3),\n(4, 0, 0),\n", 2)]
    #[case(RemainderPolicy::Truncate, "(1, 2, 3),\n", 1)]
    #[case(RemainderPolicy::Keep, "(1, 2, 3),\n(4),\n", 2)]
    fn partial_record_policies(
        #[case] policy: RemainderPolicy,
        #[case] expected: &str,
        #[case] records: usize,
    ) {
        let (_dir, config) = setup("dump_policy", &[1, 2, 3, 4]);
        let config = config.with_remainder(policy);

        let report = dump(&config).unwrap();
        assert_eq!(report.records_written, records);
        assert_eq!(report.stray_bytes, 1);
        assert_eq!(fs::read_to_string(&config.destination).unwrap(), expected);
    }

    #[test]
    fn invalid_config_opens_nothing() {
        let (_dir, config) = setup("dump_invalid", &[1, 2, 3, 4]);
        let config = config
            .with_remainder(RemainderPolicy::Keep)
            .with_layout(Layout::RustConst {
                name: "SYSTEM_PALETTE".to_owned(),
            });

        let result = dump(&config);
        assert!(matches!(result, Err(DataError::InvalidConfig(_))));
        assert!(!config.destination.exists());
    }
}
