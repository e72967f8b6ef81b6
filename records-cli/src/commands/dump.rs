use std::io::{self, Write};
use std::path::PathBuf;

use data_records::{DumpConfig, Layout, DEFAULT_DESTINATION};

use crate::{models::Remainder, AppError};

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "dump", about = "Write a binary file as (a, b, c) records")]
pub struct Dump {
    #[clap(value_parser, help = "Binary file to read")]
    source: PathBuf,
    #[clap(
        value_parser,
        default_value = DEFAULT_DESTINATION,
        help = "Text file to create, must not exist yet"
    )]
    destination: PathBuf,
    #[clap(
        short,
        long,
        value_enum,
        default_value_t = Remainder::Error,
        help = "What to do with bytes after the last full record"
    )]
    remainder: Remainder,
    #[clap(
        short,
        long,
        help = "Wrap the records in a `pub const NAME: [(u8, u8, u8); N]`"
    )]
    const_name: Option<String>,
}

impl Dump {
    fn config(&self) -> DumpConfig {
        let layout = match &self.const_name {
            Some(name) => Layout::RustConst {
                name: name.to_owned(),
            },
            None => Layout::Lines,
        };
        DumpConfig::new(&self.source, &self.destination)
            .with_remainder(self.remainder.into())
            .with_layout(layout)
    }

    pub fn run(&self) -> Result<(), AppError> {
        let report = data_records::dump(&self.config())?;

        let mut stdout = io::stdout().lock();
        write!(
            stdout,
            "{} records written to {}",
            report.records_written,
            self.destination.display()
        )?;
        if report.stray_bytes > 0 {
            write!(
                stdout,
                " ({} stray bytes, {})",
                report.stray_bytes,
                data_records::RemainderPolicy::from(self.remainder)
            )?;
        }
        writeln!(stdout)?;

        Ok(())
    }
}
