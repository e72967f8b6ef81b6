use std::io::{self, Write};
use std::path::PathBuf;

use data_records::PackConfig;

use crate::AppError;

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "pack", about = "Turn (a, b, c) records back into bytes")]
pub struct Pack {
    #[clap(value_parser, help = "Text file of records to read")]
    source: PathBuf,
    #[clap(value_parser, help = "Binary file to create, must not exist yet")]
    destination: PathBuf,
}

impl Pack {
    pub fn run(&self) -> Result<(), AppError> {
        let config = PackConfig::new(&self.source, &self.destination);
        let report = data_records::pack(&config)?;

        writeln!(
            io::stdout().lock(),
            "{} bytes from {} records written to {}",
            report.bytes_written,
            report.records_read,
            self.destination.display()
        )?;

        Ok(())
    }
}
