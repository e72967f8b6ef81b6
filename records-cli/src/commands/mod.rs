use clap::Subcommand;

use crate::AppError;

mod dump;
mod pack;

#[derive(Debug, Subcommand)]
pub enum Commands {
    Dump(dump::Dump),
    Pack(pack::Pack),
}

impl Commands {
    pub fn run(&self) -> Result<(), AppError> {
        match self {
            Commands::Dump(dump) => dump.run(),
            Commands::Pack(pack) => pack.run(),
        }
    }
}
