use anyhow::Result;
use clap::Parser;

mod commands;
mod error;
mod models;

use commands::Commands;
pub use error::AppError;

#[derive(Parser, Debug)]
#[clap(name = "records")]
#[clap(
    about = "Convert binary files to (a, b, c) records and back",
    long_about = None
)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Cli::parse();
    log::debug!("{:?}", args);

    args.command.run()?;
    Ok(())
}
