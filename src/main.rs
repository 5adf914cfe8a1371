mod commands;
mod letters;
mod random_name;

use anyhow::Result;
use clap::Parser;
use commands::generate::GenerateCommand;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("namegen=info")),
        )
        .init();

    let cmd = GenerateCommand::parse();
    cmd.run()
}
