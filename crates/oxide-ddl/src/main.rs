//! oxide-ddl CLI
//!
//! Generates tagged Go structs from MySQL `CREATE TABLE` statements.

use std::io;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use oxide_ddl::{run, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    run(&cli, &mut io::stdout().lock())?;
    Ok(())
}
