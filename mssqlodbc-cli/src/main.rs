//! odbctest - Command-line interface for SQL Server ODBC connections.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mssqlodbc_cli::cli::{Cli, Command};
use mssqlodbc_cli::commands::{self, Context};
use mssqlodbc_cli::error::CliResult;
use mssqlodbc_cli::output;

#[tokio::main]
async fn main() {
    // Run the CLI and handle errors
    if let Err(e) = run().await {
        output::newline();
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run() -> CliResult<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cli.log_level))
        .with_writer(std::io::stderr)
        .init();

    let ctx = Context::from_cli(&cli)?;

    // Run the appropriate command
    match cli.command {
        Command::Drivers => commands::drivers::run(&ctx).await,
        Command::Build(args) => commands::build::run(&ctx, args).await,
        Command::Parse(args) => commands::parse::run(args).await,
        Command::Test(args) => commands::test::run(&ctx, args).await,
        Command::Version => commands::version::run().await,
    }
}
