//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use mssqlodbc_core::EncryptMode;
use std::path::PathBuf;

/// odbctest - SQL Server ODBC driver and connection string tool
#[derive(Parser, Debug)]
#[command(name = "odbctest")]
#[command(version)]
#[command(about = "odbctest - Resolve SQL Server ODBC drivers and test connection strings", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (defaults to ./odbctest.toml when present)
    #[arg(short, long, global = true, env = "ODBCTEST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log filter (e.g. "debug", "mssqlodbc_core=trace")
    #[arg(long, global = true, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    /// Read installed drivers from this odbcinst.ini
    #[arg(long, global = true, env = "ODBCTEST_ODBCINST")]
    pub odbcinst: Option<PathBuf>,

    /// Treat these drivers as installed instead of asking the system
    #[arg(long, global = true, value_delimiter = ',')]
    pub installed: Vec<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List installed SQL Server ODBC drivers
    Drivers,

    /// Build a connection string
    Build(BuildArgs),

    /// Parse a connection string
    Parse(ParseArgs),

    /// Connect to a server and run a verification query
    Test(TestArgs),

    /// Display version information
    Version,
}

// =============================================================================
// Build Command
// =============================================================================

/// Arguments for the `build` command
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Server as host, host,port or host\instance
    #[arg(short, long)]
    pub server: String,

    /// Driver to use (defaults to the best installed driver)
    #[arg(short, long)]
    pub driver: Option<String>,

    /// Username for SQL Server authentication
    #[arg(short, long)]
    pub user: Option<String>,

    /// Password for SQL Server authentication
    #[arg(short, long, env = "ODBCTEST_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Use trusted authentication even when credentials are given
    #[arg(long)]
    pub trusted: bool,

    /// Initial database
    #[arg(long)]
    pub database: Option<String>,

    /// Application name
    #[arg(long)]
    pub app: Option<String>,

    /// Enable MultiSubnetFailover
    #[arg(long)]
    pub multi_subnet_failover: bool,

    /// Encryption mode
    #[arg(long)]
    pub encrypt: Option<EncryptArg>,

    /// Trust the server certificate
    #[arg(long)]
    pub trust_server_certificate: bool,
}

/// Encryption modes accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum EncryptArg {
    Yes,
    Mandatory,
    No,
    Optional,
    Strict,
}

impl From<EncryptArg> for EncryptMode {
    fn from(arg: EncryptArg) -> Self {
        match arg {
            EncryptArg::Yes => EncryptMode::Yes,
            EncryptArg::Mandatory => EncryptMode::Mandatory,
            EncryptArg::No => EncryptMode::No,
            EncryptArg::Optional => EncryptMode::Optional,
            EncryptArg::Strict => EncryptMode::Strict,
        }
    }
}

// =============================================================================
// Parse Command
// =============================================================================

/// Arguments for the `parse` command
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Connection string to decode
    pub connection_string: String,

    /// Treat a string without credentials as trusted
    #[arg(long)]
    pub trusted_default: bool,
}

// =============================================================================
// Test Command
// =============================================================================

/// Arguments for the `test` command
#[derive(Args, Debug)]
pub struct TestArgs {
    /// Fully qualified server name to connect to
    #[arg(short, long)]
    pub fqdn: String,

    /// Driver to use (defaults to the best installed driver)
    #[arg(short, long)]
    pub driver: Option<String>,

    /// Username for SQL Server authentication (trusted when omitted)
    #[arg(short, long)]
    pub user: Option<String>,

    /// Password for SQL Server authentication
    #[arg(short, long, env = "ODBCTEST_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Only build the connection string, do not connect
    #[arg(long)]
    pub no_connect: bool,
}
