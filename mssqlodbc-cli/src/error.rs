//! CLI error types and result alias.

use miette::Diagnostic;
use mssqlodbc_core::OdbcError;
use thiserror::Error;

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    /// IO error
    #[error("IO error: {0}")]
    #[diagnostic(code(odbctest::io))]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    #[diagnostic(code(odbctest::config))]
    Config(String),

    /// Driver resolution error
    #[error("Driver error: {0}")]
    #[diagnostic(
        code(odbctest::driver),
        help("install a SQL Server ODBC driver or pass --driver with one listed by `odbctest drivers`")
    )]
    Driver(#[source] OdbcError),

    /// Connection string error
    #[error("Connection string error: {0}")]
    #[diagnostic(code(odbctest::connection_string))]
    ConnectionString(#[source] OdbcError),

    /// Session error
    #[error("Connection error: {0}")]
    #[diagnostic(code(odbctest::connection))]
    Connection(String),
}

impl From<OdbcError> for CliError {
    fn from(err: OdbcError) -> Self {
        if err.is_resolution_error() {
            CliError::Driver(err)
        } else {
            CliError::ConnectionString(err)
        }
    }
}

impl From<toml::de::Error> for CliError {
    fn from(err: toml::de::Error) -> Self {
        CliError::Config(format!("Failed to parse TOML: {}", err))
    }
}

impl From<tiberius::error::Error> for CliError {
    fn from(err: tiberius::error::Error) -> Self {
        CliError::Connection(err.to_string())
    }
}
