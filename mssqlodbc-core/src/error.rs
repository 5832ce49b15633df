//! Error types for driver resolution and connection strings.

use thiserror::Error;

/// Result type for ODBC connection operations.
pub type OdbcResult<T> = Result<T, OdbcError>;

/// Errors that can occur while resolving drivers or handling connection strings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OdbcError {
    /// No catalog driver is installed.
    #[error("no odbc drivers found")]
    NoDriversFound,

    /// The named driver is not an installed catalog driver.
    #[error("invalid driver: {0}")]
    InvalidDriver(String),

    /// The server was empty when building a connection string.
    #[error("invalid server: server is required")]
    MissingServer,

    /// A connection string token had no `=` separator.
    #[error("malformed attribute: {0}")]
    MalformedAttribute(String),

    /// The encryption value is not one of the recognized modes.
    #[error("invalid encrypt: expected (blank), Optional, Yes, No, Mandatory, Strict; got '{0}'")]
    InvalidEncrypt(String),

    /// Enumerating installed drivers failed.
    #[error("driver provider error: {0}")]
    Provider(String),
}

impl OdbcError {
    /// Create an invalid driver error.
    pub fn invalid_driver(name: impl Into<String>) -> Self {
        Self::InvalidDriver(name.into())
    }

    /// Create a malformed attribute error.
    pub fn malformed_attribute(token: impl Into<String>) -> Self {
        Self::MalformedAttribute(token.into())
    }

    /// Create an invalid encrypt error.
    pub fn invalid_encrypt(value: impl Into<String>) -> Self {
        Self::InvalidEncrypt(value.into())
    }

    /// Create a provider error.
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider(message.into())
    }

    /// Check if this error came from driver resolution.
    pub fn is_resolution_error(&self) -> bool {
        matches!(
            self,
            Self::NoDriversFound | Self::InvalidDriver(_) | Self::Provider(_)
        )
    }

    /// Check if this error came from parsing a connection string.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::MalformedAttribute(_) | Self::InvalidEncrypt(_))
    }
}

impl From<std::io::Error> for OdbcError {
    fn from(err: std::io::Error) -> Self {
        OdbcError::Provider(err.to_string())
    }
}
