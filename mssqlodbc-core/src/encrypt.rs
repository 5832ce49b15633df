//! Encryption modes understood by the SQL Server ODBC drivers.
//!
//! Driver 18 changed the default to `Mandatory` and added `Strict`
//! (TDS 8.0); older drivers accept `Yes`/`No` only.

use std::fmt;
use std::str::FromStr;

use crate::error::{OdbcError, OdbcResult};

/// Value of the `Encrypt` connection string keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum EncryptMode {
    /// Encrypt the connection.
    Yes,
    /// Encrypt the connection (driver 18 spelling of `Yes`).
    Mandatory,
    /// Do not encrypt unless the server requires it.
    No,
    /// Do not encrypt unless the server requires it (driver 18 spelling of `No`).
    Optional,
    /// TDS 8.0 strict encryption.
    Strict,
}

impl EncryptMode {
    /// Canonical keyword value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::Mandatory => "Mandatory",
            Self::No => "No",
            Self::Optional => "Optional",
            Self::Strict => "Strict",
        }
    }

    /// Whether the connection will be encrypted.
    pub fn is_encrypted(&self) -> bool {
        matches!(self, Self::Yes | Self::Mandatory | Self::Strict)
    }

    /// Parse a keyword value, ignoring case.
    ///
    /// A blank value means "driver default" and yields `None`.
    pub fn parse_optional(value: &str) -> OdbcResult<Option<Self>> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(None);
        }
        value.parse().map(Some)
    }
}

impl FromStr for EncryptMode {
    type Err = OdbcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yes" => Ok(Self::Yes),
            "mandatory" => Ok(Self::Mandatory),
            "no" => Ok(Self::No),
            "optional" => Ok(Self::Optional),
            "strict" => Ok(Self::Strict),
            _ => Err(OdbcError::invalid_encrypt(s)),
        }
    }
}

impl fmt::Display for EncryptMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for EncryptMode {
    type Error = OdbcError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<EncryptMode> for String {
    fn from(mode: EncryptMode) -> Self {
        mode.as_str().to_string()
    }
}
