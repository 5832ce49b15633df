//! Connection string parser.
//!
//! Accepts strings produced by [`Connection::connection_string`] as well as
//! hand-written ones using the common keyword synonyms:
//!
//! | Keyword(s)                         | Field                      |
//! |------------------------------------|----------------------------|
//! | `Driver`                           | driver (braces stripped)   |
//! | `Server`, `Addr`, `Address`        | server                     |
//! | `UID`, `User ID`                   | user                       |
//! | `PWD`, `Password`                  | password                   |
//! | `Database`                         | database                   |
//! | `App`, `Application Name`          | app_name                   |
//! | `MultiSubnetFailover`              | multi_subnet_failover      |
//! | `Trusted_Connection`               | trusted                    |
//! | `Encrypt`                          | encrypt                    |
//! | `TrustServerCertificate`           | trust_server_certificate   |
//!
//! Keywords match without regard to case. Unknown keywords are ignored, but
//! a token with no `=` fails the whole parse.
//!
//! ```rust
//! use mssqlodbc_core::parse;
//!
//! let cxn = parse("Driver={SQL Server};Addr=db1,1433;User ID=app;Password=pw;").unwrap();
//! assert_eq!(cxn.driver(), "SQL Server");
//! assert_eq!(cxn.server, "db1,1433");
//! assert_eq!(cxn.user, "app");
//! assert!(!cxn.trusted);
//! ```

use tracing::{debug, trace};

use crate::connection::Connection;
use crate::encrypt::EncryptMode;
use crate::error::{OdbcError, OdbcResult};

/// A recognized connection string keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    /// `Driver`
    Driver,
    /// `Server`, `Addr`, `Address`
    Server,
    /// `UID`, `User ID`
    User,
    /// `PWD`, `Password`
    Password,
    /// `Database`
    Database,
    /// `App`, `Application Name`
    AppName,
    /// `MultiSubnetFailover`
    MultiSubnetFailover,
    /// `Trusted_Connection`
    TrustedConnection,
    /// `Encrypt`
    Encrypt,
    /// `TrustServerCertificate`
    TrustServerCertificate,
}

impl Keyword {
    /// Normalize a keyword, ignoring case and surrounding whitespace.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_lowercase().as_str() {
            "driver" => Some(Self::Driver),
            "server" | "addr" | "address" => Some(Self::Server),
            "uid" | "user id" => Some(Self::User),
            "pwd" | "password" => Some(Self::Password),
            "database" => Some(Self::Database),
            "app" | "application name" => Some(Self::AppName),
            "multisubnetfailover" => Some(Self::MultiSubnetFailover),
            "trusted_connection" => Some(Self::TrustedConnection),
            "encrypt" => Some(Self::Encrypt),
            "trustservercertificate" => Some(Self::TrustServerCertificate),
            _ => None,
        }
    }

    /// Whether values for this keyword must not be logged.
    pub fn is_secret(&self) -> bool {
        matches!(self, Self::Password)
    }
}

/// Parse a connection string into a [`Connection`].
///
/// The driver is taken as written and is not checked against installed
/// drivers. Authentication is not cross-checked either: a string with
/// neither credentials nor `Trusted_Connection` yields `trusted == false`
/// (see [`Connection::apply_trusted_default`]).
pub fn parse(s: &str) -> OdbcResult<Connection> {
    debug!(len = s.len(), "Parsing connection string");
    let mut cxn = Connection::default();

    for token in s.split(';').map(str::trim).filter(|t| !t.is_empty()) {
        let (key, value) = token
            .split_once('=')
            .ok_or_else(|| OdbcError::malformed_attribute(token))?;
        let value = value.trim();

        let Some(keyword) = Keyword::from_key(key) else {
            trace!(key = %key.trim(), "Ignoring unknown keyword");
            continue;
        };

        if keyword.is_secret() {
            trace!(?keyword, "Parsed attribute");
        } else {
            trace!(?keyword, value = %value, "Parsed attribute");
        }

        match keyword {
            Keyword::Driver => cxn.driver = strip_braces(value).to_string(),
            Keyword::Server => cxn.server = value.to_string(),
            Keyword::User => cxn.user = value.to_string(),
            Keyword::Password => cxn.password = value.to_string(),
            Keyword::Database => cxn.database = value.to_string(),
            Keyword::AppName => cxn.app_name = value.to_string(),
            Keyword::MultiSubnetFailover => cxn.multi_subnet_failover = is_truthy(value),
            Keyword::TrustedConnection => cxn.trusted = value.eq_ignore_ascii_case("yes"),
            Keyword::Encrypt => cxn.encrypt = EncryptMode::parse_optional(value)?,
            Keyword::TrustServerCertificate => cxn.trust_server_certificate = is_truthy(value),
        }
    }

    debug!(driver = %cxn.driver, server = %cxn.server, "Connection string parsed");
    Ok(cxn)
}

impl std::str::FromStr for Connection {
    type Err = OdbcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

fn strip_braces(value: &str) -> &str {
    value
        .strip_prefix('{')
        .and_then(|v| v.strip_suffix('}'))
        .unwrap_or(value)
}

fn is_truthy(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "yes" | "true" | "1")
}
