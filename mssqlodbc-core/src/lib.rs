//! # mssqlodbc-core
//!
//! SQL Server ODBC driver resolution and connection strings.
//!
//! This crate provides:
//! - A catalog of SQL Server ODBC drivers in preference order
//! - Resolution of the best installed driver from a [`DriverProvider`]
//! - A [`Connection`] descriptor that renders a canonical connection string
//! - A parser for connection strings, including common keyword synonyms
//!
//! ## Example
//!
//! ```rust
//! use mssqlodbc_core::{Connection, DriverResolver, StaticDriverProvider, parse};
//!
//! let resolver = DriverResolver::with_provider(
//!     StaticDriverProvider::new()
//!         .with_driver("SQL Server")
//!         .with_driver("ODBC Driver 17 for SQL Server"),
//! );
//! let installed = resolver.all_drivers().unwrap();
//!
//! let mut cxn = Connection::builder()
//!     .server("localhost,1433")
//!     .database("tempdb")
//!     .app_name("odbctest")
//!     .trusted(true)
//!     .build();
//! let s = cxn.connection_string(&installed).unwrap();
//! assert_eq!(
//!     s,
//!     "Driver={ODBC Driver 17 for SQL Server}; Server=localhost,1433; \
//!      Trusted_Connection=yes; Database=tempdb; App=odbctest; "
//! );
//!
//! let parsed = parse(&s).unwrap();
//! assert_eq!(parsed, cxn);
//! ```

pub mod catalog;
pub mod connection;
pub mod encrypt;
pub mod error;
pub mod parser;
pub mod provider;
pub mod resolver;
pub mod server;

pub use connection::{Connection, ConnectionBuilder};
pub use encrypt::EncryptMode;
pub use error::{OdbcError, OdbcResult};
pub use parser::{Keyword, parse};
pub use provider::{DriverProvider, OdbcInstProvider, StaticDriverProvider, SystemDriverProvider};
#[cfg(windows)]
pub use provider::RegistryProvider;
pub use resolver::{DriverResolver, best_driver, installed_drivers, valid_driver};
pub use server::ServerAddress;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::catalog;
    pub use crate::connection::{Connection, ConnectionBuilder};
    pub use crate::encrypt::EncryptMode;
    pub use crate::error::{OdbcError, OdbcResult};
    pub use crate::parser::parse;
    pub use crate::provider::{DriverProvider, StaticDriverProvider, SystemDriverProvider};
    pub use crate::resolver::DriverResolver;
}
