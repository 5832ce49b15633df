//! # mssqlodbc
//!
//! Resolve the best SQL Server ODBC driver installed on a host and build or
//! parse the ODBC connection strings used to open a session.
//!
//! mssqlodbc provides:
//! - A catalog of SQL Server ODBC drivers, newest first
//! - Driver resolution against an injectable [`DriverProvider`]
//! - A canonical connection string builder
//! - A parser that understands common keyword synonyms
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mssqlodbc::prelude::*;
//!
//! fn main() -> Result<(), OdbcError> {
//!     let resolver = DriverResolver::new();
//!     let installed = resolver.all_drivers()?;
//!
//!     let mut cxn = Connection::builder()
//!         .server(r"db1\SQL2016")
//!         .database("tempdb")
//!         .app_name("nightly-report")
//!         .build();
//!     cxn.set_driver(resolver.best_driver()?, &installed)?;
//!
//!     println!("{}", cxn.connection_string(&installed)?);
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Driver catalog and preference order.
pub mod catalog {
    pub use mssqlodbc_core::catalog::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use mssqlodbc_core::prelude::*;
}

// Re-export key types at the crate root
pub use mssqlodbc_core::{
    Connection, ConnectionBuilder, DriverProvider, DriverResolver, EncryptMode, Keyword,
    OdbcError, OdbcInstProvider, OdbcResult, ServerAddress, StaticDriverProvider,
    SystemDriverProvider, best_driver, installed_drivers, parse, valid_driver,
};
