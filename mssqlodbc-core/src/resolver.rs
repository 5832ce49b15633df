//! Driver resolution against the catalog.
//!
//! The free functions are pure: they rank a caller-supplied set of installed
//! driver names against [`catalog::drivers`]. [`DriverResolver`] binds a
//! [`DriverProvider`] so callers can resolve against the live system.
//!
//! ```rust
//! use mssqlodbc_core::resolver::{best_driver, installed_drivers};
//!
//! let installed = ["SQL Server", "PostgreSQL Unicode", "odbc driver 17 for sql server"];
//! assert_eq!(
//!     installed_drivers(&installed),
//!     vec!["ODBC Driver 17 for SQL Server", "SQL Server"]
//! );
//! assert_eq!(best_driver(&installed).unwrap(), "ODBC Driver 17 for SQL Server");
//! ```

use tracing::{debug, trace};

use crate::catalog;
use crate::error::{OdbcError, OdbcResult};
use crate::provider::{DriverProvider, SystemDriverProvider};

/// Installed catalog drivers in preference order.
///
/// Names are matched case-insensitively and returned in catalog spelling,
/// not in the spelling the system reported. A driver registered as
/// `sql server` is listed as `SQL Server`, so every entry is accepted by
/// [`valid_driver`] and agrees with [`best_driver`]. Unknown names and
/// duplicates are dropped.
pub fn installed_drivers<S: AsRef<str>>(installed: &[S]) -> Vec<String> {
    let drivers: Vec<String> = catalog::drivers()
        .iter()
        .filter(|known| {
            installed
                .iter()
                .any(|name| name.as_ref().eq_ignore_ascii_case(known))
        })
        .map(|known| (*known).to_string())
        .collect();

    trace!(installed = installed.len(), matched = drivers.len(), "Filtered installed drivers");
    drivers
}

/// The most preferred catalog driver present in `installed`.
///
/// Returns the catalog spelling of the driver.
pub fn best_driver<S: AsRef<str>>(installed: &[S]) -> OdbcResult<String> {
    let best = catalog::drivers().iter().find(|known| {
        installed
            .iter()
            .any(|name| name.as_ref().eq_ignore_ascii_case(known))
    });

    match best {
        Some(driver) => {
            debug!(driver = %driver, "Selected best driver");
            Ok((*driver).to_string())
        }
        None => {
            debug!(installed = installed.len(), "No catalog driver installed");
            Err(OdbcError::NoDriversFound)
        }
    }
}

/// Check that `name` is exactly one of the installed catalog drivers.
pub fn valid_driver<S: AsRef<str>>(name: &str, installed: &[S]) -> OdbcResult<()> {
    if installed_drivers(installed).iter().any(|d| d == name) {
        Ok(())
    } else {
        debug!(driver = %name, "Rejected driver");
        Err(OdbcError::invalid_driver(name))
    }
}

/// Resolves drivers against a [`DriverProvider`].
///
/// Every call asks the provider afresh; nothing is cached.
#[derive(Debug, Clone)]
pub struct DriverResolver<P: DriverProvider = SystemDriverProvider> {
    provider: P,
}

impl DriverResolver<SystemDriverProvider> {
    /// Create a resolver for the current system.
    pub fn new() -> Self {
        Self {
            provider: SystemDriverProvider::new(),
        }
    }
}

impl Default for DriverResolver<SystemDriverProvider> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: DriverProvider> DriverResolver<P> {
    /// Create a resolver with a custom provider.
    pub fn with_provider(provider: P) -> Self {
        Self { provider }
    }

    /// The underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Every driver name the provider reports, unfiltered.
    pub fn all_drivers(&self) -> OdbcResult<Vec<String>> {
        self.provider.list_installed_drivers()
    }

    /// Installed catalog drivers in preference order.
    pub fn installed_drivers(&self) -> OdbcResult<Vec<String>> {
        Ok(installed_drivers(&self.all_drivers()?))
    }

    /// The most preferred installed catalog driver.
    pub fn best_driver(&self) -> OdbcResult<String> {
        best_driver(&self.all_drivers()?)
    }

    /// Check that `name` is one of the installed catalog drivers.
    pub fn valid_driver(&self, name: &str) -> OdbcResult<()> {
        valid_driver(name, &self.all_drivers()?)
    }
}
