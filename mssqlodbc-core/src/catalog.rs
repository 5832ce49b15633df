//! The catalog of known SQL Server ODBC drivers.
//!
//! Drivers are listed most-preferred first: newer generic ODBC drivers rank
//! above older ones, which rank above the legacy Native Client drivers and
//! finally the generic `SQL Server` driver that ships with Windows.
//!
//! ```rust
//! use mssqlodbc_core::catalog::{self, ODBC_18, NATIVE_CLIENT_11};
//!
//! assert_eq!(catalog::drivers()[0], ODBC_18);
//! assert!(catalog::rank(ODBC_18) < catalog::rank(NATIVE_CLIENT_11));
//! assert_eq!(catalog::lookup("odbc driver 18 for sql server"), Some(ODBC_18));
//! ```

/// ODBC Driver 18 for SQL Server (released 2022).
pub const ODBC_18: &str = "ODBC Driver 18 for SQL Server";

/// ODBC Driver 17 for SQL Server (released 2018).
pub const ODBC_17: &str = "ODBC Driver 17 for SQL Server";

/// ODBC Driver 13 for SQL Server (released 2016, adds SQL Server 2016).
pub const ODBC_13: &str = "ODBC Driver 13 for SQL Server";

/// ODBC Driver 11 for SQL Server (released 2014, adds SQL Server 2012).
pub const ODBC_11: &str = "ODBC Driver 11 for SQL Server";

/// SQL Server Native Client 11.0 (released 2011).
pub const NATIVE_CLIENT_11: &str = "SQL Server Native Client 11.0";

/// SQL Server Native Client 10.0.
pub const NATIVE_CLIENT_10: &str = "SQL Server Native Client 10.0";

/// The generic `SQL Server` driver.
pub const GENERIC_ODBC: &str = "SQL Server";

/// Catalog in preference order.
const ORDERED_DRIVERS: &[&str] = &[
    ODBC_18,
    ODBC_17,
    ODBC_13,
    ODBC_11,
    NATIVE_CLIENT_11,
    NATIVE_CLIENT_10,
    GENERIC_ODBC,
];

/// All known drivers, most preferred first.
pub fn drivers() -> &'static [&'static str] {
    ORDERED_DRIVERS
}

/// Find the catalog spelling of a driver name, ignoring ASCII case.
pub fn lookup(name: &str) -> Option<&'static str> {
    ORDERED_DRIVERS
        .iter()
        .copied()
        .find(|known| known.eq_ignore_ascii_case(name))
}

/// Preference rank of a driver (0 is best), ignoring ASCII case.
pub fn rank(name: &str) -> Option<usize> {
    ORDERED_DRIVERS
        .iter()
        .position(|known| known.eq_ignore_ascii_case(name))
}

/// Check whether a name is a catalog driver, ignoring ASCII case.
pub fn contains(name: &str) -> bool {
    rank(name).is_some()
}
