//! Sources of installed ODBC driver names.
//!
//! The resolver never talks to the operating system directly. Instead it asks
//! a [`DriverProvider`] for the names of every installed ODBC driver and ranks
//! them against the catalog. Tests use [`StaticDriverProvider`]; binaries use
//! [`SystemDriverProvider`], which reads the Windows registry or a unixODBC
//! `odbcinst.ini` depending on the platform.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{OdbcError, OdbcResult};

/// Default location of the unixODBC driver registry.
pub const DEFAULT_ODBCINST_PATH: &str = "/etc/odbcinst.ini";

/// Registry key holding installed ODBC drivers on Windows.
pub const ODBC_DRIVERS_KEY: &str = r"SOFTWARE\ODBC\ODBCINST.INI\ODBC Drivers";

/// Source for installed ODBC driver names.
pub trait DriverProvider: Send + Sync {
    /// List the names of every installed ODBC driver, of any vendor.
    fn list_installed_drivers(&self) -> OdbcResult<Vec<String>>;
}

impl<P: DriverProvider + ?Sized> DriverProvider for &P {
    fn list_installed_drivers(&self) -> OdbcResult<Vec<String>> {
        (**self).list_installed_drivers()
    }
}

impl<P: DriverProvider + ?Sized> DriverProvider for Box<P> {
    fn list_installed_drivers(&self) -> OdbcResult<Vec<String>> {
        (**self).list_installed_drivers()
    }
}

/// Provider backed by a fixed list of names.
#[derive(Debug, Clone, Default)]
pub struct StaticDriverProvider {
    drivers: Vec<String>,
}

impl StaticDriverProvider {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a driver name.
    pub fn with_driver(mut self, name: impl Into<String>) -> Self {
        self.drivers.push(name.into());
        self
    }
}

impl<S: Into<String>> FromIterator<S> for StaticDriverProvider {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            drivers: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl DriverProvider for StaticDriverProvider {
    fn list_installed_drivers(&self) -> OdbcResult<Vec<String>> {
        Ok(self.drivers.clone())
    }
}

/// Provider reading driver sections from a unixODBC `odbcinst.ini` file.
#[derive(Debug, Clone)]
pub struct OdbcInstProvider {
    path: PathBuf,
}

impl OdbcInstProvider {
    /// Create a provider for a specific file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Locate `odbcinst.ini` the way unixODBC does.
    ///
    /// `ODBCINSTINI` names the file directly; `ODBCSYSINI` names the directory
    /// holding it. Otherwise [`DEFAULT_ODBCINST_PATH`] is used.
    pub fn from_env() -> Self {
        if let Ok(file) = std::env::var("ODBCINSTINI") {
            if !file.is_empty() {
                return Self::new(file);
            }
        }
        if let Ok(dir) = std::env::var("ODBCSYSINI") {
            if !dir.is_empty() {
                return Self::new(Path::new(&dir).join("odbcinst.ini"));
            }
        }
        Self::new(DEFAULT_ODBCINST_PATH)
    }

    /// Path of the file this provider reads.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DriverProvider for OdbcInstProvider {
    fn list_installed_drivers(&self) -> OdbcResult<Vec<String>> {
        debug!(path = %self.path.display(), "Reading odbcinst.ini");
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            OdbcError::provider(format!("failed to read {}: {}", self.path.display(), e))
        })?;

        let mut drivers = ini_sections(&content);
        drivers.sort();
        debug!(count = drivers.len(), "Found ODBC driver sections");
        Ok(drivers)
    }
}

/// Collect `[section]` names from an ini document, skipping `[ODBC]`.
fn ini_sections(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with(';') && !line.starts_with('#'))
        .filter_map(|line| line.strip_prefix('[')?.strip_suffix(']'))
        .map(str::trim)
        .filter(|name| !name.is_empty() && !name.eq_ignore_ascii_case("ODBC"))
        .map(String::from)
        .collect()
}

/// Provider reading the Windows ODBC driver registry key.
#[cfg(windows)]
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistryProvider;

#[cfg(windows)]
impl DriverProvider for RegistryProvider {
    fn list_installed_drivers(&self) -> OdbcResult<Vec<String>> {
        use winreg::RegKey;
        use winreg::enums::{HKEY_LOCAL_MACHINE, KEY_QUERY_VALUE};

        debug!(key = ODBC_DRIVERS_KEY, "Reading ODBC driver registry key");
        let key = RegKey::predef(HKEY_LOCAL_MACHINE)
            .open_subkey_with_flags(ODBC_DRIVERS_KEY, KEY_QUERY_VALUE)
            .map_err(|e| OdbcError::provider(format!("openkey: {}", e)))?;

        let mut drivers = key
            .enum_values()
            .map(|value| value.map(|(name, _)| name))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| OdbcError::provider(format!("readvaluenames: {}", e)))?;
        drivers.sort();
        Ok(drivers)
    }
}

/// The platform's own driver registry.
#[derive(Debug, Clone)]
pub struct SystemDriverProvider {
    #[cfg(not(windows))]
    inner: OdbcInstProvider,
}

impl SystemDriverProvider {
    /// Create a provider for the current platform.
    pub fn new() -> Self {
        Self {
            #[cfg(not(windows))]
            inner: OdbcInstProvider::from_env(),
        }
    }
}

impl Default for SystemDriverProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DriverProvider for SystemDriverProvider {
    #[cfg(windows)]
    fn list_installed_drivers(&self) -> OdbcResult<Vec<String>> {
        RegistryProvider.list_installed_drivers()
    }

    #[cfg(not(windows))]
    fn list_installed_drivers(&self) -> OdbcResult<Vec<String>> {
        self.inner.list_installed_drivers()
    }
}
