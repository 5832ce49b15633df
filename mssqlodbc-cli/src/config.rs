//! CLI configuration handling.

use std::path::{Path, PathBuf};

use mssqlodbc_core::{
    Connection, DriverProvider, EncryptMode, OdbcInstProvider, StaticDriverProvider,
    SystemDriverProvider,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CliResult;

/// Default config file name (looked up in the current directory)
pub const CONFIG_FILE_NAME: &str = "odbctest.toml";

/// Default application name reported to SQL Server
pub const DEFAULT_APP_NAME: &str = "odbctest";

/// odbctest configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Connection defaults
    pub connection: ConnectionConfig,

    /// Driver discovery
    pub drivers: DriversConfig,
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load from an explicit path, or from `odbctest.toml` in the current
    /// directory when it exists, or fall back to defaults.
    pub fn resolve(explicit: Option<&Path>) -> CliResult<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let default_path = std::env::current_dir()?.join(CONFIG_FILE_NAME);
        if default_path.exists() {
            Self::load(&default_path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Connection defaults applied before command-line flags
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionConfig {
    /// Application name
    pub app_name: String,

    /// Initial database
    pub database: Option<String>,

    /// Driver to use instead of the best installed one
    pub driver: Option<String>,

    /// Enable MultiSubnetFailover
    pub multi_subnet_failover: bool,

    /// Encryption mode
    pub encrypt: Option<EncryptMode>,

    /// Trust the server certificate
    pub trust_server_certificate: bool,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            database: None,
            driver: None,
            multi_subnet_failover: false,
            encrypt: None,
            trust_server_certificate: false,
        }
    }
}

impl ConnectionConfig {
    /// A trusted connection to `server` seeded with these defaults.
    ///
    /// The driver is left unset; it has to be validated separately.
    pub fn connection_for(&self, server: &str) -> Connection {
        let mut builder = Connection::builder()
            .server(server)
            .trusted(true)
            .app_name(&self.app_name)
            .multi_subnet_failover(self.multi_subnet_failover)
            .trust_server_certificate(self.trust_server_certificate);

        if let Some(ref database) = self.database {
            builder = builder.database(database);
        }
        if let Some(encrypt) = self.encrypt {
            builder = builder.encrypt(encrypt);
        }
        builder.build()
    }
}

/// Driver discovery configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DriversConfig {
    /// Path to a unixODBC odbcinst.ini
    pub odbcinst_path: Option<PathBuf>,

    /// Fixed list of installed drivers, bypassing the system lookup
    pub installed: Option<Vec<String>>,
}

impl DriversConfig {
    /// Build the driver provider, preferring an explicit list, then an
    /// odbcinst.ini path, then the system registry.
    pub fn provider(&self) -> Box<dyn DriverProvider> {
        if let Some(ref installed) = self.installed {
            debug!(count = installed.len(), "Using configured driver list");
            return Box::new(installed.iter().cloned().collect::<StaticDriverProvider>());
        }
        if let Some(ref path) = self.odbcinst_path {
            debug!(path = %path.display(), "Using configured odbcinst.ini");
            return Box::new(OdbcInstProvider::new(path));
        }
        Box::new(SystemDriverProvider::new())
    }
}
