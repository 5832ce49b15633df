//! CLI command implementations.

pub mod build;
pub mod drivers;
pub mod parse;
pub mod test;
pub mod version;

use mssqlodbc_core::{DriverProvider, DriverResolver};

use crate::cli::Cli;
use crate::config::Config;
use crate::error::CliResult;

/// State shared by every command: merged configuration and driver source.
pub struct Context {
    /// Configuration after applying command-line overrides
    pub config: Config,
    provider: Box<dyn DriverProvider>,
}

impl Context {
    /// Load configuration and apply global command-line overrides.
    pub fn from_cli(cli: &Cli) -> CliResult<Self> {
        let mut config = Config::resolve(cli.config.as_deref())?;

        if !cli.installed.is_empty() {
            config.drivers.installed = Some(cli.installed.clone());
        }
        if let Some(ref path) = cli.odbcinst {
            config.drivers.odbcinst_path = Some(path.clone());
        }

        Ok(Self::new(config))
    }

    /// Create a context from a finished configuration.
    pub fn new(config: Config) -> Self {
        let provider = config.drivers.provider();
        Self { config, provider }
    }

    /// A resolver over the configured driver source.
    pub fn resolver(&self) -> DriverResolver<&dyn DriverProvider> {
        DriverResolver::with_provider(self.provider.as_ref())
    }
}
