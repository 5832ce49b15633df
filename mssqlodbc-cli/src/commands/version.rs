//! `odbctest version` command - Display version information.

use mssqlodbc_core::catalog;

use crate::error::CliResult;
use crate::output::{self, kv};

/// Package version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name
const NAME: &str = env!("CARGO_PKG_NAME");

/// Run the version command
pub async fn run() -> CliResult<()> {
    output::header("odbctest");

    kv("Version", VERSION);
    kv("Package", NAME);

    #[cfg(debug_assertions)]
    let build_mode = "debug";
    #[cfg(not(debug_assertions))]
    let build_mode = "release";

    kv("Build", build_mode);
    kv("Platform", std::env::consts::OS);

    output::newline();
    output::section("Known drivers (best first)");
    for (i, driver) in catalog::drivers().iter().enumerate() {
        output::numbered_item(i + 1, driver);
    }

    output::newline();
    output::dim("https://learn.microsoft.com/en-us/sql/connect/odbc/microsoft-odbc-driver-for-sql-server");

    Ok(())
}
