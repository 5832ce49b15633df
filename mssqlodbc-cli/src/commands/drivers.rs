//! `odbctest drivers` command - List installed SQL Server ODBC drivers.

use mssqlodbc_core::{OdbcError, best_driver, installed_drivers};

use crate::commands::Context;
use crate::error::CliResult;
use crate::output::{self, kv, success};

/// Run the drivers command
pub async fn run(ctx: &Context) -> CliResult<()> {
    output::header("SQL Server ODBC Drivers");

    let all = ctx.resolver().all_drivers()?;
    let drivers = installed_drivers(&all);

    kv("ODBC drivers reported", &all.len().to_string());
    kv("SQL Server drivers", &drivers.len().to_string());
    output::newline();

    if drivers.is_empty() {
        output::warn("No SQL Server ODBC driver is installed");
        return Err(OdbcError::NoDriversFound.into());
    }

    output::section("Installed (best first)");
    for (i, driver) in drivers.iter().enumerate() {
        output::numbered_item(i + 1, driver);
    }
    output::newline();

    let best = best_driver(&all)?;
    success(&format!("Best driver: {}", best));

    Ok(())
}
