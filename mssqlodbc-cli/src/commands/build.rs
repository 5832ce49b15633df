//! `odbctest build` command - Render a connection string.

use mssqlodbc_core::Connection;

use crate::cli::BuildArgs;
use crate::commands::Context;
use crate::error::CliResult;
use crate::output::{self, kv};

/// Run the build command
pub async fn run(ctx: &Context, args: BuildArgs) -> CliResult<()> {
    let mut cxn = connection_from_args(ctx, &args);
    let installed = ctx.resolver().all_drivers()?;

    if let Some(driver) = args.driver.or_else(|| ctx.config.connection.driver.clone()) {
        cxn.set_driver(driver, &installed)?;
    }

    let s = cxn.connection_string(&installed)?;

    output::header("Connection String");
    kv("Driver", cxn.driver());
    kv("Server", &cxn.server);
    kv(
        "Authentication",
        if cxn.uses_trusted_auth() { "trusted" } else { "sql server" },
    );
    output::newline();
    output::code(&s);

    Ok(())
}

/// Merge configured defaults with the command-line arguments.
fn connection_from_args(ctx: &Context, args: &BuildArgs) -> Connection {
    let defaults = &ctx.config.connection;
    let mut cxn = defaults.connection_for(&args.server);

    cxn.trusted = args.trusted;
    cxn.user = args.user.clone().unwrap_or_default();
    cxn.password = args.password.clone().unwrap_or_default();

    if let Some(ref database) = args.database {
        cxn.database = database.clone();
    }
    if let Some(ref app) = args.app {
        cxn.app_name = app.clone();
    }
    if let Some(encrypt) = args.encrypt {
        cxn.encrypt = Some(encrypt.into());
    }
    cxn.multi_subnet_failover |= args.multi_subnet_failover;
    cxn.trust_server_certificate |= args.trust_server_certificate;

    cxn
}
