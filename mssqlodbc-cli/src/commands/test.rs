//! `odbctest test` command - Build a connection string and verify it.

use mssqlodbc_core::{Connection, best_driver, installed_drivers};
use tracing::info;

use crate::cli::TestArgs;
use crate::commands::Context;
use crate::error::CliResult;
use crate::output::{self, kv, success};
use crate::session;

/// Run the test command
pub async fn run(ctx: &Context, args: TestArgs) -> CliResult<()> {
    output::header("Connection Test");
    let total = if args.no_connect { 2 } else { 3 };

    output::step(1, total, "Resolving drivers...");
    let all = ctx.resolver().all_drivers()?;
    for driver in installed_drivers(&all) {
        output::info(&format!("found driver: {}", driver));
    }
    let best = best_driver(&all)?;
    kv("Best driver", &best);

    let driver = args
        .driver
        .clone()
        .or_else(|| ctx.config.connection.driver.clone())
        .unwrap_or(best);
    kv("FQDN", &args.fqdn);
    kv("Driver", &driver);

    output::step(2, total, "Building connection string...");
    let mut cxn = connection_from_args(ctx, &args);
    cxn.set_driver(driver, &all)?;
    let s = cxn.connection_string(&all)?;
    kv("Connection string", &s);

    if args.no_connect {
        return Ok(());
    }

    output::step(3, total, "Connecting...");
    info!(fqdn = %args.fqdn, driver = %cxn.driver(), "Verifying connection");
    let server_name = session::verify(&cxn).await?;
    output::newline();
    success(&format!("@@SERVERNAME: {}", server_name));

    Ok(())
}

/// Seed the descriptor from config, switching to SQL Server authentication
/// when credentials are given.
fn connection_from_args(ctx: &Context, args: &TestArgs) -> Connection {
    let mut cxn = ctx.config.connection.connection_for(&args.fqdn);

    if args.user.is_some() || args.password.is_some() {
        cxn.trusted = false;
        cxn.user = args.user.clone().unwrap_or_default();
        cxn.password = args.password.clone().unwrap_or_default();
    }

    cxn
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn args(fqdn: &str) -> TestArgs {
        TestArgs {
            fqdn: fqdn.to_string(),
            driver: None,
            user: None,
            password: None,
            no_connect: false,
        }
    }

    #[test]
    fn test_trusted_without_credentials() {
        let ctx = Context::new(Config::default());
        let cxn = connection_from_args(&ctx, &args("db.example.com"));
        assert!(cxn.trusted);
        assert!(cxn.user.is_empty());
    }

    #[test]
    fn test_credentials_use_sql_server_auth() {
        let ctx = Context::new(Config::default());
        let mut a = args("db.example.com,1433");
        a.user = Some("sa".to_string());
        a.password = Some("pw".to_string());

        let cxn = connection_from_args(&ctx, &a);
        assert!(!cxn.trusted);
        assert!(!cxn.uses_trusted_auth());
        assert_eq!(cxn.user, "sa");
        assert_eq!(cxn.password, "pw");

        let config = session::tiberius_config(&cxn).unwrap();
        assert_eq!(config.get_addr(), "db.example.com:1433");
    }
}
