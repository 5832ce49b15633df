//! `odbctest parse` command - Decode a connection string.

use crate::cli::ParseArgs;
use crate::error::CliResult;
use crate::output::{self, kv, or_none, yes_no};

/// Run the parse command
pub async fn run(args: ParseArgs) -> CliResult<()> {
    let mut cxn = mssqlodbc_core::parse(&args.connection_string)?;
    if args.trusted_default {
        cxn.apply_trusted_default();
    }

    output::header("Parsed Connection String");
    kv("Driver", &or_none(cxn.driver()));
    kv("Server", &or_none(&cxn.server));
    kv("User", &or_none(&cxn.user));
    kv(
        "Password",
        if cxn.password.is_empty() { "(none)" } else { "****" },
    );
    kv("Trusted", yes_no(cxn.trusted));
    kv("Database", &or_none(&cxn.database));
    kv("App", &or_none(&cxn.app_name));
    kv("MultiSubnetFailover", yes_no(cxn.multi_subnet_failover));
    kv(
        "Encrypt",
        &cxn.encrypt.map(|e| e.to_string()).unwrap_or_else(|| or_none("")),
    );
    kv("TrustServerCertificate", yes_no(cxn.trust_server_certificate));

    Ok(())
}
