//! Verification session against a live SQL Server.
//!
//! The ODBC connection string is what the caller ultimately hands to an ODBC
//! connector. To check that the described server is reachable we open a
//! native TDS session with tiberius using the same attributes.

use mssqlodbc_core::{Connection, EncryptMode};
use tiberius::{AuthMethod, Client, Config, EncryptionLevel, SqlBrowser};
use tokio::net::TcpStream;
use tokio_util::compat::TokioAsyncWriteCompatExt;
use tracing::{debug, info};

use crate::error::{CliError, CliResult};

/// Query used to verify the session
pub const VERIFY_QUERY: &str = "SELECT @@SERVERNAME";

/// Translate a connection descriptor into a tiberius config.
pub fn tiberius_config(cxn: &Connection) -> CliResult<Config> {
    let address = cxn.server_address();
    let mut config = Config::new();

    config.host(&address.host);
    if let Some(port) = address.port {
        config.port(port);
    }
    if let Some(ref instance) = address.instance {
        config.instance_name(instance);
    }
    if !cxn.database.is_empty() {
        config.database(&cxn.database);
    }
    if !cxn.app_name.is_empty() {
        config.application_name(&cxn.app_name);
    }

    if cxn.uses_trusted_auth() {
        #[cfg(windows)]
        {
            config.authentication(AuthMethod::Integrated);
        }
        #[cfg(not(windows))]
        {
            return Err(CliError::Connection(
                "trusted authentication is only supported on Windows; pass a user and password"
                    .to_string(),
            ));
        }
    } else {
        config.authentication(AuthMethod::sql_server(&cxn.user, &cxn.password));
    }

    if let Some(mode) = cxn.encrypt {
        config.encryption(encryption_level(mode));
    }
    if cxn.trust_server_certificate {
        config.trust_cert();
    }

    Ok(config)
}

fn encryption_level(mode: EncryptMode) -> EncryptionLevel {
    if mode.is_encrypted() {
        EncryptionLevel::Required
    } else {
        EncryptionLevel::Off
    }
}

/// Open a session and return the server name reported by `@@SERVERNAME`.
pub async fn verify(cxn: &Connection) -> CliResult<String> {
    let config = tiberius_config(cxn)?;

    debug!(addr = %config.get_addr(), "Opening TCP connection");
    let tcp = TcpStream::connect_named(&config).await?;
    tcp.set_nodelay(true)?;

    let mut client = Client::connect(config, tcp.compat_write()).await?;
    info!(server = %cxn.server, "Session opened");

    let row = client
        .query(VERIFY_QUERY, &[])
        .await?
        .into_row()
        .await?
        .ok_or_else(|| CliError::Connection("verification query returned no rows".to_string()))?;

    let server_name = row.get::<&str, _>(0).unwrap_or_default().to_string();
    client.close().await?;

    Ok(server_name)
}
