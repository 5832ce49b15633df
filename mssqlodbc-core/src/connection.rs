//! SQL Server ODBC connection descriptor and connection string builder.

use std::fmt;

use tracing::debug;

use crate::encrypt::EncryptMode;
use crate::error::{OdbcError, OdbcResult};
use crate::provider::DriverProvider;
use crate::resolver;
use crate::server::ServerAddress;

/// Attributes of one ODBC SQL Server connection.
///
/// The driver is private so that it can only be set to an installed catalog
/// driver, by [`Connection::set_driver`], by the parser, or by resolving the
/// best driver when the connection string is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Connection {
    pub(crate) driver: String,
    /// Server in `host`, `host,port` or `host\instance` form.
    pub server: String,
    /// Username for SQL Server authentication.
    pub user: String,
    /// Password for SQL Server authentication.
    pub password: String,
    /// Use integrated (trusted) authentication.
    pub trusted: bool,
    /// Application name (shown in sys.dm_exec_sessions).
    pub app_name: String,
    /// Initial database.
    pub database: String,
    /// Enable faster failover for availability group listeners.
    pub multi_subnet_failover: bool,
    /// Encryption mode; `None` leaves the driver default.
    pub encrypt: Option<EncryptMode>,
    /// Skip server certificate validation.
    pub trust_server_certificate: bool,
}

impl Connection {
    /// Create an empty connection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for a connection.
    pub fn builder() -> ConnectionBuilder {
        ConnectionBuilder::new()
    }

    /// The driver for the connection; empty until set or resolved.
    pub fn driver(&self) -> &str {
        &self.driver
    }

    /// Set the driver, which must be one of the installed catalog drivers.
    pub fn set_driver<S: AsRef<str>>(
        &mut self,
        driver: impl Into<String>,
        installed: &[S],
    ) -> OdbcResult<()> {
        let driver = driver.into();
        resolver::valid_driver(&driver, installed)?;
        self.driver = driver;
        Ok(())
    }

    /// Clear the driver so the best one is resolved on the next build.
    pub fn clear_driver(&mut self) {
        self.driver.clear();
    }

    /// Whether the connection string will use trusted authentication.
    pub fn uses_trusted_auth(&self) -> bool {
        self.trusted || (self.user.is_empty() && self.password.is_empty())
    }

    /// Treat a connection without credentials as trusted.
    ///
    /// Parsing never infers `trusted`; callers that want the builder's view
    /// of authentication apply this afterwards.
    pub fn apply_trusted_default(&mut self) {
        if self.user.is_empty() && self.password.is_empty() {
            self.trusted = true;
        }
    }

    /// The server value split into host, port and instance.
    pub fn server_address(&self) -> ServerAddress {
        ServerAddress::parse(&self.server)
    }

    /// Build the connection string, resolving the driver from `installed`
    /// when none is set.
    ///
    /// A resolved driver is stored on the connection.
    pub fn connection_string<S: AsRef<str>>(&mut self, installed: &[S]) -> OdbcResult<String> {
        if self.server.is_empty() {
            return Err(OdbcError::MissingServer);
        }
        if self.driver.is_empty() {
            self.driver = resolver::best_driver(installed)?;
            debug!(driver = %self.driver, "Resolved driver for connection string");
        }
        self.render()
    }

    /// Build the connection string, asking `provider` for installed drivers
    /// only when no driver is set.
    pub fn connection_string_from<P: DriverProvider + ?Sized>(
        &mut self,
        provider: &P,
    ) -> OdbcResult<String> {
        if self.server.is_empty() {
            return Err(OdbcError::MissingServer);
        }
        if self.driver.is_empty() {
            let installed = provider.list_installed_drivers()?;
            self.driver = resolver::best_driver(&installed)?;
            debug!(driver = %self.driver, "Resolved driver for connection string");
        }
        self.render()
    }

    // https://learn.microsoft.com/en-us/sql/relational-databases/native-client/applications/using-connection-string-keywords-with-sql-server-native-client
    fn render(&self) -> OdbcResult<String> {
        if self.driver.is_empty() {
            return Err(OdbcError::NoDriversFound);
        }

        let mut cxn = String::with_capacity(128);
        push_clause(&mut cxn, "Driver", &format!("{{{}}}", self.driver));
        push_clause(&mut cxn, "Server", &self.server);

        if self.uses_trusted_auth() {
            push_clause(&mut cxn, "Trusted_Connection", "yes");
        } else {
            push_clause(&mut cxn, "UID", &self.user);
            push_clause(&mut cxn, "PWD", &self.password);
        }

        if !self.database.is_empty() {
            push_clause(&mut cxn, "Database", &self.database);
        }

        if !self.app_name.is_empty() {
            push_clause(&mut cxn, "App", &self.app_name);
        }

        if self.multi_subnet_failover {
            push_clause(&mut cxn, "MultiSubnetFailover", "Yes");
        }

        if let Some(encrypt) = self.encrypt {
            push_clause(&mut cxn, "Encrypt", encrypt.as_str());
        }

        if self.trust_server_certificate {
            push_clause(&mut cxn, "TrustServerCertificate", "Yes");
        }

        debug!(
            driver = %self.driver,
            server = %self.server,
            trusted = self.uses_trusted_auth(),
            "Built connection string"
        );

        Ok(cxn)
    }
}

fn push_clause(cxn: &mut String, key: &str, value: &str) {
    cxn.push_str(key);
    cxn.push('=');
    cxn.push_str(value);
    cxn.push_str("; ");
}

/// Renders the connection with the password masked.
impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let driver = if self.driver.is_empty() {
            "(best available)"
        } else {
            &self.driver
        };
        write!(f, "Driver={{{}}}; Server={}; ", driver, self.server)?;

        if self.uses_trusted_auth() {
            write!(f, "Trusted_Connection=yes; ")?;
        } else {
            write!(f, "UID={}; PWD=****; ", self.user)?;
        }
        if !self.database.is_empty() {
            write!(f, "Database={}; ", self.database)?;
        }
        if !self.app_name.is_empty() {
            write!(f, "App={}; ", self.app_name)?;
        }
        if self.multi_subnet_failover {
            write!(f, "MultiSubnetFailover=Yes; ")?;
        }
        if let Some(encrypt) = self.encrypt {
            write!(f, "Encrypt={}; ", encrypt)?;
        }
        if self.trust_server_certificate {
            write!(f, "TrustServerCertificate=Yes; ")?;
        }
        Ok(())
    }
}

/// Builder for [`Connection`].
///
/// The driver is not part of the builder; use [`Connection::set_driver`]
/// so that it is validated against the installed drivers.
#[derive(Debug, Default)]
pub struct ConnectionBuilder {
    inner: Connection,
}

impl ConnectionBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the server.
    pub fn server(mut self, server: impl Into<String>) -> Self {
        self.inner.server = server.into();
        self
    }

    /// Set the username for SQL Server authentication.
    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.inner.user = user.into();
        self
    }

    /// Set the password for SQL Server authentication.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.inner.password = password.into();
        self
    }

    /// Use trusted authentication.
    pub fn trusted(mut self, trusted: bool) -> Self {
        self.inner.trusted = trusted;
        self
    }

    /// Set the application name.
    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.inner.app_name = name.into();
        self
    }

    /// Set the initial database.
    pub fn database(mut self, database: impl Into<String>) -> Self {
        self.inner.database = database.into();
        self
    }

    /// Enable MultiSubnetFailover.
    pub fn multi_subnet_failover(mut self, enabled: bool) -> Self {
        self.inner.multi_subnet_failover = enabled;
        self
    }

    /// Set the encryption mode.
    pub fn encrypt(mut self, mode: EncryptMode) -> Self {
        self.inner.encrypt = Some(mode);
        self
    }

    /// Trust the server certificate.
    pub fn trust_server_certificate(mut self, trust: bool) -> Self {
        self.inner.trust_server_certificate = trust;
        self
    }

    /// Build the connection.
    pub fn build(self) -> Connection {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{NATIVE_CLIENT_11, ODBC_17, ODBC_18};
    use crate::provider::StaticDriverProvider;
    use pretty_assertions::assert_eq;

    const INSTALLED: &[&str] = &[NATIVE_CLIENT_11, ODBC_17];

    #[test]
    fn test_base_string_resolves_best_driver() {
        let mut cxn = Connection::new();
        cxn.server = "localhost,12345".to_string();

        let s = cxn.connection_string(INSTALLED).unwrap();
        assert_eq!(
            s,
            "Driver={ODBC Driver 17 for SQL Server}; Server=localhost,12345; Trusted_Connection=yes; "
        );
        assert_eq!(cxn.driver(), ODBC_17);
    }

    #[test]
    fn test_full_string_order() {
        let mut cxn = Connection::builder()
            .server("D40\\SQL2014")
            .database("tempdb")
            .app_name("gosql")
            .trusted(true)
            .multi_subnet_failover(true)
            .build();
        cxn.set_driver(NATIVE_CLIENT_11, INSTALLED).unwrap();

        assert_eq!(
            cxn.connection_string(INSTALLED).unwrap(),
            "Driver={SQL Server Native Client 11.0}; Server=D40\\SQL2014; Trusted_Connection=yes; \
             Database=tempdb; App=gosql; MultiSubnetFailover=Yes; "
        );
    }

    #[test]
    fn test_credentials() {
        let mut cxn = Connection::builder()
            .server("127.0.0.1,59625")
            .user("test")
            .password("test")
            .database("tempdb")
            .app_name("IsItSql")
            .build();
        cxn.set_driver(NATIVE_CLIENT_11, INSTALLED).unwrap();

        assert_eq!(
            cxn.connection_string(INSTALLED).unwrap(),
            "Driver={SQL Server Native Client 11.0}; Server=127.0.0.1,59625; UID=test; PWD=test; \
             Database=tempdb; App=IsItSql; "
        );
    }

    #[test]
    fn test_trusted_wins_over_credentials() {
        let mut cxn = Connection::builder()
            .server("localhost")
            .user("sa")
            .password("secret")
            .trusted(true)
            .build();
        let s = cxn.connection_string(INSTALLED).unwrap();
        assert!(s.contains("Trusted_Connection=yes; "));
        assert!(!s.contains("UID="));
        assert!(!s.contains("PWD="));
    }

    #[test]
    fn test_user_without_password_is_not_trusted() {
        let mut cxn = Connection::builder().server("localhost").user("sa").build();
        let s = cxn.connection_string(INSTALLED).unwrap();
        assert!(s.contains("UID=sa; PWD=; "));
    }

    #[test]
    fn test_encrypt_and_trust_cert() {
        let mut cxn = Connection::builder()
            .server("localhost")
            .encrypt(EncryptMode::Strict)
            .trust_server_certificate(true)
            .build();
        let s = cxn.connection_string(INSTALLED).unwrap();
        assert!(s.ends_with("Encrypt=Strict; TrustServerCertificate=Yes; "));
    }

    #[test]
    fn test_missing_server() {
        let mut cxn = Connection::new();
        assert_eq!(cxn.connection_string(INSTALLED), Err(OdbcError::MissingServer));

        let none: &[&str] = &[];
        let mut cxn = Connection::builder().database("tempdb").trusted(true).build();
        assert_eq!(cxn.connection_string(none), Err(OdbcError::MissingServer));
    }

    #[test]
    fn test_no_drivers() {
        let mut cxn = Connection::builder().server("localhost").build();
        let installed = ["PostgreSQL Unicode"];
        assert_eq!(cxn.connection_string(&installed), Err(OdbcError::NoDriversFound));
        assert_eq!(cxn.driver(), "");
    }

    #[test]
    fn test_set_driver_rejects_unknown() {
        let mut cxn = Connection::new();
        assert_eq!(
            cxn.set_driver("test", INSTALLED),
            Err(OdbcError::invalid_driver("test"))
        );
        assert!(cxn.set_driver(ODBC_18, INSTALLED).is_err());
        assert_eq!(cxn.driver(), "");
    }

    #[test]
    fn test_connection_string_from_provider() {
        let provider = StaticDriverProvider::new().with_driver(ODBC_18);
        let mut cxn = Connection::builder().server("localhost").build();
        let s = cxn.connection_string_from(&provider).unwrap();
        assert!(s.starts_with("Driver={ODBC Driver 18 for SQL Server}; "));
    }

    #[test]
    fn test_apply_trusted_default() {
        let mut cxn = Connection::new();
        cxn.apply_trusted_default();
        assert!(cxn.trusted);

        let mut cxn = Connection::builder().user("sa").build();
        cxn.apply_trusted_default();
        assert!(!cxn.trusted);
    }

    #[test]
    fn test_display_masks_password() {
        let cxn = Connection::builder()
            .server("localhost")
            .user("sa")
            .password("hunter2")
            .build();
        let shown = cxn.to_string();
        assert!(shown.contains("PWD=****"));
        assert!(!shown.contains("hunter2"));
        assert!(shown.starts_with("Driver={(best available)}"));
    }
}
