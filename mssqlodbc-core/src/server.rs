//! Decomposition of the `Server` keyword value.

use std::fmt;

/// Default SQL Server TCP port.
pub const DEFAULT_PORT: u16 = 1433;

/// A server address in `host`, `host,port` or `host\instance` form.
///
/// ```rust
/// use mssqlodbc_core::ServerAddress;
///
/// let addr = ServerAddress::parse("127.0.0.1,59625");
/// assert_eq!(addr.host, "127.0.0.1");
/// assert_eq!(addr.port, Some(59625));
///
/// let addr = ServerAddress::parse(r"D40\SQL2014");
/// assert_eq!(addr.instance.as_deref(), Some("SQL2014"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerAddress {
    /// Host name or IP address.
    pub host: String,
    /// Explicit TCP port.
    pub port: Option<u16>,
    /// Named instance.
    pub instance: Option<String>,
}

impl ServerAddress {
    /// Split a server value into its parts.
    ///
    /// A `tcp:` prefix is dropped and `.`/`(local)` mean `localhost`. An
    /// unparseable port is reported as `None`.
    pub fn parse(server: &str) -> Self {
        let server = server.trim();
        let server = server
            .strip_prefix("tcp:")
            .or_else(|| server.strip_prefix("TCP:"))
            .unwrap_or(server);

        let (rest, port) = match server.rsplit_once(',') {
            Some((rest, port)) => (rest, port.trim().parse().ok()),
            None => (server, None),
        };

        let (host, instance) = match rest.split_once('\\') {
            Some((host, instance)) if !instance.is_empty() => (host, Some(instance.to_string())),
            Some((host, _)) => (host, None),
            None => (rest, None),
        };

        let host = match host.trim() {
            "." | "(local)" | "" => "localhost".to_string(),
            other => other.to_string(),
        };

        Self {
            host,
            port,
            instance,
        }
    }

    /// Port to connect to, falling back to [`DEFAULT_PORT`].
    pub fn port_or_default(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }
}

impl fmt::Display for ServerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.host)?;
        if let Some(ref instance) = self.instance {
            write!(f, "\\{}", instance)?;
        }
        if let Some(port) = self.port {
            write!(f, ",{}", port)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_only() {
        let addr = ServerAddress::parse("db.example.com");
        assert_eq!(addr.host, "db.example.com");
        assert_eq!(addr.port, None);
        assert_eq!(addr.instance, None);
        assert_eq!(addr.port_or_default(), 1433);
    }

    #[test]
    fn test_host_and_port() {
        let addr = ServerAddress::parse("localhost,12345");
        assert_eq!(addr.host, "localhost");
        assert_eq!(addr.port, Some(12345));
        assert_eq!(addr.to_string(), "localhost,12345");
    }

    #[test]
    fn test_named_instance() {
        let addr = ServerAddress::parse("localhost\\SQL2016");
        assert_eq!(addr.host, "localhost");
        assert_eq!(addr.instance, Some("SQL2016".to_string()));
        assert_eq!(addr.to_string(), "localhost\\SQL2016");
    }

    #[test]
    fn test_local_aliases_and_prefix() {
        assert_eq!(ServerAddress::parse(".").host, "localhost");
        assert_eq!(ServerAddress::parse("(local)\\SQLEXPRESS").host, "localhost");

        let addr = ServerAddress::parse("tcp:10.0.0.5,1434");
        assert_eq!(addr.host, "10.0.0.5");
        assert_eq!(addr.port, Some(1434));
    }

    #[test]
    fn test_bad_port() {
        let addr = ServerAddress::parse("host,notaport");
        assert_eq!(addr.host, "host");
        assert_eq!(addr.port, None);
    }
}
