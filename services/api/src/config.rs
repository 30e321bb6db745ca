//! Server configuration

/// Listen address configuration for the HTTP server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind to
    pub host: String,
    /// TCP port to listen on
    pub port: u16,
}

impl ServerConfig {
    /// Create a new ServerConfig from environment variables
    ///
    /// # Environment Variables
    /// - `SERVER_HOST`: interface to bind to (default: "0.0.0.0")
    /// - `SERVER_PORT`: port to listen on (default: 5000)
    pub fn from_env() -> Self {
        let host = std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = std::env::var("SERVER_PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse()
            .unwrap_or(5000);

        Self { host, port }
    }

    /// The address to pass to the TCP listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_server_config_defaults() {
        unsafe {
            std::env::remove_var("SERVER_HOST");
            std::env::remove_var("SERVER_PORT");
        }

        let config = ServerConfig::from_env();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
    }

    #[test]
    #[serial]
    fn test_server_config_from_env() {
        unsafe {
            std::env::set_var("SERVER_HOST", "127.0.0.1");
            std::env::set_var("SERVER_PORT", "8080");
        }

        let config = ServerConfig::from_env();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");

        unsafe {
            std::env::remove_var("SERVER_HOST");
            std::env::remove_var("SERVER_PORT");
        }
    }

    #[test]
    #[serial]
    fn test_server_config_bad_port_falls_back() {
        unsafe {
            std::env::set_var("SERVER_PORT", "not-a-port");
        }

        let config = ServerConfig::from_env();
        assert_eq!(config.port, 5000);

        unsafe {
            std::env::remove_var("SERVER_PORT");
        }
    }
}
