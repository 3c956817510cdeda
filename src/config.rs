use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,

    // Downstream translation service
    pub translate_endpoint: String,
    pub request_timeout_secs: u64,

    // Static assets
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Server (127.0.0.1 for local, set HOST=0.0.0.0 for containers)
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("PORT must be a valid port number")?,

            // Translation service
            translate_endpoint: std::env::var("TRANSLATE_ENDPOINT")
                .unwrap_or_else(|_| "https://translate.googleapis.com".to_string()),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .context("REQUEST_TIMEOUT_SECS must be a number of seconds")?,

            // Static assets
            static_dir: std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for var in [
            "HOST",
            "PORT",
            "TRANSLATE_ENDPOINT",
            "REQUEST_TIMEOUT_SECS",
            "STATIC_DIR",
        ] {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();

        let config = Config::from_env().expect("defaults should load");

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.translate_endpoint, "https://translate.googleapis.com");
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.static_dir, "static");
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("HOST", "0.0.0.0");
        std::env::set_var("PORT", "8080");
        std::env::set_var("TRANSLATE_ENDPOINT", "http://localhost:9999");
        std::env::set_var("REQUEST_TIMEOUT_SECS", "3");
        std::env::set_var("STATIC_DIR", "assets");

        let config = Config::from_env().expect("overrides should load");

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.translate_endpoint, "http://localhost:9999");
        assert_eq!(config.request_timeout_secs, 3);
        assert_eq!(config.static_dir, "assets");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_port() {
        clear_env();
        std::env::set_var("PORT", "not-a-port");

        let result = Config::from_env();

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("PORT"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_timeout() {
        clear_env();
        std::env::set_var("REQUEST_TIMEOUT_SECS", "soon");

        let result = Config::from_env();

        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("REQUEST_TIMEOUT_SECS"));

        clear_env();
    }
}
