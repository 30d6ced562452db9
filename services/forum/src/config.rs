//! Application configuration

use std::env;

/// Application settings loaded from the environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    pub bind_addr: String,
    /// Name of the session cookie
    pub cookie_name: String,
    /// Origin of the browser frontend; used for CORS and reset links
    pub frontend_origin: String,
    /// Whether the service runs behind HTTPS (controls the Secure cookie flag)
    pub production: bool,
}

impl AppConfig {
    /// Create the configuration from environment variables
    ///
    /// # Environment Variables
    /// - `BIND_ADDR`: listen address (default: "0.0.0.0:4000")
    /// - `SESSION_COOKIE_NAME`: session cookie name (default: "qid")
    /// - `FRONTEND_ORIGIN`: browser origin (default: "http://localhost:3000")
    /// - `APP_ENV`: "production" enables the Secure cookie flag
    pub fn from_env() -> Self {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:4000".to_string());
        let cookie_name = env::var("SESSION_COOKIE_NAME").unwrap_or_else(|_| "qid".to_string());
        let frontend_origin =
            env::var("FRONTEND_ORIGIN").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let production = env::var("APP_ENV")
            .map(|v| v == "production")
            .unwrap_or(false);

        Self {
            bind_addr,
            cookie_name,
            frontend_origin,
            production,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_fills_every_field() {
        let config = AppConfig::from_env();
        assert!(!config.bind_addr.is_empty());
        assert!(!config.cookie_name.is_empty());
        assert!(config.frontend_origin.starts_with("http"));
    }
}
