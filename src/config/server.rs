use std::env;
use crate::constants::{DEFAULT_HOST, DEFAULT_MAX_UPLOAD_MB, DEFAULT_PORT};
use crate::Error;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_upload_bytes: usize,
    /// Show internal failure detail in user-facing messages
    pub expose_error_detail: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_MB * 1024 * 1024,
            expose_error_detail: false,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, Error> {
        let defaults = Self::default();

        let port = match env::var("NORMCURVE_PORT") {
            Ok(port) => port
                .parse()
                .map_err(|_| Error::Config(format!("Invalid NORMCURVE_PORT format: {}", port)))?,
            Err(_) => defaults.port,
        };

        let max_upload_mb: usize = match env::var("NORMCURVE_MAX_UPLOAD_MB") {
            Ok(mb) => mb
                .parse()
                .map_err(|_| Error::Config(format!("Invalid NORMCURVE_MAX_UPLOAD_MB format: {}", mb)))?,
            Err(_) => DEFAULT_MAX_UPLOAD_MB,
        };

        let expose_error_detail = env::var("NORMCURVE_EXPOSE_ERROR_DETAIL")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            host: env::var("NORMCURVE_HOST").unwrap_or(defaults.host),
            port,
            max_upload_bytes: max_upload_mb * 1024 * 1024,
            expose_error_detail,
        })
    }

    /// Applies command-line overrides on top of the environment.
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }
}
