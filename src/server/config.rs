use crate::server::error::config::ConfigError;

/// Runtime configuration, read once at startup.
pub struct Config {
    pub database_url: String,
    pub session_secret: String,
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
}

impl Config {
    /// Build the configuration from environment variables.
    ///
    /// `SESSION_SECRET` is required and must be at least 32 bytes since it
    /// keys the session cookie signature; everything else has a development
    /// default suitable for a local server.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = env_or("DATABASE_URL", "sqlite://petlodge.db?mode=rwc");

        let session_secret = std::env::var("SESSION_SECRET")
            .map_err(|_| ConfigError::MissingEnvVar("SESSION_SECRET".to_string()))?;
        if session_secret.len() < 32 {
            return Err(ConfigError::InvalidEnvValue {
                var: "SESSION_SECRET".to_string(),
                reason: "must be at least 32 bytes".to_string(),
            });
        }

        let host = env_or("HOST", "127.0.0.1");

        let port = env_or("PORT", "5000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: "PORT".to_string(),
                reason: e.to_string(),
            })?;

        let open_browser = env_or("OPEN_BROWSER", "true")
            .parse::<bool>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: "OPEN_BROWSER".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            database_url,
            session_secret,
            host,
            port,
            open_browser,
        })
    }

    /// Address the listener binds, e.g. `127.0.0.1:5000`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// URL the development browser tab is pointed at.
    pub fn server_url(&self) -> String {
        format!("http://{}:{}/", self.host, self.port)
    }
}

fn env_or(var: &str, default: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| default.to_string())
}
