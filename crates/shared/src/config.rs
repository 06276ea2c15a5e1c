//! Application configuration management.

use serde::Deserialize;

use crate::jwt;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
    /// JWT configuration.
    pub jwt: JwtConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4000
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Apply pending migrations when the server starts.
    #[serde(default = "default_run_migrations")]
    pub run_migrations: bool,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

const fn default_run_migrations() -> bool {
    true
}

/// JWT configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    /// Secret key for signing tokens.
    pub secret: String,
    /// Token lifetime in seconds. Unset means tokens never expire.
    #[serde(default)]
    pub token_ttl_secs: Option<u64>,
}

impl JwtConfig {
    /// Builds the signing configuration for [`jwt::JwtService`].
    #[must_use]
    pub fn to_service_config(&self) -> jwt::JwtConfig {
        jwt::JwtConfig {
            secret: self.secret.clone(),
            expires_in_secs: self
                .token_ttl_secs
                .map(|secs| i64::try_from(secs).unwrap_or(i64::MAX)),
        }
    }
}

impl AppConfig {
    /// Loads configuration from config files and the environment.
    ///
    /// Precedence, lowest first: `config/default`, `config/{RUN_MODE}`,
    /// `POCKETBOOK__SECTION__KEY` variables, then the plain `JWT_SECRET`,
    /// `PORT` and `DATABASE_URL` variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or a required value
    /// is missing or empty.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("POCKETBOOK").separator("__"))
            .set_override_option("jwt.secret", std::env::var("JWT_SECRET").ok())?
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .build()?;

        let app_config: Self = config.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }

    /// Rejects configurations the server cannot run with.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Message` naming the offending key.
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.jwt.secret.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "jwt.secret (JWT_SECRET) must not be empty".to_string(),
            ));
        }
        if self.database.url.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "database.url (DATABASE_URL) must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
