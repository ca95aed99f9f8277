use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::{env, time::Duration};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub admin: AdminConfig,
    #[serde(default)]
    pub ml: MlConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

fn default_allowed_origins() -> Vec<String> {
    vec![
        "http://localhost:5173".to_string(),
        "http://localhost:3000".to_string(),
    ]
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Shared credentials of the admin console.
#[derive(Debug, Deserialize, Clone)]
pub struct AdminConfig {
    #[serde(default = "default_admin_username")]
    pub username: String,
    #[serde(default = "default_admin_password")]
    pub password: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            username: default_admin_username(),
            password: default_admin_password(),
        }
    }
}

fn default_admin_username() -> String {
    "admin".to_string()
}

fn default_admin_password() -> String {
    "admin123".to_string()
}

/// Emission prediction service.
#[derive(Debug, Deserialize, Clone)]
pub struct MlConfig {
    #[serde(default = "default_ml_base_url")]
    pub base_url: String,
    #[serde(default = "default_ml_predict_path")]
    pub predict_path: String,
    #[serde(default = "default_ml_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for MlConfig {
    fn default() -> Self {
        Self {
            base_url: default_ml_base_url(),
            predict_path: default_ml_predict_path(),
            timeout_secs: default_ml_timeout_secs(),
        }
    }
}

impl MlConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_ml_base_url() -> String {
    "http://localhost:5001".to_string()
}

fn default_ml_predict_path() -> String {
    "/predict".to_string()
}

fn default_ml_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy variables (DATABASE_URL, PORT, ADMIN_USER, ADMIN_PASS, ML_SERVICE_URL)
    /// 2. Prefixed environment variables (ECOCLEAN__DATABASE__URL, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000)?
            .set_default("database.url", "sqlite:ecoclean.db")?
            .set_default("database.max_connections", 5)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // The file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("ECOCLEAN")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("server.allowed_origins")
                .try_parsing(true),
        );

        if let Ok(database_url) = env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", database_url)?;
        }
        if let Ok(port) = env::var("PORT") {
            builder = builder.set_override("server.port", port)?;
        }
        if let Ok(admin_user) = env::var("ADMIN_USER") {
            builder = builder.set_override("admin.username", admin_user)?;
        }
        if let Ok(admin_pass) = env::var("ADMIN_PASS") {
            builder = builder.set_override("admin.password", admin_pass)?;
        }
        if let Ok(ml_url) = env::var("ML_SERVICE_URL") {
            builder = builder.set_override("ml.base_url", ml_url)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.database.max_connections < 1 {
            return Err("Database max_connections must be at least 1".to_string());
        }
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.admin.username.is_empty() || self.admin.password.is_empty() {
            return Err("Admin username and password must not be empty".to_string());
        }
        if self.ml.timeout_secs == 0 || self.ml.timeout_secs > 60 {
            return Err("ML timeout_secs must be between 1 and 60".to_string());
        }
        if url::Url::parse(&self.ml.base_url).is_err() {
            return Err(format!("ML base_url '{}' is not a valid URL", self.ml.base_url));
        }
        Ok(())
    }
}
