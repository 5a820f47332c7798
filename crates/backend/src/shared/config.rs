use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::usecases::u501_import_sales::ImportOptions;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub import: ImportConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: "target/db/retail.db".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
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
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    3000
}

#[derive(Debug, Deserialize, Clone)]
pub struct ImportConfig {
    /// Written into Client.document / Client.email when the sheet has no value
    #[serde(default = "default_placeholder")]
    pub missing_value_placeholder: String,
    /// Request body limit for the import routes
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            missing_value_placeholder: default_placeholder(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

fn default_placeholder() -> String {
    "N/A".into()
}

fn default_max_upload_bytes() -> usize {
    5 * 1024 * 1024
}

impl ImportConfig {
    pub fn options(&self) -> ImportOptions {
        ImportOptions {
            missing_value_placeholder: self.missing_value_placeholder.clone(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[database]
path = "target/db/retail.db"

[server]
host = "0.0.0.0"
port = 3000

[import]
missing_value_placeholder = "N/A"
max_upload_bytes = 5242880
"#;

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.import.max_upload_bytes == 0 {
        anyhow::bail!("import.max_upload_bytes must be greater than zero");
    }
    Ok(config)
}

/// Make the loaded configuration available to handlers
pub fn install(config: Config) {
    if CONFIG.set(config).is_err() {
        tracing::warn!("Configuration already installed, keeping the first one");
    }
}

/// Installed configuration, or defaults when nothing was installed (tests)
pub fn current() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}

/// Get the database file path from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_database_path(config: &Config) -> anyhow::Result<PathBuf> {
    let db_path_str = &config.database.path;
    let db_path = Path::new(db_path_str);

    if db_path.is_absolute() {
        return Ok(db_path.to_path_buf());
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return Ok(exe_dir.join(db_path));
        }
    }

    Ok(PathBuf::from(db_path_str))
}
