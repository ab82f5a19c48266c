use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "order_portal.toml";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub backend: BackendConfig,
    #[serde(default)]
    pub worksheets: WorksheetConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the Inventory and Orders worksheets live.
#[derive(Debug, Deserialize, Clone)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BackendConfig {
    /// SQLite workbook on this machine
    Local { path: String },
    GoogleSheets {
        spreadsheet_id: String,
        access_token: String,
        #[serde(default = "default_api_base")]
        api_base: String,
    },
}

fn default_api_base() -> String {
    crate::sheets::DEFAULT_API_BASE.to_string()
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct WorksheetConfig {
    pub inventory: String,
    pub orders: String,
}

impl Default for WorksheetConfig {
    fn default() -> Self {
        WorksheetConfig {
            inventory: "Inventory".to_string(),
            orders: "Orders".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CacheConfig {
    pub inventory_ttl_secs: u64,
    pub orders_ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        CacheConfig {
            inventory_ttl_secs: 600,
            orders_ttl_secs: 60,
        }
    }
}

impl CacheConfig {
    pub fn inventory_ttl(&self) -> Duration {
        Duration::from_secs(self.inventory_ttl_secs)
    }

    pub fn orders_ttl(&self) -> Duration {
        Duration::from_secs(self.orders_ttl_secs)
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directives
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[backend]
kind = "local"
path = "order_portal.db"

[worksheets]
inventory = "Inventory"
orders = "Orders"

[cache]
inventory_ttl_secs = 600
orders_ttl_secs = 60

[logging]
level = "info"
"#;

/// Load `order_portal.toml` from `config_dir`, falling back to the embedded
/// default when the file does not exist.
pub fn load_config(config_dir: &Path) -> anyhow::Result<Config> {
    let config_path = config_dir.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        tracing::info!("Loading config from: {}", config_path.display());
        let contents = std::fs::read_to_string(&config_path)?;
        let config: Config = toml::from_str(&contents)?;
        return Ok(config);
    }

    tracing::info!(
        "{} not found, using default embedded configuration",
        config_path.display()
    );
    default_config()
}

pub fn default_config() -> anyhow::Result<Config> {
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Resolves a relative workbook path against the app data directory.
pub fn resolve_path(data_dir: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        data_dir.join(path)
    }
}
