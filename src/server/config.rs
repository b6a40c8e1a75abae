use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse TOML from config file at {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("Failed to load config from environment: {0}")]
    Env(#[from] envy::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub database_url: String,
    /// Normalized to either `""` or `/segment[/segment...]` without a trailing slash.
    pub base_path: String,
    pub frontend_path: String,
    pub log_dir: String,
    pub check_timeout_ms: u64,
    pub check_user_agent: String,
    /// Zero disables the scheduled sweep.
    pub check_interval_seconds: u64,
}

// Partial config for layering
#[derive(Deserialize, Default, Debug)]
pub struct PartialServerConfig {
    port: Option<u16>,
    database_url: Option<String>,
    /// Plain SQLite file path, kept for deployments that mount a volume.
    db_path: Option<String>,
    base_path: Option<String>,
    frontend_path: Option<String>,
    log_dir: Option<String>,
    check_timeout_ms: Option<u64>,
    check_user_agent: Option<String>,
    check_interval_seconds: Option<u64>,
}

fn default_port() -> u16 {
    3000
}

fn default_database_url() -> String {
    "sqlite://links.db?mode=rwc".to_string()
}

fn default_base_path() -> String {
    "/checklist".to_string()
}

fn default_frontend_path() -> String {
    "client/dist".to_string()
}

fn default_log_dir() -> String {
    "logs".to_string()
}

fn default_check_timeout_ms() -> u64 {
    5000
}

fn default_check_user_agent() -> String {
    crate::monitoring::prober::DEFAULT_USER_AGENT.to_string()
}

fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

impl ServerConfig {
    /// Loads `.env`, then the optional TOML file, then environment variables.
    /// Environment variables win over the file.
    pub fn load(config_path: Option<&str>) -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let file_config = match config_path {
            Some(path) => Self::read_file(Path::new(path))?,
            None => PartialServerConfig::default(),
        };
        let env_config: PartialServerConfig = envy::from_env::<PartialServerConfig>()?;

        Self::merge(env_config, file_config)
    }

    fn read_file(path: &Path) -> Result<PartialServerConfig, ConfigError> {
        if !path.exists() {
            return Ok(PartialServerConfig::default());
        }
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    fn merge(
        primary: PartialServerConfig,
        fallback: PartialServerConfig,
    ) -> Result<Self, ConfigError> {
        let database_url = primary
            .database_url
            .or_else(|| primary.db_path.map(|p| format!("sqlite://{p}?mode=rwc")))
            .or(fallback.database_url)
            .or_else(|| fallback.db_path.map(|p| format!("sqlite://{p}?mode=rwc")))
            .unwrap_or_else(default_database_url);

        let check_timeout_ms = primary
            .check_timeout_ms
            .or(fallback.check_timeout_ms)
            .unwrap_or_else(default_check_timeout_ms);
        if check_timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "check_timeout_ms must be greater than zero".to_string(),
            ));
        }

        Ok(ServerConfig {
            port: primary.port.or(fallback.port).unwrap_or_else(default_port),
            database_url,
            base_path: normalize_base_path(
                &primary
                    .base_path
                    .or(fallback.base_path)
                    .unwrap_or_else(default_base_path),
            ),
            frontend_path: primary
                .frontend_path
                .or(fallback.frontend_path)
                .unwrap_or_else(default_frontend_path),
            log_dir: primary.log_dir.or(fallback.log_dir).unwrap_or_else(default_log_dir),
            check_timeout_ms,
            check_user_agent: primary
                .check_user_agent
                .or(fallback.check_user_agent)
                .unwrap_or_else(default_check_user_agent),
            check_interval_seconds: primary
                .check_interval_seconds
                .or(fallback.check_interval_seconds)
                .unwrap_or(0),
        })
    }
}
