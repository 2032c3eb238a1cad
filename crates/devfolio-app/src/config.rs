use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

use devfolio_session::FileSessionStore;

/// Default config template created when no config exists
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "http://localhost:3000/api"  # Set via DEVFOLIO_API_URL env var

[session]
dir = ""  # Defaults to ~/.devfolio/session when empty

[logging]
level = "info"  # trace, debug, info, warn, error
"#;

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    pub dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Get the global config path: ~/.devfolio/devfolio.toml
    fn global_config_path() -> PathBuf {
        dirs::home_dir()
            .expect("Could not find home directory")
            .join(".devfolio")
            .join("devfolio.toml")
    }

    /// Ensure global config directory and file exist, creating defaults if needed
    fn ensure_global_config() -> anyhow::Result<PathBuf> {
        let config_path = Self::global_config_path();
        let config_dir = config_path.parent().expect("config path has a parent");

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
            eprintln!("Created config directory: {}", config_dir.display());
        }

        if !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG.trim())?;
            eprintln!("Created default config: {}", config_path.display());
            eprintln!("Please edit this file or set environment variables.");
        }

        Ok(config_path)
    }

    /// Load configuration with layered approach:
    /// 1. Global config: ~/.devfolio/devfolio.toml (auto-created if missing)
    /// 2. Local override: ./devfolio.toml (workspace, optional)
    /// 3. Environment variables (highest priority)
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file from current directory
        dotenvy::dotenv().ok();

        let global_config_path = Self::ensure_global_config()?;

        // Later sources override earlier ones
        let mut config_builder = config::Config::builder()
            .add_source(config::File::from(global_config_path))
            .add_source(config::File::with_name("devfolio").required(false))
            .add_source(config::Environment::with_prefix("DEVFOLIO").separator("__"));

        // Convenience env var override (highest priority)
        if let Ok(url) = env::var("DEVFOLIO_API_URL") {
            config_builder = config_builder.set_override("api.base_url", url)?;
        }

        let config = config_builder.build()?;

        let config: Self = config.try_deserialize()?;
        Ok(config)
    }

    /// Session storage directory, falling back to ~/.devfolio/session
    pub fn session_dir(&self) -> PathBuf {
        if self.session.dir.trim().is_empty() {
            FileSessionStore::default_dir().unwrap_or_else(|| PathBuf::from(".devfolio-session"))
        } else {
            PathBuf::from(&self.session.dir)
        }
    }
}
