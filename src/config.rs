use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for recon-desk
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReconDeskConfig {
    /// Exception-tracking backend
    pub backend: BackendConfig,
    /// External auth provider (optional - read endpoints may be open on dev
    /// backends)
    pub auth: Option<AuthConfig>,
    /// Observability settings
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Base URL of the backend REST API (single-segment key so the
    /// RECON_DESK_BACKEND_URL env override parses cleanly)
    pub url: String,
    /// Static bearer token fallback when no session is stored (can be set
    /// via env var)
    pub token: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Auth provider base URL
    pub url: String,
    /// Public (anon) API key sent with auth requests
    pub anon_key: String,
    /// Account allowed to use the admin surfaces (user approval, login
    /// reset)
    pub admin_email: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    /// Log level filter (overridable with RUST_LOG)
    pub log_level: String,
    /// Emit logs as JSON lines instead of human-readable text
    pub json_logs: bool,
}

impl Default for ReconDeskConfig {
    fn default() -> Self {
        Self {
            backend: BackendConfig {
                url: "https://brokerwolf-backend.onrender.com".to_string(),
                token: None, // Will be read from env var or the stored session
            },
            auth: None,
            observability: ObservabilityConfig {
                log_level: "info".to_string(),
                json_logs: false,
            },
        }
    }
}

impl ReconDeskConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Default values
    /// 2. Configuration files (recon-desk.toml, .recon-desk-rc)
    /// 3. Environment variables (prefixed with RECON_DESK_)
    pub fn load() -> Result<Self> {
        let defaults = ReconDeskConfig::default();
        let mut builder = Config::builder()
            .set_default("backend.url", defaults.backend.url)?
            .set_default("observability.log_level", defaults.observability.log_level)?
            .set_default("observability.json_logs", defaults.observability.json_logs)?;

        if Path::new("recon-desk.toml").exists() {
            builder = builder.add_source(File::with_name("recon-desk"));
        }

        if Path::new(".recon-desk-rc").exists() {
            builder = builder.add_source(File::with_name(".recon-desk-rc"));
        }

        builder = builder.add_source(
            Environment::with_prefix("RECON_DESK")
                .separator("_")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let mut desk_config: ReconDeskConfig = config.try_deserialize()?;

        // Token fallback - check the plain env var too
        if desk_config.backend.token.is_none() {
            if let Ok(token) = std::env::var("RECON_DESK_BACKEND_TOKEN") {
                desk_config.backend.token = Some(token);
            }
        }

        Ok(desk_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_content = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_content)?;
        Ok(())
    }

    /// Load .env file if it exists
    pub fn load_env_file() -> Result<()> {
        if Path::new(".env").exists() {
            dotenvy::dotenv()?;
            tracing::info!("Loaded environment variables from .env file");
        }
        Ok(())
    }
}

/// Global configuration instance
static CONFIG: std::sync::LazyLock<Result<ReconDeskConfig, anyhow::Error>> =
    std::sync::LazyLock::new(|| {
        let _ = ReconDeskConfig::load_env_file();
        ReconDeskConfig::load()
    });

/// Get the global configuration
pub fn config() -> Result<&'static ReconDeskConfig> {
    CONFIG
        .as_ref()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))
}

/// Initialize configuration (called at startup)
pub fn init_config() -> Result<()> {
    let _config = config()?;
    tracing::info!("Configuration loaded successfully");
    Ok(())
}
