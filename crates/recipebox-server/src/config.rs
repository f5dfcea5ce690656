//! Server configuration

use recipebox_core::{IdGenerator, RecipeStore, SequentialIdGenerator, UuidGenerator};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// How new recipe ids are produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Random v4 UUIDs
    #[default]
    Uuid,
    /// Monotonic `recipe-N` counter
    Sequential,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host
    pub host: String,

    /// Server port (HTTP)
    pub port: u16,

    /// Log level used when RUST_LOG is not set
    pub log_level: String,

    /// Id generator for created recipes
    pub id_strategy: IdStrategy,

    /// Start with the demonstration recipe in the store
    pub seed_demo_recipe: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            id_strategy: IdStrategy::default(),
            seed_demo_recipe: true,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables and config file
    ///
    /// Unreadable sources fall back to the defaults; the reason is returned
    /// alongside so it can be logged once tracing is up.
    pub fn load() -> anyhow::Result<(Self, Option<String>)> {
        // Load .env file if exists
        dotenvy::dotenv().ok();

        Self::resolve(
            config::Config::builder()
                .add_source(config::File::with_name("config/server").required(false))
                .add_source(config::Environment::with_prefix("RECIPEBOX")),
        )
    }

    fn resolve(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> anyhow::Result<(Self, Option<String>)> {
        match builder.build() {
            Ok(cfg) => cfg
                .try_deserialize::<Self>()
                .map(|config| (config, None))
                .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e)),
            Err(e) => Ok((
                Self::default(),
                Some(format!("Config sources unreadable ({})", e)),
            )),
        }
    }

    /// Load configuration from a specific file, without environment overrides
    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        config::Config::builder()
            .add_source(config::File::from(path))
            .build()
            .and_then(|cfg| cfg.try_deserialize::<Self>())
            .map_err(|e| anyhow::anyhow!("Failed to load config from {}: {}", path.display(), e))
    }

    /// Socket address string to bind
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn id_generator(&self) -> Arc<dyn IdGenerator> {
        match self.id_strategy {
            IdStrategy::Uuid => Arc::new(UuidGenerator),
            IdStrategy::Sequential => Arc::new(SequentialIdGenerator::new()),
        }
    }

    /// Build the store described by this configuration
    pub fn build_store(&self) -> RecipeStore {
        if self.seed_demo_recipe {
            RecipeStore::seeded(self.id_generator())
        } else {
            RecipeStore::new(self.id_generator())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.id_strategy, IdStrategy::Uuid);
        assert!(config.seed_demo_recipe);
        assert_eq!(config.listen_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_load_from_partial_toml_keeps_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "port = 9090").unwrap();
        writeln!(file, "id_strategy = \"sequential\"").unwrap();

        let config = ServerConfig::load_from(file.path()).unwrap();

        assert_eq!(config.port, 9090);
        assert_eq!(config.id_strategy, IdStrategy::Sequential);
        assert_eq!(config.host, "0.0.0.0");
        assert!(config.seed_demo_recipe);
    }

    #[test]
    fn test_load_from_rejects_unknown_strategy() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "id_strategy = \"timestamp\"").unwrap();

        assert!(ServerConfig::load_from(file.path()).is_err());
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ServerConfig::load_from(dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("absent.toml"));
    }

    #[test]
    fn test_unreadable_sources_fall_back_with_reason() {
        let dir = tempfile::tempdir().unwrap();
        let builder = config::Config::builder()
            .add_source(config::File::from(dir.path().join("server.toml")).required(true));

        let (config, fallback) = ServerConfig::resolve(builder).unwrap();

        assert_eq!(config.port, 8080);
        let reason = fallback.expect("fallback reason");
        assert!(reason.starts_with("Config sources unreadable"));
        assert!(reason.contains("server.toml"));
    }

    #[test]
    fn test_readable_sources_report_no_fallback() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "port = 9191").unwrap();
        let builder = config::Config::builder().add_source(config::File::from(file.path()));

        let (config, fallback) = ServerConfig::resolve(builder).unwrap();

        assert_eq!(config.port, 9191);
        assert!(fallback.is_none());
    }

    #[tokio::test]
    async fn test_build_store_respects_seed_flag() {
        let seeded = ServerConfig::default().build_store();
        assert_eq!(seeded.len().await, 1);

        let config = ServerConfig {
            seed_demo_recipe: false,
            ..ServerConfig::default()
        };
        assert!(config.build_store().is_empty().await);
    }

    #[tokio::test]
    async fn test_sequential_strategy_ids() {
        let config = ServerConfig {
            id_strategy: IdStrategy::Sequential,
            seed_demo_recipe: false,
            ..ServerConfig::default()
        };
        let store = config.build_store();

        let id = store.create(Default::default()).await;
        assert_eq!(id, "recipe-1");
    }

    #[test]
    fn test_id_strategy_deserialize() {
        let strategy: IdStrategy = serde_json::from_str("\"uuid\"").unwrap();
        assert_eq!(strategy, IdStrategy::Uuid);
        let strategy: IdStrategy = serde_json::from_str("\"sequential\"").unwrap();
        assert_eq!(strategy, IdStrategy::Sequential);
    }
}
