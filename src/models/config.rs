use std::path::PathBuf;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

/// Runtime settings of the catalog server.
///
/// Sources are layered: built-in defaults, `config/default.yaml`, then
/// `config/<APP_ENV>.yaml`, then `APP__*` environment variables.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Path of the SQLite database file.
    pub database_url: String,
    /// Root of statically hosted games and thumbnails.
    pub public_dir: PathBuf,
    /// Catalog snapshot loaded into an empty store on startup.
    pub seed_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Builder preloaded with defaults so every source is optional.
    pub fn builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("address", "127.0.0.1")?
            .set_default("port", 8080)?
            .set_default("database_url", "app.db")?
            .set_default("public_dir", "public")
    }

    pub fn load() -> Result<Self, ConfigError> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        Self::builder()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{app_env}")).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn defaults_fill_missing_keys() {
        let config: ServerConfig = ServerConfig::builder()
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.address, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.public_dir, PathBuf::from("public"));
        assert!(config.seed_path.is_none());
    }

    #[test]
    fn yaml_overrides_defaults() {
        let yaml = "port: 9000\ndatabase_url: /tmp/catalog.db\nseed_path: seed/catalog.json\n";
        let config: ServerConfig = ServerConfig::builder()
            .unwrap()
            .add_source(File::from_str(yaml, FileFormat::Yaml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.database_url, "/tmp/catalog.db");
        assert_eq!(config.seed_path, Some(PathBuf::from("seed/catalog.json")));
    }
}
