//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// Glob Tera loads templates from, e.g. `templates/**/*`.
    pub templates_dir: String,
}

#[cfg(feature = "server")]
impl ServerConfig {
    /// Reads `config/default.yaml`, then the `config/{APP_ENV}` profile
    /// (defaults to `local`, optional), then `APP_*` environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "local".into());

        config::Config::builder()
            // Add `./config/default.yaml`
            .add_source(config::File::with_name("config/default"))
            // Add environment-specific overrides
            .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
            // Add settings from the environment (with a prefix of APP)
            .add_source(config::Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }
}
