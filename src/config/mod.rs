use config::{Config, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    pub name: Option<String>,
    pub log_level: Option<String>,
}

pub fn load_config() -> Result<AppConfig, config::ConfigError> {
    let mut config: AppConfig = Config::builder()
        .add_source(File::with_name("config.toml").required(false))
        .build()?
        .try_deserialize()?;

    set_defaults(&mut config);

    Ok(config)
}

pub fn set_defaults(config: &mut AppConfig) {
    if config.name.is_none() {
        config.name = Some("people-cache-demo".to_string());
    }
    if config.log_level.is_none() {
        config.log_level = Some("info".to_string());
    }
}
