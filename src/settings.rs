use serde::Deserialize;
use std::env;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;
use dotenv::dotenv;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("could not read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid settings yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Environment variable '{0}' not found")]
    MissingEnv(String),

    #[error("api_base_url must not be empty")]
    EmptyBaseUrl,
}

fn default_request_timeout() -> u64 {
    10
}

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Base URL of the reservation backend, e.g. `http://localhost:8080/api`
    pub api_base_url: String,
    /// Timeout for each backend request in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Settings {
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        dotenv().ok();

        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_yaml_str(&contents)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, SettingsError> {
        let mut settings: Settings = serde_yaml::from_str(contents)?;

        settings.api_base_url = parse_env_var(&settings.api_base_url)?;
        if settings.api_base_url.trim().is_empty() {
            return Err(SettingsError::EmptyBaseUrl);
        }

        Ok(settings)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn parse_env_var(value: &str) -> Result<String, SettingsError> {
    if value.starts_with("${") && value.ends_with("}") {
        let env_name = &value[2..value.len() - 1];
        env::var(env_name).map_err(|_| SettingsError::MissingEnv(env_name.to_string()))
    } else {
        Ok(value.to_string())
    }
}
