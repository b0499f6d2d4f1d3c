//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use crate::application::errors::ConfigError;
use crate::application::services::MessagePolicy;
use crate::domain::entities::message::DEFAULT_MAX_LENGTH;

/// Simulator configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub app: AppConfig,
    pub messaging: MessagingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct AppConfig {
    pub name: String,
    pub prefix: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct MessagingConfig {
    pub max_length: usize,
    pub require_valid_recipient: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: AppConfig {
                name: "quickchat".to_string(),
                prefix: "/".to_string(),
            },
            messaging: MessagingConfig {
                max_length: DEFAULT_MAX_LENGTH,
                require_valid_recipient: true,
            },
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.messaging.max_length == 0 {
            return Err(ConfigError::InvalidValue(
                "messaging.max-length must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn load_env() -> Self {
        // Load from environment variables
        let mut config = Config::default();
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(max) = var("QUICKCHAT_MAX_LENGTH") {
            match max.parse::<usize>() {
                Ok(max) if max > 0 => self.messaging.max_length = max,
                _ => tracing::warn!("Ignoring QUICKCHAT_MAX_LENGTH={}", max),
            }
        }

        if let Some(gate) = var("QUICKCHAT_REQUIRE_VALID_RECIPIENT") {
            match gate.parse::<bool>() {
                Ok(gate) => self.messaging.require_valid_recipient = gate,
                Err(_) => tracing::warn!("Ignoring QUICKCHAT_REQUIRE_VALID_RECIPIENT={}", gate),
            }
        }
    }

    pub fn message_policy(&self) -> MessagePolicy {
        MessagePolicy {
            max_length: self.messaging.max_length,
            require_valid_recipient: self.messaging.require_valid_recipient,
        }
    }
}
