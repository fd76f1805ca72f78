use common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub enabled: bool,
    pub prefix: Option<String>,
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(prefix) = &self.prefix
            && prefix.trim().is_empty()
        {
            return Err("logging.prefix must not be blank when set".to_string());
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            prefix: None,
        }
    }
}
