use std::path::{Path, PathBuf};

use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};

use super::{LoggingConfig, TicTacToeConfig};

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";

pub fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: &Path,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub tictactoe: TicTacToeConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.tictactoe.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer};
    use common::games::tictactoe::RenderStyle;

    fn get_temp_file_path() -> PathBuf {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_config_{}.yaml", random_number));
        path
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized_string = serializer.serialize(&default_config).unwrap();
        let deserialized_config: Config = serializer.deserialize(&serialized_string).unwrap();
        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_with_manager() {
        let config = Config {
            tictactoe: TicTacToeConfig {
                player_one_name: "Alice".to_string(),
                player_two_name: "Bob".to_string(),
                render_style: RenderStyle::Symbols,
            },
            logging: LoggingConfig {
                enabled: false,
                prefix: Some("Game".to_string()),
            },
        };
        let file_path = get_temp_file_path();
        let manager = get_config_manager(&file_path);

        manager.set_config(&config).unwrap();
        let loaded_config = manager.get_config().unwrap();

        assert_eq!(config, loaded_config);
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager(&PathBuf::from("this_file_does_not_exist.yaml"));
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());
        content_provider
            .set_config_content("tictactoe:\n  player_one_name: Ann\n  player_two_name: Ben\n")
            .unwrap();

        let manager: ConfigManager<_, Config, _> =
            ConfigManager::new(content_provider, YamlConfigSerializer::new());
        let config = manager.get_config().unwrap();

        assert_eq!(config.tictactoe.player_one_name, "Ann");
        assert_eq!(config.tictactoe.render_style, RenderStyle::Numeric);
        assert_eq!(config.logging, LoggingConfig::default());
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_partial_sections_fill_missing_fields_with_defaults() {
        let file_path = get_temp_file_path();
        std::fs::write(
            &file_path,
            "tictactoe:\n  render_style: symbols\nlogging:\n  prefix: Game\n",
        )
        .unwrap();

        let manager = get_config_manager(&file_path);
        let config = manager.get_config().unwrap();

        assert_eq!(config.tictactoe.render_style, RenderStyle::Symbols);
        assert_eq!(
            config.tictactoe.player_one_name,
            TicTacToeConfig::default().player_one_name
        );
        assert_eq!(
            config.tictactoe.player_two_name,
            TicTacToeConfig::default().player_two_name
        );
        assert!(config.logging.enabled);
        assert_eq!(config.logging.prefix.as_deref(), Some("Game"));
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());
        content_provider
            .set_config_content("tictactoe:\n  player_one_name: Sam\n  player_two_name: Sam\n")
            .unwrap();

        let manager = get_config_manager(&file_path);
        assert!(manager.get_config().is_err());
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_malformed_yaml_cant_be_read() {
        let file_path = get_temp_file_path();
        std::fs::write(&file_path, "tictactoe: [not, a, map]\n").unwrap();

        let manager = get_config_manager(&file_path);
        assert!(manager.get_config().is_err());
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_invalid_config_cant_be_saved() {
        let mut config = Config::default();
        config.tictactoe.player_two_name = config.tictactoe.player_one_name.clone();
        let file_path = get_temp_file_path();

        let manager = get_config_manager(&file_path);
        assert!(manager.set_config(&config).is_err());
        assert!(!file_path.exists());
    }
}
