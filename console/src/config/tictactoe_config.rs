use common::config::Validate;
use common::games::tictactoe::{RenderStyle, TicTacToeSessionSettings};
use serde::{Deserialize, Serialize};

const MAX_NAME_LENGTH: usize = 32;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TicTacToeConfig {
    pub player_one_name: String,
    pub player_two_name: String,
    pub render_style: RenderStyle,
}

fn validate_name(field: &str, name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err(format!("{} must not be empty", field));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(format!(
            "{} must be at most {} characters",
            field, MAX_NAME_LENGTH
        ));
    }
    Ok(())
}

impl Validate for TicTacToeConfig {
    fn validate(&self) -> Result<(), String> {
        validate_name("player_one_name", &self.player_one_name)?;
        validate_name("player_two_name", &self.player_two_name)?;
        if self.player_one_name.trim() == self.player_two_name.trim() {
            return Err("player names must differ".to_string());
        }
        Ok(())
    }
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        let settings = TicTacToeSessionSettings::default();
        Self {
            player_one_name: settings.player_one_name,
            player_two_name: settings.player_two_name,
            render_style: settings.render_style,
        }
    }
}

impl From<&TicTacToeConfig> for TicTacToeSessionSettings {
    fn from(config: &TicTacToeConfig) -> Self {
        Self {
            player_one_name: config.player_one_name.trim().to_string(),
            player_two_name: config.player_two_name.trim().to_string(),
            render_style: config.render_style,
        }
    }
}
