use super::types::{Player, RenderStyle};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeSessionSettings {
    pub player_one_name: String,
    pub player_two_name: String,
    pub render_style: RenderStyle,
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self {
            player_one_name: "Player 1".to_string(),
            player_two_name: "Player 2".to_string(),
            render_style: RenderStyle::Numeric,
        }
    }
}

impl TicTacToeSessionSettings {
    pub fn player_name(&self, player: Player) -> &str {
        match player {
            Player::One => &self.player_one_name,
            Player::Two => &self.player_two_name,
        }
    }
}
