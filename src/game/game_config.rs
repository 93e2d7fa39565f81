//! Game mode and opponent configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::chess_errors::ConfigError;
use crate::game_state::chess_types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    #[default]
    HumanVsHuman,
    HumanVsAi,
}

impl GameMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            GameMode::HumanVsHuman => "human_vs_human",
            GameMode::HumanVsAi => "human_vs_ai",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human_vs_human" => Ok(GameMode::HumanVsHuman),
            "human_vs_ai" => Ok(GameMode::HumanVsAi),
            _ => Err(ConfigError::UnknownMode(s.to_owned())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameConfig {
    pub mode: GameMode,
    /// 0 plays at random, anything higher uses the capture/check ladder.
    pub opponent_difficulty: u8,
}

impl GameConfig {
    pub fn new(mode: GameMode, opponent_difficulty: u8) -> Self {
        Self {
            mode,
            opponent_difficulty,
        }
    }

    /// Side played by the automated opponent, if there is one. The human
    /// always has white.
    pub fn opponent_color(&self) -> Option<Color> {
        match self.mode {
            GameMode::HumanVsHuman => None,
            GameMode::HumanVsAi => Some(Color::Black),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modes_parse_and_print() {
        assert_eq!("human_vs_ai".parse::<GameMode>(), Ok(GameMode::HumanVsAi));
        assert_eq!(" Human_Vs_Human ".parse::<GameMode>(), Ok(GameMode::HumanVsHuman));
        assert_eq!(
            "solo".parse::<GameMode>(),
            Err(ConfigError::UnknownMode("solo".to_owned()))
        );
        assert_eq!(GameMode::HumanVsAi.to_string(), "human_vs_ai");
    }

    #[test]
    fn default_is_two_humans_at_difficulty_zero() {
        let config = GameConfig::default();
        assert_eq!(config.mode, GameMode::HumanVsHuman);
        assert_eq!(config.opponent_difficulty, 0);
        assert_eq!(config.opponent_color(), None);
        assert_eq!(
            GameConfig::new(GameMode::HumanVsAi, 2).opponent_color(),
            Some(Color::Black)
        );
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = GameConfig::new(GameMode::HumanVsAi, 1);
        let text = serde_json::to_string(&config).expect("serializable");
        assert_eq!(text, r#"{"mode":"human_vs_ai","opponent_difficulty":1}"#);
        assert_eq!(serde_json::from_str::<GameConfig>(&text).expect("parsable"), config);
    }
}
