use serde::{Deserialize, Serialize};
use tictactoe_engine::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use tictactoe_engine::games::BotType;
use tictactoe_engine::tictactoe::Player;

pub const CONFIG_FILE: &str = "tictactoe_console_config.yaml";

const MAX_SELF_PLAY_GAMES: u32 = 1000;

pub fn get_config_manager(
    file_path: &str,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub self_play: SelfPlayConfig,
    pub play: PlayConfig,
    pub log_prefix: Option<String>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.self_play.validate()?;
        if self
            .log_prefix
            .as_deref()
            .is_some_and(|prefix| prefix.trim().is_empty())
        {
            return Err("log_prefix must not be blank".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct SelfPlayConfig {
    pub games: u32,
    pub x_bot: BotType,
    pub o_bot: BotType,
    pub seed: Option<u64>,
}

impl Validate for SelfPlayConfig {
    fn validate(&self) -> Result<(), String> {
        if self.games == 0 {
            return Err("games must be greater than 0".to_string());
        }
        if self.games > MAX_SELF_PLAY_GAMES {
            return Err(format!("games must not exceed {}", MAX_SELF_PLAY_GAMES));
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct PlayConfig {
    pub human: Player,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            self_play: SelfPlayConfig {
                games: 10,
                x_bot: BotType::Minimax,
                o_bot: BotType::Minimax,
                seed: None,
            },
            play: PlayConfig { human: Player::X },
            log_prefix: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_console_config_{}.yaml", random_number));
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: Config = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_through_manager() {
        let config = Config {
            self_play: SelfPlayConfig {
                games: 25,
                x_bot: BotType::Random,
                o_bot: BotType::Minimax,
                seed: Some(1234),
            },
            play: PlayConfig { human: Player::O },
            log_prefix: Some("Console".to_string()),
        };
        let file_path = get_temp_file_path();
        let manager = get_config_manager(&file_path);

        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);

        let fresh_manager = get_config_manager(&file_path);
        assert_eq!(fresh_manager.get_config().unwrap(), config);
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager("this_file_does_not_exist.yaml");
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let invalid_config_content = r#"
            self_play:
              games: 0
              x_bot: Minimax
              o_bot: Random
              seed: null
            play:
              human: X
            log_prefix: null
        "#;

        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());
        content_provider.set_config_content(invalid_config_content).unwrap();

        let manager = get_config_manager(&file_path);
        let err = manager.get_config().unwrap_err();
        assert!(err.contains("games must be greater than 0"));
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_unknown_bot_type_cant_be_read() {
        let serializer = YamlConfigSerializer::new();
        let content = "self_play:\n  games: 3\n  x_bot: AlphaBeta\n  o_bot: Random\n  seed: null\nplay:\n  human: X\nlog_prefix: null\n";
        let result: Result<Config, String> = serializer.deserialize(content);
        assert!(result.is_err());
    }
}
