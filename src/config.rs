use std::io::ErrorKind;

use serde::{Deserialize, Serialize};

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

/// Loads a YAML config file. A missing file is not an error: the default
/// config is returned instead, so first runs work without any setup.
pub fn load_config<TConfig>(file_path: &str) -> Result<TConfig, String>
where
    TConfig: for<'de> Deserialize<'de> + Validate + Default,
{
    let content = match std::fs::read_to_string(file_path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(TConfig::default()),
        Err(err) => return Err(format!("Failed to read config file: {}", err)),
    };

    let config: TConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("Failed to deserialize config: {}", e))?;

    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;

    Ok(config)
}

pub fn save_config<TConfig>(file_path: &str, config: &TConfig) -> Result<(), String>
where
    TConfig: Serialize + Validate,
{
    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;

    let content = serde_yaml_ng::to_string(config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;

    std::fs::write(file_path, content).map_err(|e| format!("Failed to write config file: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::SessionSettings;

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_snake_game_config_{}.yaml", random_number));
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_missing_file_returns_default() {
        let config: SessionSettings = load_config("/nonexistent/snake_game_config.yaml").unwrap();
        assert_eq!(config, SessionSettings::default());
    }

    #[test]
    fn test_save_load_round_trip() {
        let file_path = get_temp_file_path();

        let config = SessionSettings {
            initial_tick_delay_ms: 200,
            ..SessionSettings::default()
        };

        save_config(&file_path, &config).unwrap();
        let loaded: SessionSettings = load_config(&file_path).unwrap();
        assert_eq!(loaded, config);

        std::fs::remove_file(&file_path).unwrap();
    }

    #[test]
    fn test_invalid_content_is_an_error() {
        let file_path = get_temp_file_path();
        std::fs::write(&file_path, "not: [valid").unwrap();

        let result: Result<SessionSettings, String> = load_config(&file_path);
        assert!(result.is_err());

        std::fs::remove_file(&file_path).unwrap();
    }

    #[test]
    fn test_invalid_config_fails_validation_on_load() {
        let file_path = get_temp_file_path();

        let config = SessionSettings {
            cell_size_px: 0,
            ..SessionSettings::default()
        };
        let content = serde_yaml_ng::to_string(&config).unwrap();
        std::fs::write(&file_path, content).unwrap();

        let result: Result<SessionSettings, String> = load_config(&file_path);
        assert!(result.is_err());

        std::fs::remove_file(&file_path).unwrap();
    }
}
