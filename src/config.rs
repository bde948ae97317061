use crate::utils::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that replaces `database.path`
pub const DATABASE_ENV: &str = "HACKBRIGHT_DATABASE";

pub const DEFAULT_PROMPT: &str = "HBA Database> ";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: DatabaseConfig,
    pub general: GeneralConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub path: PathBuf,
    #[serde(default = "default_true")]
    pub create_schema: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_prompt")]
    pub prompt: String,
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_true() -> bool {
    true
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("hackbright");

        Self {
            database: DatabaseConfig {
                path: data_dir.join("hackbright.db"),
                create_schema: true,
            },
            general: GeneralConfig {
                prompt: default_prompt(),
                color: true,
            },
        }
    }
}

impl Config {
    pub fn ensure_config_exists() -> AppResult<()> {
        let config_path = Self::config_file_path();
        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save_to(&config_path)?;
        }
        Ok(())
    }

    pub fn load_custom(config_path: &Path) -> AppResult<Self> {
        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save_to(config_path)?;
            return Ok(default_config);
        }

        let content = std::fs::read_to_string(config_path)?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.database.path.as_os_str().is_empty() {
            return Err(AppError::Config(
                "Database path cannot be empty".to_string(),
            ));
        }

        if self.general.prompt.is_empty() {
            return Err(AppError::Config("Prompt cannot be empty".to_string()));
        }

        Ok(())
    }

    /// Apply runtime overrides: the environment first, then the command line.
    /// Overrides are never written back to the config file.
    pub fn with_overrides(self, database: Option<PathBuf>) -> Self {
        self.apply_overrides(std::env::var(DATABASE_ENV).ok(), database)
    }

    fn apply_overrides(mut self, env_path: Option<String>, database: Option<PathBuf>) -> Self {
        if let Some(path) = env_path
            && !path.is_empty()
        {
            self.database.path = PathBuf::from(path);
        }
        if let Some(path) = database {
            self.database.path = path;
        }
        self
    }

    pub fn save_to(&self, config_path: &Path) -> AppResult<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AppError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;

        Ok(())
    }

    pub fn config_file_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("hackbright")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config::load_custom(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.general.prompt, DEFAULT_PROMPT);
        assert!(config.database.create_schema);

        // Reloading reads back what was written
        let reloaded = Config::load_custom(&path).unwrap();
        assert_eq!(reloaded.database.path, config.database.path);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[database]\npath = \"/tmp/grades.db\"\n\n[general]\ncolor = false\n",
        )
        .unwrap();

        let config = Config::load_custom(&path).unwrap();
        assert_eq!(config.database.path, PathBuf::from("/tmp/grades.db"));
        assert!(config.database.create_schema);
        assert_eq!(config.general.prompt, DEFAULT_PROMPT);
        assert!(!config.general.color);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "database = 3").unwrap();

        let err = Config::load_custom(&path).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_validate_rejects_empty_prompt() {
        let mut config = Config::default();
        config.general.prompt.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cli_override_wins() {
        let config = Config::default().with_overrides(Some(PathBuf::from("override.db")));
        assert_eq!(config.database.path, PathBuf::from("override.db"));
    }

    #[test]
    fn test_env_override_replaces_configured_path() {
        let config = Config::default().apply_overrides(Some("env.db".to_string()), None);
        assert_eq!(config.database.path, PathBuf::from("env.db"));

        // An empty value leaves the configured path alone
        let config = Config::default().apply_overrides(Some(String::new()), None);
        assert_eq!(config.database.path, Config::default().database.path);
    }

    #[test]
    fn test_cli_override_beats_env_override() {
        let config = Config::default()
            .apply_overrides(Some("env.db".to_string()), Some(PathBuf::from("cli.db")));
        assert_eq!(config.database.path, PathBuf::from("cli.db"));
    }
}
