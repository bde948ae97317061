// Configuration operations

use crate::cli::ConfigCommands;
use crate::config::Config;
use crate::utils::error::AppResult;
use crate::utils::output::{OutputStyle, print_success};
use std::path::{Path, PathBuf};

/// `reset` never reads the existing file, so it can repair one that no
/// longer parses.
pub fn handle_config_command(
    config_path: &Path,
    database: Option<PathBuf>,
    command: Option<ConfigCommands>,
) -> AppResult<()> {
    match command {
        Some(ConfigCommands::Show) | None => {
            let config = Config::load_custom(config_path)?.with_overrides(database);
            print!("{}", render_config(&config, config_path));
            Ok(())
        }
        Some(ConfigCommands::Reset) => handle_reset_command(config_path),
    }
}

fn render_config(config: &Config, config_path: &Path) -> String {
    let mut out = String::new();
    out.push_str("Hackbright Configuration\n");
    out.push_str("========================\n");
    out.push_str(&format!("  Config file: {}\n", config_path.display()));

    out.push_str("Database:\n");
    out.push_str(&format!("  Path: {}\n", config.database.path.display()));
    out.push_str(&format!("  Create schema: {}\n", config.database.create_schema));

    out.push_str("General:\n");
    out.push_str(&format!("  Prompt: {:?}\n", config.general.prompt));
    out.push_str(&format!("  Color: {}\n", config.general.color));
    out
}

fn handle_reset_command(config_path: &Path) -> AppResult<()> {
    Config::default().save_to(config_path)?;
    print_success(&format!(
        "Configuration reset to defaults: {}",
        config_path.display()
    ));
    println!("{}", OutputStyle::muted("Restart to pick up the new settings"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::AppError;

    #[test]
    fn test_render_lists_database_path() {
        let mut config = Config::default();
        config.database.path = "grades.db".into();
        let text = render_config(&config, Path::new("/etc/hackbright.toml"));
        assert!(text.contains("Path: grades.db"));
        assert!(text.contains("Config file: /etc/hackbright.toml"));
        assert!(text.contains("Prompt: \"HBA Database> \""));
    }

    #[test]
    fn test_reset_overwrites_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[database]\npath = \"x.db\"\n\n[general]\n").unwrap();

        handle_config_command(&path, None, Some(ConfigCommands::Reset)).unwrap();
        let config = Config::load_custom(&path).unwrap();
        assert_eq!(config.database.path, Config::default().database.path);
    }

    #[test]
    fn test_reset_repairs_unparseable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "database = 3").unwrap();

        // Showing a broken file fails, resetting it does not
        let err = handle_config_command(&path, None, Some(ConfigCommands::Show)).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));

        handle_config_command(&path, None, Some(ConfigCommands::Reset)).unwrap();
        let config = Config::load_custom(&path).unwrap();
        assert_eq!(config.general.prompt, Config::default().general.prompt);
    }
}
