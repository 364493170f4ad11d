//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// File names checked in the working directory, in order
const PROJECT_CONFIG_FILES: &[&str] = &["unitchat.toml", ".unitchat.toml"];

/// Prefix for environment overrides, e.g. `UNITCHAT_ASSISTANT__MODEL`
const ENV_PREFIX: &str = "UNITCHAT_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables prefixed `UNITCHAT_` (`__` separates sections)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./unitchat.toml` or `./.unitchat.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/unitchat/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/unitchat/config.toml if set,
    /// otherwise the platform config directory equivalent.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("unitchat").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");
        println!("  [     ] Env:     {}*", ENV_PREFIX);

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./unitchat.toml or ./.unitchat.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use unitchat_domain::{Model, OutputFormat};

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.assistant.model, Model::Gemini15Flash);
        assert!(config.repl.show_progress);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("unitchat"));
    }

    #[test]
    fn test_project_file_is_merged() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "unitchat.toml",
                r#"
[assistant]
model = "gemini-1.5-pro"

[output]
format = "json"
"#,
            )?;

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.assistant.model, Model::Gemini15Pro);
            assert_eq!(config.output.format, Some(OutputFormat::Json));
            assert!(config.output.color);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_path_overrides_project_file() {
        Jail::expect_with(|jail| {
            jail.create_file("unitchat.toml", "[assistant]\nmodel = \"gemini-1.5-pro\"\n")?;
            jail.create_file("custom.toml", "[assistant]\ntimeout_seconds = 45\nmodel = \"gemini-2.0-flash\"\n")?;

            let path = PathBuf::from("custom.toml");
            let config = ConfigLoader::load(Some(&path)).map_err(|e| *e)?;
            assert_eq!(config.assistant.model, Model::Gemini20Flash);
            assert_eq!(config.assistant.timeout_seconds, Some(45));
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_files() {
        Jail::expect_with(|jail| {
            jail.create_file("unitchat.toml", "[repl]\nshow_progress = true\n")?;
            jail.set_env("UNITCHAT_REPL__SHOW_PROGRESS", "false");
            jail.set_env("UNITCHAT_ASSISTANT__TIMEOUT_SECONDS", "20");

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert!(!config.repl.show_progress);
            assert_eq!(config.assistant.timeout_seconds, Some(20));
            Ok(())
        });
    }
}
