pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::model::Action;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "hamed-advanced")]
#[command(about = "RAMEDCollect (hamed) Advanced-mode Request Manager")]
pub struct CliConfig {
    /// Action to start with: request, accept, valid, help or exit
    pub action: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Hour given to typed dates (0-23), overrides the config file
    #[arg(long)]
    pub hour: Option<u32>,

    /// Also print results as JSON lines
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Unknown or missing actions fall back to the help menu.
    pub fn initial_action(&self) -> Action {
        self.action
            .as_deref()
            .and_then(Action::from_name)
            .unwrap_or(Action::Help)
    }

    /// Loads the file given with `--config` (or defaults) and applies flag overrides.
    pub fn load_settings(&self) -> crate::Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        // 應用命令列覆蓋設定
        if let Some(hour) = self.hour {
            config.request.default_hour = hour;
        }
        if self.json {
            config.output.format = "json".to_string();
        }
        if self.verbose {
            config.logging.verbose = true;
        }

        Ok(config)
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use crate::core::ConfigProvider;
    use crate::domain::model::OutputFormat;

    #[test]
    fn test_initial_action() {
        let config = CliConfig::parse_from(["hamed-advanced", "Accept"]);
        assert_eq!(config.initial_action(), Action::Accept);

        let config = CliConfig::parse_from(["hamed-advanced", "dance"]);
        assert_eq!(config.initial_action(), Action::Help);

        let config = CliConfig::parse_from(["hamed-advanced"]);
        assert_eq!(config.initial_action(), Action::Help);
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = CliConfig::parse_from(["hamed-advanced", "--hour", "7", "--json", "-v"]);
        let settings = config.load_settings().unwrap();

        assert_eq!(settings.default_hour(), 7);
        assert_eq!(settings.output_format(), OutputFormat::Json);
        assert!(settings.logging.verbose);
    }
}
