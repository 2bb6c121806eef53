pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::state_store::SnapshotFormat;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "menagerie")]
#[command(about = "A small zoo simulation: Russian name inflection and state snapshots")]
pub struct CliConfig {
    #[arg(long, help = "Roster TOML file (defaults to the built-in roster)")]
    pub config: Option<String>,

    #[arg(long, help = "Where to save the zoo state (overrides [state].path)")]
    pub state: Option<String>,

    #[arg(long, help = "Snapshot format: binary or json (overrides [state].format)")]
    pub format: Option<SnapshotFormat>,

    #[arg(long, help = "Extra lexicon TOML merged into the built-in one")]
    pub lexicon: Option<String>,

    #[arg(long, help = "Guess inflections for words missing from the lexicon")]
    pub guess: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(config) = &self.config {
            validation::validate_path("config", config)?;
            validation::validate_file_extension("config", config, &["toml"])?;
        }
        if let Some(state) = &self.state {
            validation::validate_path("state", state)?;
        }
        if let Some(lexicon) = &self.lexicon {
            validation::validate_path("lexicon", lexicon)?;
            validation::validate_file_extension("lexicon", lexicon, &["toml"])?;
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cli_flags() {
        let config = CliConfig::parse_from([
            "menagerie",
            "--state",
            "out/zoo.json",
            "--format",
            "json",
            "--guess",
        ]);
        assert_eq!(config.state.as_deref(), Some("out/zoo.json"));
        assert_eq!(config.format, Some(SnapshotFormat::Json));
        assert!(config.guess);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_lexicon_must_be_toml() {
        let config = CliConfig::parse_from(["menagerie", "--lexicon", "words.txt"]);
        assert!(config.validate().is_err());
    }
}
