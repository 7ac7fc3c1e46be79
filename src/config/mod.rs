pub mod snapshot;

#[cfg(feature = "cli")]
use crate::domain::model::Icon;
#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use uuid::Uuid;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "linkbio")]
#[command(about = "Manage a link-in-bio profile and its links")]
pub struct CliConfig {
    #[arg(long, help = "JSON file that persists the profile between runs")]
    pub snapshot_path: Option<String>,

    #[arg(long, help = "Seed for the generated starter data")]
    pub seed: Option<u64>,

    #[arg(long, help = "Simulate hosted-API latency on every operation")]
    pub simulate_latency: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the profile and the public preview of its links
    Show,
    /// Add a new link
    Add {
        #[arg(long)]
        title: String,

        #[arg(long)]
        url: String,

        #[arg(long, default_value = "globe")]
        icon: Icon,

        #[arg(long, help = "Create the link hidden from the public page")]
        inactive: bool,
    },
    /// Remove a link by id
    Remove { id: Uuid },
    /// Flip a link's active flag
    Toggle { id: Uuid },
    /// Update profile fields; omitted flags stay unchanged
    Profile {
        #[arg(long)]
        username: Option<String>,

        #[arg(long)]
        display_name: Option<String>,

        #[arg(long)]
        bio: Option<String>,

        #[arg(long)]
        avatar: Option<String>,

        #[arg(long)]
        background_color: Option<String>,

        #[arg(long)]
        button_color: Option<String>,
    },
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn simulate_latency(&self) -> bool {
        self.simulate_latency
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn snapshot_path(&self) -> Option<&str> {
        self.snapshot_path.as_deref()
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.snapshot_path {
            validation::validate_path("snapshot_path", path)?;
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_add_command() {
        let config = CliConfig::parse_from([
            "linkbio",
            "add",
            "--title",
            "Twitch",
            "--url",
            "https://twitch.tv/creator",
            "--icon",
            "twitch",
        ]);

        match config.command {
            Some(Command::Add {
                title,
                url,
                icon,
                inactive,
            }) => {
                assert_eq!(title, "Twitch");
                assert_eq!(url, "https://twitch.tv/creator");
                // Unrecognized icon keys fall back instead of failing.
                assert_eq!(icon, Icon::Unknown);
                assert!(!inactive);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_defaults() {
        let config = CliConfig::parse_from(["linkbio"]);

        assert!(config.command.is_none());
        assert!(config.snapshot_path.is_none());
        assert!(!config.simulate_latency);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_snapshot_path() {
        let config = CliConfig::parse_from(["linkbio", "--snapshot-path", ""]);
        assert!(config.validate().is_err());
    }
}
