use crate::config::toml_config::TomlConfig;
use crate::config::AssistantConfig;
use crate::domain::model::{SongInfo, TabSite};
use crate::utils::error::ConfigError;
use crate::utils::validation::validate_non_empty_string;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "tab-stream")]
#[command(about = "Find tabs and chords for the song in a video title")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long, global = true, help = "Base URL of the models API")]
    pub endpoint: Option<String>,

    #[arg(long, global = true)]
    pub model: Option<String>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Parse a title locally, without contacting the remote service
    Parse { title: String },

    /// Identify artist and title, asking the remote service first
    Identify {
        title: String,

        #[arg(long, help = "Print the result as JSON")]
        json: bool,
    },

    /// Ask a question about a song
    Ask {
        question: String,

        #[arg(long, default_value = "")]
        artist: String,

        #[arg(long)]
        title: String,

        #[arg(long, help = "Render the answer as HTML with clickable links")]
        html: bool,
    },

    /// Print tab search links for a title (parsed locally)
    Links {
        title: String,

        #[arg(long, help = "Only this site: ultimate-guitar, songsterr or google")]
        site: Option<TabSite>,
    },
}

/// File values merged with command-line flags.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub assistant: AssistantConfig,
    pub verbose: bool,
    pub json_logs: bool,
}

impl CliConfig {
    /// Config file values overridden by flags and `GEMINI_API_KEY`.
    ///
    /// Logging switches are additive: either the flag or the file's
    /// `[logging]` section turns them on.
    pub fn resolve(&self) -> Result<ResolvedConfig, ConfigError> {
        let file = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        let mut assistant = file.assistant_config();
        if let Some(key) = &self.api_key {
            assistant.api_key = Some(key.clone());
        }
        if let Some(endpoint) = &self.endpoint {
            assistant.endpoint = endpoint.clone();
        }
        if let Some(model) = &self.model {
            assistant.model = model.clone();
        }

        Ok(ResolvedConfig {
            assistant,
            verbose: self.verbose || file.verbose(),
            json_logs: self.json_logs || file.json_logs(),
        })
    }

    pub fn needs_remote(&self) -> bool {
        matches!(self.command, Command::Identify { .. } | Command::Ask { .. })
    }
}

/// The song an `ask` question is about. The title must not be blank.
pub fn ask_song(artist: &str, title: &str) -> Result<SongInfo, ConfigError> {
    validate_non_empty_string("title", title)?;
    Ok(SongInfo::new(artist, title))
}
