pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::GeminiClient;
pub use config::AssistantConfig;
pub use core::{assistant::SongAssistant, session::Session, title_probe::TitleProbe};
pub use domain::model::{SongInfo, TabSite};
pub use utils::error::{AssistantError, ConfigError, RemoteCallError, Result, TabStreamError};
