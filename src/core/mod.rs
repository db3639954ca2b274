pub mod assistant;
pub mod format;
pub mod links;
pub mod prompts;
pub mod session;
pub mod title_parser;
pub mod title_probe;

pub use crate::domain::model::{SongInfo, TabSite};
pub use crate::domain::ports::{Delay, RemoteService, TitleSource};
pub use crate::utils::error::Result;
