pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::ArchiveApiClient;
pub use config::request_file::RequestFile;
pub use core::engine::{RequestEngine, TicketSpec};
pub use utils::error::{Result, SearchError};
