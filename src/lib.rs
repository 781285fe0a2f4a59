pub mod config;
pub mod db;
pub mod pkg;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::AppConfig;
pub use db::Store;
pub use pkg::Service;
pub use utils::error::{AppError, Result};
