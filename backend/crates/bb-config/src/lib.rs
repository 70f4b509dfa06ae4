mod config;
mod error;
mod hub_config;
mod log_level;
mod logging_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use hub_config::HubConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const MIN_PORT: u16 = 1024;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

// Hub mailbox constraints
pub const MIN_MAILBOX_CAPACITY: usize = 1;
pub const MAX_MAILBOX_CAPACITY: usize = 1024;
pub const DEFAULT_SUBSCRIBER_CAPACITY: usize = 5;
pub const DEFAULT_LEGACY_CAPACITY: usize = 1;
pub const DEFAULT_SUBSCRIBER_ID_PREFIX: &str = "sub-";
pub const DEFAULT_MIRROR_TO_LEGACY: bool = false;
