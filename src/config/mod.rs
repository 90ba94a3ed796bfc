pub mod constants;
pub mod settings;

pub use constants::{DEFAULT_HOST, DEFAULT_MAX_LOG_FILES, DEFAULT_PORT, LOG_DIRECTORY};
pub use settings::ServerConfig;
