pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

pub const LOG_DIRECTORY: &str = "./logs";
pub const DEFAULT_MAX_LOG_FILES: usize = 7;
