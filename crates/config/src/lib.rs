pub mod file;
pub mod source;

mod error;

pub use error::ConfigError;
pub use file::{credential_file_paths, EnvFileSource, CREDENTIALS_FILE_ENV, CREDENTIALS_FILE_NAME};
pub use source::{ConfigSource, MapSource, Overlay, ProcessEnv};
