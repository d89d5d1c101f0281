use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load credentials file {}: {reason}", path.display())]
    CredentialsFile { path: PathBuf, reason: String },
}
