use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::source::{ConfigSource, ProcessEnv};

pub const CREDENTIALS_FILE_NAME: &str = "ibm-credentials.env";
pub const CREDENTIALS_FILE_ENV: &str = "IBM_CREDENTIALS_FILE";

/// A credentials file parsed into memory.
///
/// Loading never writes to the process environment; the parsed pairs are
/// served straight from this source.
#[derive(Debug, Clone)]
pub struct EnvFileSource {
    vars: HashMap<String, String>,
}

impl EnvFileSource {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let entries = dotenvy::from_path_iter(path).map_err(|e| ConfigError::CredentialsFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let mut vars = HashMap::new();
        for entry in entries {
            let (key, value) = entry.map_err(|e| ConfigError::CredentialsFile {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
            vars.insert(key, value);
        }
        Ok(Self { vars })
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl ConfigSource for EnvFileSource {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// Candidate credentials-file paths in priority order: the file named by
/// `IBM_CREDENTIALS_FILE`, then `ibm-credentials.env` in the working
/// directory, then in the home directory. Only existing files are returned.
pub fn credential_file_paths() -> Vec<PathBuf> {
    candidate_paths(&ProcessEnv, std::env::current_dir().ok(), dirs::home_dir())
}

fn candidate_paths(
    env: &impl ConfigSource,
    cwd: Option<PathBuf>,
    home: Option<PathBuf>,
) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(named) = env
        .get(CREDENTIALS_FILE_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
    {
        if named.is_file() {
            paths.push(named);
        } else {
            tracing::warn!(
                "{} points at {}, which does not exist",
                CREDENTIALS_FILE_ENV,
                named.display()
            );
        }
    }

    for dir in [cwd, home].into_iter().flatten() {
        let candidate = dir.join(CREDENTIALS_FILE_NAME);
        if candidate.is_file() {
            paths.push(candidate);
        }
    }

    paths
}
