pub mod properties;
pub mod rules;

mod credentials;
mod error;

pub use credentials::{Auth, BasicAuth, Credentials, IamAuth, Icp4dAuth};
pub use error::AuthError;

use std::path::PathBuf;

use anyhow::Result;
use ibmcloud_config::{credential_file_paths, ConfigSource, EnvFileSource, Overlay, ProcessEnv};
use properties::ServiceProperties;

/// Resolve credentials for `service_id` from the first credentials file
/// found, overlaid on the process environment.
///
/// Returns `Ok(None)` when no credentials file exists anywhere: the service
/// stays unauthenticated and no per-service variables are consulted.
pub fn resolve_credentials(service_id: &str) -> Result<Option<Credentials>> {
    resolve_with_paths(service_id, &credential_file_paths(), None)
}

/// Resolution against an explicit source, for callers that already located
/// their configuration (and for tests). Behaves as if a credentials file was
/// found: the validation gate and the rule chain always run.
pub fn resolve_from_source(
    service_id: &str,
    source: &impl ConfigSource,
    current_url: Option<&str>,
) -> Result<Credentials> {
    let props = ServiceProperties::read(service_id, source);
    props.require_credentials()?;

    let Some(mut credentials) = rules::select(&props) else {
        return Err(AuthError::MissingCredentials {
            prefix: props.prefix,
        }
        .into());
    };
    if credentials.is_icp4d() {
        credentials.backfill_url(current_url);
    }
    Ok(credentials)
}

fn resolve_with_paths(
    service_id: &str,
    paths: &[PathBuf],
    current_url: Option<&str>,
) -> Result<Option<Credentials>> {
    if paths.is_empty() {
        tracing::debug!("No credentials file found; leaving '{service_id}' unauthenticated");
        return Ok(None);
    }

    match load_first(paths) {
        Some(file) => {
            resolve_from_source(service_id, &Overlay::new(file, ProcessEnv), current_url).map(Some)
        }
        None => resolve_from_source(service_id, &ProcessEnv, current_url).map(Some),
    }
}

fn load_first(paths: &[PathBuf]) -> Option<EnvFileSource> {
    for path in paths {
        match EnvFileSource::load(path) {
            Ok(file) => {
                tracing::debug!("Loaded credentials from {}", path.display());
                return Some(file);
            }
            Err(err) => tracing::warn!("Skipping credentials file: {err}"),
        }
    }
    None
}
