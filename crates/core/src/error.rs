#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Invalid header '{name}': {reason}")]
    InvalidHeader { name: String, reason: String },

    #[error("No service URL configured for service '{service_id}'")]
    MissingServiceUrl { service_id: String },
}
