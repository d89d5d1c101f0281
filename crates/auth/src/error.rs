#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error(
        "No credentials found for service '{prefix}'. Set {prefix}_APIKEY or {prefix}_USERNAME \
         and {prefix}_PASSWORD in the environment or in ibm-credentials.env"
    )]
    MissingCredentials { prefix: String },
}
