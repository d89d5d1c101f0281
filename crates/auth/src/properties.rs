use ibmcloud_config::ConfigSource;

use crate::error::AuthError;

const IAM_APIKEY: &str = "_IAM_APIKEY";
const APIKEY: &str = "_APIKEY";
const USERNAME: &str = "_USERNAME";
const PASSWORD: &str = "_PASSWORD";
const URL: &str = "_URL";
const AUTHENTICATION_TYPE: &str = "_AUTHENTICATION_TYPE";
const ICP4D_ACCESS_TOKEN: &str = "_ICP4D_ACCESS_TOKEN";
const ICP4D_URL: &str = "_ICP4D_URL";

/// Variable-name prefix for a service: the uppercased identifier.
pub fn env_prefix(service_id: &str) -> String {
    service_id.to_uppercase()
}

/// The per-service configuration values, read once per resolution.
/// Empty strings are normalized to `None` at this layer, so everything
/// downstream only deals in present-or-absent.
#[derive(Debug, Clone, Default)]
pub struct ServiceProperties {
    pub prefix: String,
    pub api_key: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub url: Option<String>,
    pub authentication_type: Option<String>,
    pub icp4d_access_token: Option<String>,
    pub icp4d_url: Option<String>,
}

impl ServiceProperties {
    pub fn read(service_id: &str, source: &impl ConfigSource) -> Self {
        let prefix = env_prefix(service_id);
        let get = |suffix: &str| lookup(source, &prefix, suffix);

        // check the old API key name as well
        let api_key = match get(IAM_APIKEY) {
            Some(key) => Some(key),
            None => {
                let legacy = get(APIKEY);
                if legacy.is_some() {
                    tracing::debug!("Using legacy {prefix}{APIKEY} variable");
                }
                legacy
            }
        };

        Self {
            api_key,
            username: get(USERNAME),
            password: get(PASSWORD),
            url: get(URL),
            authentication_type: get(AUTHENTICATION_TYPE),
            icp4d_access_token: get(ICP4D_ACCESS_TOKEN),
            icp4d_url: get(ICP4D_URL),
            prefix,
        }
    }

    /// Precondition for building any credentials: an API key, or a full
    /// username/password pair. Runs before rule selection regardless of
    /// which rule would fire.
    pub fn require_credentials(&self) -> Result<(), AuthError> {
        if self.api_key.is_none() && (self.username.is_none() || self.password.is_none()) {
            return Err(AuthError::MissingCredentials {
                prefix: self.prefix.clone(),
            });
        }
        Ok(())
    }
}

fn lookup(source: &impl ConfigSource, prefix: &str, suffix: &str) -> Option<String> {
    source
        .get(&format!("{prefix}{suffix}"))
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ibmcloud_config::MapSource;

    #[test]
    fn prefix_is_uppercased_service_id() {
        assert_eq!(env_prefix("Discovery"), "DISCOVERY");
        assert_eq!(env_prefix("speech_to_text"), "SPEECH_TO_TEXT");
    }

    #[test]
    fn reads_all_properties_under_the_prefix() {
        let source = MapSource::new()
            .with("DISCOVERY_IAM_APIKEY", "iam-key")
            .with("DISCOVERY_USERNAME", "user")
            .with("DISCOVERY_PASSWORD", "pass")
            .with("DISCOVERY_URL", "https://x")
            .with("DISCOVERY_AUTHENTICATION_TYPE", "iam")
            .with("DISCOVERY_ICP4D_ACCESS_TOKEN", "tok")
            .with("DISCOVERY_ICP4D_URL", "https://gateway");

        let props = ServiceProperties::read("discovery", &source);
        assert_eq!(props.prefix, "DISCOVERY");
        assert_eq!(props.api_key.as_deref(), Some("iam-key"));
        assert_eq!(props.username.as_deref(), Some("user"));
        assert_eq!(props.password.as_deref(), Some("pass"));
        assert_eq!(props.url.as_deref(), Some("https://x"));
        assert_eq!(props.authentication_type.as_deref(), Some("iam"));
        assert_eq!(props.icp4d_access_token.as_deref(), Some("tok"));
        assert_eq!(props.icp4d_url.as_deref(), Some("https://gateway"));
    }

    #[test]
    fn iam_apikey_wins_over_legacy_name() {
        let source = MapSource::new()
            .with("ASSISTANT_IAM_APIKEY", "new-key")
            .with("ASSISTANT_APIKEY", "old-key");
        let props = ServiceProperties::read("assistant", &source);
        assert_eq!(props.api_key.as_deref(), Some("new-key"));
    }

    #[test]
    fn legacy_apikey_is_used_when_iam_name_is_absent() {
        let source = MapSource::new().with("ASSISTANT_APIKEY", "old-key");
        let props = ServiceProperties::read("assistant", &source);
        assert_eq!(props.api_key.as_deref(), Some("old-key"));
    }

    #[test]
    fn empty_values_count_as_unset() {
        let source = MapSource::new()
            .with("NLU_IAM_APIKEY", "")
            .with("NLU_APIKEY", "fallback-key")
            .with("NLU_USERNAME", "");
        let props = ServiceProperties::read("nlu", &source);
        assert_eq!(props.api_key.as_deref(), Some("fallback-key"));
        assert_eq!(props.username, None);
    }

    #[test]
    fn gate_rejects_missing_key_and_partial_basic_pair() {
        let just_username = MapSource::new().with("SVC_USERNAME", "user");
        let props = ServiceProperties::read("svc", &just_username);
        assert!(matches!(
            props.require_credentials(),
            Err(AuthError::MissingCredentials { .. })
        ));

        let nothing = MapSource::new();
        let props = ServiceProperties::read("svc", &nothing);
        assert!(props.require_credentials().is_err());
    }

    #[test]
    fn gate_accepts_api_key_or_full_pair() {
        let keyed = MapSource::new().with("SVC_APIKEY", "key");
        assert!(ServiceProperties::read("svc", &keyed)
            .require_credentials()
            .is_ok());

        let paired = MapSource::new()
            .with("SVC_USERNAME", "user")
            .with("SVC_PASSWORD", "pass");
        assert!(ServiceProperties::read("svc", &paired)
            .require_credentials()
            .is_ok());
    }
}
