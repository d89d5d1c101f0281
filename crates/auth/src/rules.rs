use crate::credentials::{Credentials, Icp4dAuth};
use crate::properties::ServiceProperties;

pub const AUTH_TYPE_IAM: &str = "iam";
pub const AUTH_TYPE_ICP4D: &str = "icp4d";

/// One way of turning service properties into credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRule {
    Iam,
    Icp4d,
    Basic,
}

impl AuthRule {
    /// Evaluation order. [`select`] walks this top-down and the first
    /// matching rule wins, so IAM beats ICP4D beats basic auth.
    pub const PRIORITY: [AuthRule; 3] = [AuthRule::Iam, AuthRule::Icp4d, AuthRule::Basic];

    pub fn matches(&self, props: &ServiceProperties) -> bool {
        match self {
            AuthRule::Iam => {
                props.api_key.is_some()
                    || props.authentication_type.as_deref() == Some(AUTH_TYPE_IAM)
            }
            AuthRule::Icp4d => {
                props.icp4d_access_token.is_some()
                    || props.authentication_type.as_deref() == Some(AUTH_TYPE_ICP4D)
            }
            AuthRule::Basic => props.username.is_some() && props.password.is_some(),
        }
    }

    fn build(&self, props: &ServiceProperties) -> Credentials {
        match self {
            AuthRule::Iam => Credentials::iam(
                props.api_key.clone().unwrap_or_default(),
                props.url.clone(),
            ),
            AuthRule::Icp4d => Credentials::icp4d(
                Icp4dAuth {
                    username: props.username.clone(),
                    password: props.password.clone(),
                    access_token: props.icp4d_access_token.clone(),
                    url: props.icp4d_url.clone(),
                },
                props.url.clone(),
            ),
            AuthRule::Basic => Credentials::basic(
                props.username.clone().unwrap_or_default(),
                props.password.clone().unwrap_or_default(),
                props.url.clone(),
            ),
        }
    }
}

/// Walk [`AuthRule::PRIORITY`] and build credentials from the first rule
/// whose preconditions hold.
pub fn select(props: &ServiceProperties) -> Option<Credentials> {
    let rule = AuthRule::PRIORITY.iter().find(|rule| rule.matches(props))?;
    Some(rule.build(props))
}
