use std::fmt;

/// IAM authentication: an API key exchanged for tokens by the token manager.
///
/// The key can be empty when the IAM branch was forced through
/// `_AUTHENTICATION_TYPE=iam` without a key in the environment.
#[derive(Clone, PartialEq, Eq)]
pub struct IamAuth {
    pub api_key: String,
}

#[derive(Clone, PartialEq, Eq)]
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

/// ICP4D authentication against an on-prem token gateway. Every field is
/// copied from the environment as-is, so any of them may be absent.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Icp4dAuth {
    pub username: Option<String>,
    pub password: Option<String>,
    pub access_token: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Auth {
    Iam(IamAuth),
    Basic(BasicAuth),
    Icp4d(Icp4dAuth),
}

/// Resolved credentials for one service: an authentication variant plus the
/// base URL requests go to. The variant is fixed at construction; only the
/// URL stays writable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    auth: Auth,
    pub url: Option<String>,
}

impl Credentials {
    pub fn iam(api_key: impl Into<String>, url: Option<String>) -> Self {
        Self {
            auth: Auth::Iam(IamAuth {
                api_key: api_key.into(),
            }),
            url,
        }
    }

    pub fn basic(
        username: impl Into<String>,
        password: impl Into<String>,
        url: Option<String>,
    ) -> Self {
        Self {
            auth: Auth::Basic(BasicAuth {
                username: username.into(),
                password: password.into(),
            }),
            url,
        }
    }

    pub fn icp4d(auth: Icp4dAuth, url: Option<String>) -> Self {
        Self {
            auth: Auth::Icp4d(auth),
            url,
        }
    }

    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    pub fn is_iam(&self) -> bool {
        matches!(self.auth, Auth::Iam(_))
    }

    pub fn is_basic(&self) -> bool {
        matches!(self.auth, Auth::Basic(_))
    }

    pub fn is_icp4d(&self) -> bool {
        matches!(self.auth, Auth::Icp4d(_))
    }

    /// If no URL was resolved, take whatever base URL the owning client
    /// currently holds. At construction time that is usually still unset,
    /// so the URL may stay `None` here.
    pub fn backfill_url(&mut self, current_url: Option<&str>) {
        if self.url.is_none() {
            self.url = current_url.map(str::to_owned);
        }
    }
}

const REDACTED: &str = "[REDACTED]";

impl fmt::Debug for IamAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IamAuth")
            .field("api_key", &REDACTED)
            .finish()
    }
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &REDACTED)
            .finish()
    }
}

impl fmt::Debug for Icp4dAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Icp4dAuth")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| REDACTED))
            .field("access_token", &self.access_token.as_ref().map(|_| REDACTED))
            .field("url", &self.url)
            .finish()
    }
}
