use std::collections::HashMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::error::ServiceError;

/// Custom outgoing request headers for one service client. Names are
/// unique; insertion order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderStore {
    map: HashMap<String, String>,
}

impl HeaderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the header, overwriting any existing value under that name.
    pub fn upsert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.map.insert(name.into(), value.into());
    }

    pub fn upsert_all<I, K, V>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, value) in entries {
            self.upsert(name, value);
        }
    }

    /// Drop every header by swapping in a fresh map. Snapshots taken
    /// earlier keep the contents they were taken with.
    pub fn clear(&mut self) {
        self.map = HashMap::new();
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.map.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Detached copy; later mutation of the store leaves it untouched.
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.map.clone()
    }

    /// Bridge to the transport's header type.
    pub fn to_header_map(&self) -> Result<HeaderMap, ServiceError> {
        let mut headers = HeaderMap::with_capacity(self.map.len());
        for (name, value) in &self.map {
            let header_name =
                HeaderName::from_bytes(name.as_bytes()).map_err(|e| ServiceError::InvalidHeader {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            let header_value =
                HeaderValue::from_str(value).map_err(|e| ServiceError::InvalidHeader {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            headers.insert(header_name, header_value);
        }
        Ok(headers)
    }
}
