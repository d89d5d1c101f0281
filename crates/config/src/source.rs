use std::collections::HashMap;

/// Key-value lookup over some configuration backing store.
///
/// Resolution code takes an `&impl ConfigSource` instead of reading the
/// process environment directly, so tests can substitute a [`MapSource`].
pub trait ConfigSource {
    fn get(&self, key: &str) -> Option<String>;
}

/// Reads the real process environment.
pub struct ProcessEnv;

impl ConfigSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// In-memory source, used as a deterministic stand-in for the environment.
#[derive(Debug, Clone, Default)]
pub struct MapSource {
    vars: HashMap<String, String>,
}

impl MapSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl From<HashMap<String, String>> for MapSource {
    fn from(vars: HashMap<String, String>) -> Self {
        Self { vars }
    }
}

impl ConfigSource for MapSource {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// Two sources layered; `top` wins for keys it defines.
pub struct Overlay<A, B> {
    top: A,
    base: B,
}

impl<A: ConfigSource, B: ConfigSource> Overlay<A, B> {
    pub fn new(top: A, base: B) -> Self {
        Self { top, base }
    }
}

impl<A: ConfigSource, B: ConfigSource> ConfigSource for Overlay<A, B> {
    fn get(&self, key: &str) -> Option<String> {
        self.top.get(key).or_else(|| self.base.get(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_source_returns_inserted_values() {
        let source = MapSource::new().with("SERVICE_URL", "https://example.com");
        assert_eq!(
            source.get("SERVICE_URL"),
            Some("https://example.com".to_string())
        );
        assert_eq!(source.get("MISSING"), None);
    }

    #[test]
    fn overlay_prefers_top_source() {
        let top = MapSource::new().with("KEY", "from-file");
        let base = MapSource::new()
            .with("KEY", "from-env")
            .with("ONLY_BASE", "base-value");
        let overlay = Overlay::new(top, base);

        assert_eq!(overlay.get("KEY"), Some("from-file".to_string()));
        assert_eq!(overlay.get("ONLY_BASE"), Some("base-value".to_string()));
        assert_eq!(overlay.get("NEITHER"), None);
    }

    #[test]
    fn process_env_reads_real_variables() {
        temp_env::with_var("IBMCLOUD_CONFIG_TEST_VAR", Some("set"), || {
            assert_eq!(
                ProcessEnv.get("IBMCLOUD_CONFIG_TEST_VAR"),
                Some("set".to_string())
            );
        });
        temp_env::with_var_unset("IBMCLOUD_CONFIG_TEST_VAR", || {
            assert_eq!(ProcessEnv.get("IBMCLOUD_CONFIG_TEST_VAR"), None);
        });
    }
}
