//! Advisor configuration (environment driven).

use std::time::Duration;

use tracing::warn;

use crate::result::AiError;

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for the generation client and advisor.
///
/// Environment variables:
/// - `GEMINI_API_KEY` (or `API_KEY`)
/// - `STOCKLENS_MODEL`
/// - `STOCKLENS_AI_BASE_URL`
/// - `STOCKLENS_AI_TIMEOUT_SECS`
#[derive(Clone, PartialEq, Eq)]
pub struct AdvisorConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl core::fmt::Debug for AdvisorConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AdvisorConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AdvisorConfig {
    pub fn from_env() -> Result<Self, AiError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (environment, test map, ...).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AiError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = get("GEMINI_API_KEY").or_else(|| get("API_KEY"));
        if api_key.is_none() {
            warn!("GEMINI_API_KEY not set; advisor responses will use fallback messages");
        }

        let timeout = match get("STOCKLENS_AI_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    AiError::InvalidInput(format!(
                        "STOCKLENS_AI_TIMEOUT_SECS must be a whole number of seconds, got {raw:?}"
                    ))
                })?;
                if secs == 0 {
                    return Err(AiError::InvalidInput(
                        "STOCKLENS_AI_TIMEOUT_SECS must be positive".to_string(),
                    ));
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            api_key,
            model: get("STOCKLENS_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: get("STOCKLENS_AI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout,
        })
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = AdvisorConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AdvisorConfig::default());
    }

    #[test]
    fn api_key_falls_back_to_legacy_variable() {
        let config = AdvisorConfig::from_lookup(lookup(&[("API_KEY", "legacy")])).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("legacy"));

        let config = AdvisorConfig::from_lookup(lookup(&[
            ("API_KEY", "legacy"),
            ("GEMINI_API_KEY", "primary"),
        ]))
        .unwrap();
        assert_eq!(config.api_key.as_deref(), Some("primary"));
    }

    #[test]
    fn overrides_are_read() {
        let config = AdvisorConfig::from_lookup(lookup(&[
            ("STOCKLENS_MODEL", "gemini-test"),
            ("STOCKLENS_AI_BASE_URL", "http://localhost:9999"),
            ("STOCKLENS_AI_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();

        assert_eq!(config.model, "gemini-test");
        assert_eq!(config.base_url, "http://localhost:9999");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn invalid_timeout_is_rejected() {
        let err = AdvisorConfig::from_lookup(lookup(&[("STOCKLENS_AI_TIMEOUT_SECS", "soon")]))
            .unwrap_err();
        assert!(matches!(err, AiError::InvalidInput(_)));

        assert!(
            AdvisorConfig::from_lookup(lookup(&[("STOCKLENS_AI_TIMEOUT_SECS", "0")])).is_err()
        );
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let config = AdvisorConfig::default().with_api_key("super-secret");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
