use reqwest::Url;
use std::fmt;

use crate::config::loader::ConfigError;

/// Environment variable holding an explicit service origin.
pub const ORIGIN_ENV: &str = "OCTOFIT_API_ORIGIN";
/// Environment variable set inside GitHub Codespaces.
pub const CODESPACE_ENV: &str = "CODESPACE_NAME";

/// Origin sources that take precedence over the config file.
///
/// Read once at startup and handed to [`crate::config::Config::resolve_origin`],
/// so nothing downstream consults process state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OriginOverrides {
    pub cli: Option<String>,
    pub env_origin: Option<String>,
    pub codespace_name: Option<String>,
}

impl OriginOverrides {
    pub fn from_env(cli: Option<String>) -> Self {
        Self {
            cli: non_empty(cli),
            env_origin: non_empty(std::env::var(ORIGIN_ENV).ok()),
            codespace_name: non_empty(std::env::var(CODESPACE_ENV).ok()),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Validated absolute `http`/`https` origin of the REST service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceOrigin(Url);

impl ServiceOrigin {
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidOrigin {
            origin: raw.to_string(),
            reason,
        };

        let url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!(
                "scheme '{}' is not supported, use http or https",
                url.scheme()
            )));
        }
        if url.host_str().is_none() {
            return Err(invalid("missing host".to_string()));
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(invalid("query strings and fragments are not allowed".to_string()));
        }
        Ok(Self(url))
    }

    /// Forwarded port 8000 of a GitHub Codespace.
    pub fn codespace_url(name: &str) -> String {
        format!("https://{name}-8000.app.github.dev")
    }

    /// Origin without a trailing slash.
    pub fn as_str(&self) -> &str {
        self.0.as_str().trim_end_matches('/')
    }
}

impl fmt::Display for ServiceOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let origin = ServiceOrigin::parse("http://localhost:8000/").unwrap();
        assert_eq!(origin.as_str(), "http://localhost:8000");
    }

    #[test]
    fn path_prefix_is_kept() {
        let origin = ServiceOrigin::parse("https://example.com/tracker").unwrap();
        assert_eq!(origin.as_str(), "https://example.com/tracker");
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        let err = ServiceOrigin::parse("ftp://example.com").unwrap_err();
        assert!(err.to_string().contains("use http or https"));
    }

    #[test]
    fn relative_value_is_rejected() {
        assert!(matches!(
            ServiceOrigin::parse("localhost"),
            Err(ConfigError::InvalidOrigin { .. })
        ));
    }

    #[test]
    fn codespace_url_targets_port_8000() {
        assert_eq!(
            ServiceOrigin::codespace_url("octo-abc"),
            "https://octo-abc-8000.app.github.dev"
        );
    }

    #[test]
    fn blank_overrides_are_ignored() {
        assert_eq!(non_empty(Some("  ".to_string())), None);
        assert_eq!(non_empty(Some(" x ".to_string())), Some("x".to_string()));
    }
}
