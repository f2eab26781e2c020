//! Backend location.

/// Used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v1";

/// Variable holding the backend base URL, including the `/api/v1` path.
pub const BASE_URL_ENV: &str = "TRACKER_API_URL";

/// Where the backend lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without a trailing slash, e.g. `http://localhost:8000/api/v1`.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Build a config from the environment.
    ///
    /// Selection rules:
    /// - `TRACKER_API_URL` at compile time (the only option for wasm builds)
    /// - `TRACKER_API_URL` at runtime (native builds only)
    /// - otherwise [`DEFAULT_BASE_URL`]
    ///
    /// Blank values are ignored.
    pub fn from_env() -> Self {
        let compiled = option_env!("TRACKER_API_URL").map(str::to_string);

        #[cfg(not(target_arch = "wasm32"))]
        let runtime = std::env::var(BASE_URL_ENV).ok();
        #[cfg(target_arch = "wasm32")]
        let runtime: Option<String> = None;

        compiled
            .and_then(non_empty)
            .or_else(|| runtime.and_then(non_empty))
            .map(Self::new)
            .unwrap_or_default()
    }

    /// Absolute URL for a path below the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn non_empty(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let config = ApiConfig::new("http://api.test/api/v1///");
        assert_eq!(config.base_url, "http://api.test/api/v1");
        assert_eq!(
            config.endpoint("/candidates/"),
            "http://api.test/api/v1/candidates/"
        );
    }

    #[test]
    fn default_points_at_local_backend() {
        assert_eq!(
            ApiConfig::default().endpoint("candidates/1/status"),
            "http://localhost:8000/api/v1/candidates/1/status"
        );
    }

    #[test]
    fn blank_values_are_ignored() {
        assert_eq!(non_empty("   ".to_string()), None);
        assert_eq!(non_empty(" x ".to_string()).as_deref(), Some("x"));
    }
}
