//! Client configuration
//!
//! # Environment variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | API_BASE_URL | (empty) | API origin, also the prefix for relative image paths |
//! | API_KEY | (unset) | Sent as `Client-App-Key` |
//! | API_TYPE | (unset) | Sent as `Client-App-Type` |
//! | BRANCH_ID | fallback branch | Branch whose catalog is listed |
//! | REQUEST_TIMEOUT_SECS | 30 | Request timeout in seconds |
//!
//! Each variable may also be given with a `REACT_APP_` prefix.

/// Branch used when none is configured
pub const FALLBACK_BRANCH_ID: &str = "4e33f1b6-6c55-44b4-a209-19039d371225";

/// Client configuration for the product-listing API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (e.g., "https://api.example.com")
    pub base_url: String,

    /// Application key header value
    pub app_key: Option<String>,

    /// Application type header value
    pub app_type: Option<String>,

    /// Branch identifier (blank means fallback)
    pub branch_id: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            app_key: None,
            app_type: None,
            branch_id: None,
            timeout: 30,
        }
    }

    /// Load configuration from the environment
    pub fn from_env() -> Self {
        Self {
            base_url: env_var("API_BASE_URL").unwrap_or_default(),
            app_key: env_var("API_KEY"),
            app_type: env_var("API_TYPE"),
            branch_id: env_var("BRANCH_ID"),
            timeout: env_var("REQUEST_TIMEOUT_SECS")
                .and_then(|t| t.parse().ok())
                .unwrap_or(30),
        }
    }

    /// Set the application key
    pub fn with_app_key(mut self, app_key: impl Into<String>) -> Self {
        self.app_key = Some(app_key.into());
        self
    }

    /// Set the application type
    pub fn with_app_type(mut self, app_type: impl Into<String>) -> Self {
        self.app_type = Some(app_type.into());
        self
    }

    /// Set the branch identifier
    pub fn with_branch_id(mut self, branch_id: impl Into<String>) -> Self {
        self.branch_id = Some(branch_id.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Branch to query: the configured one, or the fallback when unset/blank
    pub fn resolved_branch_id(&self) -> &str {
        resolve_branch_id(self.branch_id.as_deref())
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> crate::ClientResult<crate::HttpClient> {
        crate::HttpClient::new(self)
    }
}

/// Trimmed branch identifier, or [`FALLBACK_BRANCH_ID`] when blank
pub fn resolve_branch_id(branch_id: Option<&str>) -> &str {
    branch_id
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .unwrap_or(FALLBACK_BRANCH_ID)
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name)
        .or_else(|_| std::env::var(format!("REACT_APP_{}", name)))
        .ok()
}
