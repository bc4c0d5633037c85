//! HTTP client for network-based API calls

use crate::{ClientConfig, ClientError, ClientResult};
use ::http::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Application key header
pub const CLIENT_APP_KEY: HeaderName = HeaderName::from_static("client-app-key");

/// Application type header
pub const CLIENT_APP_TYPE: HeaderName = HeaderName::from_static("client-app-type");

/// Per-request options
#[derive(Debug, Clone, Copy)]
pub struct RequestOptions {
    /// Attach the application headers (only `Content-Type` when false)
    pub require_header: bool,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self { require_header: true }
    }
}

impl RequestOptions {
    /// Send only the JSON content-type header
    pub fn without_app_headers() -> Self {
        Self { require_header: false }
    }
}

/// HTTP client for the product-listing API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    app_headers: HeaderMap,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        let mut app_headers = HeaderMap::new();
        if let Some(key) = &config.app_key {
            app_headers.insert(CLIENT_APP_KEY, header_value("app key", key)?);
        }
        if let Some(app_type) = &config.app_type {
            app_headers.insert(CLIENT_APP_TYPE, header_value("app type", app_type)?);
        }

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            app_headers,
        })
    }

    /// Headers attached to a request with the given options
    pub fn headers(&self, options: RequestOptions) -> HeaderMap {
        let mut headers = if options.require_header {
            self.app_headers.clone()
        } else {
            HeaderMap::new()
        };
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Make a GET request with the default header policy
    pub async fn get<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T> {
        self.get_with(path, query, RequestOptions::default()).await
    }

    /// Make a GET request
    pub async fn get_with<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
        options: RequestOptions,
    ) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .headers(self.headers(options))
            .query(query)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return match status {
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                _ => Err(ClientError::Server {
                    status: status.as_u16(),
                    body: text,
                }),
            };
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(Into::into)
    }
}

fn header_value(name: &str, value: &str) -> ClientResult<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| ClientError::InvalidConfig(format!("{} is not a valid header value: {}", name, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> HttpClient {
        let config = ClientConfig::new("https://api.example.com/")
            .with_app_key("secret")
            .with_app_type("menu");
        HttpClient::new(&config).unwrap()
    }

    #[test]
    fn test_default_headers() {
        let headers = client().headers(RequestOptions::default());
        assert_eq!(headers.get(CLIENT_APP_KEY).unwrap(), "secret");
        assert_eq!(headers.get(CLIENT_APP_TYPE).unwrap(), "menu");
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn test_opt_out_sends_only_content_type() {
        let headers = client().headers(RequestOptions::without_app_headers());
        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn test_url_joining() {
        assert_eq!(
            client().url("/api/Product/GetAllByBranch"),
            "https://api.example.com/api/Product/GetAllByBranch"
        );
    }

    #[test]
    fn test_invalid_header_value_is_config_error() {
        let config = ClientConfig::new("https://api.example.com").with_app_key("bad\nkey");
        assert!(matches!(HttpClient::new(&config), Err(ClientError::InvalidConfig(_))));
    }
}
