//! Thin HTTP client for the Classroom REST API.

use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderValue};
use reqwest::{Method, Url};
use serde_json::Value;

use super::error::ToolError;
use crate::core::config::ApiConfig;
use crate::core::{Error, Result};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const API_VERSION: &str = "v1";

/// Shared HTTP client bound to one Classroom base URL and credential set.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Clone)]
pub struct ClassroomClient {
    http: reqwest::Client,
    base_url: Url,
    api: ApiConfig,
}

impl ClassroomClient {
    /// Build the client from API settings.
    ///
    /// Fails when the base URL does not parse or cannot carry a path.
    pub fn new(api: &ApiConfig) -> Result<Self> {
        let base_url = Url::parse(&api.base_url)
            .map_err(|e| Error::config(format!("invalid base URL {:?}: {}", api.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::config(format!(
                "base URL {:?} cannot carry a path",
                api.base_url
            )));
        }

        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(secs) = api.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            base_url,
            api: api.clone(),
        })
    }

    /// API settings this client was built from.
    pub fn api(&self) -> &ApiConfig {
        &self.api
    }

    /// Build `{base}/v1/{segments...}?{query}`.
    ///
    /// Each segment is percent-encoded on its own, so a `/` inside a
    /// substituted identifier stays inside that segment. Dot segments (`.`
    /// and `..`) are dropped by URL normalization; callers reject them
    /// before building the URL.
    pub fn url<I, S>(
        &self,
        segments: I,
        query: &[(String, String)],
    ) -> std::result::Result<Url, ToolError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ToolError::request("base URL cannot carry a path"))?
            .pop_if_empty()
            .push(API_VERSION)
            .extend(segments);

        if !query.is_empty() {
            let encoded = serde_urlencoded::to_string(query)
                .map_err(|e| ToolError::request(e.to_string()))?;
            url.set_query(Some(&encoded));
        }
        Ok(url)
    }

    /// Send one request and return the status code and raw body.
    ///
    /// A JSON body is attached (with its content type) only when given.
    pub async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<Value>,
    ) -> std::result::Result<(u16, String), ToolError> {
        let mut request = self
            .http
            .request(method, url)
            .header(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(ToolError::transport)?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(ToolError::read_body)?;
        Ok((status, text))
    }
}

/// Custom Debug implementation to keep credentials out of logs.
impl std::fmt::Debug for ClassroomClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassroomClient")
            .field("base_url", &self.base_url.as_str())
            .field("api", &self.api)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> ClassroomClient {
        ClassroomClient::new(&ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_url_joins_version_and_segments() {
        let url = client("https://classroom.googleapis.com")
            .url(["courses", "123", "announcements"], &[])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://classroom.googleapis.com/v1/courses/123/announcements"
        );
    }

    #[test]
    fn test_url_keeps_base_path() {
        let url = client("http://localhost:8080/proxy/")
            .url(["courses"], &[])
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/proxy/v1/courses");
    }

    #[test]
    fn test_url_encodes_segments_and_query() {
        let query = vec![
            ("pageToken".to_string(), "a b&c".to_string()),
            ("key".to_string(), "k=1".to_string()),
        ];
        let url = client("https://classroom.googleapis.com")
            .url(["courses", "d:alias/1"], &query)
            .unwrap();

        assert_eq!(url.path(), "/v1/courses/d:alias%2F1");
        assert_eq!(url.query(), Some("pageToken=a+b%26c&key=k%3D1"));
    }

    #[test]
    fn test_custom_verb_segment() {
        let url = client("https://classroom.googleapis.com")
            .url(["invitations", "inv1:accept"], &[])
            .unwrap();
        assert_eq!(url.path(), "/v1/invitations/inv1:accept");
    }

    #[test]
    fn test_invalid_base_url_is_config_error() {
        let err = ClassroomClient::new(&ApiConfig {
            base_url: "not a url".to_string(),
            ..ApiConfig::default()
        })
        .unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = ClassroomClient::new(&ApiConfig {
            base_url: "mailto:teacher@example.com".to_string(),
            ..ApiConfig::default()
        })
        .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_debug_redacts_credentials() {
        let client = ClassroomClient::new(&ApiConfig {
            api_key: Some("secret-key".to_string()),
            ..ApiConfig::default()
        })
        .unwrap();
        assert!(!format!("{:?}", client).contains("secret-key"));
    }
}
