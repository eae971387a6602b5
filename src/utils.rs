use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::StatusCode;

use crate::error::TransportError;

/// What we keep of an HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_ok(&self) -> bool {
        self.status == StatusCode::OK.as_u16()
    }

    /// Status line in the form "500 Internal Server Error"
    pub fn status_text(&self) -> String {
        match StatusCode::from_u16(self.status) {
            Ok(status) => status.to_string(),
            Err(_) => self.status.to_string(),
        }
    }
}

/// Sends a JSON document somewhere and gives back whatever came back.
/// Connection handling, TLS and auth headers are the transport's business.
pub trait Transport {
    fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, TransportError> {
        (**self).post_json(url, body)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, TransportError> {
        (**self).post_json(url, body)
    }
}

/// Blocking HTTP transport talking to GitHub
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(token: Option<&str>, timeout: Duration) -> Result<Self, TransportError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("GitHub Sponsors CLI"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert("x-github-api-version", HeaderValue::from_static("2022-11-28"));
        if let Some(token) = token {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|e| {
                TransportError::Io(std::io::Error::new(std::io::ErrorKind::InvalidInput, e))
            })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::blocking::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, TransportError> {
        let response = self.client.post(url).json(body).send()?;
        let status = response.status().as_u16();
        let body = response.text()?;

        Ok(HttpResponse { status, body })
    }
}

/// Return the GraphQL endpoint for a GitHub hostname
pub fn graphql_url(hostname: &str) -> String {
    let hostname = hostname.trim().trim_end_matches('/').to_lowercase();

    if hostname == "github.com" {
        return "https://api.github.com/graphql".to_string();
    }
    if hostname == "github.localhost" {
        return "http://api.github.localhost/graphql".to_string();
    }
    if hostname.ends_with(".ghe.com") {
        return format!("https://api.{hostname}/graphql");
    }
    // GitHub Enterprise Server
    format!("https://{hostname}/api/graphql")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graphql_url_dotcom() {
        assert_eq!(graphql_url("github.com"), "https://api.github.com/graphql");
        assert_eq!(graphql_url("GitHub.com"), "https://api.github.com/graphql");
    }

    #[test]
    fn test_graphql_url_localhost() {
        assert_eq!(
            graphql_url("github.localhost"),
            "http://api.github.localhost/graphql"
        );
    }

    #[test]
    fn test_graphql_url_tenancy() {
        assert_eq!(graphql_url("octo.ghe.com"), "https://api.octo.ghe.com/graphql");
    }

    #[test]
    fn test_graphql_url_enterprise_server() {
        assert_eq!(
            graphql_url("git.example.com"),
            "https://git.example.com/api/graphql"
        );
        assert_eq!(
            graphql_url("127.0.0.1:8443"),
            "https://127.0.0.1:8443/api/graphql"
        );
    }

    #[test]
    fn test_status_text() {
        let response = HttpResponse {
            status: 500,
            body: String::new(),
        };
        assert!(!response.is_ok());
        assert_eq!(response.status_text(), "500 Internal Server Error");

        let response = HttpResponse {
            status: 200,
            body: String::new(),
        };
        assert!(response.is_ok());
    }
}
