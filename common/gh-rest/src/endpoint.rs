//! Description of a single REST call
//!
//! An [`Endpoint`] is built by a manager and handed to
//! [`GitHubClient`](crate::GitHubClient) for execution. Keeping it a plain
//! value means the URL, query and body can be checked without any network.

use anyhow::{Context, Result, anyhow};
use reqwest::{Method, Url};
use serde::Serialize;
use serde_json::Value;

/// Largest page size GitHub accepts for list endpoints
pub const MAX_PER_PAGE: u32 = 100;

/// `page` / `per_page` query parameters for list endpoints
///
/// The default sends neither parameter, leaving GitHub's own defaults in effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub per_page: Option<u32>,
    pub page: Option<u32>,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }
}

#[derive(Debug, Clone)]
pub struct Endpoint {
    method: Method,
    segments: Vec<String>,
    query: Vec<(String, String)>,
    body: Option<Value>,
    accept: Option<String>,
}

impl Endpoint {
    /// Create an endpoint from raw path segments
    ///
    /// Every segment is percent-encoded on its own, so a value such as an
    /// environment name containing `/` stays a single path segment.
    pub fn new<I, S>(method: Method, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            method,
            segments: segments
                .into_iter()
                .map(|s| s.as_ref().to_string())
                .collect(),
            query: Vec::new(),
            body: None,
            accept: None,
        }
    }

    pub fn get<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(Method::GET, segments)
    }

    pub fn put<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(Method::PUT, segments)
    }

    pub fn post<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(Method::POST, segments)
    }

    pub fn delete<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(Method::DELETE, segments)
    }

    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Append a query parameter only when a value is present
    pub fn query_opt<T: ToString>(self, key: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    /// Append pagination parameters, clamping `per_page` to [`MAX_PER_PAGE`]
    pub fn list(self, options: ListOptions) -> Self {
        self.query_opt("per_page", options.per_page.map(|n| n.min(MAX_PER_PAGE)))
            .query_opt("page", options.page)
    }

    /// Attach a JSON request body
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        let value = serde_json::to_value(body).context("Failed to serialize request body")?;
        self.body = Some(value);
        Ok(self)
    }

    /// Override the `Accept` media type for this call
    pub fn accept(mut self, media_type: &str) -> Self {
        self.accept = Some(media_type.to_string());
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Unencoded path, for logs and error messages
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    pub fn accept_header(&self) -> Option<&str> {
        self.accept.as_deref()
    }

    /// Resolve against an API root such as `https://api.github.com` or
    /// `https://ghe.example.com/api/v3`
    pub fn url(&self, base_url: &str) -> Result<Url> {
        let mut url =
            Url::parse(base_url).with_context(|| format!("Invalid API base URL: {}", base_url))?;

        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| anyhow!("API base URL cannot carry a path: {}", base_url))?;
            path.pop_if_empty();
            for segment in &self.segments {
                path.push(segment);
            }
        }

        if !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &self.query {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_segments_onto_api_root() {
        let endpoint = Endpoint::get(["repos", "octocat", "hello-world", "subscribers"]);
        let url = endpoint.url("https://api.github.com").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.github.com/repos/octocat/hello-world/subscribers"
        );
    }

    #[test]
    fn test_url_keeps_enterprise_prefix() {
        let endpoint = Endpoint::get(["emojis"]);
        assert_eq!(
            endpoint.url("https://ghe.example.com/api/v3").unwrap().as_str(),
            "https://ghe.example.com/api/v3/emojis"
        );
        assert_eq!(
            endpoint.url("https://ghe.example.com/api/v3/").unwrap().as_str(),
            "https://ghe.example.com/api/v3/emojis"
        );
    }

    #[test]
    fn test_segments_are_encoded_individually() {
        let endpoint = Endpoint::get(["repos", "o", "r", "environments", "prod/eu west"]);
        let url = endpoint.url("https://api.github.com").unwrap();
        assert_eq!(url.path(), "/repos/o/r/environments/prod%2Feu%20west");
        assert_eq!(endpoint.path(), "/repos/o/r/environments/prod/eu west");
    }

    #[test]
    fn test_list_options_clamp_per_page() {
        let endpoint = Endpoint::get(["user", "subscriptions"])
            .list(ListOptions::new().per_page(500).page(3));
        assert_eq!(
            endpoint.query_pairs(),
            &[
                ("per_page".to_string(), "100".to_string()),
                ("page".to_string(), "3".to_string())
            ]
        );
        let url = endpoint.url("https://api.github.com").unwrap();
        assert_eq!(url.query(), Some("per_page=100&page=3"));
    }

    #[test]
    fn test_default_list_options_add_no_query() {
        let endpoint = Endpoint::get(["user", "starred"]).list(ListOptions::default());
        assert!(endpoint.query_pairs().is_empty());
        let url = endpoint.url("https://api.github.com").unwrap();
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_query_opt_skips_none() {
        let endpoint = Endpoint::get(["x"])
            .query_opt("affiliation", Some("direct"))
            .query_opt::<&str>("permission", None);
        assert_eq!(endpoint.query_pairs().len(), 1);
    }

    #[test]
    fn test_json_body_and_accept_override() {
        #[derive(Serialize)]
        struct Body {
            subscribed: bool,
        }

        let endpoint = Endpoint::put(["repos", "o", "r", "subscription"])
            .json(&Body { subscribed: true })
            .unwrap()
            .accept(crate::media::RAW);

        assert_eq!(endpoint.method(), &Method::PUT);
        assert_eq!(endpoint.body(), Some(&serde_json::json!({"subscribed": true})));
        assert_eq!(endpoint.accept_header(), Some(crate::media::RAW));
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        assert!(Endpoint::get(["emojis"]).url("not a url").is_err());
        assert!(Endpoint::get(["emojis"]).url("mailto:someone@example.com").is_err());
    }
}
