//! Request path and query construction.
//!
//! Path segments are percent-encoded when the endpoint is resolved against the
//! base URL, never formatted into the path by hand. List parameters are sent
//! as repeated keys (`categories=a&categories=b`). Builder methods return
//! `&mut Self` for chaining.
//!
//! # Example
//!
//! ```rust
//! use trend_radar::Endpoint;
//! let url = Endpoint::new("products/compare")
//!     .segment("Wireless Earbuds")
//!     .param_list("platforms", &["amazon", "ebay"])
//!     .resolve(&"http://localhost:8000/api/v1".parse().unwrap())
//!     .unwrap();
//! assert_eq!(
//!     url.as_str(),
//!     "http://localhost:8000/api/v1/products/compare/Wireless%20Earbuds?platforms=amazon&platforms=ebay"
//! );
//! ```

use reqwest::Url;

use crate::error::{Result, TrendRadarError};

/// A backend endpoint relative to the API base path.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    segments: Vec<String>,
    query: Vec<(String, String)>,
    trailing_slash: bool,
}

impl Endpoint {
    /// Start from a static path such as `"trends/products"`.
    ///
    /// The path is split on `/`; use [`segment`](Self::segment) for values
    /// that may themselves contain a slash.
    pub fn new(path: &str) -> Self {
        Self {
            segments: path
                .split('/')
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string())
                .collect(),
            query: Vec::new(),
            trailing_slash: false,
        }
    }

    /// Append one dynamic path segment (an id, a product name).
    pub fn segment(&mut self, value: &str) -> &mut Self {
        self.segments.push(value.to_string());
        self
    }

    /// End the path with `/` (the alerts collection is mounted that way).
    pub fn trailing_slash(&mut self) -> &mut Self {
        self.trailing_slash = true;
        self
    }

    pub fn param<V: ToString>(&mut self, key: &str, value: V) -> &mut Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Add the parameter only when a value is present.
    pub fn param_opt<V: ToString>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        if let Some(v) = value {
            self.param(key, v);
        }
        self
    }

    /// Add one `key=value` pair per item. An empty list adds nothing.
    pub fn param_list<S: AsRef<str>>(&mut self, key: &str, values: &[S]) -> &mut Self {
        for v in values {
            self.query.push((key.to_string(), v.as_ref().to_string()));
        }
        self
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Resolve against the API base URL (e.g. `http://host/api/v1`).
    pub fn resolve(&self, base: &Url) -> Result<Url> {
        let mut url = base.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| {
                TrendRadarError::InvalidArgument(format!("Base URL cannot carry a path: {}", base))
            })?;
            path.pop_if_empty();
            for segment in &self.segments {
                path.push(segment);
            }
            if self.trailing_slash {
                path.push("");
            }
        }
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(self.query.iter());
        }
        Ok(url)
    }
}
