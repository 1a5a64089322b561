//! HTTP request and response types shared by every radiko endpoint.

use std::collections::{BTreeMap, HashMap};

use crate::error::{Error, Result};

/// A request to a radiko endpoint.
///
/// Parameters are kept ordered by key; GET requests send them as the query
/// string and form POSTs as the urlencoded body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub parameters: Option<BTreeMap<String, String>>,
}

impl HttpRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Value of a request header, if set.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}

/// A response from a radiko endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// Header values keyed by lower-cased header name.
    pub headers: HashMap<String, Vec<String>>,
    pub body: Option<String>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: Some(body.into()),
        }
    }

    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers
            .entry(name.to_ascii_lowercase())
            .or_default()
            .push(value.into());
        self
    }

    /// First value of a header, matched case-insensitively.
    pub fn first_header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Body of a successful response.
    ///
    /// A non-200 status is an [`Error::Http`]; a 200 with a missing or blank
    /// body is an [`Error::Response`].
    pub fn validated_body(&self) -> Result<&str> {
        if self.status != 200 {
            return Err(Error::Http {
                status: self.status,
                body: self.body.clone().unwrap_or_default(),
            });
        }

        match self.body.as_deref() {
            Some(body) if !body.trim().is_empty() => Ok(body),
            _ => Err(Error::response("empty body")),
        }
    }
}
