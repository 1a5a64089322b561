//! radiko HTTP client.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, RequestBuilder, Response};

use crate::api::types::{HttpRequest, HttpResponse};
use crate::error::{Error, Result};

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Minimal HTTP surface the radiko services need.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Send a GET request; parameters go into the query string.
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse>;

    /// Send a form POST; parameters go into the urlencoded body.
    async fn post_form(&self, request: &HttpRequest) -> Result<HttpResponse>;
}

/// [`HttpClient`] backed by reqwest.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Create a client with the given per-request timeout.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Wrap an already configured reqwest client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    async fn execute(&self, builder: RequestBuilder, request: &HttpRequest) -> Result<HttpResponse> {
        let builder = request
            .headers
            .iter()
            .fold(builder, |b, (name, value)| b.header(name, value));

        let response = builder.send().await?;
        let status = response.status();
        tracing::debug!("Response status: {}", status);

        into_http_response(response).await
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::with_client(Client::new())
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let url = url::Url::parse(&request.url)?;
        tracing::debug!("GET {}", url);

        let mut builder = self.client.get(url);
        if let Some(parameters) = &request.parameters {
            builder = builder.query(parameters);
        }

        self.execute(builder, request).await
    }

    async fn post_form(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let url = url::Url::parse(&request.url)?;
        tracing::debug!("POST {}", url);

        let empty = Default::default();
        let form = request.parameters.as_ref().unwrap_or(&empty);
        let builder = self
            .client
            .post(url)
            .header(
                header::CONTENT_TYPE,
                "application/x-www-form-urlencoded; charset=UTF-8",
            )
            .body(encode_form(form));

        self.execute(builder, request).await
    }
}

/// Urlencode form parameters in key order.
fn encode_form<'a, I>(parameters: I) -> String
where
    I: IntoIterator<Item = (&'a String, &'a String)>,
{
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(parameters)
        .finish()
}

async fn into_http_response(response: Response) -> Result<HttpResponse> {
    let status = response.status().as_u16();

    let mut headers: HashMap<String, Vec<String>> = HashMap::new();
    for (name, value) in response.headers() {
        // Header names from reqwest are already lower-case.
        if let Ok(value) = value.to_str() {
            headers
                .entry(name.as_str().to_string())
                .or_default()
                .push(value.to_string());
        }
    }

    let body = response.text().await?;

    Ok(HttpResponse {
        status,
        headers,
        body: Some(body),
    })
}
