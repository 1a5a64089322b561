//! Scripted HTTP client for unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::client::HttpClient;
use crate::api::types::{HttpRequest, HttpResponse};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    PostForm,
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub request: HttpRequest,
}

/// Answers requests by URL suffix and records every request it sees.
///
/// Each route replays its responses in order and then keeps returning the
/// last one.
#[derive(Default)]
pub struct FakeHttpClient {
    routes: Mutex<Vec<(String, VecDeque<HttpResponse>)>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl FakeHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(self, url_suffix: &str, responses: Vec<HttpResponse>) -> Self {
        self.routes
            .lock()
            .unwrap()
            .push((url_suffix.to_string(), responses.into()));
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn respond(&self, method: Method, request: &HttpRequest) -> HttpResponse {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            request: request.clone(),
        });

        let mut routes = self.routes.lock().unwrap();
        let (_, responses) = routes
            .iter_mut()
            .find(|(suffix, _)| request.url.ends_with(suffix.as_str()))
            .unwrap_or_else(|| panic!("no scripted response for {}", request.url));

        if responses.len() > 1 {
            responses.pop_front().unwrap()
        } else {
            responses.front().cloned().expect("route has no responses")
        }
    }
}

#[async_trait]
impl HttpClient for FakeHttpClient {
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse> {
        Ok(self.respond(Method::Get, request))
    }

    async fn post_form(&self, request: &HttpRequest) -> Result<HttpResponse> {
        Ok(self.respond(Method::PostForm, request))
    }
}
