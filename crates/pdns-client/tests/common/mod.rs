//! Test doubles and common utilities for client contract tests
//!
//! `MockTransport` stands in for the network: it records every request the
//! client sends and answers from a queue of canned responses.

#![allow(dead_code)]

use pdns_client::{Client, Transport, TransportError};
use reqwest::header::{CONTENT_TYPE, HeaderMap};
use reqwest::{Method, Url};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};

pub const TEST_BASE_URL: &str = "http://localhost:8080";
pub const TEST_VHOST: &str = "localhost";
pub const TEST_API_KEY: &str = "apipw";

/// A request as seen by the transport
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

impl RecordedRequest {
    pub fn path(&self) -> &str {
        self.url.path()
    }

    /// First value of a query parameter
    pub fn query(&self, key: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Body decoded as JSON; panics when there is no JSON body
    pub fn json(&self) -> Value {
        let body = self.body.as_deref().expect("request has a body");
        serde_json::from_slice(body).expect("request body is JSON")
    }
}

#[derive(Debug, Clone)]
enum MockBody {
    Complete(String),
    /// Headers arrive, the body never does
    Stalled,
}

/// A canned response
#[derive(Debug, Clone)]
pub struct MockResponse {
    status: u16,
    content_type: Option<&'static str>,
    body: MockBody,
}

impl MockResponse {
    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            content_type: Some("application/json"),
            body: MockBody::Complete(body.to_string()),
        }
    }

    pub fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: Some("text/plain"),
            body: MockBody::Complete(body.to_string()),
        }
    }

    pub fn raw(status: u16, content_type: &'static str, body: &str) -> Self {
        Self {
            status,
            content_type: Some(content_type),
            body: MockBody::Complete(body.to_string()),
        }
    }

    pub fn empty(status: u16) -> Self {
        Self {
            status,
            content_type: None,
            body: MockBody::Complete(String::new()),
        }
    }

    /// A JSON response whose body never finishes
    pub fn stalled(status: u16) -> Self {
        Self {
            status,
            content_type: Some("application/json"),
            body: MockBody::Stalled,
        }
    }

    fn into_response(self) -> reqwest::Response {
        let mut builder = http::Response::builder().status(self.status);
        if let Some(content_type) = self.content_type {
            builder = builder.header(CONTENT_TYPE, content_type);
        }
        let body = match self.body {
            MockBody::Complete(text) => reqwest::Body::from(text),
            MockBody::Stalled => {
                reqwest::Body::wrap_stream(tokio_stream::pending::<Result<Vec<u8>, std::io::Error>>())
            }
        };
        reqwest::Response::from(builder.body(body).expect("valid mock response"))
    }
}

enum Reply {
    Respond(MockResponse),
    Fail(String),
    Hang,
}

/// A transport that records requests and replays canned responses
///
/// Clones share their recorded requests and response queue. When the queue
/// is empty the transport answers `204 No Content`.
#[derive(Clone, Default)]
pub struct MockTransport {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    replies: Arc<Mutex<VecDeque<Reply>>>,
    call_count: Arc<AtomicUsize>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response
    pub fn respond(&self, response: MockResponse) -> &Self {
        self.replies.lock().unwrap().push_back(Reply::Respond(response));
        self
    }

    /// Queue a connection failure
    pub fn fail(&self, message: &str) -> &Self {
        self.replies.lock().unwrap().push_back(Reply::Fail(message.to_string()));
        self
    }

    /// Queue a reply that never arrives
    pub fn hang(&self) -> &Self {
        self.replies.lock().unwrap().push_back(Reply::Hang);
        self
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("at least one request was sent")
    }
}

#[async_trait::async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: reqwest::Request) -> Result<reqwest::Response, TransportError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        let recorded = RecordedRequest {
            method: request.method().clone(),
            url: request.url().clone(),
            headers: request.headers().clone(),
            body: request.body().and_then(|b| b.as_bytes()).map(<[u8]>::to_vec),
        };
        self.requests.lock().unwrap().push(recorded);

        let reply = self.replies.lock().unwrap().pop_front();

        match reply {
            Some(Reply::Respond(response)) => Ok(response.into_response()),
            Some(Reply::Fail(message)) => Err(TransportError::connection(message)),
            Some(Reply::Hang) => std::future::pending().await,
            None => Ok(MockResponse::empty(204).into_response()),
        }
    }
}

/// A client against the mock transport: `http://localhost:8080`, vhost
/// `localhost`, API key `apipw`
pub fn test_client(transport: &MockTransport) -> Client {
    Client::builder(TEST_BASE_URL)
        .vhost(TEST_VHOST)
        .api_key(TEST_API_KEY)
        .transport(transport.clone())
        .build()
        .expect("client construction succeeds")
}

/// Path of a vhost-scoped endpoint
pub fn api_path(suffix: &str) -> String {
    format!("/api/v1/servers/{}/{}", TEST_VHOST, suffix)
}
