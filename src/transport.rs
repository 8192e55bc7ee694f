// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP transport seam.
//!
//! The client core never talks to the network directly; it builds a
//! [`TransportRequest`] and hands it to a [`Transport`]. Error
//! classification happens on the response body (see `response`), so the
//! transport returns body text for any HTTP status and errors only when
//! the request itself could not be completed.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

/// HTTP method subset used by the Fitbit API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

/// A fully built request handed to the transport.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub method: Method,
    pub url: String,
    /// Ordered header list (name, value).
    pub headers: Vec<(String, String)>,
    /// `application/x-www-form-urlencoded` body, when present.
    pub body: Option<String>,
}

/// Connection-level failure (DNS, TLS, refused connection, ...).
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Executes a single HTTP request. No business logic.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: TransportRequest) -> Result<String, TransportError>;
}

/// Production transport backed by `reqwest` with rustls.
///
/// Certificate verification is on by default; use
/// [`HttpTransport::accepting_invalid_certs`] only against sandboxed
/// test endpoints.
#[derive(Clone, Default)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// Transport that skips TLS certificate verification.
    pub fn accepting_invalid_certs() -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(true)
            .build()
            .map_err(|e| TransportError(e.to_string()))?;
        Ok(Self { http })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: TransportRequest) -> Result<String, TransportError> {
        let mut builder = match request.method {
            Method::Get => self.http.get(&request.url),
            Method::Post => self.http.post(&request.url),
            Method::Delete => self.http.delete(&request.url),
        };

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        // Body text is returned for every status; the interpreter decides
        // success vs API error from the payload.
        response
            .text()
            .await
            .map_err(|e| TransportError(e.to_string()))
    }
}

/// Test transport that records every request and serves canned responses.
///
/// Responses are matched by URL substring (first matching rule wins), so
/// outcomes stay deterministic even when the client issues requests
/// concurrently. Unmatched requests get `{}`. The offline counterpart of
/// wiring the real client against a sandbox endpoint.
#[derive(Default)]
pub struct RecordingTransport {
    calls: Mutex<Vec<TransportRequest>>,
    rules: Mutex<VecDeque<(String, Result<String, TransportError>)>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply with `body` to any request whose URL contains `url_fragment`.
    pub fn respond(&self, url_fragment: &str, body: &str) {
        self.lock_rules()
            .push_back((url_fragment.to_string(), Ok(body.to_string())));
    }

    /// Fail any request whose URL contains `url_fragment` with a
    /// transport error.
    pub fn fail(&self, url_fragment: &str, message: &str) {
        self.lock_rules().push_back((
            url_fragment.to_string(),
            Err(TransportError(message.to_string())),
        ));
    }

    /// Drop all configured rules (recorded calls are kept).
    pub fn clear_rules(&self) {
        self.lock_rules().clear();
    }

    /// Every request seen so far, in arrival order.
    pub fn calls(&self) -> Vec<TransportRequest> {
        self.lock_calls().clone()
    }

    pub fn call_count(&self) -> usize {
        self.lock_calls().len()
    }

    /// URLs of every request seen so far.
    pub fn requested_urls(&self) -> Vec<String> {
        self.lock_calls().iter().map(|c| c.url.clone()).collect()
    }

    fn lock_calls(&self) -> std::sync::MutexGuard<'_, Vec<TransportRequest>> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_rules(
        &self,
    ) -> std::sync::MutexGuard<'_, VecDeque<(String, Result<String, TransportError>)>> {
        self.rules.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: TransportRequest) -> Result<String, TransportError> {
        let url = request.url.clone();
        self.lock_calls().push(request);

        let rules = self.lock_rules();
        for (fragment, reply) in rules.iter() {
            if url.contains(fragment.as_str()) {
                return reply.clone();
            }
        }
        Ok("{}".to_string())
    }
}
