//! Mock transport for testing.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// What the mock answers when no route matches.
#[derive(Debug, Clone, Copy)]
enum Fallback {
    Respond(http::StatusCode),
    Timeout,
    Refused,
}

/// A scripted [`HttpClient`] that records every request it receives.
///
/// Responses are deterministic: the same request always gets the same
/// answer. Per-URL routes and delays let tests tell concurrent requests
/// apart and force their completion order.
#[derive(Debug)]
pub struct MockClient {
    fallback: Fallback,
    fallback_body: String,
    routes: HashMap<String, (http::StatusCode, String)>,
    delays: HashMap<String, Duration>,
    requests: Mutex<Vec<HttpRequest>>,
    call_count: AtomicUsize,
}

impl MockClient {
    fn with_fallback(fallback: Fallback, body: impl Into<String>) -> Self {
        Self {
            fallback,
            fallback_body: body.into(),
            routes: HashMap::new(),
            delays: HashMap::new(),
            requests: Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
        }
    }

    /// Answers every request with the given status and body.
    #[must_use]
    pub fn responding(status: u16, body: impl Into<String>) -> Self {
        let status = http::StatusCode::from_u16(status).unwrap();
        Self::with_fallback(Fallback::Respond(status), body)
    }

    /// Fails every request with [`HttpError::Timeout`].
    #[must_use]
    pub fn timing_out() -> Self {
        Self::with_fallback(Fallback::Timeout, "")
    }

    /// Fails every request with a refused connection.
    #[must_use]
    pub fn refusing() -> Self {
        Self::with_fallback(Fallback::Refused, "")
    }

    /// Answers requests to `url` with the given status and body.
    #[must_use]
    pub fn with_route(mut self, url: &str, status: u16, body: impl Into<String>) -> Self {
        let status = http::StatusCode::from_u16(status).unwrap();
        self.routes.insert(normalize(url), (status, body.into()));
        self
    }

    /// Delays the answer to requests for `url`.
    #[must_use]
    pub fn with_delay(mut self, url: &str, delay: Duration) -> Self {
        self.delays.insert(normalize(url), delay);
        self
    }

    /// Returns how many requests were received.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Returns the received requests, in arrival order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned (only in test code).
    #[must_use]
    pub fn captured_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn answer(&self, url: &str) -> Result<HttpResponse, HttpError> {
        if let Some((status, body)) = self.routes.get(url) {
            return Ok(HttpResponse::new(
                *status,
                http::HeaderMap::new(),
                body.clone().into_bytes(),
            ));
        }

        match self.fallback {
            Fallback::Respond(status) => Ok(HttpResponse::new(
                status,
                http::HeaderMap::new(),
                self.fallback_body.clone().into_bytes(),
            )),
            Fallback::Timeout => Err(HttpError::Timeout),
            Fallback::Refused => Err(HttpError::Connection(Box::new(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            )))),
        }
    }
}

fn normalize(url: &str) -> String {
    url::Url::parse(url).map_or_else(|_| url.to_string(), |u| u.to_string())
}

impl HttpClient for MockClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        let url = req.url.to_string();
        self.requests.lock().unwrap().push(req);

        if let Some(delay) = self.delays.get(&url) {
            tokio::time::sleep(*delay).await;
        }

        self.answer(&url)
    }
}
