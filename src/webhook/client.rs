//! Production HTTP client implementation using reqwest.

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Production HTTP client using reqwest.
///
/// Each request is sent through a freshly built `reqwest::Client`, so no
/// connection is shared between two fires. No timeout is configured;
/// reqwest's defaults apply.
///
/// # Example
///
/// ```no_run
/// use webhook_action::webhook::{ReqwestClient, HttpClient, HttpRequest};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ReqwestClient::new();
/// let url = Url::parse("https://api.example.com/webhook")?;
/// let response = client.request(HttpRequest::get(url)).await?;
/// println!("Status: {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ReqwestClient;

impl ReqwestClient {
    /// Creates a new HTTP client.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Builds the per-request reqwest client.
    fn build_inner() -> Result<reqwest::Client, HttpError> {
        reqwest::Client::builder()
            .build()
            .map_err(|e| HttpError::Client(Box::new(e)))
    }
}

/// Maps a reqwest send error onto the transport taxonomy.
fn classify(e: reqwest::Error) -> HttpError {
    if e.is_timeout() {
        HttpError::Timeout
    } else if e.is_builder() {
        HttpError::InvalidUrl(e.to_string())
    } else {
        HttpError::Connection(Box::new(e))
    }
}

impl HttpClient for ReqwestClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let inner = Self::build_inner()?;

        let mut builder = inner.request(req.method, req.url.as_str()).headers(req.headers);

        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(classify)?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(classify)?.to_vec();

        Ok(HttpResponse::new(status, headers, body))
    }
}
