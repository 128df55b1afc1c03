//! Builds, sends and reports one webhook request per fire.

use std::sync::Arc;

use http::header::{ACCEPT, CONTENT_TYPE, HeaderValue};
use tokio::task::JoinHandle;
use url::Url;

use crate::settings::Settings;
use crate::webhook::{HttpClient, HttpRequest};

use super::{DispatchError, DispatchOutcome, OutcomeSink, TracingSink, TransportError};

/// Result of a dispatch task, as observed through its [`JoinHandle`].
pub type DispatchResult = Result<DispatchOutcome, DispatchError>;

/// Sends the request described by a [`Settings`] snapshot.
///
/// Both the transport and the outcome sink are injected, so tests can
/// count requests and capture outcomes.
///
/// Every dispatch makes at most one transport call and emits exactly one
/// outcome. Nothing is retried.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation
/// - `L`: The outcome sink (defaults to [`TracingSink`])
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use webhook_action::dispatch::Dispatcher;
/// use webhook_action::webhook::ReqwestClient;
///
/// let dispatcher = Arc::new(Dispatcher::new(ReqwestClient::new()));
/// # let _ = dispatcher;
/// ```
#[derive(Debug)]
pub struct Dispatcher<H, L = TracingSink> {
    client: H,
    sink: L,
}

impl<H> Dispatcher<H, TracingSink> {
    /// Creates a dispatcher that logs outcomes through `tracing`.
    #[must_use]
    pub const fn new(client: H) -> Self {
        Self {
            client,
            sink: TracingSink,
        }
    }
}

impl<H, L> Dispatcher<H, L> {
    /// Replaces the outcome sink.
    #[must_use]
    pub fn with_sink<L2>(self, sink: L2) -> Dispatcher<H, L2> {
        Dispatcher {
            client: self.client,
            sink,
        }
    }
}

/// Builds the HTTP request described by `settings`.
///
/// - The method must resolve to a supported verb.
/// - `Accept` is always set to the content type.
/// - A non-empty body is attached verbatim with `Content-Type` set to the
///   content type. An empty body means no body and no `Content-Type`,
///   whatever the method.
///
/// # Errors
///
/// Returns [`DispatchError::Configuration`] for an unsupported method
/// ordinal, and [`DispatchError::Transport`] for an unparsable URL or a
/// content type that is not a valid header value.
pub fn build_request(settings: &Settings) -> Result<HttpRequest, DispatchError> {
    let method = settings.resolve_method()?;

    let url = Url::parse(&settings.url).map_err(|source| TransportError::InvalidUrl {
        url: settings.url.clone(),
        source,
    })?;

    let content_type = HeaderValue::from_str(&settings.content_type).map_err(|source| {
        TransportError::InvalidContentType {
            value: settings.content_type.clone(),
            source,
        }
    })?;

    let mut request =
        HttpRequest::new(method.as_http(), url).with_header(ACCEPT, content_type.clone());

    if settings.has_body() {
        request = request
            .with_header(CONTENT_TYPE, content_type)
            .with_body(settings.body.clone().into_bytes());
    }

    Ok(request)
}

impl<H: HttpClient, L: OutcomeSink> Dispatcher<H, L> {
    /// Sends one request and reports its outcome.
    ///
    /// The outcome is emitted to the sink before returning, for failures
    /// as well as successes.
    ///
    /// # Errors
    ///
    /// Returns the [`DispatchError`] that was reported as a failure.
    pub async fn dispatch(&self, settings: &Settings) -> DispatchResult {
        match self.attempt(settings).await {
            Ok(outcome) => {
                self.sink.emit(&outcome);
                Ok(outcome)
            }
            Err(error) => {
                self.sink.emit(&DispatchOutcome::failure(&error));
                Err(error)
            }
        }
    }

    /// Executes the exchange without reporting it.
    async fn attempt(&self, settings: &Settings) -> DispatchResult {
        let request = build_request(settings)?;
        let method = request.method.clone();

        tracing::debug!(
            "Sending {method} to {} ({} body bytes)",
            request.url,
            request.body.as_ref().map_or(0, Vec::len)
        );

        let response = self.client.request(request).await?;

        Ok(DispatchOutcome::Success {
            method,
            url: settings.url.clone(),
            status: response.status,
            body: response.body_text_lossy(),
        })
    }
}

impl<H, L> Dispatcher<H, L>
where
    H: HttpClient + 'static,
    L: OutcomeSink + 'static,
{
    /// Dispatches `settings` on a new task and returns immediately.
    ///
    /// The caller may drop the handle; the outcome is reported to the sink
    /// regardless. Awaiting the handle yields the same result as
    /// [`dispatch`](Self::dispatch).
    ///
    /// Must be called from within a tokio runtime.
    pub fn fire(self: &Arc<Self>, settings: Settings) -> JoinHandle<DispatchResult> {
        let dispatcher = Arc::clone(self);
        tokio::spawn(async move { dispatcher.dispatch(&settings).await })
    }
}
