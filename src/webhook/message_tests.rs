//! Tests for HTTP request/response types.

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

fn test_url() -> url::Url {
    url::Url::parse("https://example.com/api").unwrap()
}

mod http_request {
    use super::*;

    #[test]
    fn new_creates_request_with_method_and_url() {
        let req = HttpRequest::new(http::Method::PUT, test_url());

        assert_eq!(req.method, http::Method::PUT);
        assert_eq!(req.url, test_url());
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn get_creates_get_request() {
        assert_eq!(HttpRequest::get(test_url()).method, http::Method::GET);
    }

    #[test]
    fn with_body_sets_body() {
        let req = HttpRequest::get(test_url()).with_body(b"test body".to_vec());
        assert_eq!(req.body, Some(b"test body".to_vec()));
    }

    #[test]
    fn with_header_replaces_previous_value() {
        let req = HttpRequest::get(test_url())
            .with_header(
                http::header::ACCEPT,
                http::HeaderValue::from_static("text/html"),
            )
            .with_header(
                http::header::ACCEPT,
                http::HeaderValue::from_static("application/json"),
            );

        assert_eq!(req.headers.get_all(http::header::ACCEPT).iter().count(), 1);
        assert_eq!(req.header_str(&http::header::ACCEPT), Some("application/json"));
    }

    #[test]
    fn header_str_is_none_for_missing_header() {
        let req = HttpRequest::get(test_url());
        assert!(req.header_str(&http::header::CONTENT_TYPE).is_none());
    }
}

mod http_response {
    use super::*;

    #[test]
    fn body_text_lossy_keeps_valid_utf8() {
        let resp = HttpResponse::new(http::StatusCode::OK, http::HeaderMap::new(), b"ok".to_vec());
        assert_eq!(resp.body_text_lossy(), "ok");
    }

    #[test]
    fn body_text_lossy_replaces_invalid_bytes() {
        let resp = HttpResponse::new(
            http::StatusCode::OK,
            http::HeaderMap::new(),
            vec![b'a', 0xFF, b'b'],
        );
        assert_eq!(resp.body_text_lossy(), "a\u{FFFD}b");
    }
}

mod http_error {
    use super::*;
    use std::error::Error;

    #[test]
    fn connection_error_preserves_source() {
        let error = HttpError::Connection(Box::new(std::io::Error::other("network unavailable")));

        assert!(error.to_string().contains("Connection error"));
        assert!(
            error
                .source()
                .unwrap()
                .to_string()
                .contains("network unavailable")
        );
    }

    #[test]
    fn timeout_displays_message() {
        assert_eq!(HttpError::Timeout.to_string(), "Request timed out");
    }

    #[test]
    fn invalid_url_has_no_source() {
        let error = HttpError::InvalidUrl("relative URL without a base".to_string());

        assert!(error.to_string().contains("relative URL"));
        assert!(error.source().is_none());
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpError>();
    }
}

mod http_client_trait {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingClient {
        call_count: AtomicUsize,
    }

    impl HttpClient for CountingClient {
        async fn request(&self, _req: HttpRequest) -> Result<HttpResponse, HttpError> {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            Ok(HttpResponse::new(
                http::StatusCode::CREATED,
                http::HeaderMap::new(),
                b"created".to_vec(),
            ))
        }
    }

    #[tokio::test]
    async fn arc_client_delegates_to_inner() {
        let client = Arc::new(CountingClient {
            call_count: AtomicUsize::new(0),
        });

        let response = client.request(HttpRequest::get(test_url())).await.unwrap();

        assert_eq!(response.status, http::StatusCode::CREATED);
        assert_eq!(client.call_count.load(Ordering::SeqCst), 1);
    }
}
