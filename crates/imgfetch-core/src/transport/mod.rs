//! HTTP transport capability.
//!
//! The fetcher reaches the network only through the [`Transport`] trait, so
//! tests can substitute an in-memory fake. The production implementation,
//! [`CurlTransport`], uses the curl crate (libcurl) to perform a single
//! blocking GET that buffers the whole body in memory.

mod parse;

use std::fmt;
use std::str;
use std::time::Duration;

/// A complete, fully buffered HTTP response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Status code of the final response (after redirects).
    pub status: u32,
    /// `Content-Type` header value, if the server sent one.
    pub content_type: Option<String>,
    /// Entire response body.
    pub body: Vec<u8>,
}

/// Transport-level failure: curl error (DNS, connect, timeout) or a non-2xx
/// HTTP status. Kept as its own type so callers can report the two cases
/// distinctly before converting to a fetch outcome.
#[derive(Debug)]
pub enum TransportError {
    /// Curl reported an error (timeout, connection, resolution, etc.).
    Curl(curl::Error),
    /// The request completed but the status was outside 200..300.
    Http(u32),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Curl(e) => write!(f, "{}", e),
            TransportError::Http(code) => write!(f, "HTTP {}", code),
        }
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransportError::Curl(e) => Some(e),
            TransportError::Http(_) => None,
        }
    }
}

impl From<curl::Error> for TransportError {
    fn from(e: curl::Error) -> Self {
        TransportError::Curl(e)
    }
}

/// Capability to issue one blocking HTTP GET.
pub trait Transport {
    /// Fetches `url` and returns the buffered response, or a transport error
    /// for any failure to obtain a 2xx response.
    fn fetch(&self, url: &str) -> Result<HttpResponse, TransportError>;
}

/// Blocking GET via libcurl with a fixed per-request timeout.
///
/// Follows redirects; header values from the final response win. Runs in the
/// current thread.
pub struct CurlTransport {
    timeout: Duration,
}

impl CurlTransport {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Transport for CurlTransport {
    fn fetch(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let mut headers: Vec<String> = Vec::new();
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.connect_timeout(self.timeout)?;
        easy.timeout(self.timeout)?;

        {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    headers.push(s.trim_end().to_string());
                }
                true
            })?;
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(TransportError::Http(code));
        }

        Ok(HttpResponse {
            status: code,
            content_type: parse::content_type_from_headers(&headers),
            body,
        })
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory transport for tests. Records the order of fetch calls.
    /// Unknown URLs answer with HTTP 404.
    pub(crate) struct FakeTransport {
        responses: HashMap<String, Result<HttpResponse, u32>>,
        pub(crate) calls: RefCell<Vec<String>>,
    }

    impl FakeTransport {
        pub(crate) fn new() -> Self {
            Self {
                responses: HashMap::new(),
                calls: RefCell::new(Vec::new()),
            }
        }

        pub(crate) fn ok(mut self, url: &str, content_type: Option<&str>, body: &[u8]) -> Self {
            self.responses.insert(
                url.to_string(),
                Ok(HttpResponse {
                    status: 200,
                    content_type: content_type.map(str::to_string),
                    body: body.to_vec(),
                }),
            );
            self
        }

        pub(crate) fn err(mut self, url: &str, status: u32) -> Self {
            self.responses.insert(url.to_string(), Err(status));
            self
        }
    }

    impl Transport for FakeTransport {
        fn fetch(&self, url: &str) -> Result<HttpResponse, TransportError> {
            self.calls.borrow_mut().push(url.to_string());
            match self.responses.get(url) {
                Some(Ok(r)) => Ok(r.clone()),
                Some(Err(code)) => Err(TransportError::Http(*code)),
                None => Err(TransportError::Http(404)),
            }
        }
    }
}
