//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves one static body with a configurable status and Content-Type on
//! every path. Runs in a background thread until the process exits.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone)]
pub struct ImageServerOptions {
    /// Status code for every response.
    pub status: u32,
    /// `Content-Type` header value; `None` omits the header entirely.
    pub content_type: Option<String>,
}

impl Default for ImageServerOptions {
    fn default() -> Self {
        Self {
            status: 200,
            content_type: Some("image/png".to_string()),
        }
    }
}

/// Starts a server serving `body` as `image/png`. Returns the base URL
/// (e.g. "http://127.0.0.1:12345/").
pub fn start(body: Vec<u8>) -> String {
    start_with_options(body, ImageServerOptions::default())
}

/// Like `start` but allows customizing status and Content-Type.
pub fn start_with_options(body: Vec<u8>, opts: ImageServerOptions) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body);
    let opts = Arc::new(opts);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            let opts = Arc::clone(&opts);
            thread::spawn(move || handle(stream, &body, &opts));
        }
    });
    format!("http://127.0.0.1:{}/", port)
}

fn handle(mut stream: TcpStream, body: &[u8], opts: &ImageServerOptions) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));

    // Drain the request; one read is enough for the GETs curl sends here.
    let mut buf = [0u8; 8192];
    match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(_) => {}
    }

    let reason = match opts.status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "",
    };
    let content_type_header = match &opts.content_type {
        Some(ct) => format!("Content-Type: {}\r\n", ct),
        None => String::new(),
    };
    let header = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\n{}Connection: close\r\n\r\n",
        opts.status,
        reason,
        body.len(),
        content_type_header
    );
    let _ = stream.write_all(header.as_bytes());
    let _ = stream.write_all(body);
}
