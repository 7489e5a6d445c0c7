//! Minimal HTTP/1.1 server answering HEAD requests for integration tests.
//!
//! Serves empty bodies with a configurable `Last-Modified` header, status,
//! and an optional one-hop redirect, so probe/resolve behavior can be tested
//! without real network targets.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct HeadServerOptions {
    /// `Last-Modified` value to send, verbatim. None omits the header.
    pub last_modified: Option<String>,
    /// If true, requests to `/moved` get a 302 to `/`.
    pub redirect_from_moved: bool,
    /// Status for plain responses; 0 means 200.
    pub status: u32,
}

/// Starts a server sending `last_modified` (if any) on every response.
/// Returns the base URL (e.g. "http://127.0.0.1:12345/"). The server runs
/// until the process exits.
pub fn start(last_modified: Option<&str>) -> String {
    start_with_options(HeadServerOptions {
        last_modified: last_modified.map(str::to_string),
        ..HeadServerOptions::default()
    })
}

/// Like `start` but with full control over the response shape.
pub fn start_with_options(opts: HeadServerOptions) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let opts = opts.clone();
            thread::spawn(move || handle(stream, &opts));
        }
    });
    format!("http://127.0.0.1:{}/", port)
}

/// Starts a server that accepts connections but never responds, to exercise
/// the probe timeout path.
pub fn start_stalled() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            thread::spawn(move || {
                thread::sleep(Duration::from_secs(30));
                drop(stream);
            });
        }
    });
    format!("http://127.0.0.1:{}/", port)
}

/// Returns a URL on which nothing is listening.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/", port)
}

fn handle(mut stream: std::net::TcpStream, opts: &HeadServerOptions) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/");

    if opts.redirect_from_moved && path == "/moved" {
        let _ = stream
            .write_all(b"HTTP/1.1 302 Found\r\nLocation: /\r\nContent-Length: 0\r\n\r\n");
        return;
    }

    let status = if opts.status == 0 { 200 } else { opts.status };
    let last_modified = opts
        .last_modified
        .as_deref()
        .map(|v| format!("Last-Modified: {}\r\n", v))
        .unwrap_or_default();
    let reason = match status {
        200 => "OK",
        404 => "Not Found",
        _ => "Status",
    };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: 0\r\n{}\r\n",
        status, reason, last_modified
    );
    let _ = stream.write_all(response.as_bytes());
}
