// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::thread;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// Two reviews as the Review API sends them.
pub const TWO_REVIEWS: &str = r#"[
  {"id": 1, "user_name": "Aditi", "product_name": "iPhone 15",
   "product_review": "Great camera", "created_at": "2024-01-01T10:00:00Z",
   "contact_number": "+14155550100"},
  {"id": 2, "user_name": null, "product_name": "Pixel 8",
   "product_review": "Solid", "created_at": "2024-01-02 08:30:00",
   "contact_number": "+14155550101", "status": "delivered"}
]"#;

pub fn reviewfeed() -> Command {
    cargo_bin_cmd!("reviewfeed")
}

/// An isolated config file (UTC timestamps) in a temp directory.
pub struct TestEnv {
    pub temp: TempDir,
    pub config: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("config.toml");
        std::fs::write(&config, "utc = true\n").unwrap();
        TestEnv { temp, config }
    }

    /// A command that only sees this environment's config.
    pub fn cmd(&self) -> Command {
        let mut cmd = reviewfeed();
        cmd.env("REVIEWFEED_CONFIG", &self.config)
            .env("NO_COLOR", "1")
            .env_remove("REVIEWFEED_API_URL")
            .env_remove("REVIEWFEED_LOG")
            .env_remove("COLOR");
        cmd
    }
}

/// Answer a single HTTP request with `status` and `body`; returns the base URL.
pub fn serve_once(status: &str, body: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let _ = stream.write_all(response.as_bytes());
        }
    });
    format!("http://{}", addr)
}

/// A base URL on which nothing is listening.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
