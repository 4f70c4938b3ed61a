//! Common test support utilities and fixtures
//!
//! Integration tests talk to a local one-shot HTTP server instead of
//! api.github.com. The server answers exactly one request with a canned
//! status and body, then hands back what it received.

#![allow(dead_code)]

use gh_managers::GitHub;
use gh_managers::gh_rest::GitHubClient;
use std::collections::HashMap;
use std::process::Command;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub const TEST_TOKEN: &str = "ghp_test_token";

/// A request as seen by the mock server
#[derive(Debug)]
pub struct RecordedRequest {
    pub method: String,
    /// Path including the query string
    pub target: String,
    /// Header names are lowercased
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("Request body is not JSON")
    }

    pub fn path(&self) -> &str {
        self.target.split('?').next().unwrap_or_default()
    }

    pub fn query(&self) -> Option<&str> {
        self.target.split_once('?').map(|(_, query)| query)
    }
}

/// One-shot HTTP server standing in for the GitHub API
pub struct MockServer {
    pub base_url: String,
    handle: JoinHandle<RecordedRequest>,
}

impl MockServer {
    /// Answer the next request with `status` and a JSON `body`
    pub async fn respond(status: u16, body: &str) -> Self {
        Self::respond_with(status, "application/json", body).await
    }

    pub async fn respond_with(status: u16, content_type: &str, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().expect("Mock server has no address");
        let response = format!(
            "HTTP/1.1 {} MOCK\r\ncontent-type: {}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            status,
            content_type,
            body.len(),
            body
        );

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("Failed to accept");
            let mut buffer = Vec::new();
            let mut chunk = [0u8; 4096];

            let header_end = loop {
                let n = socket.read(&mut chunk).await.expect("Failed to read request");
                assert!(n > 0, "Connection closed before headers were complete");
                buffer.extend_from_slice(&chunk[..n]);
                if let Some(pos) = buffer.windows(4).position(|w| w == b"\r\n\r\n") {
                    break pos + 4;
                }
            };

            let head = String::from_utf8_lossy(&buffer[..header_end]).into_owned();
            let mut lines = head.split("\r\n");
            let mut request_line = lines.next().unwrap_or_default().split_whitespace();
            let method = request_line.next().unwrap_or_default().to_string();
            let target = request_line.next().unwrap_or_default().to_string();
            let headers: HashMap<String, String> = lines
                .filter_map(|line| line.split_once(':'))
                .map(|(name, value)| (name.trim().to_ascii_lowercase(), value.trim().to_string()))
                .collect();

            let content_length = headers
                .get("content-length")
                .and_then(|value| value.parse::<usize>().ok())
                .unwrap_or(0);
            let mut body = buffer[header_end..].to_vec();
            while body.len() < content_length {
                let n = socket.read(&mut chunk).await.expect("Failed to read body");
                if n == 0 {
                    break;
                }
                body.extend_from_slice(&chunk[..n]);
            }

            socket
                .write_all(response.as_bytes())
                .await
                .expect("Failed to write response");
            let _ = socket.shutdown().await;

            RecordedRequest {
                method,
                target,
                headers,
                body,
            }
        });

        Self {
            base_url: format!("http://{}", addr),
            handle,
        }
    }

    pub fn client(&self) -> GitHubClient {
        GitHubClient::builder()
            .base_url(self.base_url.as_str())
            .token(TEST_TOKEN)
            .build()
            .expect("Failed to build client")
    }

    pub fn github(&self) -> GitHub {
        GitHub::from_client(self.client())
    }

    /// Wait for the request the server received
    pub async fn request(self) -> RecordedRequest {
        self.handle.await.expect("Mock server task panicked")
    }

    /// Assert that no request reached the server within a short grace period
    pub async fn assert_no_request(self) {
        let waited = tokio::time::timeout(Duration::from_millis(200), self.handle).await;
        assert!(waited.is_err(), "Mock server received a request");
    }
}

/// Result of running the CLI binary
#[derive(Debug)]
pub struct CliOutput {
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Run the `ghm` binary with the given arguments
pub fn run_cli(args: &[&str]) -> CliOutput {
    let output = Command::new(env!("CARGO_BIN_EXE_ghm"))
        .args(args)
        .env_remove("GITHUB_TOKEN")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute ghm");

    CliOutput {
        status: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

pub fn user_json(login: &str, id: u64) -> String {
    format!(
        r#"{{"login":"{login}","id":{id},"node_id":"MDQ6VXNlcjE=","avatar_url":"https://github.com/images/error/{login}_happy.gif","html_url":"https://github.com/{login}","type":"User","site_admin":false}}"#
    )
}

pub fn repository_json(owner: &str, name: &str, id: u64) -> String {
    format!(
        r#"{{"id":{id},"node_id":"MDEwOlJlcG9zaXRvcnkxMjk2MjY5","name":"{name}","full_name":"{owner}/{name}","owner":{},"private":false,"html_url":"https://github.com/{owner}/{name}","description":"This your first repo!","fork":false,"url":"https://api.github.com/repos/{owner}/{name}","default_branch":"main"}}"#,
        user_json(owner, 1)
    )
}
