use std::process::{Command, Output};

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const CREATE_SESSION: &str = "/xrpc/com.atproto.server.createSession";
pub const CREATE_RECORD: &str = "/xrpc/com.atproto.repo.createRecord";
pub const POST_URI: &str = "at://did:plc:xyz/app.bsky.feed.post/123";

/// Base URL of a mock server, in the form accepted by `--pds`.
pub fn pds_url(server: &MockServer) -> String {
    format!("http://127.0.0.1:{}", server.address().port())
}

/// Run the CLI binary with an environment holding only `env`.
///
/// Any BSKY_* or RUST_LOG values from the outer environment are removed so
/// each test controls its own configuration.
pub async fn run_cli(args: &[&str], env: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_bsky-autopost-bot"));
    cmd.args(args)
        .env_remove("BSKY_USERNAME")
        .env_remove("BSKY_PASSWORD")
        .env_remove("BSKY_PDS")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    for (key, value) in env {
        cmd.env(key, value);
    }

    tokio::task::spawn_blocking(move || cmd.output().expect("Failed to execute CLI"))
        .await
        .unwrap()
}

/// Run the CLI against `server` with valid credentials in the environment.
pub async fn run_cli_with_account(args: &[&str], server: &MockServer) -> Output {
    let pds = pds_url(server);
    run_cli(
        args,
        &[
            ("BSKY_USERNAME", "alice.bsky.social"),
            ("BSKY_PASSWORD", "hunter2"),
            ("BSKY_PDS", &pds),
        ],
    )
    .await
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

pub async fn mount_session(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(CREATE_SESSION))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "did": "did:plc:xyz",
            "handle": "alice.bsky.social",
            "accessJwt": "AAA",
            "refreshJwt": "BBB"
        })))
        .mount(server)
        .await;
}

pub async fn mount_record(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(CREATE_RECORD))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "uri": POST_URI,
            "cid": "bafyreib2rxk3rh6kzwq"
        })))
        .mount(server)
        .await;
}

/// Paths of every request the server received, in order.
pub async fn request_paths(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|r| r.url.path().to_string())
        .collect()
}
