use super::mocks::{MockKeyDeriver, MockLedgerClient};
use axum::{
    Router,
    body::{Body, to_bytes},
    http::Request,
    response::Response,
};
use inference_relay::{
    config::{Config, LedgerConfig, Mnemonic, ServerConfig},
    relay::Relay,
    server::{self, AppState},
};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::fs;

pub const TEST_MNEMONIC: &str = "film crazy soon outside stand loop subway crumble thrive popular green nuclear struggle pistol arm wife phrase warfare march wheat nephew ask sunny firm";

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        mnemonic: Mnemonic::new(TEST_MNEMONIC),
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            ..ServerConfig::default()
        },
        ledger: LedgerConfig {
            rpc_url: "http://127.0.0.1:9000".to_string(),
            request_timeout_secs: 5,
            ..LedgerConfig::default()
        },
    }
}

/// Create a router backed by the given mocks
pub fn create_test_app(deriver: Arc<MockKeyDeriver>, ledger: Arc<MockLedgerClient>) -> Router {
    create_test_app_with_config(&create_test_config(), deriver, ledger)
}

pub fn create_test_app_with_config(
    config: &Config,
    deriver: Arc<MockKeyDeriver>,
    ledger: Arc<MockLedgerClient>,
) -> Router {
    let relay = Relay::new(config, deriver, ledger);
    server::router(AppState {
        relay: Arc::new(relay),
    })
}

/// Build a request with an optional JSON content type
pub fn request(method: &str, uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

/// Collect a response body as JSON
pub async fn read_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as raw bytes
pub async fn read_body(response: Response) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Write a config file into the given directory
pub async fn create_test_config_file(dir: &TempDir, name: &str, content: &str) -> String {
    let config_path = dir.path().join(name);
    fs::write(&config_path, content).await.unwrap();
    config_path.to_string_lossy().to_string()
}

/// Minimal configuration: only the mnemonic
pub const MNEMONIC_ONLY_TOML: &str = r#"
mnemonic = "film crazy soon outside stand loop subway crumble thrive popular green nuclear struggle pistol arm wife phrase warfare march wheat nephew ask sunny firm"
"#;

/// Configuration with every section spelled out
pub const FULL_CONFIG_TOML: &str = r#"
mnemonic = "film crazy soon outside stand loop subway crumble thrive popular green nuclear struggle pistol arm wife phrase warfare march wheat nephew ask sunny firm"

[server]
host = "127.0.0.1"
port = 3000

[server.logs]
level = "debug"

[ledger]
rpc_url = "http://localhost:9000"
package_id = "0x2"
module = "FuncTest"
function = "test_vector"
gas_budget = 50000000
request_timeout_secs = 10
request_type = "WaitForEffectsCert"

[ledger.options]
show_events = true
show_raw_input = false
"#;

pub const SAMPLE_CONFIG_YAML: &str = r#"
mnemonic: "film crazy soon outside stand loop subway crumble thrive popular green nuclear struggle pistol arm wife phrase warfare march wheat nephew ask sunny firm"
server:
  port: 8081
  logs:
    level: "warn"
ledger:
  module: "model"
  function: "add2"
  gas_object: null
"#;

pub const MISSING_MNEMONIC_TOML: &str = r#"
[server]
port = 8080
"#;
