use serde::{Deserialize, Serialize};
use std::{fmt, time::Duration};

/// Loaded settings. Deserialize-only so the mnemonic can never be written back out.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub mnemonic: Mnemonic,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub ledger: LedgerConfig,
}

/// Secret recovery phrase. Never printed: `Debug` and `Display` are redacted.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Mnemonic(String);

impl Mnemonic {
    pub fn new(phrase: impl Into<String>) -> Self {
        Self(phrase.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Mnemonic([REDACTED])")
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,
    #[serde(default = "default_package_id")]
    pub package_id: String,
    #[serde(default = "default_module")]
    pub module: String,
    #[serde(default = "default_function")]
    pub function: String,
    #[serde(default = "default_gas_object")]
    pub gas_object: Option<String>,
    #[serde(default = "default_gas_budget")]
    pub gas_budget: u64,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub request_type: RequestType,
    #[serde(default)]
    pub options: ExecuteOptions,
}

impl LedgerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// How long the node should wait before answering an execution request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestType {
    #[default]
    WaitForLocalExecution,
    WaitForEffectsCert,
}

/// Which parts of the executed transaction block the node includes in its response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteOptions {
    #[serde(default = "enabled", alias = "show_input")]
    pub show_input: bool,
    #[serde(default = "enabled", alias = "show_raw_input")]
    pub show_raw_input: bool,
    #[serde(default = "enabled", alias = "show_effects")]
    pub show_effects: bool,
    #[serde(default, alias = "show_events")]
    pub show_events: bool,
    #[serde(default, alias = "show_object_changes")]
    pub show_object_changes: bool,
    #[serde(default, alias = "show_balance_changes")]
    pub show_balance_changes: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logs: LogsConfig::default(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            rpc_url: default_rpc_url(),
            package_id: default_package_id(),
            module: default_module(),
            function: default_function(),
            gas_object: default_gas_object(),
            gas_budget: default_gas_budget(),
            request_timeout_secs: default_request_timeout_secs(),
            request_type: RequestType::default(),
            options: ExecuteOptions::default(),
        }
    }
}

impl Default for ExecuteOptions {
    fn default() -> Self {
        Self {
            show_input: true,
            show_raw_input: true,
            show_effects: true,
            show_events: false,
            show_object_changes: false,
            show_balance_changes: false,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_rpc_url() -> String {
    "https://sui-devnet-endpoint.blockvision.org".to_string()
}

fn default_package_id() -> String {
    "0x1a17fdd92c9d989f5200900302df4901d66fd04062a34eccbb83f085230838d7".to_string()
}

fn default_module() -> String {
    "Inference".to_string()
}

fn default_function() -> String {
    "run".to_string()
}

fn default_gas_object() -> Option<String> {
    Some("0xfa6e9bf9f256f322330c56b8ad2b128c051f95d21e78482a64e8fd72eeea6bc2".to_string())
}

fn default_gas_budget() -> u64 {
    2_000_000_000
}

fn default_request_timeout_secs() -> u64 {
    60
}

fn enabled() -> bool {
    true
}
