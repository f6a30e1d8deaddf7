mod client;
mod types;

pub use client::{LedgerClient, SuiRpcClient};
pub use types::{CallTarget, MoveCallRequest, TransactionBlockBytes};

pub use crate::config::{ExecuteOptions, RequestType};
