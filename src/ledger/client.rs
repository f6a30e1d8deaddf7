use super::types::*;
use crate::{
    config::{ExecuteOptions, LedgerConfig, RequestType},
    signer::SignerAccount,
    Error, Result,
};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Asks the node to build an unsigned transaction for a Move call.
    async fn move_call(&self, request: MoveCallRequest) -> Result<TransactionBlockBytes>;

    /// Signs a built transaction and submits it, returning the node's raw result.
    async fn sign_and_execute(
        &self,
        transaction: &TransactionBlockBytes,
        signer: &SignerAccount,
        options: &ExecuteOptions,
        request_type: RequestType,
    ) -> Result<Value>;
}

/// JSON-RPC 2.0 client for a Sui full node.
pub struct SuiRpcClient {
    rpc_url: String,
    client: reqwest::Client,
    next_id: AtomicU64,
}

impl SuiRpcClient {
    pub fn new(config: &LedgerConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        debug!("Creating Sui RPC client for: {}", config.rpc_url);

        Ok(Self {
            rpc_url: config.rpc_url.clone(),
            client,
            next_id: AtomicU64::new(1),
        })
    }

    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    async fn send_request(&self, method: &str, params: Value) -> Result<Value> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params
        });

        debug!("Sending {} request #{}", method, id);

        let response = self
            .client
            .post(&self.rpc_url)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let response_json: Value = response.json().await.map_err(|e| {
            Error::ledger(format!(
                "Failed to parse {} response (HTTP {}): {}",
                method, status, e
            ))
        })?;

        if let Some(error) = response_json.get("error") {
            return Err(Error::Rpc {
                code: error.get("code").and_then(Value::as_i64).unwrap_or_default(),
                message: error
                    .get("message")
                    .and_then(Value::as_str)
                    .map(str::to_owned)
                    .unwrap_or_else(|| error.to_string()),
            });
        }

        response_json
            .get("result")
            .cloned()
            .ok_or_else(|| Error::ledger(format!("{} response missing result field", method)))
    }
}

#[async_trait]
impl LedgerClient for SuiRpcClient {
    async fn move_call(&self, request: MoveCallRequest) -> Result<TransactionBlockBytes> {
        debug!(
            "Building move call {}::{}::{}",
            request.target.package_id, request.target.module, request.target.function
        );

        let result = self.send_request("unsafe_moveCall", request.to_params()).await?;
        Ok(serde_json::from_value(result)?)
    }

    async fn sign_and_execute(
        &self,
        transaction: &TransactionBlockBytes,
        signer: &SignerAccount,
        options: &ExecuteOptions,
        request_type: RequestType,
    ) -> Result<Value> {
        let tx_bytes = STANDARD.decode(&transaction.tx_bytes)?;
        let signature = signer.sign_transaction(&tx_bytes);

        debug!("Executing transaction signed by {}", signer.address());

        let params = json!([
            transaction.tx_bytes,
            [signature],
            options,
            request_type,
        ]);
        self.send_request("sui_executeTransactionBlock", params).await
    }
}
