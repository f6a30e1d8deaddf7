use async_trait::async_trait;
use inference_relay::{
    Error, Result,
    config::Mnemonic,
    ledger::{ExecuteOptions, LedgerClient, MoveCallRequest, RequestType, TransactionBlockBytes},
    signer::{KeyDeriver, SignerAccount},
};
use serde_json::{Value, json};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use std::thread::{self, ThreadId};
use std::time::Duration;

/// Secret used by the mock deriver; any 32 bytes make a valid Ed25519 key.
pub const MOCK_SECRET: [u8; 32] = [7u8; 32];

/// Mock key deriver that counts invocations
#[derive(Debug, Default)]
pub struct MockKeyDeriver {
    pub calls: AtomicUsize,
    pub threads: Mutex<Vec<ThreadId>>,
    pub error: Option<String>,
}

impl MockKeyDeriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn get_threads(&self) -> Vec<ThreadId> {
        self.threads.lock().unwrap().clone()
    }

    pub fn account() -> SignerAccount {
        SignerAccount::from_secret_bytes(&MOCK_SECRET)
    }
}

impl KeyDeriver for MockKeyDeriver {
    fn derive(&self, _mnemonic: &Mnemonic) -> Result<SignerAccount> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.threads.lock().unwrap().push(thread::current().id());

        if let Some(ref error) = self.error {
            return Err(Error::signer(error.clone()));
        }

        Ok(Self::account())
    }
}

/// Recorded submission
#[derive(Debug, Clone)]
pub struct ExecutedTransaction {
    pub transaction: TransactionBlockBytes,
    pub signer: String,
    pub options: ExecuteOptions,
    pub request_type: RequestType,
}

/// Mock ledger client that records every call
#[derive(Debug)]
pub struct MockLedgerClient {
    pub move_calls: Arc<Mutex<Vec<MoveCallRequest>>>,
    pub executions: Arc<Mutex<Vec<ExecutedTransaction>>>,
    pub move_call_error: Option<String>,
    pub execute_error: Option<String>,
    pub result: Value,
    pub delay: Option<Duration>,
}

impl MockLedgerClient {
    pub fn new() -> Self {
        Self {
            move_calls: Arc::new(Mutex::new(Vec::new())),
            executions: Arc::new(Mutex::new(Vec::new())),
            move_call_error: None,
            execute_error: None,
            result: canned_result(),
            delay: None,
        }
    }

    pub fn with_move_call_error(mut self, error: &str) -> Self {
        self.move_call_error = Some(error.to_string());
        self
    }

    pub fn with_execute_error(mut self, error: &str) -> Self {
        self.execute_error = Some(error.to_string());
        self
    }

    pub fn with_result(mut self, result: Value) -> Self {
        self.result = result;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn get_move_calls(&self) -> Vec<MoveCallRequest> {
        self.move_calls.lock().unwrap().clone()
    }

    pub fn get_executions(&self) -> Vec<ExecutedTransaction> {
        self.executions.lock().unwrap().clone()
    }
}

impl Default for MockLedgerClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LedgerClient for MockLedgerClient {
    async fn move_call(&self, request: MoveCallRequest) -> Result<TransactionBlockBytes> {
        self.move_calls.lock().unwrap().push(request);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(ref error) = self.move_call_error {
            return Err(Error::ledger(error.clone()));
        }

        Ok(canned_transaction())
    }

    async fn sign_and_execute(
        &self,
        transaction: &TransactionBlockBytes,
        signer: &SignerAccount,
        options: &ExecuteOptions,
        request_type: RequestType,
    ) -> Result<Value> {
        self.executions.lock().unwrap().push(ExecutedTransaction {
            transaction: transaction.clone(),
            signer: signer.address().to_string(),
            options: options.clone(),
            request_type,
        });

        if let Some(ref error) = self.execute_error {
            return Err(Error::ledger(error.clone()));
        }

        Ok(self.result.clone())
    }
}

pub fn canned_transaction() -> TransactionBlockBytes {
    TransactionBlockBytes {
        tx_bytes: "AAACAAgBAgMEBQYHCA==".to_string(),
        gas: vec![],
        input_objects: vec![],
    }
}

pub fn canned_result() -> Value {
    json!({
        "digest": "CD5hFB4bWFThhb6FtvKq3xAxRri72vsYLJAVd7p9t2sR",
        "effects": {
            "status": { "status": "success" },
            "gasUsed": {
                "computationCost": "1000000",
                "storageCost": "2000000",
                "storageRebate": "0"
            }
        }
    })
}
