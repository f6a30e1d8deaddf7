//! The submission pipeline behind `POST /run`: derive the signer, build the
//! Move call, sign and submit it.

use crate::{
    config::{Config, ExecuteOptions, LedgerConfig, Mnemonic, RequestType},
    ledger::{CallTarget, LedgerClient, MoveCallRequest},
    signer::KeyDeriver,
    Error,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{sync::Arc, time::Duration};
use tracing::{debug, info};

/// Typed arguments of the `Inference::run` entry function, in call order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceArguments {
    pub in1: Vec<String>,
    pub in2: Vec<String>,
    pub in3: String,
}

impl InferenceArguments {
    pub fn into_call_arguments(self) -> Vec<Value> {
        vec![
            Value::from(self.in1),
            Value::from(self.in2),
            Value::from(self.in3),
        ]
    }
}

/// Failure of one pipeline stage. Later stages never run after a failure.
#[derive(thiserror::Error, Debug)]
pub enum RelayError {
    #[error("Failed to create signer: {0}")]
    Signer(#[source] Error),

    #[error("MoveCall error: {0}")]
    MoveCall(#[source] Error),

    #[error("Transaction execution error: {0}")]
    Execution(#[source] Error),

    #[error("Ledger call timed out after {0:?}")]
    Timeout(Duration),
}

impl RelayError {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Signer(_) => "Failed to create signer",
            Self::MoveCall(_) => "MoveCall error",
            Self::Execution(_) => "Transaction execution error",
            Self::Timeout(_) => "Ledger call timed out",
        }
    }
}

impl From<&LedgerConfig> for CallTarget {
    fn from(config: &LedgerConfig) -> Self {
        Self {
            package_id: config.package_id.clone(),
            module: config.module.clone(),
            function: config.function.clone(),
            gas_object: config.gas_object.clone(),
            gas_budget: config.gas_budget,
        }
    }
}

pub struct Relay {
    mnemonic: Mnemonic,
    deriver: Arc<dyn KeyDeriver>,
    ledger: Arc<dyn LedgerClient>,
    target: CallTarget,
    options: ExecuteOptions,
    request_type: RequestType,
    deadline: Duration,
}

impl Relay {
    pub fn new(
        config: &Config,
        deriver: Arc<dyn KeyDeriver>,
        ledger: Arc<dyn LedgerClient>,
    ) -> Self {
        Self {
            mnemonic: config.mnemonic.clone(),
            deriver,
            ledger,
            target: CallTarget::from(&config.ledger),
            options: config.ledger.options.clone(),
            request_type: config.ledger.request_type,
            deadline: config.ledger.request_timeout(),
        }
    }

    pub fn target(&self) -> &CallTarget {
        &self.target
    }

    /// Runs one submission. The ledger round-trips share a single deadline;
    /// dropping the returned future cancels whichever call is in flight.
    pub async fn submit(&self, arguments: InferenceArguments) -> Result<Value, RelayError> {
        // PBKDF2 seed stretching is CPU-bound; keep it off the async workers.
        let deriver = Arc::clone(&self.deriver);
        let mnemonic = self.mnemonic.clone();
        let signer = tokio::task::spawn_blocking(move || deriver.derive(&mnemonic))
            .await
            .map_err(|e| {
                RelayError::Signer(Error::signer(format!("derivation task failed: {}", e)))
            })?
            .map_err(RelayError::Signer)?;

        let request = MoveCallRequest {
            signer: signer.address(),
            target: self.target.clone(),
            type_arguments: Vec::new(),
            arguments: arguments.into_call_arguments(),
        };

        let ledger_phase = async {
            let transaction = self
                .ledger
                .move_call(request)
                .await
                .map_err(RelayError::MoveCall)?;

            debug!("Move call built, submitting transaction");

            self.ledger
                .sign_and_execute(&transaction, &signer, &self.options, self.request_type)
                .await
                .map_err(RelayError::Execution)
        };

        let result = tokio::time::timeout(self.deadline, ledger_phase)
            .await
            .map_err(|_| RelayError::Timeout(self.deadline))??;

        let digest = result
            .get("digest")
            .and_then(Value::as_str)
            .unwrap_or("<unknown>");
        info!("Transaction executed with digest {}", digest);
        debug!("Execution result: {}", result);

        Ok(result)
    }
}
