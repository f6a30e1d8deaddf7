use crate::signer::SuiAddress;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Fully-qualified Move entry function plus the gas it may spend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallTarget {
    pub package_id: String,
    pub module: String,
    pub function: String,
    pub gas_object: Option<String>,
    pub gas_budget: u64,
}

/// Call descriptor handed to the node for transaction construction.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveCallRequest {
    pub signer: SuiAddress,
    pub target: CallTarget,
    pub type_arguments: Vec<String>,
    pub arguments: Vec<Value>,
}

impl MoveCallRequest {
    /// Positional parameters of `unsafe_moveCall`.
    pub fn to_params(&self) -> Value {
        json!([
            self.signer,
            self.target.package_id,
            self.target.module,
            self.target.function,
            self.type_arguments,
            self.arguments,
            self.target.gas_object,
            self.target.gas_budget.to_string(),
        ])
    }
}

/// Unsigned transaction returned by the node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionBlockBytes {
    /// BCS-encoded transaction data, base64.
    pub tx_bytes: String,
    #[serde(default)]
    pub gas: Vec<Value>,
    #[serde(default)]
    pub input_objects: Vec<Value>,
}
