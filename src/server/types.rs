use crate::relay::{InferenceArguments, RelayError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InferenceRequest {
    pub in1: Vec<String>,
    pub in2: Vec<String>,
    pub in3: String,
}

impl From<InferenceRequest> for InferenceArguments {
    fn from(request: InferenceRequest) -> Self {
        Self {
            in1: request.in1,
            in2: request.in2,
            in3: request.in3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResponseEnvelope {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
            error: None,
        }
    }

    pub fn with_data(message: impl Into<String>, data: Value) -> Self {
        Self {
            data: Some(data),
            ..Self::message(message)
        }
    }

    pub fn failure(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::message(message)
        }
    }
}

/// Request-level failures of the HTTP surface.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Upstream(RelayError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RelayError> for ApiError {
    fn from(err: RelayError) -> Self {
        Self::Upstream(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let envelope = match self {
            Self::BadRequest(detail) => {
                ResponseEnvelope::failure("Invalid JSON request body", detail)
            }
            Self::Upstream(err) => ResponseEnvelope::failure(err.label(), err.to_string()),
        };

        (status, Json(envelope)).into_response()
    }
}
