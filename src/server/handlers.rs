use super::{
    extract::JsonBody,
    types::{ApiError, InferenceRequest, ResponseEnvelope},
};
use crate::relay::Relay;
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::{error, info, Instrument};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<Relay>,
}

pub async fn hello() -> Json<ResponseEnvelope> {
    Json(ResponseEnvelope::message("Hello, World!"))
}

pub async fn method_not_allowed() -> StatusCode {
    StatusCode::METHOD_NOT_ALLOWED
}

pub async fn run_inference(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<InferenceRequest>,
) -> Result<Json<ResponseEnvelope>, ApiError> {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("run", %request_id);

    async move {
        info!(
            "Received inference request with {} + {} inputs",
            request.in1.len(),
            request.in2.len()
        );

        match state.relay.submit(request.into()).await {
            Ok(result) => Ok(Json(ResponseEnvelope::with_data(
                "Transaction executed successfully",
                result,
            ))),
            Err(e) => {
                error!("Failed to relay transaction: {}", e);
                Err(ApiError::from(e))
            }
        }
    }
    .instrument(span)
    .await
}
