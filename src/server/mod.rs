mod extract;
pub mod handlers;
mod types;

pub use extract::JsonBody;
pub use handlers::AppState;
pub use types::{ApiError, InferenceRequest, ResponseEnvelope};

use crate::{
    config::Config, ledger::SuiRpcClient, relay::Relay, signer::MnemonicDeriver, Result,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Builds the HTTP surface. Unlisted methods on a known path yield 405;
/// `/hello` also answers HEAD with 405 instead of falling through to GET.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/hello",
            get(handlers::hello).head(handlers::method_not_allowed),
        )
        .route("/run", post(handlers::run_inference))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    // Initialize ledger client
    let ledger = SuiRpcClient::new(&config.ledger)?;
    info!("Using Sui RPC endpoint {}", ledger.rpc_url());

    let relay = Relay::new(&config, Arc::new(MnemonicDeriver), Arc::new(ledger));
    let target = relay.target();
    info!(
        "Relaying to {}::{}::{}",
        target.package_id, target.module, target.function
    );

    let app = router(AppState {
        relay: Arc::new(relay),
    });

    // Start server
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Server is running on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
