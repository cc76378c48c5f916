use std::sync::Arc;

use lambda_runtime::{LambdaEvent, service_fn};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use folio_export::chromium::ChromiumLauncher;
use folio_lambda::config::FunctionConfig;
use folio_lambda::handler::handle_request;
use folio_lambda::state::AppState;
use folio_storage::store::S3ArtifactStore;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = FunctionConfig::from_env();
    tracing::info!(
        bucket = %config.bucket,
        region = %config.region,
        template = %config.template_path.display(),
        "starting pdf function"
    );

    let s3 = folio_storage::client::build_client(&config.region).await;
    let state = AppState::new(
        config,
        Arc::new(ChromiumLauncher),
        Arc::new(S3ArtifactStore::new(s3)),
    );

    let state = &state;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handle_request(state, event).await
    }))
    .await
    .map_err(|e| eyre::eyre!(e))
}
