//! HTTP server exposing the webhook.

use std::sync::Arc;

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::routing::any;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::app::AppContext;
use crate::app::commands::handle_webhook;
use crate::domain::AppError;
use crate::ports::{TemplateStore, TrackerConnector};

/// Build the router serving the webhook on the configured path.
pub fn router<S, C>(ctx: Arc<AppContext<S, C>>) -> Router
where
    S: TemplateStore + Send + Sync + 'static,
    C: TrackerConnector + Send + Sync + 'static,
{
    let path = ctx.config().server.path.clone();
    Router::new().route(&path, any(webhook::<S, C>)).with_state(ctx)
}

/// Serve the webhook until the process is stopped.
pub async fn serve<S, C>(ctx: AppContext<S, C>) -> Result<(), AppError>
where
    S: TemplateStore + Send + Sync + 'static,
    C: TrackerConnector + Send + Sync + 'static,
{
    let addr = ctx.config().server.bind;
    let path = ctx.config().server.path.clone();
    let app = router(Arc::new(ctx));

    let listener = TcpListener::bind(addr).await?;
    info!("Webhook listening on http://{}{}", addr, path);
    axum::serve(listener, app).await?;

    Ok(())
}

async fn webhook<S, C>(
    State(ctx): State<Arc<AppContext<S, C>>>,
    method: Method,
    body: Bytes,
) -> (StatusCode, String)
where
    S: TemplateStore + Send + Sync + 'static,
    C: TrackerConnector + Send + Sync + 'static,
{
    // Tracker calls are blocking.
    let result =
        tokio::task::spawn_blocking(move || handle_webhook(&ctx, method.as_str(), &body)).await;

    match result {
        Ok(response) => (
            StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            response.body,
        ),
        Err(err) => {
            error!(error = %err, "webhook handler panicked");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".to_string())
        }
    }
}
