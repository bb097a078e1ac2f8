//! # HTTP Endpoint
//!
//! Serves the skill over HTTPS-terminated HTTP: the platform posts a request
//! envelope and receives a response envelope.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

use anyhow::Result;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response as HttpResponse},
    routing::{get, post},
    Json, Router,
};
use log::{error, info, warn};
use std::sync::Arc;
use tokio::net::TcpListener;
use uuid::Uuid;

use crate::core::{RequestEnvelope, ResponseEnvelope, SkillError};
use crate::skill::Skill;

/// Build the router for a shared skill
pub fn router(skill: Arc<Skill>) -> Router {
    Router::new()
        .route("/", post(skill_endpoint))
        .route("/health", get(|| async { "ok" }))
        .with_state(skill)
}

/// Bind and serve until ctrl-c
pub async fn serve(skill: Arc<Skill>, bind_addr: &str) -> Result<()> {
    let listener = TcpListener::bind(bind_addr).await?;
    info!("Skill endpoint listening on {}", listener.local_addr()?);

    axum::serve(listener, router(skill))
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for shutdown signal: {e}");
            }
            info!("Shutting down skill endpoint");
        })
        .await?;

    Ok(())
}

pub async fn skill_endpoint(
    State(skill): State<Arc<Skill>>,
    Json(envelope): Json<RequestEnvelope>,
) -> Result<Json<ResponseEnvelope>, EndpointError> {
    skill.invoke(envelope).await.map(Json).map_err(EndpointError)
}

/// Failure that escaped the skill's own error handling
#[derive(Debug)]
pub struct EndpointError(pub anyhow::Error);

impl EndpointError {
    pub fn status(&self) -> StatusCode {
        match self.0.downcast_ref::<SkillError>() {
            Some(SkillError::SkillIdMismatch { .. }) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for EndpointError {
    fn into_response(self) -> HttpResponse {
        let status = self.status();
        let trace_id = Uuid::new_v4();
        if status.is_server_error() {
            error!("[{trace_id}] Request failed: {:?}", self.0);
        } else {
            warn!("[{trace_id}] Request rejected: {}", self.0);
        }

        let body = serde_json::json!({
            "error": status.canonical_reason().unwrap_or("error"),
            "traceId": trace_id.to_string(),
        });
        (status, Json(body)).into_response()
    }
}
