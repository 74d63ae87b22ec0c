use std::sync::Arc;

use aide::{
    axum::{routing, ApiRouter},
    transform::TransformOperation,
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use contactdesk_core_health_contracts::{HealthFeatureService, HealthStatus};
use schemars::JsonSchema;
use serde::Serialize;

use crate::docs::TransformOperationExt;

pub const TAG: &str = "Health";

pub fn router(service: Arc<impl HealthFeatureService>) -> ApiRouter<()> {
    ApiRouter::new()
        .api_route("/health", routing::get_with(health, health_docs))
        .with_state(service)
        .with_path_items(|op| op.tag(TAG))
}

#[derive(Serialize, JsonSchema)]
struct HealthResponse {
    /// Always `true`
    http: bool,
    /// Whether the database is reachable
    database: bool,
}

async fn health(service: State<Arc<impl HealthFeatureService>>) -> Response {
    let status = service.get_status().await;
    let HealthStatus { database } = status;

    let code = if status.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    let response = HealthResponse {
        http: true,
        database,
    };

    (code, Json(response)).into_response()
}

fn health_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Return the health status of the service.")
        .add_response::<HealthResponse>(StatusCode::OK, "All dependencies are healthy.")
        .add_response::<HealthResponse>(
            StatusCode::INTERNAL_SERVER_ERROR,
            "At least one dependency is unhealthy.",
        )
}
