use std::sync::LazyLock;

use aide::redoc::Redoc;
use axum::{
    response::{Html, IntoResponse, Response},
    routing, Router,
};

use super::OPENAPI_PATH;

static REDOC_HTML: LazyLock<String> =
    LazyLock::new(|| Redoc::new(OPENAPI_PATH).with_title("contactdesk").html());

pub fn router() -> Router<()> {
    Router::new().route("/redoc", routing::get(serve_redoc))
}

async fn serve_redoc() -> Response {
    Html(REDOC_HTML.as_str()).into_response()
}
