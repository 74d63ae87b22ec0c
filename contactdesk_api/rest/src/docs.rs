use std::sync::Arc;

use aide::{
    gen::in_context,
    openapi::{OpenApi, ReferenceOr},
    transform::TransformOperation,
    OperationOutput,
};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Extension, Json, Router,
};
use schemars::JsonSchema;

mod redoc;

pub const OPENAPI_PATH: &str = "/openapi.json";

pub fn router(api: Arc<OpenApi>) -> Router<()> {
    Router::new()
        .route(OPENAPI_PATH, routing::get(serve_openapi))
        .layer(Extension(api))
        .merge(redoc::router())
}

async fn serve_openapi(Extension(api): Extension<Arc<OpenApi>>) -> Response {
    Json(&*api).into_response()
}

/// Extension trait for [`TransformOperation`]
pub trait TransformOperationExt {
    /// Add a [`Json`] response to the operation.
    fn add_response<R: JsonSchema>(self, code: StatusCode, description: &str) -> Self;

    /// Add an RFC 7807 problem response to the operation.
    fn add_problem_response<R: JsonSchema>(self, code: StatusCode, description: &str) -> Self;
}

impl TransformOperationExt for TransformOperation<'_> {
    fn add_response<R: JsonSchema>(self, code: StatusCode, description: &str) -> Self {
        add_json_response::<R>(self, code, description, None)
    }

    fn add_problem_response<R: JsonSchema>(self, code: StatusCode, description: &str) -> Self {
        add_json_response::<R>(
            self,
            code,
            description,
            Some(crate::errors::PROBLEM_CONTENT_TYPE),
        )
    }
}

fn add_json_response<'t, R: JsonSchema>(
    mut op: TransformOperation<'t>,
    code: StatusCode,
    description: &str,
    content_type: Option<&str>,
) -> TransformOperation<'t> {
    let Some(mut response) =
        in_context(|ctx| Json::<R>::operation_response(ctx, &mut Default::default()))
    else {
        return op;
    };
    response.description = description.into();
    if let Some(content_type) = content_type {
        response.content = response
            .content
            .into_iter()
            .map(|(_, media_type)| (content_type.to_owned(), media_type))
            .collect();
    }

    let operation = op.inner_mut();
    operation
        .responses
        .get_or_insert_with(Default::default)
        .responses
        .insert(
            aide::openapi::StatusCode::Code(code.as_u16()),
            ReferenceOr::Item(response),
        );

    op
}
