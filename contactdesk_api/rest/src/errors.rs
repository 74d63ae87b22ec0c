use std::collections::BTreeMap;

use aide::transform::TransformOperation;
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use contactdesk_models::validation::Violations;
use schemars::JsonSchema;
use serde::Serialize;

use crate::{const_schema, docs::TransformOperationExt};

pub const PROBLEM_CONTENT_TYPE: &str = "application/problem+json";

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err:#}");
    error(StatusCode::INTERNAL_SERVER_ERROR, InternalServerErrorDetail)
}

pub fn internal_server_error_docs(op: TransformOperation) -> TransformOperation {
    op.add_response::<ApiError<InternalServerErrorDetail>>(
        StatusCode::INTERNAL_SERVER_ERROR,
        "An unexpected error occurred while processing the request.",
    )
}

pub fn error(code: StatusCode, detail: impl Serialize) -> Response {
    (code, Json(ApiError { detail })).into_response()
}

#[derive(Serialize, JsonSchema)]
pub struct ApiError<D> {
    pub detail: D,
}

const_schema! {
    pub InternalServerErrorDetail("Internal server error");

    pub ValidationFailedType("https://tools.ietf.org/html/rfc4918#section-11.2");
    pub ValidationFailedTitle("Validation Failed");
    pub ValidationFailedStatus(422);

    pub BadRequestType("https://tools.ietf.org/html/rfc2616#section-10");
    pub BadRequestTitle("An error occurred");
    pub BadRequestStatus(400);
}

/// The submitted data violates one or more constraints.
#[derive(Serialize, JsonSchema)]
pub struct ApiValidationProblem {
    #[serde(rename = "type")]
    pub ty: ValidationFailedType,
    pub title: ValidationFailedTitle,
    pub status: ValidationFailedStatus,
    /// All violations, one `propertyPath: title` per line
    pub detail: String,
    pub violations: Vec<ApiViolation>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiViolation {
    /// Name of the offending property
    pub property_path: String,
    /// Human readable description of the violation
    pub title: String,
    /// Values substituted into the description
    pub parameters: BTreeMap<String, String>,
    /// Identifier of the violated constraint
    #[serde(rename = "type")]
    pub ty: String,
}

/// The request body could not be decoded.
#[derive(Serialize, JsonSchema)]
pub struct ApiBadRequestProblem {
    #[serde(rename = "type")]
    pub ty: BadRequestType,
    pub title: BadRequestTitle,
    pub status: BadRequestStatus,
    pub detail: String,
}

pub fn validation_failed(violations: Violations) -> Response {
    let detail = violations.to_string();
    let violations = violations
        .into_inner()
        .into_iter()
        .map(|violation| ApiViolation {
            property_path: violation.property_path.into(),
            title: violation.message,
            parameters: violation
                .parameters
                .into_iter()
                .map(|(k, v)| (k.into(), v))
                .collect(),
            ty: violation.code.urn(),
        })
        .collect();

    problem(
        StatusCode::UNPROCESSABLE_ENTITY,
        ApiValidationProblem {
            ty: ValidationFailedType,
            title: ValidationFailedTitle,
            status: ValidationFailedStatus,
            detail,
            violations,
        },
    )
}

pub fn validation_failed_docs(op: TransformOperation) -> TransformOperation {
    op.add_problem_response::<ApiValidationProblem>(
        StatusCode::UNPROCESSABLE_ENTITY,
        "The submitted data is invalid. All violations are reported at once.",
    )
}

pub fn bad_request(detail: impl ToString) -> Response {
    problem(
        StatusCode::BAD_REQUEST,
        ApiBadRequestProblem {
            ty: BadRequestType,
            title: BadRequestTitle,
            status: BadRequestStatus,
            detail: detail.to_string(),
        },
    )
}

pub fn bad_request_docs(op: TransformOperation) -> TransformOperation {
    op.add_problem_response::<ApiBadRequestProblem>(
        StatusCode::BAD_REQUEST,
        "The request body is not a JSON object.",
    )
}

fn problem(code: StatusCode, body: impl Serialize) -> Response {
    (
        code,
        [(header::CONTENT_TYPE, PROBLEM_CONTENT_TYPE)],
        Json(body),
    )
        .into_response()
}
