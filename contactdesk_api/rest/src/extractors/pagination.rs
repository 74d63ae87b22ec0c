use std::convert::Infallible;

use aide::{gen::GenContext, openapi::Operation, OperationInput};
use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use contactdesk_models::pagination::Pagination;

use crate::models::ApiPaginationQuery;

/// Page selection taken from the query string. Never rejects a request:
/// repeated parameters use their last value, malformed ones are clamped.
pub struct PaginationQuery(pub Pagination);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for PaginationQuery {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let pairs = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map(|Query(pairs)| pairs)
            .unwrap_or_default();

        Ok(Self(ApiPaginationQuery::from_pairs(pairs).into()))
    }
}

impl OperationInput for PaginationQuery {
    fn operation_input(ctx: &mut GenContext, operation: &mut Operation) {
        Query::<ApiPaginationQuery>::operation_input(ctx, operation);
    }
}
