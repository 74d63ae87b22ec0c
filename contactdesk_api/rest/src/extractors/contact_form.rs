use aide::{
    gen::GenContext,
    openapi::Operation,
    OperationInput,
};
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
    Json,
};
use contactdesk_models::contact::ContactFormSubmission;

use crate::{errors::bad_request, models::contact::ApiContactFormRequest};

/// The decoded body of a contact form submission.
///
/// Missing fields and fields of the wrong type are kept so that they can be
/// reported as violations. Bodies which are not a JSON object are rejected
/// with `400 Bad Request`.
pub struct ContactFormPayload(pub ContactFormSubmission);

#[async_trait]
impl<S: Send + Sync> FromRequest<S> for ContactFormPayload {
    type Rejection = Response;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(request, state)
            .await
            .map_err(IntoResponse::into_response)?;

        ApiContactFormRequest::parse(&body)
            .map(|request| Self(request.into()))
            .map_err(bad_request)
    }
}

impl OperationInput for ContactFormPayload {
    fn operation_input(ctx: &mut GenContext, operation: &mut Operation) {
        Json::<ApiContactFormRequest>::operation_input(ctx, operation);
    }
}
