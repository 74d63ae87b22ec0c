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
use contactdesk_core_contact_contracts::{
    ContactCreateMessageError, ContactFeatureService, ContactListMessagesError,
};

use crate::{
    docs::TransformOperationExt,
    errors::{
        bad_request_docs, internal_server_error, internal_server_error_docs, validation_failed,
        validation_failed_docs,
    },
    extractors::{contact_form::ContactFormPayload, pagination::PaginationQuery},
    models::contact::{ApiContactMessage, ApiContactMessageList},
};

pub const TAG: &str = "Contact";

pub const PATH: &str = "/api/contact";

pub fn router(service: Arc<impl ContactFeatureService>) -> ApiRouter<()> {
    ApiRouter::new()
        .api_route(
            PATH,
            routing::get_with(list, list_docs).post_with(create, create_docs),
        )
        .with_state(service)
        .with_path_items(|op| op.tag(TAG))
}

async fn list(
    service: State<Arc<impl ContactFeatureService>>,
    PaginationQuery(pagination): PaginationQuery,
) -> Response {
    match service.list_messages(pagination).await {
        Ok(result) => match ApiContactMessageList::try_from(result) {
            Ok(list) => Json(list).into_response(),
            Err(err) => internal_server_error(err),
        },
        Err(ContactListMessagesError::Other(err)) => internal_server_error(err),
    }
}

fn list_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Return a page of all contact messages, newest first.")
        .description(
            "Out of range values for `page` and `limit` are clamped. Pages after the last one \
             are empty.",
        )
        .add_response::<ApiContactMessageList>(StatusCode::OK, "A page of contact messages.")
        .with(internal_server_error_docs)
}

async fn create(
    service: State<Arc<impl ContactFeatureService>>,
    ContactFormPayload(submission): ContactFormPayload,
) -> Response {
    let request = match submission.validate() {
        Ok(request) => request,
        Err(violations) => return validation_failed(violations),
    };

    match service.create_message(request).await {
        Ok(message) => match ApiContactMessage::try_from(message) {
            Ok(message) => (StatusCode::CREATED, Json(message)).into_response(),
            Err(err) => internal_server_error(err),
        },
        Err(ContactCreateMessageError::Other(err)) => internal_server_error(err),
    }
}

fn create_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Submit the contact form.")
        .add_response::<ApiContactMessage>(StatusCode::CREATED, "The stored contact message.")
        .with(bad_request_docs)
        .with(validation_failed_docs)
        .with(internal_server_error_docs)
}
