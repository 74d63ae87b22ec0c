use contactdesk_core_contact_contracts::{
    commands::create::MockContactMessageCreateCommandService, ContactCreateMessageError,
    ContactFeatureService,
};
use contactdesk_demo::contact::ANNA;
use contactdesk_models::contact::ContactMessageCreateRequest;
use contactdesk_persistence_contracts::MockDatabase;
use contactdesk_utils::assert_matches;
use pretty_assertions::assert_eq;

use crate::{tests::Sut, ContactFeatureServiceImpl};

#[tokio::test]
async fn ok() {
    // Arrange
    let request = build_request();
    let expected = ANNA.clone();

    let db = MockDatabase::build(true);
    let contact_message_create =
        MockContactMessageCreateCommandService::new().with_invoke(request.clone(), expected.clone());

    let sut = ContactFeatureServiceImpl {
        db,
        contact_message_create,
        ..Sut::default()
    };

    // Act
    let result = sut.create_message(request).await;

    // Assert
    assert_eq!(result.unwrap(), expected);
}

#[tokio::test]
async fn storage_error_is_not_committed() {
    // Arrange
    let request = build_request();

    let db = MockDatabase::build(false);
    let contact_message_create =
        MockContactMessageCreateCommandService::new().with_invoke_error(request.clone());

    let sut = ContactFeatureServiceImpl {
        db,
        contact_message_create,
        ..Sut::default()
    };

    // Act
    let result = sut.create_message(request).await;

    // Assert
    assert_matches!(result, Err(ContactCreateMessageError::Other(_)));
}

fn build_request() -> ContactMessageCreateRequest {
    ContactMessageCreateRequest {
        full_name: ANNA.full_name.clone(),
        email: ANNA.email.clone(),
        message: ANNA.message.clone(),
        consent: Some(true),
    }
}
