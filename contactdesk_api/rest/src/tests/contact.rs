use axum::http::StatusCode;
use contactdesk_core_contact_contracts::{
    ContactCreateMessageError, ContactListMessagesError, ContactMessageListResult,
    MockContactFeatureService,
};
use contactdesk_core_health_contracts::MockHealthFeatureService;
use contactdesk_demo::contact::{ALL_MESSAGES_NEWEST_FIRST, JAN};
use contactdesk_models::{
    contact::ContactMessageCreateRequest,
    pagination::{Pagination, PaginationLimit, PaginationPage},
};
use pretty_assertions::assert_eq;
use serde_json::json;

use super::{get, make_router, post};
use crate::errors::PROBLEM_CONTENT_TYPE;

const PATH: &str = "/api/contact";

fn router(contact: MockContactFeatureService) -> axum::Router {
    make_router(MockHealthFeatureService::new(), contact)
}

#[tokio::test]
async fn create_ok() {
    // Arrange
    let body = json!({
        "fullName": "Jan Kowalski",
        "email": "jan@example.com",
        "message": "Hello, I would like to know more about your services.",
        "consent": true,
    });

    let contact = MockContactFeatureService::new().with_create_message(
        ContactMessageCreateRequest {
            full_name: JAN.full_name.clone(),
            email: JAN.email.clone(),
            message: JAN.message.clone(),
            consent: Some(true),
        },
        Ok(JAN.clone()),
    );

    // Act
    let response = post(router(contact), PATH, body.to_string()).await;

    // Assert
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(
        response.json(),
        json!({
            "id": 1,
            "fullName": "Jan Kowalski",
            "email": "jan@example.com",
            "message": "Hello, I would like to know more about your services.",
            "consent": true,
            "createdAt": "2024-05-01T10:00:00+00:00",
        })
    );
}

#[tokio::test]
async fn create_empty_object() {
    // Act
    let response = post(router(MockContactFeatureService::new()), PATH, "{}").await;

    // Assert
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.content_type(), PROBLEM_CONTENT_TYPE);
    assert_eq!(
        response.json(),
        json!({
            "type": "https://tools.ietf.org/html/rfc4918#section-11.2",
            "title": "Validation Failed",
            "status": 422,
            "detail": "fullName: Imię i nazwisko jest wymagane.\n\
                       email: Adres e-mail jest wymagany.\n\
                       message: Treść wiadomości jest wymagana.\n\
                       consent: Zgoda na przetwarzanie danych osobowych jest wymagana.",
            "violations": [
                {
                    "propertyPath": "fullName",
                    "title": "Imię i nazwisko jest wymagane.",
                    "parameters": {"{{ value }}": "null"},
                    "type": "urn:uuid:c1051bb4-d103-4f74-8988-acbcafc7f831",
                },
                {
                    "propertyPath": "email",
                    "title": "Adres e-mail jest wymagany.",
                    "parameters": {"{{ value }}": "null"},
                    "type": "urn:uuid:c1051bb4-d103-4f74-8988-acbcafc7f831",
                },
                {
                    "propertyPath": "message",
                    "title": "Treść wiadomości jest wymagana.",
                    "parameters": {"{{ value }}": "null"},
                    "type": "urn:uuid:c1051bb4-d103-4f74-8988-acbcafc7f831",
                },
                {
                    "propertyPath": "consent",
                    "title": "Zgoda na przetwarzanie danych osobowych jest wymagana.",
                    "parameters": {"{{ value }}": "null"},
                    "type": "urn:uuid:ad32d13f-c3d4-423b-909a-857b961eb720",
                },
            ],
        })
    );
}

#[tokio::test]
async fn create_empty_body() {
    for body in ["", "null", "[]"] {
        let response = post(router(MockContactFeatureService::new()), PATH, body).await;
        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY, "{body:?}");
        assert_eq!(response.json()["violations"].as_array().unwrap().len(), 4);
    }
}

#[tokio::test]
async fn create_invalid_values() {
    // Arrange
    let body = json!({
        "fullName": "",
        "email": "not-an-email",
        "message": "short",
        "consent": false,
    });

    // Act
    let response = post(router(MockContactFeatureService::new()), PATH, body.to_string()).await;

    // Assert
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    let violations = response
        .json()
        .get("violations")
        .unwrap()
        .as_array()
        .unwrap()
        .iter()
        .map(|v| {
            (
                v["propertyPath"].as_str().unwrap().to_owned(),
                v["type"].as_str().unwrap().to_owned(),
            )
        })
        .collect::<Vec<_>>();
    assert_eq!(
        violations,
        [
            ("fullName", "urn:uuid:c1051bb4-d103-4f74-8988-acbcafc7f831"),
            ("fullName", "urn:uuid:9ff3fdc4-b214-49db-8718-39c315e33d45"),
            ("email", "urn:uuid:bd79c0ab-ddba-46cc-a703-a7a4b08de310"),
            ("message", "urn:uuid:9ff3fdc4-b214-49db-8718-39c315e33d45"),
            ("consent", "urn:uuid:2beabf1c-54c0-4882-a928-05249b26e23b"),
        ]
        .map(|(p, t)| (p.to_owned(), t.to_owned()))
    );
}

#[tokio::test]
async fn create_invalid_type() {
    // Arrange
    let body = json!({
        "fullName": "Jan Kowalski",
        "email": "jan@example.com",
        "message": "Hello, I would like to know more about your services.",
        "consent": "yes",
    });

    // Act
    let response = post(router(MockContactFeatureService::new()), PATH, body.to_string()).await;

    // Assert
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.json()["violations"],
        json!([{
            "propertyPath": "consent",
            "title": "This value should be of type bool.",
            "parameters": {"{{ type }}": "bool"},
            "type": "urn:uuid:ba785a8c-82cb-4283-967c-3cf342181b40",
        }])
    );
}

#[tokio::test]
async fn create_bad_request() {
    for body in ["{\"fullName\":", "42", "[1, 2]", "\"text\""] {
        // Act
        let response = post(router(MockContactFeatureService::new()), PATH, body).await;

        // Assert
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{body:?}");
        assert_eq!(response.content_type(), PROBLEM_CONTENT_TYPE);
        let json = response.json();
        assert_eq!(json["type"], "https://tools.ietf.org/html/rfc2616#section-10");
        assert_eq!(json["title"], "An error occurred");
        assert_eq!(json["status"], 400);
        assert!(json.get("violations").is_none());
    }
}

#[tokio::test]
async fn create_storage_error() {
    // Arrange
    let body = json!({
        "fullName": "Jan Kowalski",
        "email": "jan@example.com",
        "message": "Hello, I would like to know more about your services.",
        "consent": true,
    });

    let contact = MockContactFeatureService::new().with_create_message(
        ContactMessageCreateRequest {
            full_name: JAN.full_name.clone(),
            email: JAN.email.clone(),
            message: JAN.message.clone(),
            consent: Some(true),
        },
        Err(ContactCreateMessageError::Other(anyhow::anyhow!("connection lost"))),
    );

    // Act
    let response = post(router(contact), PATH, body.to_string()).await;

    // Assert
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json(), json!({"detail": "Internal server error"}));
}

#[tokio::test]
async fn list_default_pagination() {
    // Arrange
    let pagination = Pagination::default();
    let contact = MockContactFeatureService::new().with_list_messages(
        pagination,
        Ok(ContactMessageListResult {
            messages: ALL_MESSAGES_NEWEST_FIRST
                .iter()
                .map(|&x| x.clone())
                .collect(),
            pagination,
            total: 4,
            pages: 1,
        }),
    );

    // Act
    let response = get(router(contact), PATH).await;

    // Assert
    assert_eq!(response.status, StatusCode::OK);
    let json = response.json();
    assert_eq!(json["meta"], json!({"page": 1, "limit": 20, "total": 4, "pages": 1}));
    let ids = json["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|x| x["id"].as_i64().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(ids, [4, 3, 2, 1]);
    assert_eq!(json["items"][0]["fullName"], "Maria Zielińska");
}

#[tokio::test]
async fn list_clamped_pagination() {
    // Arrange
    let pagination = Pagination {
        page: PaginationPage::new(1),
        limit: PaginationLimit::max(),
    };
    let contact = MockContactFeatureService::new().with_list_messages(
        pagination,
        Ok(ContactMessageListResult {
            messages: vec![],
            pagination,
            total: 0,
            pages: 1,
        }),
    );

    // Act
    let response = get(router(contact), &format!("{PATH}?page=-3&limit=1000")).await;

    // Assert
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json(),
        json!({
            "items": [],
            "meta": {"page": 1, "limit": 100, "total": 0, "pages": 1},
        })
    );
}

#[tokio::test]
async fn list_page_out_of_range() {
    // Arrange
    let pagination = Pagination {
        page: PaginationPage::new(7),
        limit: PaginationLimit::new(2),
    };
    let contact = MockContactFeatureService::new().with_list_messages(
        pagination,
        Ok(ContactMessageListResult {
            messages: vec![],
            pagination,
            total: 4,
            pages: 2,
        }),
    );

    // Act
    let response = get(router(contact), &format!("{PATH}?page=7&limit=2")).await;

    // Assert
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json(),
        json!({
            "items": [],
            "meta": {"page": 7, "limit": 2, "total": 4, "pages": 2},
        })
    );
}

#[tokio::test]
async fn list_repeated_parameters() {
    // Arrange
    let pagination = Pagination {
        page: PaginationPage::new(2),
        limit: PaginationLimit::max(),
    };
    let contact = MockContactFeatureService::new().with_list_messages(
        pagination,
        Ok(ContactMessageListResult {
            messages: vec![],
            pagination,
            total: 4,
            pages: 1,
        }),
    );

    // Act
    let response = get(
        router(contact),
        &format!("{PATH}?page=1&limit=5&page=2&limit=1e3"),
    )
    .await;

    // Assert
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json()["meta"],
        json!({"page": 2, "limit": 100, "total": 4, "pages": 1})
    );
}

#[tokio::test]
async fn list_storage_error() {
    // Arrange
    let contact = MockContactFeatureService::new().with_list_messages(
        Pagination::default(),
        Err(ContactListMessagesError::Other(anyhow::anyhow!("connection lost"))),
    );

    // Act
    let response = get(router(contact), PATH).await;

    // Assert
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json(), json!({"detail": "Internal server error"}));
}
