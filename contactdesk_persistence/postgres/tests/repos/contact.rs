use chrono::{Duration, TimeZone, Utc};
use contactdesk_demo::contact::{ALL_MESSAGES_NEWEST_FIRST, JAN};
use contactdesk_models::{
    contact::ContactMessage,
    pagination::{Pagination, PaginationLimit, PaginationPage},
};
use contactdesk_persistence_contracts::{
    contact::ContactMessageRepository, Database, Transaction,
};
use contactdesk_persistence_postgres::contact::PostgresContactMessageRepository;
use pretty_assertions::assert_eq;

use crate::{
    common::{setup, setup_migrated},
    make_slice, sliced,
};

const REPO: PostgresContactMessageRepository = PostgresContactMessageRepository;

#[tokio::test]
async fn count() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    assert_eq!(REPO.count(&mut txn).await.unwrap(), 4);
}

#[tokio::test]
async fn list_ordered_by_date() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    for (limit, offset) in [(100, 0), (20, 0), (2, 0), (2, 2), (3, 3), (2, 4), (1, 100)] {
        let slice = make_slice(limit, offset);
        let result = REPO.list_ordered_by_date(&mut txn, slice).await.unwrap();
        assert_eq!(
            result.iter().collect::<Vec<_>>(),
            sliced(&ALL_MESSAGES_NEWEST_FIRST[..], slice),
            "limit={limit} offset={offset}"
        );
    }
}

#[tokio::test]
async fn save() {
    // Arrange
    let db = setup_migrated().await;
    let message = ContactMessage::new(
        JAN.full_name.clone(),
        JAN.email.clone(),
        JAN.message.clone(),
        JAN.consent,
        JAN.created_at(),
    );

    // Act
    let mut txn = db.begin_transaction().await.unwrap();
    let id = REPO.save(&mut txn, &message).await.unwrap();
    txn.commit().await.unwrap();

    // Assert
    assert_eq!(Some(id), JAN.id());

    let mut txn = db.begin_transaction().await.unwrap();
    let result = REPO
        .list_ordered_by_date(&mut txn, make_slice(20, 0))
        .await
        .unwrap();
    assert_eq!(result, [JAN.clone()]);
}

#[tokio::test]
async fn save_rollback() {
    // Arrange
    let db = setup_migrated().await;

    // Act
    let mut txn = db.begin_transaction().await.unwrap();
    REPO.save(&mut txn, &JAN).await.unwrap();
    txn.rollback().await.unwrap();

    // Assert
    let mut txn = db.begin_transaction().await.unwrap();
    assert_eq!(REPO.count(&mut txn).await.unwrap(), 0);
}

#[tokio::test]
async fn paginate_many() {
    // Arrange
    let db = setup_migrated().await;
    let start = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();

    let mut txn = db.begin_transaction().await.unwrap();
    for i in 0..25 {
        let message = ContactMessage::new(
            format!("Sender {i}").try_into().unwrap(),
            format!("sender{i}@example.com").as_str().try_into().unwrap(),
            JAN.message.clone(),
            true,
            start + Duration::minutes(i),
        );
        REPO.save(&mut txn, &message).await.unwrap();
    }
    txn.commit().await.unwrap();

    // Act
    let mut txn = db.begin_transaction().await.unwrap();
    let total = REPO.count(&mut txn).await.unwrap();
    let mut pages = Vec::new();
    for page in 1..=4 {
        let pagination = Pagination {
            page: PaginationPage::new(page),
            limit: PaginationLimit::new(10),
        };
        let result = REPO
            .list_ordered_by_date(&mut txn, pagination.slice())
            .await
            .unwrap();
        pages.push(result.iter().map(|m| *m.id().unwrap()).collect::<Vec<_>>());
    }

    // Assert
    assert_eq!(total, 25);
    let pagination = Pagination {
        page: PaginationPage::default(),
        limit: PaginationLimit::new(10),
    };
    assert_eq!(pagination.page_count(total), 3);
    assert_eq!(
        pages,
        [
            (16..=25).rev().collect::<Vec<i64>>(),
            (6..=15).rev().collect(),
            (1..=5).rev().collect(),
            vec![],
        ]
    );
}

#[tokio::test]
async fn list_reports_invalid_row() {
    // Arrange
    let db = setup().await;
    db.execute(
        "insert into contact_messages (full_name, email, message, consent, created_at) \
         values ('X', 'x@example.com', 'Too short', true, now())",
    )
    .await
    .unwrap();

    // Act
    let mut txn = db.begin_transaction().await.unwrap();
    let result = REPO.list_ordered_by_date(&mut txn, make_slice(20, 0)).await;

    // Assert
    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "Failed to decode contact message 5");
}
