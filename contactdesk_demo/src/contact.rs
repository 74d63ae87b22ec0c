use std::sync::LazyLock;

use anyhow::ensure;
use chrono::{DateTime, TimeZone, Utc};
use contactdesk_models::contact::ContactMessage;
use contactdesk_persistence_contracts::contact::ContactMessageRepository;

/// All demo messages in insertion order.
pub static ALL_MESSAGES: LazyLock<Vec<&ContactMessage>> =
    LazyLock::new(|| vec![&JAN, &ANNA, &PIOTR, &MARIA]);

/// All demo messages, newest first.
pub static ALL_MESSAGES_NEWEST_FIRST: LazyLock<Vec<&ContactMessage>> =
    LazyLock::new(|| vec![&MARIA, &PIOTR, &ANNA, &JAN]);

pub static JAN: LazyLock<ContactMessage> = LazyLock::new(|| {
    ContactMessage::persisted(
        1.into(),
        "Jan Kowalski".try_into().unwrap(),
        "jan@example.com".try_into().unwrap(),
        "Hello, I would like to know more about your services.".try_into().unwrap(),
        true,
        at(2024, 5, 1, 10, 0, 0),
    )
});

pub static ANNA: LazyLock<ContactMessage> = LazyLock::new(|| {
    ContactMessage::persisted(
        2.into(),
        "Anna Nowak".try_into().unwrap(),
        "anna.nowak@example.org".try_into().unwrap(),
        "Could you send me your price list, please?".try_into().unwrap(),
        true,
        at(2024, 5, 2, 9, 30, 0),
    )
});

/// Created at the same time as [`ANNA`].
pub static PIOTR: LazyLock<ContactMessage> = LazyLock::new(|| {
    ContactMessage::persisted(
        3.into(),
        "Piotr Wiśniewski".try_into().unwrap(),
        "piotr+contact@example.net".try_into().unwrap(),
        "Is the office open on Saturdays?".try_into().unwrap(),
        true,
        at(2024, 5, 2, 9, 30, 0),
    )
});

/// Stored without consent.
pub static MARIA: LazyLock<ContactMessage> = LazyLock::new(|| {
    ContactMessage::persisted(
        4.into(),
        "Maria Zielińska".try_into().unwrap(),
        "maria@example.com".try_into().unwrap(),
        "Please call me back about the offer.".try_into().unwrap(),
        false,
        at(2024, 5, 3, 15, 45, 0),
    )
});

fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
        .unwrap()
}

pub async fn create<Txn: Send + Sync + 'static>(
    txn: &mut Txn,
    repo: impl ContactMessageRepository<Txn>,
) -> anyhow::Result<()> {
    for &message in &*ALL_MESSAGES {
        let id = repo.save(txn, message).await?;
        ensure!(
            Some(id) == message.id(),
            "Demo message was stored with id {id:?} instead of {:?}",
            message.id()
        );
    }
    Ok(())
}
