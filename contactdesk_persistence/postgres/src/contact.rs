use anyhow::Context;
use bb8_postgres::tokio_postgres::Row;
use contactdesk_di::Build;
use contactdesk_models::{
    contact::{ContactMessage, ContactMessageId},
    pagination::PaginationSlice,
};
use contactdesk_persistence_contracts::contact::ContactMessageRepository;
use contactdesk_utils::trace_instrument;

use crate::{arg_indices, columns, PostgresTransaction};

#[derive(Debug, Clone, Build)]
pub struct PostgresContactMessageRepository;

columns!(contact_message as "c": "id", "full_name", "email", "message", "consent", "created_at");

impl ContactMessageRepository<PostgresTransaction> for PostgresContactMessageRepository {
    #[trace_instrument(skip(self, txn))]
    async fn save(
        &self,
        txn: &mut PostgresTransaction,
        message: &ContactMessage,
    ) -> anyhow::Result<ContactMessageId> {
        txn.txn()
            .query_one(
                &format!(
                    "insert into contact_messages (full_name, email, message, consent, \
                     created_at) values ({}) returning id",
                    arg_indices(1..CONTACT_MESSAGE_CNT)
                ),
                &[
                    &message.full_name.as_str(),
                    &message.email.as_str(),
                    &message.message.as_str(),
                    &message.consent,
                    &message.created_at(),
                ],
            )
            .await
            .map(|row| row.get::<_, i64>(0).into())
            .context("Failed to insert contact message")
    }

    #[trace_instrument(skip(self, txn))]
    async fn list_ordered_by_date(
        &self,
        txn: &mut PostgresTransaction,
        pagination: PaginationSlice,
    ) -> anyhow::Result<Vec<ContactMessage>> {
        let limit = i64::try_from(*pagination.limit)?;
        let offset = i64::try_from(pagination.offset).unwrap_or(i64::MAX);

        txn.txn()
            .query(
                &format!(
                    "select {CONTACT_MESSAGE_COLS} from contact_messages c order by \
                     c.created_at desc, c.id desc limit $1 offset $2"
                ),
                &[&limit, &offset],
            )
            .await
            .context("Failed to list contact messages")?
            .into_iter()
            .map(|row| decode_contact_message(&row, &mut 0))
            .collect()
    }

    #[trace_instrument(skip(self, txn))]
    async fn count(&self, txn: &mut PostgresTransaction) -> anyhow::Result<u64> {
        let count: i64 = txn
            .txn()
            .query_one("select count(*) from contact_messages", &[])
            .await
            .context("Failed to count contact messages")?
            .get(0);
        Ok(count.try_into()?)
    }
}

fn decode_contact_message(row: &Row, offset: &mut usize) -> anyhow::Result<ContactMessage> {
    let mut idx = || {
        *offset += 1;
        *offset - 1
    };

    let id = row.get::<_, i64>(idx());
    let mut decode = || {
        anyhow::Ok(ContactMessage::persisted(
            id.into(),
            row.get::<_, String>(idx()).try_into()?,
            row.get::<_, String>(idx()).try_into()?,
            row.get::<_, String>(idx()).try_into()?,
            row.get(idx()),
            row.get(idx()),
        ))
    };

    decode().with_context(|| format!("Failed to decode contact message {id}"))
}
