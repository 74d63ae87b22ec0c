use contactdesk_core_contact_contracts::{
    commands::create::ContactMessageCreateCommandService,
    queries::list::ContactMessageListQueryService, ContactCreateMessageError,
    ContactFeatureService, ContactListMessagesError, ContactMessageListResult,
};
use contactdesk_di::Build;
use contactdesk_models::{
    contact::{ContactMessage, ContactMessageCreateRequest},
    pagination::Pagination,
};
use contactdesk_persistence_contracts::{Database, Transaction};
use contactdesk_utils::trace_instrument;
use tracing::info;

pub mod commands;
pub mod queries;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Build)]
#[cfg_attr(test, derive(Default))]
pub struct ContactFeatureServiceImpl<Db, ContactMessageCreate, ContactMessageList> {
    db: Db,
    contact_message_create: ContactMessageCreate,
    contact_message_list: ContactMessageList,
}

impl<Db, ContactMessageCreate, ContactMessageList> ContactFeatureService
    for ContactFeatureServiceImpl<Db, ContactMessageCreate, ContactMessageList>
where
    Db: Database,
    ContactMessageCreate: ContactMessageCreateCommandService<Db::Transaction>,
    ContactMessageList: ContactMessageListQueryService<Db::Transaction>,
{
    #[trace_instrument(skip(self))]
    async fn create_message(
        &self,
        request: ContactMessageCreateRequest,
    ) -> Result<ContactMessage, ContactCreateMessageError> {
        let mut txn = self.db.begin_transaction().await?;

        let message = self.contact_message_create.invoke(&mut txn, request).await?;

        txn.commit().await?;

        info!(id = ?message.id(), "stored contact message");

        Ok(message)
    }

    #[trace_instrument(skip(self))]
    async fn list_messages(
        &self,
        pagination: Pagination,
    ) -> Result<ContactMessageListResult, ContactListMessagesError> {
        let mut txn = self.db.begin_transaction().await?;

        self.contact_message_list
            .invoke(&mut txn, pagination)
            .await
            .map_err(Into::into)
    }
}
