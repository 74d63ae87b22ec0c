use std::future::Future;

use contactdesk_models::{
    contact::{ContactMessage, ContactMessageId},
    pagination::PaginationSlice,
};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactMessageRepository<Txn: Send + Sync + 'static>: Send + Sync + 'static {
    /// Insert a new contact message and return the id assigned to it.
    ///
    /// The message is stored only after the transaction has been committed.
    fn save(
        &self,
        txn: &mut Txn,
        message: &ContactMessage,
    ) -> impl Future<Output = anyhow::Result<ContactMessageId>> + Send;

    /// Return a slice of all contact messages, newest first.
    fn list_ordered_by_date(
        &self,
        txn: &mut Txn,
        pagination: PaginationSlice,
    ) -> impl Future<Output = anyhow::Result<Vec<ContactMessage>>> + Send;

    /// Return the total number of contact messages.
    fn count(&self, txn: &mut Txn) -> impl Future<Output = anyhow::Result<u64>> + Send;
}

#[cfg(feature = "mock")]
impl<Txn: Send + Sync + 'static> MockContactMessageRepository<Txn> {
    pub fn with_save(mut self, message: ContactMessage, result: ContactMessageId) -> Self {
        self.expect_save()
            .once()
            .with(mockall::predicate::always(), mockall::predicate::eq(message))
            .return_once(move |_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_save_error(mut self, message: ContactMessage) -> Self {
        self.expect_save()
            .once()
            .with(mockall::predicate::always(), mockall::predicate::eq(message))
            .return_once(|_, _| {
                Box::pin(std::future::ready(Err(anyhow::anyhow!(
                    "connection reset by peer"
                ))))
            });
        self
    }

    pub fn with_list_ordered_by_date(
        mut self,
        pagination: PaginationSlice,
        result: Vec<ContactMessage>,
    ) -> Self {
        self.expect_list_ordered_by_date()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(pagination),
            )
            .return_once(|_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_count(mut self, result: u64) -> Self {
        self.expect_count()
            .once()
            .return_once(move |_| Box::pin(std::future::ready(Ok(result))));
        self
    }
}
