use std::future::Future;

use contactdesk_models::{contact::ContactMessage, pagination::Pagination};

/// Returns one page of contact messages, newest first.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactMessageListQueryService<Txn: Send + Sync + 'static>:
    Send + Sync + 'static
{
    fn invoke(
        &self,
        txn: &mut Txn,
        pagination: Pagination,
    ) -> impl Future<Output = anyhow::Result<ContactMessageListResult>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessageListResult {
    pub messages: Vec<ContactMessage>,
    /// The clamped pagination the messages have been fetched with.
    pub pagination: Pagination,
    /// Total number of stored messages.
    pub total: u64,
    /// Number of pages, at least 1.
    pub pages: u64,
}

#[cfg(feature = "mock")]
impl<Txn: Send + Sync + 'static> MockContactMessageListQueryService<Txn> {
    pub fn with_invoke(mut self, pagination: Pagination, result: ContactMessageListResult) -> Self {
        self.expect_invoke()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(pagination),
            )
            .return_once(|_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }
}
