use std::future::Future;

use contactdesk_models::contact::{ContactMessage, ContactMessageCreateRequest};

/// Stores a new contact message.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactMessageCreateCommandService<Txn: Send + Sync + 'static>:
    Send + Sync + 'static
{
    fn invoke(
        &self,
        txn: &mut Txn,
        cmd: ContactMessageCreateRequest,
    ) -> impl Future<Output = anyhow::Result<ContactMessage>> + Send;
}

#[cfg(feature = "mock")]
impl<Txn: Send + Sync + 'static> MockContactMessageCreateCommandService<Txn> {
    pub fn with_invoke(mut self, cmd: ContactMessageCreateRequest, result: ContactMessage) -> Self {
        self.expect_invoke()
            .once()
            .with(mockall::predicate::always(), mockall::predicate::eq(cmd))
            .return_once(|_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_invoke_error(mut self, cmd: ContactMessageCreateRequest) -> Self {
        self.expect_invoke()
            .once()
            .with(mockall::predicate::always(), mockall::predicate::eq(cmd))
            .return_once(|_, _| {
                Box::pin(std::future::ready(Err(anyhow::anyhow!(
                    "connection reset by peer"
                ))))
            });
        self
    }
}
