use contactdesk_core_contact_contracts::commands::create::ContactMessageCreateCommandService;
use contactdesk_di::Build;
use contactdesk_models::contact::{ContactMessage, ContactMessageCreateRequest};
use contactdesk_persistence_contracts::contact::ContactMessageRepository;
use contactdesk_shared_contracts::time::TimeService;
use contactdesk_utils::trace_instrument;

#[derive(Debug, Clone, Copy, Build, Default)]
pub struct ContactMessageCreateCommandServiceImpl<Time, ContactRepo> {
    time: Time,
    contact_repo: ContactRepo,
}

impl<Txn, Time, ContactRepo> ContactMessageCreateCommandService<Txn>
    for ContactMessageCreateCommandServiceImpl<Time, ContactRepo>
where
    Txn: Send + Sync + 'static,
    Time: TimeService,
    ContactRepo: ContactMessageRepository<Txn>,
{
    #[trace_instrument(skip(self, txn))]
    async fn invoke(
        &self,
        txn: &mut Txn,
        ContactMessageCreateRequest {
            full_name,
            email,
            message,
            consent,
        }: ContactMessageCreateRequest,
    ) -> anyhow::Result<ContactMessage> {
        let message = ContactMessage::new(
            full_name,
            email,
            message,
            consent.unwrap_or(false),
            self.time.now(),
        );

        let id = self.contact_repo.save(txn, &message).await?;

        Ok(message.into_persisted(id))
    }
}
