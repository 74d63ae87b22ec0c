//! Fixed data for tests and local development.

use contactdesk_persistence_contracts::contact::ContactMessageRepository;

pub mod contact;

/// Inserts all demo data. Fails if the ids assigned by the database differ
/// from those of the demo entities, i.e. unless the database is empty.
pub async fn create<Txn: Send + Sync + 'static>(
    txn: &mut Txn,
    contact: impl ContactMessageRepository<Txn>,
) -> anyhow::Result<()> {
    contact::create(txn, contact).await?;
    Ok(())
}
