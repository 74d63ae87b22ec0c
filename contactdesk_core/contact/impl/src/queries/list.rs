use contactdesk_core_contact_contracts::queries::list::{
    ContactMessageListQueryService, ContactMessageListResult,
};
use contactdesk_di::Build;
use contactdesk_models::pagination::Pagination;
use contactdesk_persistence_contracts::contact::ContactMessageRepository;
use contactdesk_utils::trace_instrument;

#[derive(Debug, Clone, Build, Default)]
pub struct ContactMessageListQueryServiceImpl<ContactRepo> {
    contact_repo: ContactRepo,
}

impl<Txn, ContactRepo> ContactMessageListQueryService<Txn>
    for ContactMessageListQueryServiceImpl<ContactRepo>
where
    Txn: Send + Sync + 'static,
    ContactRepo: ContactMessageRepository<Txn>,
{
    #[trace_instrument(skip(self, txn))]
    async fn invoke(
        &self,
        txn: &mut Txn,
        pagination: Pagination,
    ) -> anyhow::Result<ContactMessageListResult> {
        let messages = self
            .contact_repo
            .list_ordered_by_date(txn, pagination.slice())
            .await?;
        let total = self.contact_repo.count(txn).await?;

        Ok(ContactMessageListResult {
            messages,
            pagination,
            total,
            pages: pagination.page_count(total),
        })
    }
}

#[cfg(test)]
mod tests {
    use contactdesk_demo::contact::ALL_MESSAGES_NEWEST_FIRST;
    use contactdesk_models::pagination::{PaginationLimit, PaginationPage, PaginationSlice};
    use contactdesk_persistence_contracts::contact::MockContactMessageRepository;
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn ok() {
        // Arrange
        let pagination = Pagination {
            page: PaginationPage::new(2),
            limit: PaginationLimit::new(10),
        };
        let messages = ALL_MESSAGES_NEWEST_FIRST
            .iter()
            .copied()
            .cloned()
            .collect::<Vec<_>>();

        let contact_repo = MockContactMessageRepository::new()
            .with_list_ordered_by_date(
                PaginationSlice {
                    limit: PaginationLimit::new(10),
                    offset: 10,
                },
                messages.clone(),
            )
            .with_count(25);

        let sut = ContactMessageListQueryServiceImpl { contact_repo };

        // Act
        let result = sut.invoke(&mut (), pagination).await;

        // Assert
        assert_eq!(
            result.unwrap(),
            ContactMessageListResult {
                messages,
                pagination,
                total: 25,
                pages: 3,
            }
        );
    }

    #[tokio::test]
    async fn empty() {
        // Arrange
        let pagination = Pagination::default();

        let contact_repo = MockContactMessageRepository::new()
            .with_list_ordered_by_date(pagination.slice(), Vec::new())
            .with_count(0);

        let sut = ContactMessageListQueryServiceImpl { contact_repo };

        // Act
        let result = sut.invoke(&mut (), pagination).await;

        // Assert
        let result = result.unwrap();
        assert_eq!(result.messages, []);
        assert_eq!(result.total, 0);
        assert_eq!(result.pages, 1);
    }
}
