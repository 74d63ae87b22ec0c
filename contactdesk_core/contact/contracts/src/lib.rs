use std::future::Future;

use contactdesk_models::{
    contact::{ContactMessage, ContactMessageCreateRequest},
    pagination::Pagination,
};
use thiserror::Error;

pub use queries::list::ContactMessageListResult;

pub mod commands;
pub mod queries;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Store a new contact message and return it together with its id.
    fn create_message(
        &self,
        request: ContactMessageCreateRequest,
    ) -> impl Future<Output = Result<ContactMessage, ContactCreateMessageError>> + Send;

    /// Return a page of all contact messages, newest first.
    ///
    /// Pages beyond the last one are empty.
    fn list_messages(
        &self,
        pagination: Pagination,
    ) -> impl Future<Output = Result<ContactMessageListResult, ContactListMessagesError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactCreateMessageError {
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum ContactListMessagesError {
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_create_message(
        mut self,
        request: ContactMessageCreateRequest,
        result: Result<ContactMessage, ContactCreateMessageError>,
    ) -> Self {
        self.expect_create_message()
            .once()
            .with(mockall::predicate::eq(request))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_list_messages(
        mut self,
        pagination: Pagination,
        result: Result<ContactMessageListResult, ContactListMessagesError>,
    ) -> Self {
        self.expect_list_messages()
            .once()
            .with(mockall::predicate::eq(pagination))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }
}
