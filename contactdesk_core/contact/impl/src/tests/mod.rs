use contactdesk_core_contact_contracts::{
    commands::create::MockContactMessageCreateCommandService,
    queries::list::MockContactMessageListQueryService,
};
use contactdesk_persistence_contracts::{MockDatabase, MockTransaction};

use crate::ContactFeatureServiceImpl;

mod create_message;

type Sut = ContactFeatureServiceImpl<
    MockDatabase,
    MockContactMessageCreateCommandService<MockTransaction>,
    MockContactMessageListQueryService<MockTransaction>,
>;
