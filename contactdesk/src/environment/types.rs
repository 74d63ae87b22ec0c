use contactdesk_core_contact_impl::{
    commands::create::ContactMessageCreateCommandServiceImpl,
    queries::list::ContactMessageListQueryServiceImpl, ContactFeatureServiceImpl,
};
use contactdesk_core_health_impl::HealthFeatureServiceImpl;
use contactdesk_persistence_postgres::{
    contact::PostgresContactMessageRepository, PostgresDatabase,
};
use contactdesk_shared_impl::time::TimeServiceImpl;

// API
pub type RestServer = contactdesk_api_rest::RestServer<HealthFeature, ContactFeature>;

// Persistence
pub type Database = PostgresDatabase;
pub type ContactRepo = PostgresContactMessageRepository;

// Shared
pub type Time = TimeServiceImpl;

// Core
pub type HealthFeature = HealthFeatureServiceImpl<Time, Database>;

pub type ContactFeature =
    ContactFeatureServiceImpl<Database, ContactMessageCreateCommand, ContactMessageListQuery>;
pub type ContactMessageCreateCommand = ContactMessageCreateCommandServiceImpl<Time, ContactRepo>;
pub type ContactMessageListQuery = ContactMessageListQueryServiceImpl<ContactRepo>;
