use chrono::{DateTime, Utc};
use contactdesk_di::Build;
use contactdesk_shared_contracts::time::TimeService;
use contactdesk_utils::trace_instrument;

#[derive(Debug, Clone, Copy, Build)]
pub struct TimeServiceImpl;

impl TimeService for TimeServiceImpl {
    #[trace_instrument(skip(self))]
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
