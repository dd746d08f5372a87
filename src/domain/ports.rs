use crate::domain::model::{Paper, Ticket, TicketId};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Catalog lookup: papers in continuous print across a date window.
/// The engine never fetches; it only consumes the resolved list.
pub trait Catalog: Send + Sync {
    fn papers_in_range(
        &self,
        start_year: i32,
        end_year: i32,
        limit: usize,
    ) -> impl std::future::Future<Output = Result<Vec<Paper>>> + Send;
}

/// Remote search execution: hand over a batch of tickets keyed by id,
/// get back the server-side task id tracking the run.
#[async_trait]
pub trait SearchApi: Send + Sync {
    async fn submit(&self, tickets: &[(TicketId, Ticket)]) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base(&self) -> &str;
    fn continuous_paper_limit(&self) -> usize;
}
