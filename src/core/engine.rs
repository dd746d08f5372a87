use crate::core::blurb;
use crate::core::collection::TicketCollection;
use crate::core::date_range;
use crate::core::selection::SelectionStore;
use crate::core::ticket::build_ticket;
use crate::domain::model::{Paper, RawYearRange, SelectionMode, Ticket};
use crate::domain::ports::{Catalog, SearchApi};
use crate::utils::error::{Result, SearchError};

/// Everything a ticket needs before resolution: the user's terms, the chosen
/// mode, the years as they were typed, and any hand-picked papers.
#[derive(Debug, Clone)]
pub struct TicketSpec {
    pub terms: Vec<String>,
    pub mode: SelectionMode,
    pub years: RawYearRange,
    pub papers: Vec<Paper>,
}

/// Drives the whole request workflow: resolve each spec into a ticket
/// (fetching continuous papers from the catalog where the mode calls for
/// them), collect the batch, and hand it to the search API.
pub struct RequestEngine<C: Catalog, A: SearchApi> {
    catalog: C,
    api: A,
    paper_limit: usize,
}

impl<C: Catalog, A: SearchApi> RequestEngine<C, A> {
    pub fn new(catalog: C, api: A, paper_limit: usize) -> Self {
        Self {
            catalog,
            api,
            paper_limit,
        }
    }

    pub async fn run(&self, specs: Vec<TicketSpec>) -> Result<String> {
        if specs.is_empty() {
            return Err(SearchError::ConfigError {
                message: "No tickets to submit".to_string(),
            });
        }

        let mut collection = TicketCollection::new();
        for spec in specs {
            let ticket = self.resolve_spec(spec).await?;
            tracing::info!("Ticket: {}", blurb::ticket_label(&ticket));
            collection.add(ticket);
        }

        tracing::info!("Submitting {} ticket(s)", collection.len());
        let task_id = self.api.submit(collection.as_slice()).await?;
        tracing::info!("Search accepted, task id: {}", task_id);
        Ok(task_id)
    }

    async fn resolve_spec(&self, spec: TicketSpec) -> Result<Ticket> {
        let mut store = SelectionStore::new();
        store.set_mode(spec.mode);
        store.set_raw_range(spec.mode, spec.years);
        for paper in spec.papers {
            store.add_custom(paper);
        }

        if spec.mode == SelectionMode::Continuous {
            let (start_year, end_year) =
                date_range::resolve(spec.years, SelectionMode::Continuous, &[])?;
            let papers = self
                .catalog
                .papers_in_range(start_year, end_year, self.paper_limit)
                .await?;
            tracing::debug!(
                "{} continuous papers for {} to {}",
                papers.len(),
                start_year,
                end_year
            );
            store.set_continuous(papers);
        }

        build_ticket(&spec.terms, &store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::TicketId;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct FixedCatalog {
        papers: Vec<Paper>,
        queried: Mutex<Vec<(i32, i32, usize)>>,
    }

    impl Catalog for FixedCatalog {
        async fn papers_in_range(
            &self,
            start_year: i32,
            end_year: i32,
            limit: usize,
        ) -> Result<Vec<Paper>> {
            self.queried.lock().unwrap().push((start_year, end_year, limit));
            Ok(self.papers.clone())
        }
    }

    struct RecordingApi {
        submitted: Mutex<Vec<Vec<(TicketId, Ticket)>>>,
    }

    #[async_trait]
    impl SearchApi for RecordingApi {
        async fn submit(&self, tickets: &[(TicketId, Ticket)]) -> Result<String> {
            self.submitted.lock().unwrap().push(tickets.to_vec());
            Ok("task-1".to_string())
        }
    }

    fn engine(papers: Vec<Paper>) -> RequestEngine<FixedCatalog, RecordingApi> {
        RequestEngine::new(
            FixedCatalog {
                papers,
                queried: Mutex::new(vec![]),
            },
            RecordingApi {
                submitted: Mutex::new(vec![]),
            },
            2000,
        )
    }

    #[tokio::test]
    async fn continuous_spec_queries_the_default_window_when_blank() {
        let engine = engine(vec![Paper::new("A", "Le Temps", 1861, 1942)]);
        let spec = TicketSpec {
            terms: vec!["brazza".to_string()],
            mode: SelectionMode::Continuous,
            years: (None, None),
            papers: vec![],
        };

        let task_id = engine.run(vec![spec]).await.unwrap();
        assert_eq!(task_id, "task-1");
        assert_eq!(
            engine.catalog.queried.lock().unwrap().as_slice(),
            &[(1890, 1920, 2000)]
        );

        let submitted = engine.api.submitted.lock().unwrap();
        let batch = &submitted[0];
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].1.papers[0].code, "A");
        assert_eq!(batch[0].1.date_range, (1890, 1920));
    }

    #[tokio::test]
    async fn full_corpus_spec_skips_the_catalog() {
        let engine = engine(vec![Paper::new("A", "Le Temps", 1861, 1942)]);
        let spec = TicketSpec {
            terms: vec!["congo".to_string()],
            mode: SelectionMode::FullCorpus,
            years: (None, None),
            papers: vec![],
        };

        engine.run(vec![spec]).await.unwrap();
        assert!(engine.catalog.queried.lock().unwrap().is_empty());

        let submitted = engine.api.submitted.lock().unwrap();
        assert!(submitted[0][0].1.papers.is_empty());
        assert_eq!(submitted[0][0].1.date_range, (1499, 2020));
    }

    #[tokio::test]
    async fn empty_batch_is_rejected_before_any_network_call() {
        let engine = engine(vec![]);
        let err = engine.run(vec![]).await.unwrap_err();
        assert!(matches!(err, SearchError::ConfigError { .. }));
        assert!(engine.api.submitted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn custom_spec_resolves_against_its_own_papers() {
        let engine = engine(vec![]);
        let spec = TicketSpec {
            terms: vec!["malamine".to_string()],
            mode: SelectionMode::Custom,
            years: (None, Some(1950)),
            papers: vec![Paper::new("B", "Le Matin", 1850, 1900)],
        };

        engine.run(vec![spec]).await.unwrap();
        let submitted = engine.api.submitted.lock().unwrap();
        assert_eq!(submitted[0][0].1.date_range, (1850, 1900));
    }
}
