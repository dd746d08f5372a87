use crate::domain::model::{Paper, Ticket, TicketId};
use crate::domain::ports::{Catalog, SearchApi};
use crate::utils::error::{Result, SearchError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use url::Url;

/// Paper record as the archive API spells it (camelCase keys).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WirePaper {
    code: String,
    title: String,
    start_date: i32,
    end_date: i32,
}

impl From<WirePaper> for Paper {
    fn from(wire: WirePaper) -> Self {
        Paper {
            code: wire.code,
            title: wire.title,
            start_date: wire.start_date,
            end_date: wire.end_date,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContinuousPapersResponse {
    paper_name_codes: Vec<WirePaper>,
}

/// Ticket as the search API expects it on submission.
#[derive(Debug, Serialize)]
struct WireTicket<'a> {
    terms: &'a [String],
    #[serde(rename = "papersAndCodes")]
    papers_and_codes: Vec<WireTicketPaper<'a>>,
    #[serde(rename = "dateRange")]
    date_range: (i32, i32),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WireTicketPaper<'a> {
    code: &'a str,
    title: &'a str,
    start_date: i32,
    end_date: i32,
}

#[derive(Debug, Serialize)]
struct InitRequest<'a> {
    tickets: BTreeMap<String, WireTicket<'a>>,
}

#[derive(Debug, Deserialize)]
struct InitResponse {
    taskid: String,
}

/// Archive API client; implements both boundary ports over one base URL.
#[derive(Debug, Clone)]
pub struct ArchiveApiClient {
    base: Url,
    client: Client,
}

impl ArchiveApiClient {
    pub fn new(base: &str) -> Result<Self> {
        let base = Url::parse(base).map_err(|e| SearchError::ConfigError {
            message: format!("Invalid API base URL '{}': {}", base, e),
        })?;
        Ok(Self {
            base,
            client: Client::new(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base.join(path).map_err(|e| SearchError::ConfigError {
            message: format!("Invalid API path '{}': {}", path, e),
        })
    }
}

impl Catalog for ArchiveApiClient {
    async fn papers_in_range(
        &self,
        start_year: i32,
        end_year: i32,
        limit: usize,
    ) -> Result<Vec<Paper>> {
        let mut url = self.endpoint("api/continuousPapers")?;
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string())
            .append_pair("startYear", &start_year.to_string())
            .append_pair("endYear", &end_year.to_string());

        tracing::debug!("Fetching continuous papers: {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        let payload: ContinuousPapersResponse = response.json().await?;
        Ok(payload.paper_name_codes.into_iter().map(Paper::from).collect())
    }
}

#[async_trait]
impl SearchApi for ArchiveApiClient {
    async fn submit(&self, tickets: &[(TicketId, Ticket)]) -> Result<String> {
        let body = InitRequest {
            tickets: tickets
                .iter()
                .map(|(id, ticket)| {
                    let wire = WireTicket {
                        terms: &ticket.terms,
                        papers_and_codes: ticket
                            .papers
                            .iter()
                            .map(|p| WireTicketPaper {
                                code: &p.code,
                                title: &p.title,
                                start_date: p.start_date,
                                end_date: p.end_date,
                            })
                            .collect(),
                        date_range: ticket.date_range,
                    };
                    (id.to_string(), wire)
                })
                .collect(),
        };

        let url = self.endpoint("init")?;
        tracing::debug!("Submitting {} ticket(s) to {}", tickets.len(), url);
        let response = self.client.post(url).json(&body).send().await?;
        let response = response.error_for_status()?;
        let payload: InitResponse = response.json().await?;
        if payload.taskid.is_empty() {
            return Err(SearchError::ApiPayloadError {
                message: "Submission response carried an empty task id".to_string(),
            });
        }
        Ok(payload.taskid)
    }
}
