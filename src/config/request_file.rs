use crate::core::engine::TicketSpec;
use crate::domain::model::{Paper, SelectionMode};
use crate::utils::error::{Result, SearchError};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A saved batch of ticket definitions, the file-based counterpart of the
/// example requests the web UI ships with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestFile {
    pub name: Option<String>,
    #[serde(rename = "ticket")]
    pub tickets: Vec<TicketEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketEntry {
    pub terms: Vec<String>,
    pub mode: SelectionMode,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    #[serde(default)]
    pub papers: Vec<Paper>,
}

impl RequestFile {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let file: RequestFile = toml::from_str(content)?;
        file.validate()?;
        Ok(file)
    }

    pub fn ticket_specs(&self) -> Vec<TicketSpec> {
        self.tickets
            .iter()
            .map(|entry| TicketSpec {
                terms: entry
                    .terms
                    .iter()
                    .map(|term| term.trim().to_string())
                    .filter(|term| !term.is_empty())
                    .collect(),
                mode: entry.mode,
                years: (entry.start_year, entry.end_year),
                papers: entry.papers.clone(),
            })
            .collect()
    }
}

impl Validate for RequestFile {
    fn validate(&self) -> Result<()> {
        if self.tickets.is_empty() {
            return Err(SearchError::ConfigError {
                message: "Request file defines no tickets".to_string(),
            });
        }
        for (index, entry) in self.tickets.iter().enumerate() {
            if entry.terms.iter().all(|term| term.trim().is_empty()) {
                return Err(SearchError::ConfigError {
                    message: format!("Ticket {} has no usable terms", index + 1),
                });
            }
            if entry.mode == SelectionMode::Custom && entry.papers.is_empty() {
                tracing::warn!(
                    "Ticket {} is custom with no papers; its range degrades to the full corpus span",
                    index + 1
                );
            }
        }
        Ok(())
    }
}
