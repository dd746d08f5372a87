use crate::core::engine::TicketSpec;
use crate::core::ticket::split_terms;
use crate::domain::model::{Paper, SelectionMode};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, SearchError};
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "pressbox")]
#[command(about = "Assemble and submit occurrence-search tickets for a periodical archive")]
pub struct CliConfig {
    /// Base URL of the archive search API
    #[arg(long, default_value = "http://localhost:8000/")]
    pub api_base: String,

    /// Comma-separated search terms
    #[arg(long)]
    pub terms: String,

    /// Paper selection mode: continuous, custom, or full
    #[arg(long, default_value = "continuous")]
    pub mode: String,

    /// Low year of the search window (blank means the mode's default)
    #[arg(long)]
    pub start_year: Option<i32>,

    /// High year of the search window (blank means the mode's default)
    #[arg(long)]
    pub end_year: Option<i32>,

    /// Custom papers as code:startYear:endYear:title, repeatable
    #[arg(long = "paper", value_name = "CODE:START:END:TITLE")]
    pub papers: Vec<String>,

    /// Cap on papers fetched for the continuous mode
    #[arg(long, default_value = "2000")]
    pub paper_limit: usize,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn selection_mode(&self) -> Result<SelectionMode> {
        match self.mode.as_str() {
            "continuous" => Ok(SelectionMode::Continuous),
            "custom" => Ok(SelectionMode::Custom),
            "full" | "full_corpus" => Ok(SelectionMode::FullCorpus),
            other => Err(SearchError::InvalidConfigValueError {
                field: "mode".to_string(),
                value: other.to_string(),
                reason: "Expected one of: continuous, custom, full".to_string(),
            }),
        }
    }

    pub fn ticket_spec(&self) -> Result<TicketSpec> {
        Ok(TicketSpec {
            terms: split_terms(&self.terms),
            mode: self.selection_mode()?,
            years: (self.start_year, self.end_year),
            papers: self
                .papers
                .iter()
                .map(|entry| parse_paper_entry(entry))
                .collect::<Result<Vec<_>>>()?,
        })
    }
}

/// Parse a `code:startYear:endYear:title` paper argument. The title comes
/// last so it may contain colons.
fn parse_paper_entry(entry: &str) -> Result<Paper> {
    let invalid = |reason: &str| SearchError::InvalidConfigValueError {
        field: "paper".to_string(),
        value: entry.to_string(),
        reason: reason.to_string(),
    };

    let mut parts = entry.splitn(4, ':');
    let code = parts
        .next()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| invalid("Missing paper code"))?;
    let start_date = parts
        .next()
        .and_then(|s| s.parse::<i32>().ok())
        .ok_or_else(|| invalid("Start year must be a whole number"))?;
    let end_date = parts
        .next()
        .and_then(|s| s.parse::<i32>().ok())
        .ok_or_else(|| invalid("End year must be a whole number"))?;
    let title = parts
        .next()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| invalid("Missing paper title"))?;

    Ok(Paper::new(code, title, start_date, end_date))
}

impl ConfigProvider for CliConfig {
    fn api_base(&self) -> &str {
        &self.api_base
    }

    fn continuous_paper_limit(&self) -> usize {
        self.paper_limit
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_base", &self.api_base)?;
        validate_non_empty_string("terms", &self.terms)?;
        if split_terms(&self.terms).is_empty() {
            return Err(SearchError::InvalidConfigValueError {
                field: "terms".to_string(),
                value: self.terms.clone(),
                reason: "No usable terms after trimming".to_string(),
            });
        }
        self.selection_mode()?;
        validate_range("paper_limit", self.paper_limit, 1, 10_000)?;
        for entry in &self.papers {
            parse_paper_entry(entry)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig {
            api_base: "http://localhost:8000/".to_string(),
            terms: "brazza, malamine".to_string(),
            mode: "continuous".to_string(),
            start_year: None,
            end_year: None,
            papers: vec![],
            paper_limit: 2000,
            verbose: false,
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let config = CliConfig {
            mode: "everything".to_string(),
            ..base_config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn whitespace_terms_are_rejected() {
        let config = CliConfig {
            terms: " , , ".to_string(),
            ..base_config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn paper_entry_parses_with_colons_in_title() {
        let paper = parse_paper_entry("cb123:1861:1942:Le Temps: journal").unwrap();
        assert_eq!(paper.code, "cb123");
        assert_eq!(paper.start_date, 1861);
        assert_eq!(paper.end_date, 1942);
        assert_eq!(paper.title, "Le Temps: journal");
    }

    #[test]
    fn malformed_paper_entry_is_rejected() {
        assert!(parse_paper_entry("cb123:1861").is_err());
        assert!(parse_paper_entry("cb123:abc:1942:Title").is_err());
        assert!(parse_paper_entry(":1861:1942:Title").is_err());
    }

    #[test]
    fn spec_carries_split_terms_and_years() {
        let config = CliConfig {
            mode: "full".to_string(),
            start_year: Some(1600),
            ..base_config()
        };
        let spec = config.ticket_spec().unwrap();
        assert_eq!(spec.terms, vec!["brazza", "malamine"]);
        assert_eq!(spec.mode, SelectionMode::FullCorpus);
        assert_eq!(spec.years, (Some(1600), None));
    }
}
