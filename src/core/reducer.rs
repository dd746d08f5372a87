use crate::domain::model::Paper;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::form_urlencoded;

/// Which slice of the corpus the contextual search runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorpusSource {
    Book,
    Periodical,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Date,
    Relevance,
}

impl CorpusSource {
    pub fn as_str(self) -> &'static str {
        match self {
            CorpusSource::Book => "book",
            CorpusSource::Periodical => "periodical",
            CorpusSource::All => "all",
        }
    }
}

impl FromStr for CorpusSource {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "book" => Ok(CorpusSource::Book),
            "periodical" => Ok(CorpusSource::Periodical),
            "all" => Ok(CorpusSource::All),
            _ => Err(()),
        }
    }
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Date => "date",
            SortOrder::Relevance => "relevance",
        }
    }
}

impl FromStr for SortOrder {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date" => Ok(SortOrder::Date),
            "relevance" => Ok(SortOrder::Relevance),
            _ => Err(()),
        }
    }
}

impl fmt::Display for CorpusSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Frozen fetch parameters for the results table, snapshotted on submit.
/// Transient: never serialized into the page URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableFetchParams {
    pub terms: Vec<String>,
    pub codes: Option<Vec<String>>,
    pub year_range: Option<(Option<i32>, Option<i32>)>,
    pub source: Option<CorpusSource>,
    pub link_term: Option<String>,
    pub link_distance: Option<u32>,
    pub limit: Option<u32>,
    pub sort: Option<SortOrder>,
}

/// The single active query context driving the contextual search page.
/// Distinct from the multi-ticket collection, but built from the same paper
/// and year-range primitives.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchState {
    pub terms: Option<String>,
    pub papers: Option<Vec<Paper>>,
    pub source: Option<CorpusSource>,
    pub limit: Option<u32>,
    pub cursor: Option<u32>,
    pub year_range: Option<(Option<i32>, Option<i32>)>,
    pub sort: Option<SortOrder>,
    pub link_term: Option<String>,
    pub link_distance: Option<u32>,
    pub table_fetch_params: Option<TableFetchParams>,
}

/// Everything the contextual search page can do to its state. Closed set;
/// the match in [`reduce`] is exhaustive by construction.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchAction {
    AddPaper(Paper),
    RemovePaper(String),
    SetSource(Option<CorpusSource>),
    SetLimit(Option<u32>),
    SetCursor(Option<u32>),
    SetContextRange(Option<(Option<i32>, Option<i32>)>),
    SetSort(Option<SortOrder>),
    SetLinkTerm(Option<String>),
    SetLinkDistance(Option<u32>),
    SetTerms(Option<String>),
    SetTableProps(Option<TableFetchParams>),
    ResetToInitialState(SearchState),
}

/// Pure state transition. No validation, no side effects: numeric-only year
/// input and non-negative link distances are the dispatcher's problem.
pub fn reduce(state: SearchState, action: SearchAction) -> SearchState {
    match action {
        SearchAction::AddPaper(paper) => SearchState {
            papers: Some(match state.papers {
                Some(mut papers) => {
                    papers.push(paper);
                    papers
                }
                None => vec![paper],
            }),
            ..state
        },
        SearchAction::RemovePaper(code) => SearchState {
            papers: state.papers.map(|papers| {
                papers.into_iter().filter(|p| p.code != code).collect()
            }),
            ..state
        },
        SearchAction::SetSource(source) => SearchState { source, ..state },
        SearchAction::SetLimit(limit) => SearchState { limit, ..state },
        SearchAction::SetCursor(cursor) => SearchState { cursor, ..state },
        SearchAction::SetContextRange(year_range) => SearchState { year_range, ..state },
        SearchAction::SetSort(sort) => SearchState { sort, ..state },
        SearchAction::SetLinkTerm(link_term) => SearchState { link_term, ..state },
        SearchAction::SetLinkDistance(link_distance) => SearchState {
            link_distance,
            ..state
        },
        SearchAction::SetTerms(terms) => SearchState { terms, ..state },
        SearchAction::SetTableProps(table_fetch_params) => SearchState {
            table_fetch_params,
            ..state
        },
        SearchAction::ResetToInitialState(initial) => initial,
    }
}

impl SearchState {
    /// Encode the deep-linkable fields as a URL query string. The paper list
    /// and table fetch params are transient and deliberately left out; the
    /// year range splits into `year` / `end_year`. A year range whose sides
    /// are both blank writes nothing and reads back as unset, so it is the
    /// one state the round trip normalizes rather than preserves.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if let Some(terms) = &self.terms {
            serializer.append_pair("terms", terms);
        }
        if let Some(source) = self.source {
            serializer.append_pair("source", source.as_str());
        }
        if let Some(limit) = self.limit {
            serializer.append_pair("limit", &limit.to_string());
        }
        if let Some(cursor) = self.cursor {
            serializer.append_pair("cursor", &cursor.to_string());
        }
        if let Some((low, high)) = self.year_range {
            if let Some(low) = low {
                serializer.append_pair("year", &low.to_string());
            }
            if let Some(high) = high {
                serializer.append_pair("end_year", &high.to_string());
            }
        }
        if let Some(sort) = self.sort {
            serializer.append_pair("sort", sort.as_str());
        }
        if let Some(link_term) = &self.link_term {
            serializer.append_pair("link_term", link_term);
        }
        if let Some(link_distance) = self.link_distance {
            serializer.append_pair("link_distance", &link_distance.to_string());
        }
        serializer.finish()
    }

    /// Rebuild state from a query string. Unknown keys and unparsable values
    /// are ignored rather than rejected; a shared link should load with as
    /// much of the query intact as possible.
    pub fn from_query_string(query: &str) -> Self {
        let mut state = SearchState::default();
        let mut year: Option<i32> = None;
        let mut end_year: Option<i32> = None;
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "terms" => state.terms = Some(value.into_owned()),
                "source" => state.source = value.parse().ok(),
                "limit" => state.limit = value.parse().ok(),
                "cursor" => state.cursor = value.parse().ok(),
                "year" => year = value.parse().ok(),
                "end_year" => end_year = value.parse().ok(),
                "sort" => state.sort = value.parse().ok(),
                "link_term" => state.link_term = Some(value.into_owned()),
                "link_distance" => state.link_distance = value.parse().ok(),
                _ => {}
            }
        }
        if year.is_some() || end_year.is_some() {
            state.year_range = Some((year, end_year));
        }
        state
    }
}
