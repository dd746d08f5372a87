use serde::{Deserialize, Serialize};

/// A catalogued periodical: unique archive code plus its known publication span.
/// Immutable once fetched from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
    pub code: String,
    pub title: String,
    pub start_date: i32,
    pub end_date: i32,
}

impl Paper {
    pub fn new(code: impl Into<String>, title: impl Into<String>, start_date: i32, end_date: i32) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            start_date,
            end_date,
        }
    }
}

/// One resolved search request unit: terms, papers, and a concrete year range.
/// Built by value; later edits to the working buffers never reach a built ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub terms: Vec<String>,
    pub papers: Vec<Paper>,
    pub date_range: (i32, i32),
}

/// Identifier minted for a ticket when it enters the collection. Never reused:
/// every add draws a fresh v4 UUID, including after removals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(pub uuid::Uuid);

impl TicketId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl std::fmt::Display for TicketId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// The three mutually exclusive ways a ticket's papers are chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// Papers supplied by the catalog for the queried date window; not user-editable.
    #[default]
    Continuous,
    /// Papers accumulated one at a time by the user.
    Custom,
    /// No paper restriction at all; the paper list is always empty.
    FullCorpus,
}

/// A year-range as the user left it: either side may still be blank.
pub type RawYearRange = (Option<i32>, Option<i32>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_mode_serializes_snake_case() {
        let json = serde_json::to_string(&SelectionMode::FullCorpus).unwrap();
        assert_eq!(json, "\"full_corpus\"");
    }

    #[test]
    fn paper_round_trips_through_json() {
        let paper = Paper::new("cb32895690j", "Le Temps", 1861, 1942);
        let json = serde_json::to_string(&paper).unwrap();
        let back: Paper = serde_json::from_str(&json).unwrap();
        assert_eq!(back, paper);
    }
}
