use crate::domain::model::{Paper, RawYearRange, SelectionMode};

/// Key for removing a custom paper: the UI deletes bubbles by position, other
/// callers delete by archive code. Both are no-ops on a miss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveKey {
    Index(usize),
    Code(String),
}

/// Session-local store for the three paper-selection modes.
///
/// Each mode keeps its own paper list and its own editable year-range buffer;
/// switching the active mode never touches the others, so a user can build a
/// custom list, wander off, and come back to it intact.
#[derive(Debug, Clone, Default)]
pub struct SelectionStore {
    mode: SelectionMode,
    custom_papers: Vec<Paper>,
    continuous_papers: Vec<Paper>,
    continuous_range: RawYearRange,
    custom_range: RawYearRange,
    full_corpus_range: RawYearRange,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: SelectionMode) {
        self.mode = mode;
    }

    /// Add a paper to the custom set. Duplicate codes are ignored; the set is
    /// small, so a linear scan is the whole dedup story.
    pub fn add_custom(&mut self, paper: Paper) {
        if self.custom_papers.iter().any(|p| p.code == paper.code) {
            return;
        }
        self.custom_papers.push(paper);
    }

    pub fn remove_custom(&mut self, key: &RemoveKey) {
        match key {
            RemoveKey::Index(index) => {
                if *index < self.custom_papers.len() {
                    self.custom_papers.remove(*index);
                }
            }
            RemoveKey::Code(code) => {
                self.custom_papers.retain(|p| &p.code != code);
            }
        }
    }

    /// Replace the continuous list with whatever the catalog last returned.
    /// The store never fetches; it only holds the latest supplied list.
    pub fn set_continuous(&mut self, papers: Vec<Paper>) {
        self.continuous_papers = papers;
    }

    pub fn papers_for(&self, mode: SelectionMode) -> &[Paper] {
        match mode {
            SelectionMode::Continuous => &self.continuous_papers,
            SelectionMode::Custom => &self.custom_papers,
            SelectionMode::FullCorpus => &[],
        }
    }

    pub fn raw_range_for(&self, mode: SelectionMode) -> RawYearRange {
        match mode {
            SelectionMode::Continuous => self.continuous_range,
            SelectionMode::Custom => self.custom_range,
            SelectionMode::FullCorpus => self.full_corpus_range,
        }
    }

    pub fn set_raw_range(&mut self, mode: SelectionMode, range: RawYearRange) {
        match mode {
            SelectionMode::Continuous => self.continuous_range = range,
            SelectionMode::Custom => self.custom_range = range,
            SelectionMode::FullCorpus => self.full_corpus_range = range,
        }
    }

    pub fn custom_papers(&self) -> &[Paper] {
        &self.custom_papers
    }
}
