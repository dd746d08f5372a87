use crate::domain::model::{Paper, RawYearRange, SelectionMode};
use crate::utils::error::{Result, SearchError};

/// Default window for the continuous-papers mode.
pub const CONTINUOUS_DEFAULT_RANGE: (i32, i32) = (1890, 1920);

/// Span of the full known corpus; also the clamp fallback when no custom
/// papers are selected.
pub const CORPUS_RANGE: (i32, i32) = (1499, 2020);

/// Min start date and max end date across the selected papers, degrading to
/// the full corpus span when nothing is selected.
pub fn paper_year_boundary(papers: &[Paper]) -> (i32, i32) {
    let mut min_year = CORPUS_RANGE.0;
    let mut max_year = CORPUS_RANGE.1;
    if !papers.is_empty() {
        min_year = papers.iter().map(|p| p.start_date).min().unwrap_or(min_year);
        max_year = papers.iter().map(|p| p.end_date).max().unwrap_or(max_year);
    }
    (min_year, max_year)
}

/// Resolve a raw (possibly blank-sided) year range into a concrete one.
///
/// Continuous and full-corpus modes fill blanks from fixed defaults. Custom
/// mode first clamps set values to the span actually covered by the selected
/// papers (low only moves up, high only moves down), then fills blanks from
/// the clamp bounds themselves.
///
/// A resolved range with low > high is a caller input error and is reported
/// as such, never reordered.
pub fn resolve(raw: RawYearRange, mode: SelectionMode, papers: &[Paper]) -> Result<(i32, i32)> {
    let (low, high) = match mode {
        SelectionMode::Continuous => fill_blanks(raw, CONTINUOUS_DEFAULT_RANGE),
        SelectionMode::Custom => {
            let bounds = paper_year_boundary(papers);
            fill_blanks(clamp_to_bounds(raw, bounds), bounds)
        }
        SelectionMode::FullCorpus => fill_blanks(raw, CORPUS_RANGE),
    };
    if low > high {
        return Err(SearchError::InvalidRangeOrder { low, high });
    }
    Ok((low, high))
}

fn clamp_to_bounds(raw: RawYearRange, (min_year, max_year): (i32, i32)) -> RawYearRange {
    let low = raw.0.map(|year| year.max(min_year));
    let high = raw.1.map(|year| year.min(max_year));
    (low, high)
}

fn fill_blanks(raw: RawYearRange, (low_default, high_default): (i32, i32)) -> (i32, i32) {
    (raw.0.unwrap_or(low_default), raw.1.unwrap_or(high_default))
}
