use crate::core::date_range;
use crate::core::selection::SelectionStore;
use crate::domain::model::Ticket;
use crate::utils::error::Result;

/// Split a comma-separated term box into trimmed, non-empty terms. Order is
/// preserved; duplicates are allowed (the first term is treated as the active
/// one elsewhere).
pub fn split_terms(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build a ticket from the store's active mode. Papers and the raw range are
/// taken from that mode's buffers; the result is a value copy, so editing the
/// store afterwards never reaches a built ticket.
///
/// Terms must already be trimmed; the builder does not re-trim.
pub fn build_ticket(terms: &[String], store: &SelectionStore) -> Result<Ticket> {
    let mode = store.mode();
    let papers = store.papers_for(mode);
    let date_range = date_range::resolve(store.raw_range_for(mode), mode, papers)?;
    Ok(Ticket {
        terms: terms.to_vec(),
        papers: papers.to_vec(),
        date_range,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Paper, SelectionMode};

    #[test]
    fn split_terms_trims_and_drops_empties() {
        assert_eq!(
            split_terms(" brazza , malamine,, congo "),
            vec!["brazza", "malamine", "congo"]
        );
        assert!(split_terms("  ,  ").is_empty());
    }

    #[test]
    fn builds_from_the_active_mode_only() {
        let mut store = SelectionStore::new();
        store.set_continuous(vec![Paper::new("cont", "Continuous Paper", 1880, 1930)]);
        store.add_custom(Paper::new("cust", "Custom Paper", 1850, 1900));
        store.set_mode(SelectionMode::Custom);

        let terms = vec!["brazza".to_string()];
        let ticket = build_ticket(&terms, &store).unwrap();

        assert_eq!(ticket.papers.len(), 1);
        assert_eq!(ticket.papers[0].code, "cust");
        assert_eq!(ticket.date_range, (1850, 1900));
    }

    #[test]
    fn full_corpus_ticket_has_no_papers() {
        let mut store = SelectionStore::new();
        store.add_custom(Paper::new("cust", "Custom Paper", 1850, 1900));
        store.set_mode(SelectionMode::FullCorpus);

        let ticket = build_ticket(&["congo".to_string()], &store).unwrap();
        assert!(ticket.papers.is_empty());
        assert_eq!(ticket.date_range, (1499, 2020));
    }

    #[test]
    fn later_store_edits_do_not_alias_a_built_ticket() {
        let mut store = SelectionStore::new();
        store.add_custom(Paper::new("A", "Paper A", 1850, 1900));
        store.set_mode(SelectionMode::Custom);

        let ticket = build_ticket(&["brazza".to_string()], &store).unwrap();
        store.add_custom(Paper::new("B", "Paper B", 1700, 2000));
        store.set_raw_range(SelectionMode::Custom, (Some(1750), None));

        assert_eq!(ticket.papers.len(), 1);
        assert_eq!(ticket.date_range, (1850, 1900));
    }
}
