use crate::domain::model::Ticket;

/// Character budget for the collapsed blurb. Accounting runs over RAW item
/// lengths, not the quoted rendering: the quotes and separators are free.
/// Lengths are counted in characters, so accented titles cost what they read.
const BLURB_BUDGET: usize = 28;

/// A length-bounded rendering of a term or paper-title list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blurb {
    /// The quoted, comma-joined prefix that fits the budget.
    pub visible: String,
    /// Present when items were held back for an expand control.
    pub remainder: Option<BlurbRemainder>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlurbRemainder {
    /// How many items the collapsed view hides.
    pub hidden: usize,
    /// The full quoted, comma-joined list, kept around for expansion.
    pub full: String,
}

/// Summarize an ordered item list into a budget-bounded blurb.
///
/// The cut always lands on an item boundary: the visible prefix ends at the
/// highest index whose cumulative raw length is still under the budget, and
/// the first item is always kept even when it blows the budget on its own.
pub fn summarize<S: AsRef<str>>(items: &[S]) -> Blurb {
    if items.is_empty() {
        return Blurb {
            visible: String::new(),
            remainder: None,
        };
    }

    let last_kept = highest_index_under_budget(items);
    let hidden = items.len() - last_kept - 1;
    if hidden > 0 {
        Blurb {
            visible: quote_join(&items[..=last_kept]),
            remainder: Some(BlurbRemainder {
                hidden,
                full: quote_join(items),
            }),
        }
    } else {
        Blurb {
            visible: quote_join(items),
            remainder: None,
        }
    }
}

fn highest_index_under_budget<S: AsRef<str>>(items: &[S]) -> usize {
    let mut combined_length = 0;
    let mut highest_index = 0;
    for (index, item) in items.iter().enumerate() {
        combined_length += item.as_ref().chars().count();
        if combined_length < BLURB_BUDGET {
            highest_index = index;
        }
    }
    highest_index
}

fn quote_join<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| format!("\"{}\"", item.as_ref()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// One-line human label for a ticket. The "all papers" fallback for an empty
/// paper list lives here, not in the summarizer.
pub fn ticket_label(ticket: &Ticket) -> String {
    let terms = collapse(&summarize(&ticket.terms));
    let papers = if ticket.papers.is_empty() {
        "all papers".to_string()
    } else {
        let titles: Vec<&str> = ticket.papers.iter().map(|p| p.title.as_str()).collect();
        collapse(&summarize(&titles))
    };
    format!(
        "Occurrences of {} in {} from {} to {}",
        terms, papers, ticket.date_range.0, ticket.date_range.1
    )
}

fn collapse(blurb: &Blurb) -> String {
    match &blurb.remainder {
        Some(remainder) => format!("{} (+{} more)", blurb.visible, remainder.hidden),
        None => blurb.visible.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Paper;

    #[test]
    fn everything_under_budget_joins_with_no_remainder() {
        // Combined raw length 20, under the 28-character budget.
        let blurb = summarize(&["brazza", "malamine", "congo"]);
        assert_eq!(blurb.visible, "\"brazza\", \"malamine\", \"congo\"");
        assert!(blurb.remainder.is_none());
    }

    #[test]
    fn empty_list_yields_empty_visible() {
        let blurb = summarize::<&str>(&[]);
        assert_eq!(blurb.visible, "");
        assert!(blurb.remainder.is_none());
    }

    #[test]
    fn cut_lands_on_the_last_item_under_budget() {
        // Cumulative raw lengths run 10, 20, 30; the third item crosses 28.
        let blurb = summarize(&["aaaaaaaaaa", "bbbbbbbbbb", "cccccccccc"]);
        assert_eq!(blurb.visible, "\"aaaaaaaaaa\", \"bbbbbbbbbb\"");
        let remainder = blurb.remainder.unwrap();
        assert_eq!(remainder.hidden, 1);
        assert_eq!(
            remainder.full,
            "\"aaaaaaaaaa\", \"bbbbbbbbbb\", \"cccccccccc\""
        );
    }

    #[test]
    fn budget_uses_raw_not_quoted_lengths() {
        // Quoted lengths would cross the budget at the second item; raw
        // lengths (9 + 9 + 9 = 27) stay under it, so nothing is hidden.
        let blurb = summarize(&["aaaaaaaaa", "bbbbbbbbb", "ccccccccc"]);
        assert!(blurb.remainder.is_none());
    }

    #[test]
    fn budget_counts_characters_not_bytes() {
        // Thirteen accented characters (26 bytes) plus two more: 15 characters
        // in total, well under budget, so nothing may be hidden.
        let blurb = summarize(&["ééééééééééééé", "xy"]);
        assert_eq!(blurb.visible, "\"ééééééééééééé\", \"xy\"");
        assert!(blurb.remainder.is_none());
    }

    #[test]
    fn first_item_is_kept_even_when_over_budget() {
        let blurb = summarize(&["an unreasonably long first term", "b"]);
        assert_eq!(blurb.visible, "\"an unreasonably long first term\"");
        assert_eq!(blurb.remainder.unwrap().hidden, 1);
    }

    #[test]
    fn remainder_counts_every_excluded_item() {
        let blurb = summarize(&["aaaaaaaaaaaaaaaaaaaaaaaaaaaa", "b", "c", "d"]);
        assert_eq!(blurb.remainder.unwrap().hidden, 3);
    }

    #[test]
    fn label_falls_back_to_all_papers() {
        let ticket = Ticket {
            terms: vec!["brazza".to_string()],
            papers: vec![],
            date_range: (1499, 2020),
        };
        assert_eq!(
            ticket_label(&ticket),
            "Occurrences of \"brazza\" in all papers from 1499 to 2020"
        );
    }

    #[test]
    fn label_uses_paper_titles() {
        let ticket = Ticket {
            terms: vec!["congo".to_string()],
            papers: vec![Paper::new("A", "Le Temps", 1861, 1942)],
            date_range: (1890, 1920),
        };
        assert_eq!(
            ticket_label(&ticket),
            "Occurrences of \"congo\" in \"Le Temps\" from 1890 to 1920"
        );
    }
}
