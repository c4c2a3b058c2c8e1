//! Suggestion filtering.

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};
use regex::RegexBuilder;

use super::OptionItem;

/// How typed text selects suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Case-insensitive substring match, the reference widget's behavior.
    #[default]
    Substring,
    /// Fuzzy scoring; best matches first.
    Fuzzy,
}

/// Indices of the options matching `query`, in presentation order.
/// An empty query matches everything in source order.
pub fn filter_options(options: &[OptionItem], query: &str, mode: FilterMode) -> Vec<usize> {
    if query.is_empty() {
        return (0..options.len()).collect();
    }
    match mode {
        FilterMode::Substring => substring_filter(options, query),
        FilterMode::Fuzzy => fuzzy_filter(options, query),
    }
}

fn substring_filter(options: &[OptionItem], query: &str) -> Vec<usize> {
    // The query is escaped into a literal pattern; only the case folding is
    // left to the regex engine.
    let matcher = RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build();
    match matcher {
        Ok(re) => options
            .iter()
            .enumerate()
            .filter(|(_, option)| re.is_match(&option.label))
            .map(|(index, _)| index)
            .collect(),
        Err(_) => {
            let needle = query.to_lowercase();
            options
                .iter()
                .enumerate()
                .filter(|(_, option)| option.label.to_lowercase().contains(&needle))
                .map(|(index, _)| index)
                .collect()
        }
    }
}

/// Fuzzy matches sorted by score (highest first).
fn fuzzy_filter(options: &[OptionItem], query: &str) -> Vec<usize> {
    let mut matcher = Matcher::new(Config::DEFAULT);
    let pattern = Pattern::new(
        query,
        CaseMatching::Ignore,
        Normalization::Smart,
        AtomKind::Fuzzy,
    );

    let mut matches: Vec<(usize, u32)> = options
        .iter()
        .enumerate()
        .filter_map(|(index, option)| {
            let mut buf = Vec::new();
            let haystack = Utf32Str::new(&option.label, &mut buf);
            pattern
                .score(haystack, &mut matcher)
                .map(|score| (index, score))
        })
        .collect();

    matches.sort_by(|a, b| b.1.cmp(&a.1));
    matches.into_iter().map(|(index, _)| index).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(labels: &[&str]) -> Vec<OptionItem> {
        labels
            .iter()
            .map(|label| OptionItem {
                value: label.to_lowercase(),
                label: label.to_string(),
            })
            .collect()
    }

    #[test]
    fn substring_is_case_insensitive() {
        let opts = options(&["Apple", "Banana", "Cherry"]);
        assert_eq!(filter_options(&opts, "an", FilterMode::Substring), vec![1]);
        assert_eq!(filter_options(&opts, "APP", FilterMode::Substring), vec![0]);
    }

    #[test]
    fn substring_treats_query_as_literal() {
        let opts = options(&["a.c", "abc"]);
        assert_eq!(filter_options(&opts, "a.c", FilterMode::Substring), vec![0]);
    }

    #[test]
    fn empty_query_returns_all() {
        let opts = options(&["Apple", "Banana"]);
        assert_eq!(filter_options(&opts, "", FilterMode::Fuzzy), vec![0, 1]);
    }

    #[test]
    fn fuzzy_matches_scattered_letters() {
        let opts = options(&["Minneapolis", "Boston"]);
        let result = filter_options(&opts, "mnpls", FilterMode::Fuzzy);
        assert_eq!(result, vec![0]);
    }
}
