//! Comparator selection and row ordering.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::Serialize;

/// Sort direction of a column, reflected into `aria-sort`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }

    /// unsorted → ascending → descending → unsorted.
    pub fn cycle(current: Option<SortDirection>) -> Option<SortDirection> {
        match current {
            None => Some(SortDirection::Ascending),
            Some(SortDirection::Ascending) => Some(SortDirection::Descending),
            Some(SortDirection::Descending) => None,
        }
    }
}

/// How a column's cell values compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    Lexicographic,
    Numeric,
    Date,
}

/// Pick the comparator for a sort operation: declared dates win, then a
/// column where every value parses as a number, then plain text. Chosen once
/// per sort operation, never per comparison.
pub fn select_comparator(values: &[String], declared_type: Option<&str>) -> Comparator {
    if declared_type == Some("date") {
        return Comparator::Date;
    }
    if !values.is_empty() && values.iter().all(|v| v.trim().parse::<f64>().is_ok()) {
        return Comparator::Numeric;
    }
    Comparator::Lexicographic
}

pub(super) fn compare(a: &str, b: &str, comparator: Comparator) -> Ordering {
    match comparator {
        Comparator::Lexicographic => a.cmp(b),
        Comparator::Numeric => {
            let left: f64 = a.trim().parse().unwrap_or(f64::MAX);
            let right: f64 = b.trim().parse().unwrap_or(f64::MAX);
            left.partial_cmp(&right).unwrap_or(Ordering::Equal)
        }
        Comparator::Date => parse_date(a).cmp(&parse_date(b)),
    }
}

/// ISO first, then the external `MM/DD/YYYY` form. Unparsable cells sort
/// before everything.
pub(super) fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    value
        .parse()
        .ok()
        .or_else(|| NaiveDate::parse_from_str(value, "%m/%d/%Y").ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn numeric_only_when_every_cell_parses() {
        assert_eq!(
            select_comparator(&strings(&["10", "2", "33"]), None),
            Comparator::Numeric
        );
        assert_eq!(
            select_comparator(&strings(&["10", "n/a", "33"]), None),
            Comparator::Lexicographic
        );
        assert_eq!(select_comparator(&[], None), Comparator::Lexicographic);
    }

    #[test]
    fn declared_date_wins() {
        assert_eq!(
            select_comparator(&strings(&["10", "2"]), Some("date")),
            Comparator::Date
        );
    }

    #[test]
    fn numeric_compare_is_numeric_not_lexicographic() {
        assert_eq!(compare("10", "2", Comparator::Numeric), Ordering::Greater);
        assert_eq!(compare("10", "2", Comparator::Lexicographic), Ordering::Less);
    }

    #[test]
    fn date_compare_accepts_both_forms() {
        assert_eq!(
            compare("2025-01-02", "01/15/2025", Comparator::Date),
            Ordering::Less
        );
    }

    #[test]
    fn cycle_returns_to_unsorted() {
        let first = SortDirection::cycle(None);
        let second = SortDirection::cycle(first);
        let third = SortDirection::cycle(second);
        assert_eq!(first, Some(SortDirection::Ascending));
        assert_eq!(second, Some(SortDirection::Descending));
        assert_eq!(third, None);
    }
}
