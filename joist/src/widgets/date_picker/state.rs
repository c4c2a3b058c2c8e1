//! Date picker state projection and calendar arithmetic.

use chrono::{Datelike, Days, NaiveDate};
use joist_derive::Options;
use paperdom::{Document, FromAttrs};

use crate::behavior::{collect_matching, has_part};
use crate::error::{Error, Result};

/// Root-level configuration attributes.
#[derive(Options, Debug, Default)]
pub struct DatePickerOptions {
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
    /// "Today" is injected by the host so behavior stays deterministic.
    pub today: Option<NaiveDate>,
}

/// State of one date picker instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePickerState {
    pub root: String,
    pub input: String,
    pub button: String,
    pub calendar: String,
    /// First day of the displayed month.
    pub displayed: NaiveDate,
    pub selected: Option<NaiveDate>,
    pub today: NaiveDate,
    pub min: Option<NaiveDate>,
    pub max: Option<NaiveDate>,
}

impl DatePickerState {
    pub fn read(doc: &Document, root: &str) -> Result<Self> {
        let root_el = doc
            .get(root)
            .ok_or_else(|| Error::UnknownElement(root.to_string()))?;

        let input = collect_matching(root_el, |el| has_part(el, super::INPUT))
            .into_iter()
            .next()
            .ok_or_else(|| Error::MissingPart {
                widget: root.to_string(),
                part: super::INPUT,
            })?;
        let button = collect_matching(root_el, |el| has_part(el, super::BUTTON))
            .into_iter()
            .next()
            .ok_or_else(|| Error::MissingPart {
                widget: root.to_string(),
                part: super::BUTTON,
            })?;
        let calendar = collect_matching(root_el, |el| el.has_class(super::CLASS_CALENDAR))
            .into_iter()
            .next()
            .ok_or_else(|| Error::MissingPart {
                widget: root.to_string(),
                part: "calendar",
            })?;

        let options = DatePickerOptions::from_attrs(root_el);
        let selected: Option<NaiveDate> = root_el
            .get_attr(super::VALUE_ATTR)
            .and_then(|value| value.parse().ok());
        let today = options.today.or(selected).unwrap_or_default();

        let displayed_anchor = doc
            .get(&calendar)
            .and_then(|el| el.get_attr("data-displayed"))
            .and_then(|value| value.parse().ok())
            .or(selected)
            .unwrap_or(today);

        Ok(Self {
            root: root.to_string(),
            input,
            button,
            calendar,
            displayed: first_of_month(displayed_anchor),
            selected,
            today,
            min: options.min_date,
            max: options.max_date,
        })
    }

    /// The date whose grid cell carries the focus marker.
    pub fn focus_date(&self, doc: &Document) -> NaiveDate {
        doc.get(&self.calendar)
            .and_then(|el| el.get_attr("data-focus"))
            .and_then(|value| value.parse().ok())
            .unwrap_or_else(|| self.default_focus())
    }

    /// Selected date first, today when it falls in the displayed month, the
    /// 1st otherwise.
    pub fn default_focus(&self) -> NaiveDate {
        if let Some(selected) = self.selected {
            return selected;
        }
        if first_of_month(self.today) == self.displayed {
            self.today
        } else {
            self.displayed
        }
    }

    /// Show the month containing `date`.
    pub fn display_month_of(&mut self, date: NaiveDate) {
        self.displayed = first_of_month(date);
    }

    pub fn in_displayed_month(&self, date: NaiveDate) -> bool {
        first_of_month(date) == self.displayed
    }

    pub fn in_range(&self, date: NaiveDate) -> bool {
        self.min.is_none_or(|min| date >= min) && self.max.is_none_or(|max| date <= max)
    }

    pub fn clamp(&self, date: NaiveDate) -> NaiveDate {
        let mut date = date;
        if let Some(min) = self.min {
            date = date.max(min);
        }
        if let Some(max) = self.max {
            date = date.min(max);
        }
        date
    }

    pub fn is_open(&self, doc: &Document) -> bool {
        doc.get(&self.calendar).is_some_and(|el| !el.is_hidden())
    }

    /// ID of the grid cell for a date.
    pub fn cell_id(&self, date: NaiveDate) -> String {
        format!("{}__date-{date}", self.root)
    }

    pub fn month_label(&self) -> String {
        format!("{} {}", month_name(self.displayed.month()), self.displayed.year())
    }
}

pub(super) fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Move by whole months with day-number rollover: the day keeps its number,
/// and numbers past the end of the target month spill into the following one
/// (Jan 31 + 1 month = Mar 3), matching `Date` arithmetic in the reference
/// implementation's runtime.
pub fn shift_months(date: NaiveDate, delta: i32) -> NaiveDate {
    let months = date.year() * 12 + date.month0() as i32 + delta;
    let (year, month0) = (months.div_euclid(12), months.rem_euclid(12));
    let Some(first) = NaiveDate::from_ymd_opt(year, month0 as u32 + 1, 1) else {
        return date;
    };
    first
        .checked_add_days(Days::new(u64::from(date.day()) - 1))
        .unwrap_or(date)
}

pub fn shift_years(date: NaiveDate, delta: i32) -> NaiveDate {
    shift_months(date, delta * 12)
}

/// Sunday-based start of the week containing `date`.
pub(super) fn start_of_week(date: NaiveDate) -> NaiveDate {
    let back = date.weekday().num_days_from_sunday();
    date.checked_sub_days(Days::new(u64::from(back))).unwrap_or(date)
}

pub(super) fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn shift_months_rolls_over_short_months() {
        assert_eq!(shift_months(date(2025, 1, 31), 1), date(2025, 3, 3));
        assert_eq!(shift_months(date(2024, 1, 31), 1), date(2024, 3, 2));
        assert_eq!(shift_months(date(2025, 3, 15), 1), date(2025, 4, 15));
        assert_eq!(shift_months(date(2025, 1, 15), -1), date(2024, 12, 15));
    }

    #[test]
    fn shift_years_rolls_leap_day() {
        assert_eq!(shift_years(date(2024, 2, 29), 1), date(2025, 3, 1));
        assert_eq!(shift_years(date(2024, 3, 15), 1), date(2025, 3, 15));
    }

    #[test]
    fn week_starts_on_sunday() {
        // 2025-03-15 is a Saturday.
        assert_eq!(start_of_week(date(2025, 3, 15)), date(2025, 3, 9));
        assert_eq!(start_of_week(date(2025, 3, 9)), date(2025, 3, 9));
    }
}
