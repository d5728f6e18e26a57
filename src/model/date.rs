//! Calendar days, months, and month ranges.

use std::fmt;

use chrono::{Datelike, Local, NaiveDate};

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y"];

/// The day an entry happened on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

impl Date {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Dates should be written as YYYY-MM-DD, DD/MM/YYYY or DD-MM-YYYY";

    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
            .map(Self)
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    pub fn month(&self) -> Month {
        Month {
            year: self.0.year(),
            month: self.0.month(),
        }
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// A calendar month, used as the period for statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Months should be written as YYYY-MM or MM/YYYY";

    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    pub fn current() -> Self {
        Date::today().month()
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let (year, month) = if let Some((month, year)) = trimmed.split_once('/') {
            (year, month)
        } else {
            trimmed.split_once('-')?
        };
        if year.len() != 4 || month.is_empty() || month.len() > 2 {
            return None;
        }
        let year: i32 = year.parse().ok()?;
        let month: u32 = month.parse().ok()?;
        Self::new(year, month)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn contains(&self, date: &Date) -> bool {
        date.month() == *self
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match NaiveDate::from_ymd_opt(self.year, self.month, 1) {
            Some(first) => write!(f, "{}", first.format("%B %Y")),
            None => write!(f, "{:04}-{:02}", self.year, self.month),
        }
    }
}

/// An inclusive range of months, used as the period for statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    start: Month,
    end: Month,
}

impl Period {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Periods should be a month, or a start and end month separated by a comma, \
e.g. 2019-09,2019-11. The start must not be after the end";

    pub fn new(start: Month, end: Month) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    pub fn current() -> Self {
        Month::current().into()
    }

    /// `MONTH` or `START,END`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.split_once(',') {
            Some((start, end)) => Self::new(Month::parse(start)?, Month::parse(end)?),
            None => Month::parse(raw).map(Self::from),
        }
    }

    pub fn start(&self) -> Month {
        self.start
    }

    pub fn end(&self) -> Month {
        self.end
    }

    pub fn contains(&self, date: &Date) -> bool {
        (self.start..=self.end).contains(&date.month())
    }
}

impl From<Month> for Period {
    fn from(month: Month) -> Self {
        Self {
            start: month,
            end: month,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{} to {}", self.start, self.end)
        }
    }
}

/// A date criterion given to `find`: either one day or a whole month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateQuery {
    Day(Date),
    Month(Month),
}

impl DateQuery {
    pub fn parse(raw: &str) -> Option<Self> {
        Date::parse(raw)
            .map(DateQuery::Day)
            .or_else(|| Month::parse(raw).map(DateQuery::Month))
    }

    pub fn matches(&self, date: &Date) -> bool {
        match self {
            DateQuery::Day(day) => day == date,
            DateQuery::Month(month) => month.contains(date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_all_date_formats() {
        let expected = Date::from_ymd(2019, 10, 12).unwrap();
        assert_eq!(Date::parse("2019-10-12"), Some(expected));
        assert_eq!(Date::parse("12/10/2019"), Some(expected));
        assert_eq!(Date::parse(" 12-10-2019 "), Some(expected));
        assert_eq!(expected.to_string(), "2019-10-12");
    }

    #[test]
    fn rejects_impossible_dates() {
        assert!(Date::parse("2019-02-30").is_none());
        assert!(Date::parse("yesterday").is_none());
        assert!(Date::parse("").is_none());
    }

    #[test]
    fn months_parse_both_orders() {
        let october = Month::new(2019, 10).unwrap();
        assert_eq!(Month::parse("2019-10"), Some(october));
        assert_eq!(Month::parse("10/2019"), Some(october));
        assert_eq!(Month::parse("2019-13"), None);
        assert_eq!(Month::parse("19-10"), None);
        assert_eq!(october.to_string(), "October 2019");
    }

    #[test]
    fn periods_span_inclusive_month_ranges() {
        let period = Period::parse("2019-09, 11/2019").unwrap();
        assert_eq!(period.start(), Month::new(2019, 9).unwrap());
        assert_eq!(period.end(), Month::new(2019, 11).unwrap());
        assert!(period.contains(&Date::from_ymd(2019, 9, 1).unwrap()));
        assert!(period.contains(&Date::from_ymd(2019, 11, 30).unwrap()));
        assert!(!period.contains(&Date::from_ymd(2019, 12, 1).unwrap()));
        assert!(!period.contains(&Date::from_ymd(2019, 8, 31).unwrap()));
        assert_eq!(period.to_string(), "September 2019 to November 2019");

        let single = Period::parse("2019-10").unwrap();
        assert_eq!(single, Period::from(Month::new(2019, 10).unwrap()));
        assert_eq!(single.to_string(), "October 2019");
    }

    #[test]
    fn periods_reject_reversed_or_partial_ranges() {
        assert_eq!(Period::parse("2019-11,2019-09"), None);
        assert_eq!(Period::parse("2019-09,"), None);
        assert_eq!(Period::parse("2019-09,2019-10,2019-11"), None);
    }

    #[test]
    fn date_query_prefers_full_dates() {
        let day = Date::from_ymd(2019, 10, 12).unwrap();
        let other_day = Date::from_ymd(2019, 10, 30).unwrap();
        let query = DateQuery::parse("2019-10-12").unwrap();
        assert!(query.matches(&day));
        assert!(!query.matches(&other_day));

        let month_query = DateQuery::parse("10/2019").unwrap();
        assert!(month_query.matches(&day));
        assert!(month_query.matches(&other_day));
    }
}
