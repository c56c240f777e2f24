use chrono::{Datelike, Duration, Local, NaiveDate};
use std::fmt;

/// The `[from, to]` range of the current week, Monday through today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateWindow {
    pub fn ending_on(today: NaiveDate) -> Self {
        let since_monday = i64::from(today.weekday().num_days_from_monday());
        Self {
            from: today - Duration::days(since_monday),
            to: today,
        }
    }

    pub fn current() -> Self {
        Self::ending_on(Local::now().date_naive())
    }

    pub fn from_param(&self) -> String {
        self.from.format("%Y-%m-%d").to_string()
    }

    pub fn to_param(&self) -> String {
        self.to.format("%Y-%m-%d").to_string()
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.from_param(), self.to_param())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn test_from_is_always_a_monday() {
        let start = NaiveDate::from_ymd_opt(2023, 12, 1).unwrap();
        for offset in 0..120 {
            let today = start + Duration::days(offset);
            let window = DateWindow::ending_on(today);
            assert_eq!(window.from.weekday(), Weekday::Mon, "today = {}", today);
            assert_eq!(window.to, today);
            assert!(window.from <= window.to);
            assert!((window.to - window.from).num_days() < 7);
        }
    }

    #[test]
    fn test_monday_window_is_a_single_day() {
        let monday = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let window = DateWindow::ending_on(monday);
        assert_eq!(window.from, window.to);
    }

    #[test]
    fn test_params() {
        let sunday = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let window = DateWindow::ending_on(sunday);
        assert_eq!(window.from_param(), "2024-03-04");
        assert_eq!(window.to_param(), "2024-03-10");
        assert_eq!(window.to_string(), "2024-03-04 to 2024-03-10");
    }
}
