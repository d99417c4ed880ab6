use chrono::{Datelike, NaiveDate, Weekday};

/// Return the weekday of the given calendar date.
///
/// The date is treated as a date-only value in the proleptic Gregorian
/// calendar, never as an instant, so the same ISO date resolves to the same
/// weekday wherever the engine runs.
///
/// # Example
///```
/// use chrono::{NaiveDate, Weekday};
/// use roster_engine::domain::weekday::weekday_of;
/// let date = NaiveDate::from_ymd_opt(2026, 3, 4).unwrap();
/// assert_eq!(weekday_of(date), Weekday::Wed);
/// ```
pub fn weekday_of(date: NaiveDate) -> Weekday {
    date.weekday()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_dates() {
        let monday = NaiveDate::from_ymd_opt(2026, 2, 16).unwrap();
        assert_eq!(weekday_of(monday), Weekday::Mon);

        let wednesday = NaiveDate::from_ymd_opt(2026, 3, 4).unwrap();
        assert_eq!(weekday_of(wednesday), Weekday::Wed);

        let sunday = NaiveDate::from_ymd_opt(2026, 3, 8).unwrap();
        assert_eq!(weekday_of(sunday), Weekday::Sun);
    }

    #[test]
    fn consistent_across_weeks() {
        let first = NaiveDate::from_ymd_opt(2026, 2, 4).unwrap();
        let later = first + chrono::Duration::days(28);
        assert_eq!(weekday_of(first), weekday_of(later));
    }
}
