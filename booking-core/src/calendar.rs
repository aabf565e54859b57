/// Booking horizon for the date step
///
/// The date input only offers days from tomorrow up to two calendar months
/// ahead. The collaborator never re-checks this range.

use chrono::{Duration, Months, NaiveDate};

/// How far ahead a table can be booked
pub const BOOKING_HORIZON_MONTHS: u32 = 2;

/// Wire and input format of reservation dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Inclusive range of bookable dates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

impl DateWindow {
    /// Window as seen on `today`: tomorrow through today + 2 months
    pub fn from_today(today: NaiveDate) -> Self {
        let min = today + Duration::days(1);
        // checked_add_months clamps to the last day of a shorter month
        let max = today
            .checked_add_months(Months::new(BOOKING_HORIZON_MONTHS))
            .unwrap_or(NaiveDate::MAX);
        Self { min, max }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.min <= date && date <= self.max
    }

    /// Parses an input value and keeps it only when inside the window
    pub fn accept(&self, value: &str) -> Option<NaiveDate> {
        let date = NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()?;
        self.contains(date).then_some(date)
    }

    /// `min`/`max` attributes for the date input
    pub fn bounds(&self) -> (String, String) {
        (
            self.min.format(DATE_FORMAT).to_string(),
            self.max.format(DATE_FORMAT).to_string(),
        )
    }
}
