/// Human-readable review of a draft, shown on the final step

use chrono::NaiveDate;

use crate::calendar::DATE_FORMAT;
use crate::draft::ReservationDraft;
use crate::slots::GuestCount;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewSummary {
    pub date: String,
    pub guests: String,
    pub time: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub notes: Option<String>,
}

impl ReviewSummary {
    pub fn from_draft(draft: &ReservationDraft) -> Self {
        let notes = draft.notes.trim();
        Self {
            date: format_long_date(&draft.date),
            guests: describe_guests(&draft.guests),
            time: draft.time.clone(),
            name: draft.name.clone(),
            phone: draft.phone.clone(),
            email: draft.email.clone(),
            notes: (!notes.is_empty()).then(|| notes.to_string()),
        }
    }

    /// Label/value rows in display order
    pub fn rows(&self) -> Vec<(&'static str, &str)> {
        let mut rows = vec![
            ("Date", self.date.as_str()),
            ("Guests", self.guests.as_str()),
            ("Time", self.time.as_str()),
            ("Name", self.name.as_str()),
            ("Phone", self.phone.as_str()),
            ("Email", self.email.as_str()),
        ];
        if let Some(notes) = &self.notes {
            rows.push(("Special Requests", notes.as_str()));
        }
        rows
    }
}

/// `2025-12-15` -> `Monday, December 15, 2025`; unparseable input is kept as-is
pub fn format_long_date(value: &str) -> String {
    match NaiveDate::parse_from_str(value.trim(), DATE_FORMAT) {
        Ok(date) => date.format("%A, %B %-d, %Y").to_string(),
        Err(_) => value.to_string(),
    }
}

fn describe_guests(value: &str) -> String {
    match value.parse::<GuestCount>() {
        Ok(count) => count.describe(),
        Err(_) => value.to_string(),
    }
}
