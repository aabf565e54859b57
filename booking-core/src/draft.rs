/// Reservation draft and the raw contact inputs it is filled from

use serde::{Deserialize, Serialize};

/// In-progress reservation, mutated field-by-field as steps complete.
/// Every field except `notes` must be non-empty before submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationDraft {
    pub date: String,
    pub guests: String,
    pub time: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub notes: String,
}

impl ReservationDraft {
    /// Names of required fields that are still empty
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("date", &self.date),
            ("guests", &self.guests),
            ("time", &self.time),
            ("name", &self.name),
            ("phone", &self.phone),
            ("email", &self.email),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Copies validated contact inputs over the draft
    pub fn apply_contact(&mut self, contact: &ContactForm) {
        self.name = contact.full_name.trim().to_string();
        self.phone = contact.phone.trim().to_string();
        self.email = contact.email.trim().to_string();
        self.notes = contact.special_requests.trim().to_string();
    }
}

/// Current values of the step-4 inputs (`fullName`, `phone`, `email`,
/// `specialRequests`). They only reach the draft once step 4 validates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub special_requests: String,
}

impl ContactForm {
    pub fn new(
        full_name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        special_requests: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            phone: phone.into(),
            email: email.into(),
            special_requests: special_requests.into(),
        }
    }
}
