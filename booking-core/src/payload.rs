/// Submission payload and the named mapping onto an external form

use serde::{Deserialize, Serialize};

use crate::draft::ReservationDraft;

/// JSON body POSTed to the booking endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub date: String,
    pub guests: String,
    pub time: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub notes: String,
}

impl From<&ReservationDraft> for SubmissionPayload {
    fn from(draft: &ReservationDraft) -> Self {
        Self {
            date: draft.date.clone(),
            guests: draft.guests.clone(),
            time: draft.time.clone(),
            name: draft.name.clone(),
            phone: draft.phone.clone(),
            email: draft.email.clone(),
            notes: draft.notes.clone(),
        }
    }
}

/// Form question id for every payload field, keyed by name so that
/// reordering the form's questions cannot shift answers between fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFieldMap {
    pub date: String,
    pub guests: String,
    pub time: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub notes: String,
}

impl FormFieldMap {
    /// `entry.<id>` / value pairs ready to urlencode. Empty notes are left out.
    pub fn entries(&self, payload: &SubmissionPayload) -> Vec<(String, String)> {
        let mut entries: Vec<(String, String)> = [
            (&self.date, &payload.date),
            (&self.guests, &payload.guests),
            (&self.time, &payload.time),
            (&self.name, &payload.name),
            (&self.phone, &payload.phone),
            (&self.email, &payload.email),
        ]
        .into_iter()
        .map(|(id, value)| (entry_key(id), value.clone()))
        .collect();

        if !payload.notes.trim().is_empty() {
            entries.push((entry_key(&self.notes), payload.notes.clone()));
        }
        entries
    }
}

fn entry_key(id: &str) -> String {
    if id.starts_with("entry.") {
        id.to_string()
    } else {
        format!("entry.{}", id)
    }
}
