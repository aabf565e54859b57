/// Per-step validation
///
/// Each step checks only its own inputs. Errors carry the message shown to
/// the guest in the blocking alert.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::draft::{ContactForm, ReservationDraft};
use crate::wizard::Step;

/// `local@domain.tld` with no whitespace and a single `@`
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please select a date")]
    MissingDate,
    #[error("Please select number of guests")]
    MissingGuests,
    #[error("Please select a time")]
    MissingTime,
    #[error("Please fill in all required fields")]
    MissingContact,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please choose a date between tomorrow and two months from today")]
    DateOutOfRange,
    #[error("Please confirm your reservation to submit it")]
    ConfirmationRequired,
    #[error("Please go back to change your reservation details")]
    ReviewLocked,
    #[error("Please complete every step before confirming")]
    NotReady,
    #[error("Your reservation is being submitted")]
    Submitting,
    #[error("Reservation has already been submitted")]
    Finished,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email.trim())
}

/// Checks the inputs owned by `step`. Contact values are read from the
/// live inputs rather than the draft, which is only filled after this passes.
pub fn validate_step(
    step: Step,
    draft: &ReservationDraft,
    contact: &ContactForm,
) -> Result<(), ValidationError> {
    match step {
        Step::Date if draft.date.trim().is_empty() => Err(ValidationError::MissingDate),
        Step::Guests if draft.guests.trim().is_empty() => Err(ValidationError::MissingGuests),
        Step::Time if draft.time.trim().is_empty() => Err(ValidationError::MissingTime),
        Step::Contact => validate_contact(contact),
        Step::Success => Err(ValidationError::Finished),
        _ => Ok(()),
    }
}

fn validate_contact(contact: &ContactForm) -> Result<(), ValidationError> {
    let required = [&contact.full_name, &contact.phone, &contact.email];
    if required.iter().any(|value| value.trim().is_empty()) {
        return Err(ValidationError::MissingContact);
    }
    if !is_valid_email(&contact.email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("john@example.com"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("john@example"));
        assert!(!is_valid_email("jo hn@example.com"));
        assert!(!is_valid_email("a@@b.co"));
    }

    #[test]
    fn test_empty_draft_fails_first_three_steps() {
        let draft = ReservationDraft::default();
        let contact = ContactForm::default();
        assert_eq!(validate_step(Step::Date, &draft, &contact), Err(ValidationError::MissingDate));
        assert_eq!(validate_step(Step::Guests, &draft, &contact), Err(ValidationError::MissingGuests));
        assert_eq!(validate_step(Step::Time, &draft, &contact), Err(ValidationError::MissingTime));
        assert_eq!(validate_step(Step::Contact, &draft, &contact), Err(ValidationError::MissingContact));
        assert_eq!(validate_step(Step::Review, &draft, &contact), Ok(()));
    }

    #[test]
    fn test_contact_requires_name_phone_and_valid_email() {
        let draft = ReservationDraft::default();
        let no_phone = ContactForm::new("John Doe", "  ", "john@example.com", "");
        assert_eq!(validate_step(Step::Contact, &draft, &no_phone), Err(ValidationError::MissingContact));

        let bad_email = ContactForm::new("John Doe", "+254700000000", "not-an-email", "");
        assert_eq!(validate_step(Step::Contact, &draft, &bad_email), Err(ValidationError::InvalidEmail));

        let ok = ContactForm::new("John Doe", "+254700000000", "a@b.co", "");
        assert_eq!(validate_step(Step::Contact, &draft, &ok), Ok(()));
    }

    #[test]
    fn test_error_messages_match_alerts() {
        assert_eq!(ValidationError::MissingGuests.to_string(), "Please select number of guests");
        assert_eq!(ValidationError::InvalidEmail.to_string(), "Please enter a valid email address");
    }
}
