/// Booking wizard state machine
///
/// Owns the step position and the reservation draft. Every transition is a
/// plain method returning the outcome, so the UI layer only has to render
/// what comes back:
/// - Date -> Guests -> Time -> Contact -> Review, each gated on its inputs
/// - Review -> Success only through a confirmed submission
/// - retreat never validates

use chrono::NaiveDate;

use crate::calendar::{DateWindow, DATE_FORMAT};
use crate::draft::{ContactForm, ReservationDraft};
use crate::payload::SubmissionPayload;
use crate::slots::{GuestCount, TimeSlot};
use crate::summary::ReviewSummary;
use crate::validate::{validate_step, ValidationError};

/// Steps shown by the progress indicator; Success sits past the end
pub const TOTAL_STEPS: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    Date = 1,
    Guests = 2,
    Time = 3,
    Contact = 4,
    Review = 5,
    Success = 6,
}

impl Step {
    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Step::Date),
            2 => Some(Step::Guests),
            3 => Some(Step::Time),
            4 => Some(Step::Contact),
            5 => Some(Step::Review),
            6 => Some(Step::Success),
            _ => None,
        }
    }

    fn next(self) -> Option<Self> {
        Step::from_number(self.number() + 1)
    }

    fn prev(self) -> Option<Self> {
        Step::from_number(self.number().saturating_sub(1))
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Date => "Select a Date",
            Step::Guests => "Number of Guests",
            Step::Time => "Arrival Time",
            Step::Contact => "Your Details",
            Step::Review => "Review & Confirm",
            Step::Success => "Reservation Received",
        }
    }
}

/// Progress bar state: fill percentage and the `current / total` counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub percent: u8,
    pub current: u8,
    pub total: u8,
}

impl Progress {
    fn at(step: Step) -> Self {
        match step {
            Step::Success => Self {
                percent: 100,
                current: TOTAL_STEPS,
                total: TOTAL_STEPS,
            },
            _ => Self {
                percent: (step.number() as u16 * 100 / TOTAL_STEPS as u16) as u8,
                current: step.number(),
                total: TOTAL_STEPS,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct Wizard {
    step: Step,
    draft: ReservationDraft,
    window: DateWindow,
    guests: Option<GuestCount>,
    time: Option<TimeSlot>,
    summary: Option<ReviewSummary>,
    submitting: bool,
}

impl Wizard {
    /// Fresh wizard on the date step, booking window anchored at `today`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            step: Step::Date,
            draft: ReservationDraft::default(),
            window: DateWindow::from_today(today),
            guests: None,
            time: None,
            summary: None,
            submitting: false,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn draft(&self) -> &ReservationDraft {
        &self.draft
    }

    pub fn window(&self) -> &DateWindow {
        &self.window
    }

    pub fn selected_guests(&self) -> Option<GuestCount> {
        self.guests
    }

    pub fn selected_time(&self) -> Option<TimeSlot> {
        self.time
    }

    pub fn summary(&self) -> Option<&ReviewSummary> {
        self.summary.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_finished(&self) -> bool {
        self.step == Step::Success
    }

    pub fn progress(&self) -> Progress {
        Progress::at(self.step)
    }

    fn ensure_editable(&self) -> Result<(), ValidationError> {
        if self.step == Step::Success {
            return Err(ValidationError::Finished);
        }
        if self.submitting {
            return Err(ValidationError::Submitting);
        }
        Ok(())
    }

    /// Date, guests and time are fixed once the review summary is on screen
    fn ensure_selectable(&self) -> Result<(), ValidationError> {
        self.ensure_editable()?;
        if self.step >= Step::Review {
            return Err(ValidationError::ReviewLocked);
        }
        Ok(())
    }

    /// Date input change. Values outside the booking window never reach the draft.
    pub fn set_date(&mut self, value: &str) -> Result<NaiveDate, ValidationError> {
        self.ensure_selectable()?;
        if value.trim().is_empty() {
            return Err(ValidationError::MissingDate);
        }
        let date = self
            .window
            .accept(value)
            .ok_or(ValidationError::DateOutOfRange)?;
        self.draft.date = date.format(DATE_FORMAT).to_string();
        Ok(date)
    }

    /// Picks a party size, replacing any earlier pick
    pub fn select_guests(&mut self, count: GuestCount) -> Result<(), ValidationError> {
        self.ensure_selectable()?;
        self.guests = Some(count);
        self.draft.guests = count.to_string();
        Ok(())
    }

    /// Picks an arrival slot, replacing any earlier pick
    pub fn select_time(&mut self, slot: TimeSlot) -> Result<(), ValidationError> {
        self.ensure_selectable()?;
        self.time = Some(slot);
        self.draft.time = slot.label();
        Ok(())
    }

    /// Validates the active step and moves forward one step.
    ///
    /// On the contact step the validated inputs are copied into the draft
    /// and the review summary is rebuilt. The review step never advances
    /// here; it leaves only through [`Wizard::begin_submit`].
    pub fn advance(&mut self, contact: &ContactForm) -> Result<Step, ValidationError> {
        self.ensure_editable()?;
        if self.step == Step::Review {
            return Err(ValidationError::ConfirmationRequired);
        }
        validate_step(self.step, &self.draft, contact)?;

        if self.step == Step::Contact {
            self.draft.apply_contact(contact);
            self.summary = Some(ReviewSummary::from_draft(&self.draft));
        }

        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(self.step)
    }

    /// Moves back one step without validation. `None` when there is nowhere to go.
    pub fn retreat(&mut self) -> Option<Step> {
        if self.step == Step::Date || self.ensure_editable().is_err() {
            return None;
        }
        self.step = self.step.prev()?;
        Some(self.step)
    }

    /// Whether Enter in a field should act as "next"
    pub fn accepts_enter(&self, focus_is_multiline: bool) -> bool {
        !focus_is_multiline && self.step < Step::Review && !self.submitting
    }

    /// Locks the wizard for submission and hands back the payload to send
    pub fn begin_submit(&mut self) -> Result<SubmissionPayload, ValidationError> {
        self.ensure_editable()?;
        if self.step != Step::Review {
            return Err(ValidationError::NotReady);
        }
        if let Some(field) = self.draft.missing_fields().first() {
            return Err(match *field {
                "date" => ValidationError::MissingDate,
                "guests" => ValidationError::MissingGuests,
                "time" => ValidationError::MissingTime,
                _ => ValidationError::MissingContact,
            });
        }
        self.submitting = true;
        Ok(SubmissionPayload::from(&self.draft))
    }

    /// The collaborator confirmed the booking
    pub fn complete_submission(&mut self) {
        if self.submitting {
            self.submitting = false;
            self.step = Step::Success;
        }
    }

    /// Transport failed: unlock submit, keep the draft on the review step
    pub fn fail_submission(&mut self) {
        self.submitting = false;
    }
}
