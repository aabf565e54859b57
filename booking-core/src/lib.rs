/// Booking core library
/// Pure reservation model and wizard transitions, shared by every front end

pub mod calendar;
pub mod draft;
pub mod payload;
pub mod slots;
pub mod summary;
pub mod validate;
pub mod wizard;

pub use calendar::DateWindow;
pub use draft::{ContactForm, ReservationDraft};
pub use payload::{FormFieldMap, SubmissionPayload};
pub use slots::{GuestCount, TimeSlot};
pub use summary::ReviewSummary;
pub use validate::{is_valid_email, ValidationError};
pub use wizard::{Progress, Step, Wizard, TOTAL_STEPS};
