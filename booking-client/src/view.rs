/// Rendering surface the controller draws on
///
/// Stands in for the booking page: one container per step, the progress
/// bar, the option buttons, the contact inputs, the review panel and the
/// submit button with its loading state.

use booking_core::{ContactForm, Progress, ReviewSummary, Step, TimeSlot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionGroup {
    Guests,
    Time,
}

pub trait WizardView {
    /// Makes `step` the only visible step container
    fn show_step(&mut self, step: Step);

    fn set_progress(&mut self, progress: Progress);

    /// `min`/`max` of the date input
    fn set_date_bounds(&mut self, min: &str, max: &str);

    fn render_time_slots(&mut self, slots: &[TimeSlot]);

    /// Highlights `value` and clears every other option in `group`
    fn set_selection(&mut self, group: SelectionGroup, value: &str);

    fn render_summary(&mut self, summary: &ReviewSummary);

    /// Disables submit and shows the loader while `true`
    fn set_submitting(&mut self, submitting: bool);

    /// Blocking message to the guest
    fn alert(&mut self, message: &str);

    /// Non-blocking hint about what to do next
    fn notice(&mut self, message: &str);

    /// Current values of the contact inputs
    fn contact_inputs(&self) -> ContactForm;
}
