/// Booking controller
/// Wires view events to the wizard state machine and the submission transport

use std::sync::Arc;
use std::time::Duration;

use booking_core::{GuestCount, Step, TimeSlot, Wizard};
use chrono::NaiveDate;

use crate::config::ClientConfig;
use crate::transport::Transport;
use crate::view::{SelectionGroup, WizardView};

/// Outcome of a submit press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Confirmed,
    Failed,
    /// Nothing was sent (wrong step, already in flight, incomplete draft)
    Ignored,
}

pub struct BookingController<V: WizardView> {
    wizard: Wizard,
    view: V,
    transport: Arc<dyn Transport>,
    auto_advance: Duration,
    success_delay: Duration,
}

impl<V: WizardView> BookingController<V> {
    pub fn new(today: NaiveDate, view: V, transport: Arc<dyn Transport>) -> Self {
        Self {
            wizard: Wizard::new(today),
            view,
            transport,
            auto_advance: Duration::from_millis(500),
            success_delay: Duration::from_millis(1000),
        }
    }

    pub fn from_config(today: NaiveDate, view: V, transport: Arc<dyn Transport>, config: &ClientConfig) -> Self {
        Self::new(today, view, transport).with_delays(config.auto_advance, config.success_delay)
    }

    pub fn with_delays(mut self, auto_advance: Duration, success_delay: Duration) -> Self {
        self.auto_advance = auto_advance;
        self.success_delay = success_delay;
        self
    }

    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Initial render: date bounds, time buttons, first step, progress
    pub fn start(&mut self) {
        let (min, max) = self.wizard.window().bounds();
        self.view.set_date_bounds(&min, &max);
        let slots: Vec<TimeSlot> = TimeSlot::all().collect();
        self.view.render_time_slots(&slots);
        self.render_step();
        tracing::info!("[WIZARD] Started, booking window {} .. {}", min, max);
    }

    fn render_step(&mut self) {
        self.view.show_step(self.wizard.step());
        self.view.set_progress(self.wizard.progress());
    }

    pub fn on_date_change(&mut self, value: &str) -> bool {
        match self.wizard.set_date(value) {
            Ok(date) => {
                tracing::debug!("[WIZARD] Date set to {}", date);
                true
            }
            Err(e) => {
                self.view.alert(&e.to_string());
                false
            }
        }
    }

    /// "Next" button. Returns whether the step changed.
    pub fn on_next(&mut self) -> bool {
        let contact = self.view.contact_inputs();
        let from = self.wizard.step();
        match self.wizard.advance(&contact) {
            Ok(step) => {
                if from == Step::Contact {
                    if let Some(summary) = self.wizard.summary().cloned() {
                        self.view.render_summary(&summary);
                    }
                }
                tracing::info!("[WIZARD] Step {} -> {}", from.number(), step.number());
                self.render_step();
                true
            }
            Err(e) => {
                tracing::debug!("[WIZARD] Step {} blocked: {}", from.number(), e);
                self.view.alert(&e.to_string());
                false
            }
        }
    }

    /// "Back" button
    pub fn on_prev(&mut self) -> bool {
        match self.wizard.retreat() {
            Some(step) => {
                tracing::info!("[WIZARD] Back to step {}", step.number());
                self.render_step();
                true
            }
            None => false,
        }
    }

    /// Guest button; advances on its own after the auto-advance delay
    pub async fn on_select_guests(&mut self, count: GuestCount) -> bool {
        if let Err(e) = self.wizard.select_guests(count) {
            self.view.alert(&e.to_string());
            return false;
        }
        self.view.set_selection(SelectionGroup::Guests, &count.to_string());
        self.auto_advance_from(Step::Guests).await
    }

    /// Time button; advances on its own after the auto-advance delay
    pub async fn on_select_time(&mut self, slot: TimeSlot) -> bool {
        if let Err(e) = self.wizard.select_time(slot) {
            self.view.alert(&e.to_string());
            return false;
        }
        self.view.set_selection(SelectionGroup::Time, &slot.label());
        self.auto_advance_from(Step::Time).await
    }

    async fn auto_advance_from(&mut self, step: Step) -> bool {
        tokio::time::sleep(self.auto_advance).await;
        // a selection made from another step only records the value
        if self.wizard.step() != step {
            return false;
        }
        self.on_next()
    }

    /// Enter key; ignored on the review step and inside the notes field
    pub fn on_enter(&mut self, focus_is_multiline: bool) -> bool {
        if !self.wizard.accepts_enter(focus_is_multiline) {
            return false;
        }
        self.on_next()
    }

    /// Confirm button on the review step
    pub async fn on_submit(&mut self) -> SubmitOutcome {
        let payload = match self.wizard.begin_submit() {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!("[SUBMIT] Not submitting: {}", e);
                self.view.alert(&e.to_string());
                return SubmitOutcome::Ignored;
            }
        };
        self.view.set_submitting(true);
        tracing::info!(
            "[SUBMIT] Sending reservation for {} on {} at {} ({} guests)",
            payload.name,
            payload.date,
            payload.time,
            payload.guests
        );

        match self.transport.submit(&payload).await {
            Ok(receipt) => {
                tracing::info!(
                    "[SUBMIT] ✓ Reservation confirmed (status {}, message: {})",
                    receipt.status,
                    receipt.message.as_deref().unwrap_or("-")
                );
                tokio::time::sleep(self.success_delay).await;
                // submit stays disabled; the success panel replaces the form
                self.wizard.complete_submission();
                self.render_step();
                SubmitOutcome::Confirmed
            }
            Err(e) => {
                tracing::error!("[SUBMIT] ✗ Error submitting reservation: {}", e);
                self.wizard.fail_submission();
                self.view.set_submitting(false);
                self.view.alert(e.user_message());
                SubmitOutcome::Failed
            }
        }
    }
}
