/// Terminal rendering of the booking wizard

use std::io::Write;

use booking_core::{ContactForm, Progress, ReviewSummary, Step, TimeSlot};

use crate::view::{SelectionGroup, WizardView};

/// Writes the wizard to any `Write` sink (stdout in the binary)
pub struct TerminalView<W: Write> {
    out: W,
    contact: ContactForm,
    slots: Vec<TimeSlot>,
    date_bounds: (String, String),
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            contact: ContactForm::default(),
            slots: Vec::new(),
            date_bounds: (String::new(), String::new()),
        }
    }

    /// Stores what the guest typed into the contact fields
    pub fn set_contact(&mut self, contact: ContactForm) {
        self.contact = contact;
    }

    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn date_bounds(&self) -> (&str, &str) {
        (&self.date_bounds.0, &self.date_bounds.1)
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    // write errors are ignored
    fn line(&mut self, text: &str) {
        let _ = writeln!(self.out, "{}", text);
        let _ = self.out.flush();
    }
}

impl<W: Write> WizardView for TerminalView<W> {
    fn show_step(&mut self, step: Step) {
        self.line("");
        self.line(&format!("━━━ {} ━━━", step.title()));
        match step {
            Step::Date => {
                let text = format!(
                    "Pick a date between {} and {} (YYYY-MM-DD)",
                    self.date_bounds.0, self.date_bounds.1
                );
                self.line(&text);
            }
            Step::Guests => self.line("How many guests? (1-8)"),
            Step::Time => {
                let labels: Vec<String> = self
                    .slots
                    .iter()
                    .map(|slot| format!("[{}] {}", slot.index() + 1, slot.label()))
                    .collect();
                for row in labels.chunks(4) {
                    self.line(&row.join("   "));
                }
            }
            Step::Contact => self.line("Your name, phone, email and any special requests"),
            Step::Review => self.line("Type 'confirm' to book or 'back' to make changes"),
            Step::Success => {
                self.line("🎉 Thank you! Your reservation request has been received.");
                self.line("Our team will contact you shortly to confirm.");
            }
        }
    }

    fn set_progress(&mut self, progress: Progress) {
        let filled = progress.percent as usize / 5;
        let bar = format!(
            "[{}{}] {}% (step {} / {})",
            "█".repeat(filled),
            "░".repeat(20 - filled.min(20)),
            progress.percent,
            progress.current,
            progress.total
        );
        self.line(&bar);
    }

    fn set_date_bounds(&mut self, min: &str, max: &str) {
        self.date_bounds = (min.to_string(), max.to_string());
    }

    fn render_time_slots(&mut self, slots: &[TimeSlot]) {
        self.slots = slots.to_vec();
    }

    fn set_selection(&mut self, group: SelectionGroup, value: &str) {
        let label = match group {
            SelectionGroup::Guests => "Guests",
            SelectionGroup::Time => "Time",
        };
        self.line(&format!("✓ {}: {}", label, value));
    }

    fn render_summary(&mut self, summary: &ReviewSummary) {
        let rows: Vec<String> = summary
            .rows()
            .into_iter()
            .map(|(label, value)| format!("  {:<17}{}", format!("{}:", label), value))
            .collect();
        self.line("Reservation details:");
        for row in rows {
            self.line(&row);
        }
    }

    fn set_submitting(&mut self, submitting: bool) {
        if submitting {
            self.line("⏳ Submitting your reservation...");
        }
    }

    fn alert(&mut self, message: &str) {
        self.line(&format!("⚠ {}", message));
    }

    fn notice(&mut self, message: &str) {
        self.line(message);
    }

    fn contact_inputs(&self) -> ContactForm {
        self.contact.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(view: TerminalView<Vec<u8>>) -> String {
        String::from_utf8(view.into_inner()).unwrap()
    }

    #[test]
    fn test_time_step_lists_numbered_slots() {
        let mut view = TerminalView::new(Vec::new());
        let slots: Vec<TimeSlot> = TimeSlot::all().collect();
        view.render_time_slots(&slots);
        view.show_step(Step::Time);
        let text = output(view);
        assert!(text.contains("[1] 12:00 PM"));
        assert!(text.contains("[20] 9:30 PM"));
    }

    #[test]
    fn test_progress_bar_full_at_success() {
        let mut view = TerminalView::new(Vec::new());
        view.set_progress(Progress { percent: 100, current: 5, total: 5 });
        let text = output(view);
        assert!(text.contains("100% (step 5 / 5)"));
        assert!(!text.contains('░'));
    }

    #[test]
    fn test_notice_is_printed_plain() {
        let mut view = TerminalView::new(Vec::new());
        view.notice("Type 'confirm' to book or 'back' to make changes");
        view.alert("Please select a time");
        let text = output(view);
        assert!(text.contains("Type 'confirm' to book or 'back' to make changes\n"));
        assert!(text.contains("⚠ Please select a time"));
    }
}
