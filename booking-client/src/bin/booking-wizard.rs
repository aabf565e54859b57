/// Terminal front end for the table booking wizard
/// Walks a guest through date, party size, time and contact details,
/// then submits the reservation to the configured booking service

use std::io::Write;

use anyhow::{Context, Result};
use booking_client::{build_transport, BookingController, ClientConfig, SubmitOutcome, TerminalView, WizardView};
use booking_core::{ContactForm, GuestCount, Step, TimeSlot};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing_subscriber::EnvFilter;

type Input = Lines<BufReader<Stdin>>;
type Controller = BookingController<TerminalView<std::io::Stdout>>;

async fn prompt(input: &mut Input, label: &str) -> Result<Option<String>> {
    print!("{}> ", label);
    std::io::stdout().flush().ok();
    let line = input.next_line().await.context("Failed to read from stdin")?;
    Ok(line.map(|l| l.trim().to_string()))
}

/// Handles the navigation words every step understands.
/// Returns `None` when the guest asked to quit.
fn navigation(controller: &mut Controller, answer: &str) -> Option<bool> {
    match answer.to_lowercase().as_str() {
        "quit" | "exit" => None,
        "back" => {
            controller.on_prev();
            Some(true)
        }
        _ => Some(false),
    }
}

/// Reads phone, email and notes after the name has been entered
async fn read_contact(input: &mut Input, full_name: String) -> Result<Option<ContactForm>> {
    let mut rest = Vec::with_capacity(3);
    for label in ["Phone", "Email", "Special requests (optional)"] {
        match prompt(input, label).await? {
            Some(value) => rest.push(value),
            None => return Ok(None),
        }
    }
    let notes = rest.pop().unwrap_or_default();
    let email = rest.pop().unwrap_or_default();
    let phone = rest.pop().unwrap_or_default();
    Ok(Some(ContactForm::new(full_name, phone, email, notes)))
}

async fn run(controller: &mut Controller) -> Result<()> {
    let mut input = BufReader::new(tokio::io::stdin()).lines();
    controller.start();

    loop {
        let step = controller.wizard().step();
        if step == Step::Success {
            return Ok(());
        }

        let label = if step == Step::Contact { "Full name" } else { step.title() };
        let Some(answer) = prompt(&mut input, label).await? else {
            return Ok(());
        };
        match navigation(controller, &answer) {
            None => return Ok(()),
            Some(true) => continue,
            Some(false) => {}
        }

        // a blank answer keeps the current choice, like pressing Enter
        if answer.is_empty() && step < Step::Contact {
            controller.on_enter(false);
            continue;
        }

        match step {
            Step::Date => {
                if controller.on_date_change(&answer) {
                    controller.on_next();
                }
            }
            Step::Guests => match answer.parse::<GuestCount>() {
                Ok(count) => {
                    controller.on_select_guests(count).await;
                }
                Err(e) => controller.view_mut().alert(&e.to_string()),
            },
            Step::Time => {
                let slot = answer
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(TimeSlot::from_index)
                    .or_else(|| answer.parse::<TimeSlot>().ok());
                match slot {
                    Some(slot) => {
                        controller.on_select_time(slot).await;
                    }
                    None => controller
                        .view_mut()
                        .alert(&format!("'{}' is not an offered time", answer)),
                }
            }
            Step::Contact => {
                let Some(contact) = read_contact(&mut input, answer).await? else {
                    return Ok(());
                };
                controller.view_mut().set_contact(contact);
                controller.on_next();
            }
            Step::Review => {
                if answer.eq_ignore_ascii_case("confirm") {
                    if controller.on_submit().await == SubmitOutcome::Failed {
                        controller
                            .view_mut()
                            .notice("Type 'confirm' to try again, or call us on 0795-384-140.");
                    }
                } else {
                    controller
                        .view_mut()
                        .notice("Type 'confirm' to book or 'back' to make changes");
                }
            }
            Step::Success => {}
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    println!("\n╔════════════════════════════════════════════════════════════╗");
    println!("║          Pot of Jollof Kitchen - Reserve a Table           ║");
    println!("╚════════════════════════════════════════════════════════════╝");

    let config = ClientConfig::from_env().context("Configuration failed")?;
    tracing::info!("[CONFIG] Endpoint: {} ({:?})", config.endpoint_url, config.transport);

    let transport = build_transport(&config).context("Failed to build submission transport")?;
    let today = chrono::Local::now().date_naive();
    let view = TerminalView::new(std::io::stdout());
    let mut controller = BookingController::from_config(today, view, transport, &config);

    run(&mut controller).await
}
