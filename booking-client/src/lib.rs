/// Booking client library
/// Drives the booking wizard from a view and delivers the finished
/// reservation to the external booking service

pub mod config;
pub mod controller;
pub mod error;
pub mod terminal;
pub mod transport;
pub mod view;

pub use config::{ClientConfig, TransportKind};
pub use controller::{BookingController, SubmitOutcome};
pub use error::SubmissionError;
pub use terminal::TerminalView;
pub use transport::{build_transport, FormResponseTransport, JsonEndpointTransport, SubmissionReceipt, Transport};
pub use view::{SelectionGroup, WizardView};
