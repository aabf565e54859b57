//! Submission error types

use thiserror::Error;

/// Why a reservation did not reach the collaborator
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// Connection, DNS or TLS failure
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// No answer within the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// Non-2xx status from the endpoint
    #[error("Endpoint returned status {status}")]
    Rejected { status: u16 },

    /// 2xx response whose body reports a failure
    #[error("Booking service error: {0}")]
    Service(String),
}

impl SubmissionError {
    /// Guest-facing alert text; details go to the log
    pub fn user_message(&self) -> &'static str {
        "There was an error submitting your reservation. Please try again or contact us directly."
    }
}
