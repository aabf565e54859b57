//! Shared test fixtures
//! An in-process booking service double and a view that records what it was told
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Form, Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use booking_client::{SelectionGroup, WizardView};
use booking_core::{ContactForm, Progress, ReviewSummary, Step, TimeSlot};
use serde_json::Value;
use tokio::sync::Mutex;

/// What the double answers with
#[derive(Clone)]
pub enum Reply {
    Json(StatusCode, Value),
    Html(StatusCode, &'static str),
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        match self {
            Reply::Json(status, body) => (status, Json(body)).into_response(),
            Reply::Html(status, body) => (status, axum::response::Html(body)).into_response(),
        }
    }
}

#[derive(Clone)]
struct ServiceState {
    reply: Reply,
    json_bodies: Arc<Mutex<Vec<Value>>>,
    form_bodies: Arc<Mutex<Vec<Vec<(String, String)>>>>,
}

pub struct BookingServiceDouble {
    pub base_url: String,
    json_bodies: Arc<Mutex<Vec<Value>>>,
    form_bodies: Arc<Mutex<Vec<Vec<(String, String)>>>>,
}

impl BookingServiceDouble {
    /// JSON endpoint
    pub fn book_url(&self) -> String {
        format!("{}/book", self.base_url)
    }

    /// JSON endpoint that answers only after `HANG_FOR`
    pub fn slow_url(&self) -> String {
        format!("{}/slow", self.base_url)
    }

    /// Google Forms style endpoint
    pub fn form_url(&self) -> String {
        format!("{}/formResponse", self.base_url)
    }

    pub async fn json_bodies(&self) -> Vec<Value> {
        self.json_bodies.lock().await.clone()
    }

    pub async fn form_bodies(&self) -> Vec<Vec<(String, String)>> {
        self.form_bodies.lock().await.clone()
    }
}

async fn book(State(state): State<ServiceState>, Json(body): Json<Value>) -> Reply {
    state.json_bodies.lock().await.push(body);
    state.reply.clone()
}

/// How long the slow endpoint holds a request before answering
pub const HANG_FOR: Duration = Duration::from_secs(3);

async fn slow_book(State(state): State<ServiceState>, Json(body): Json<Value>) -> Reply {
    state.json_bodies.lock().await.push(body);
    tokio::time::sleep(HANG_FOR).await;
    state.reply.clone()
}

async fn form_response(State(state): State<ServiceState>, Form(body): Form<Vec<(String, String)>>) -> Reply {
    state.form_bodies.lock().await.push(body);
    state.reply.clone()
}

/// Starts the double on an ephemeral port
pub async fn spawn_booking_service(reply: Reply) -> BookingServiceDouble {
    let state = ServiceState {
        reply,
        json_bodies: Arc::new(Mutex::new(Vec::new())),
        form_bodies: Arc::new(Mutex::new(Vec::new())),
    };
    let double = BookingServiceDouble {
        base_url: String::new(),
        json_bodies: state.json_bodies.clone(),
        form_bodies: state.form_bodies.clone(),
    };

    let app = Router::new()
        .route("/book", post(book))
        .route("/slow", post(slow_book))
        .route("/formResponse", post(form_response))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve booking double");
    });

    BookingServiceDouble {
        base_url: format!("http://{}", addr),
        ..double
    }
}

/// URL on a port nothing listens on
pub async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind throwaway listener");
    let addr = listener.local_addr().expect("throwaway address");
    drop(listener);
    format!("http://{}/book", addr)
}

/// View that keeps every instruction for later assertions
#[derive(Default)]
pub struct RecordingView {
    pub steps: Vec<Step>,
    pub progress: Vec<Progress>,
    pub alerts: Vec<String>,
    pub notices: Vec<String>,
    pub selections: HashMap<SelectionGroup, String>,
    pub summary: Option<ReviewSummary>,
    pub submitting: bool,
    pub submitting_history: Vec<bool>,
    pub date_bounds: Option<(String, String)>,
    pub slot_count: usize,
    pub contact: ContactForm,
}

impl RecordingView {
    pub fn visible_step(&self) -> Option<Step> {
        self.steps.last().copied()
    }

    pub fn last_progress(&self) -> Option<Progress> {
        self.progress.last().copied()
    }
}

impl WizardView for RecordingView {
    fn show_step(&mut self, step: Step) {
        self.steps.push(step);
    }

    fn set_progress(&mut self, progress: Progress) {
        self.progress.push(progress);
    }

    fn set_date_bounds(&mut self, min: &str, max: &str) {
        self.date_bounds = Some((min.to_string(), max.to_string()));
    }

    fn render_time_slots(&mut self, slots: &[TimeSlot]) {
        self.slot_count = slots.len();
    }

    fn set_selection(&mut self, group: SelectionGroup, value: &str) {
        self.selections.insert(group, value.to_string());
    }

    fn render_summary(&mut self, summary: &ReviewSummary) {
        self.summary = Some(summary.clone());
    }

    fn set_submitting(&mut self, submitting: bool) {
        self.submitting = submitting;
        self.submitting_history.push(submitting);
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn notice(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }

    fn contact_inputs(&self) -> ContactForm {
        self.contact.clone()
    }
}

/// The reservation used across the end-to-end tests
pub fn john_doe() -> ContactForm {
    ContactForm::new("John Doe", "+254700000000", "john@example.com", "Window seat")
}
