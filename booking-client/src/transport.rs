/// Submission transports
/// Delivers a finished reservation to the external form/mail service and
/// reports success only when the service confirms it

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use booking_core::{FormFieldMap, SubmissionPayload};
use serde::Deserialize;

use crate::config::{ClientConfig, TransportKind};
use crate::error::SubmissionError;

/// Confirmation returned by the booking service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub status: u16,
    pub message: Option<String>,
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<SubmissionReceipt, SubmissionError>;
}

/// `{ "status": "success" | "error", "message": "..." }` as sent by the booking service
#[derive(Debug, Deserialize)]
struct ServiceReply {
    status: Option<String>,
    message: Option<String>,
}

fn build_http_client(timeout: Duration) -> Result<reqwest::Client, SubmissionError> {
    Ok(reqwest::Client::builder().timeout(timeout).build()?)
}

fn classify(err: reqwest::Error) -> SubmissionError {
    if err.is_timeout() {
        SubmissionError::Timeout
    } else {
        SubmissionError::Network(err)
    }
}

/// Reads a reply body; a JSON body flagged as an error fails the submission,
/// anything else under a 2xx status counts as confirmed.
async fn confirm(response: reqwest::Response) -> Result<SubmissionReceipt, SubmissionError> {
    let status = response.status();
    if !status.is_success() {
        return Err(SubmissionError::Rejected {
            status: status.as_u16(),
        });
    }

    let body = response.text().await.map_err(classify)?;
    let reply = serde_json::from_str::<ServiceReply>(&body).ok();
    let message = reply.as_ref().and_then(|r| r.message.clone());

    if let Some(ServiceReply { status: Some(s), .. }) = &reply {
        if s.eq_ignore_ascii_case("error") {
            return Err(SubmissionError::Service(
                message.unwrap_or_else(|| "unknown error".to_string()),
            ));
        }
    }

    Ok(SubmissionReceipt {
        status: status.as_u16(),
        message,
    })
}

/// POSTs the payload as JSON to the booking endpoint
pub struct JsonEndpointTransport {
    client: reqwest::Client,
    url: String,
}

impl JsonEndpointTransport {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, SubmissionError> {
        Ok(Self {
            client: build_http_client(timeout)?,
            url: url.into(),
        })
    }
}

#[async_trait]
impl Transport for JsonEndpointTransport {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<SubmissionReceipt, SubmissionError> {
        tracing::info!("[SUBMIT] POST {} (json)", self.url);
        let response = self
            .client
            .post(&self.url)
            .json(payload)
            .send()
            .await
            .map_err(classify)?;
        confirm(response).await
    }
}

/// POSTs answers to a Google Forms `formResponse` URL keyed by named entry ids
pub struct FormResponseTransport {
    client: reqwest::Client,
    url: String,
    fields: FormFieldMap,
}

impl FormResponseTransport {
    pub fn new(url: impl Into<String>, fields: FormFieldMap, timeout: Duration) -> Result<Self, SubmissionError> {
        Ok(Self {
            client: build_http_client(timeout)?,
            url: url.into(),
            fields,
        })
    }
}

#[async_trait]
impl Transport for FormResponseTransport {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<SubmissionReceipt, SubmissionError> {
        let entries = self.fields.entries(payload);
        tracing::info!("[SUBMIT] POST {} (form, {} entries)", self.url, entries.len());
        let response = self
            .client
            .post(&self.url)
            .form(&entries)
            .send()
            .await
            .map_err(classify)?;
        confirm(response).await
    }
}

/// Transport selected by the configuration
pub fn build_transport(config: &ClientConfig) -> Result<Arc<dyn Transport>, SubmissionError> {
    let transport: Arc<dyn Transport> = match &config.transport {
        TransportKind::Json => Arc::new(JsonEndpointTransport::new(
            config.endpoint_url.clone(),
            config.request_timeout,
        )?),
        TransportKind::Form(fields) => Arc::new(FormResponseTransport::new(
            config.endpoint_url.clone(),
            fields.clone(),
            config.request_timeout,
        )?),
    };
    Ok(transport)
}
