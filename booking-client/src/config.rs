/// Client configuration loaded from the environment (`.env` supported)

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use booking_core::FormFieldMap;

/// How the finished reservation is delivered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportKind {
    /// JSON body POSTed to a booking endpoint (e.g. an Apps Script web app)
    Json,
    /// urlencoded answers POSTed straight to a Google Forms `formResponse` URL
    Form(FormFieldMap),
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint_url: String,
    pub transport: TransportKind,
    pub auto_advance: Duration,
    pub success_delay: Duration,
    pub request_timeout: Duration,
}

impl ClientConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` uses the process environment
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint_url = lookup("BOOKING_ENDPOINT_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| anyhow!("BOOKING_ENDPOINT_URL environment variable not set"))?;

        let transport = match lookup("BOOKING_TRANSPORT")
            .unwrap_or_else(|| "json".to_string())
            .to_lowercase()
            .as_str()
        {
            "json" => TransportKind::Json,
            "form" => TransportKind::Form(form_field_map(&lookup)?),
            other => return Err(anyhow!("Unknown BOOKING_TRANSPORT '{}' (expected json or form)", other)),
        };

        let auto_advance = Duration::from_millis(parse_or(&lookup, "BOOKING_AUTO_ADVANCE_MS", 500)?);
        let success_delay = Duration::from_millis(parse_or(&lookup, "BOOKING_SUCCESS_DELAY_MS", 1000)?);
        let request_timeout = Duration::from_secs(parse_or(&lookup, "BOOKING_REQUEST_TIMEOUT_SECS", 15)?);

        Ok(Self {
            endpoint_url,
            transport,
            auto_advance,
            success_delay,
            request_timeout,
        })
    }
}

fn parse_or<F>(lookup: &F, key: &str, default: u64) -> Result<u64>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .with_context(|| format!("{} must be a whole number, got '{}'", key, raw)),
        None => Ok(default),
    }
}

fn form_field_map<F>(lookup: &F) -> Result<FormFieldMap>
where
    F: Fn(&str) -> Option<String>,
{
    let entry = |field: &str| -> Result<String> {
        let key = format!("BOOKING_FORM_ENTRY_{}", field);
        lookup(&key)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| anyhow!("{} is required when BOOKING_TRANSPORT=form", key))
    };

    Ok(FormFieldMap {
        date: entry("DATE")?,
        guests: entry("GUESTS")?,
        time: entry("TIME")?,
        name: entry("NAME")?,
        phone: entry("PHONE")?,
        email: entry("EMAIL")?,
        notes: entry("NOTES")?,
    })
}
