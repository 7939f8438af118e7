//! Part search: suggestion gating, request debouncing, threshold slider and
//! result navigation.

use super::constants::{DEFAULT_THRESHOLD, SUGGEST_DEBOUNCE_MS, SUGGEST_MIN_CHARS};
use super::error::Result;
use instant::Instant;
use serde::Deserialize;
use std::time::Duration;
use url::form_urlencoded;

/// Trimmed query if it is long enough to ask for suggestions.
pub fn suggestion_query(raw: &str) -> Option<&str> {
    let q = raw.trim();
    (q.chars().count() >= SUGGEST_MIN_CHARS).then_some(q)
}

pub fn suggest_url(query: &str) -> String {
    format!("/api/parts_suggest?q={}", urlencoding::encode(query))
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct SuggestResponse {
    #[serde(default)]
    pub items: Vec<String>,
}

pub fn parse_suggestions(body: &str) -> Result<Vec<String>> {
    let resp: SuggestResponse = serde_json::from_str(body)?;
    Ok(resp.items)
}

/// Trailing-edge debounce: only the last query scheduled within the delay
/// window is released.
#[derive(Clone, Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<(String, Instant)>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(Duration::from_millis(SUGGEST_DEBOUNCE_MS))
    }
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replace any pending query; the deadline restarts from `now`.
    pub fn schedule(&mut self, query: impl Into<String>, now: Instant) {
        self.pending = Some((query.into(), now + self.delay));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left before the pending query is due, if one is pending.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|(_, deadline)| {
                if *deadline > now {
                    *deadline - now
                } else {
                    Duration::ZERO
                }
            })
    }

    /// Release the pending query if its deadline has passed.
    pub fn take_due(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some((_, deadline)) if now >= *deadline => self.pending.take().map(|(q, _)| q),
            _ => None,
        }
    }
}

/// Parse a slider value the way `Number(..)` would; blank reads as 0.
pub fn parse_threshold(raw: &str) -> f64 {
    let s = raw.trim();
    if s.is_empty() {
        return 0.0;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

/// Label shown next to the slider, two decimals.
pub fn threshold_label(raw: &str) -> String {
    let v = parse_threshold(raw);
    if v.is_nan() {
        "NaN".to_string()
    } else {
        format!("{:.2}", v)
    }
}

/// Filled share of the slider track in whole percent.
pub fn slider_fill_percent(raw: &str) -> u32 {
    let v = parse_threshold(raw);
    let v = if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) };
    (v * 100.0 + 0.5).floor() as u32
}

pub fn slider_background(percent: u32) -> String {
    format!(
        "linear-gradient(90deg, #2ecc71 0% {p}%, rgba(255,255,255,0.12) {p}%)",
        p = percent
    )
}

/// Navigation target for the search button.
pub fn search_result_url(name: &str, threshold: &str) -> String {
    let threshold = if threshold.is_empty() {
        DEFAULT_THRESHOLD
    } else {
        threshold
    };
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("name", name.trim())
        .append_pair("threshold", threshold)
        .finish();
    format!("/search_result?{}", query)
}
