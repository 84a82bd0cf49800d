//! Metrics for servers and load balancers.

use chrono::{SecondsFormat, Utc};
use hcloud_core::timestamp::{self, Timestamp};
use hcloud_core::{QueryParams, UrlBuilder};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Parameters of the metrics endpoints.
///
/// `start` and `end` are rendered in UTC with a `Z` suffix so the query string
/// contains no `+` sign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsParams {
    /// Comma-separated metric types, e.g. `cpu` or `disk,network`
    pub kind: String,
    /// Start of the period
    pub start: Timestamp,
    /// End of the period
    pub end: Timestamp,
    /// Resolution in seconds
    pub step: Option<u32>,
}

impl MetricsParams {
    /// Create parameters for the given types and period.
    #[must_use]
    pub fn new(kind: impl Into<String>, start: Timestamp, end: Timestamp) -> Self {
        Self {
            kind: kind.into(),
            start,
            end,
            step: None,
        }
    }

    /// Set the resolution in seconds.
    #[must_use]
    pub const fn with_step(mut self, step: u32) -> Self {
        self.step = Some(step);
        self
    }
}

impl QueryParams for MetricsParams {
    fn apply(&self, builder: UrlBuilder) -> UrlBuilder {
        builder
            .query_param("type", &self.kind)
            .query_param("start", utc(&self.start))
            .query_param("end", utc(&self.end))
            .query_param_if_present("step", self.step)
    }
}

fn utc(value: &Timestamp) -> String {
    value
        .with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// One time series: `[unix timestamp, value]` pairs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TimeSeries {
    /// Samples
    #[serde(default)]
    pub values: Vec<(f64, String)>,
}

/// Metrics for a period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Metrics {
    /// Start of the period
    #[serde(with = "timestamp")]
    pub start: Timestamp,
    /// End of the period
    #[serde(with = "timestamp")]
    pub end: Timestamp,
    /// Resolution in seconds
    pub step: f64,
    /// Series keyed by name, e.g. `cpu` or `disk.0.iops.read`
    #[serde(default)]
    pub time_series: BTreeMap<String, TimeSeries>,
}

/// Envelope of the metrics endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricsResponse {
    /// The metrics
    pub metrics: Metrics,
}
