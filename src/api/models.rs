//! Payloads served by the dashboard endpoints.

use serde::Deserialize;

/// Units available for one blood group. Entry order is chart bar order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StockEntry {
    pub blood_group: String,
    pub units: u32,
}

/// Counters shown on the live statistics cards. Replaced wholesale on refresh.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct StatsSnapshot {
    pub total_donors: u64,
    pub total_requests: u64,
    pub pending_requests: u64,
    pub approved_requests: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DonorSummary {
    pub id: u64,
    pub full_name: String,
    pub blood_group: String,
    pub city: String,
    /// Already formatted by the backend as `YYYY-MM-DD HH:MM`.
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RequestSummary {
    pub id: u64,
    pub patient_name: String,
    pub hospital_name: String,
    pub blood_group: String,
    pub units: u32,
    #[serde(default)]
    pub status: RequestStatus,
    pub created_at: String,
}

/// Lifecycle of a blood request.
///
/// Anything the backend sends besides the three known values, including a
/// missing or `null` status, decodes as [`RequestStatus::Unknown`] carrying the
/// raw text, so one odd row never rejects the whole payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Option<String>")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
    Unknown(String),
}

impl RequestStatus {
    /// Text shown inside the status badge.
    pub fn label(&self) -> &str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Approved => "Approved",
            RequestStatus::Rejected => "Rejected",
            RequestStatus::Unknown(raw) if raw.is_empty() => "Unknown",
            RequestStatus::Unknown(raw) => raw,
        }
    }
}

impl Default for RequestStatus {
    fn default() -> Self {
        RequestStatus::Unknown(String::new())
    }
}

impl From<Option<String>> for RequestStatus {
    fn from(raw: Option<String>) -> Self {
        match raw.as_deref() {
            Some("Pending") => RequestStatus::Pending,
            Some("Approved") => RequestStatus::Approved,
            Some("Rejected") => RequestStatus::Rejected,
            Some(other) => RequestStatus::Unknown(other.to_string()),
            None => RequestStatus::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct StockResponse {
    pub stock: Vec<StockEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DonorsResponse {
    pub donors: Vec<DonorSummary>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RequestsResponse {
    pub requests: Vec<RequestSummary>,
}
