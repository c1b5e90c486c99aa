use crate::api::error::ApiError;
use crate::api::models::{DonorSummary, RequestSummary, StatsSnapshot, StockEntry};

pub(crate) mod client;
pub use client::ApiClient;
pub mod error;
pub mod models;

#[cfg(test)]
use mockall::automock;

/// Read-only view of the blood bank backend used by the dashboard widgets.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait DashboardApi: Send + Sync {
    /// Base URL requests are issued against.
    fn base_url(&self) -> &str;

    /// Units available per blood group, in chart order.
    async fn blood_stock(&self) -> Result<Vec<StockEntry>, ApiError>;

    /// Donor and request counters.
    async fn stats(&self) -> Result<StatsSnapshot, ApiError>;

    /// Most recently registered donors, newest first.
    async fn recent_donors(&self) -> Result<Vec<DonorSummary>, ApiError>;

    /// Most recently submitted blood requests, newest first.
    async fn recent_requests(&self) -> Result<Vec<RequestSummary>, ApiError>;
}
