//! Blood Bank API Client
//!
//! Polls the backend's JSON endpoints on behalf of the dashboard widgets.

use crate::api::DashboardApi;
use crate::api::error::ApiError;
use crate::api::models::{
    DonorSummary, DonorsResponse, RequestSummary, RequestsResponse, StatsSnapshot, StockEntry,
    StockResponse,
};
use crate::consts::dashboard_consts::{CONNECT_TIMEOUT_SECS, endpoints};
use reqwest::header::COOKIE;
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

// User-Agent string with dashboard version
const USER_AGENT: &str = concat!("bloodbank-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    session_cookie: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str, session_cookie: Option<String>) -> Result<Self, ApiError> {
        let client = ClientBuilder::new()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            session_cookie,
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        let mut request = self.client.get(&url);
        if let Some(cookie) = &self.session_cookie {
            request = request.header(COOKIE, cookie);
        }

        let response = request.send().await?;
        let response = Self::handle_response_status(response).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait::async_trait]
impl DashboardApi for ApiClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn blood_stock(&self) -> Result<Vec<StockEntry>, ApiError> {
        let response: StockResponse = self.get_json(endpoints::BLOOD_STOCK).await?;
        Ok(response.stock)
    }

    async fn stats(&self) -> Result<StatsSnapshot, ApiError> {
        self.get_json(endpoints::STATS).await
    }

    async fn recent_donors(&self) -> Result<Vec<DonorSummary>, ApiError> {
        let response: DonorsResponse = self.get_json(endpoints::RECENT_DONORS).await?;
        Ok(response.donors)
    }

    async fn recent_requests(&self) -> Result<Vec<RequestSummary>, ApiError> {
        let response: RequestsResponse = self.get_json(endpoints::RECENT_REQUESTS).await?;
        Ok(response.requests)
    }
}
