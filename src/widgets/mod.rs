//! Self-polling dashboard widgets
//!
//! Each widget polls one backend endpoint on its own cadence and keeps the
//! last good snapshot. Widgets share no state with each other.

pub mod chart;
pub mod data;
pub mod stock;
pub mod view;

pub use chart::{ChartRenderer, TerminalSurface};
pub use data::{DataWidget, WidgetView};
pub use stock::StockChartWidget;

use crate::api::DashboardApi;
use crate::api::models::{DonorSummary, RequestSummary, StatsSnapshot};
use crate::consts::dashboard_consts::refresh;
use crate::workers::EventSender;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    StockChart,
    LiveStats,
    RecentDonors,
    RecentRequests,
}

impl WidgetKind {
    pub fn title(&self) -> &'static str {
        match self {
            WidgetKind::StockChart => "blood stock",
            WidgetKind::LiveStats => "live statistics",
            WidgetKind::RecentDonors => "recent donors",
            WidgetKind::RecentRequests => "recent requests",
        }
    }

    pub fn refresh_interval(&self) -> Duration {
        match self {
            WidgetKind::StockChart => refresh::stock_interval(),
            WidgetKind::LiveStats => refresh::stats_interval(),
            WidgetKind::RecentDonors | WidgetKind::RecentRequests => refresh::recent_interval(),
        }
    }
}

/// The four widgets making up the dashboard.
pub struct DashboardWidgets {
    pub stats: DataWidget<StatsSnapshot>,
    pub stock: StockChartWidget,
    pub donors: DataWidget<Vec<DonorSummary>>,
    pub requests: DataWidget<Vec<RequestSummary>>,
}

impl DashboardWidgets {
    /// Mount all four widgets against `api`. Must be called from within a
    /// tokio runtime.
    pub fn mount(api: Arc<dyn DashboardApi>, events: EventSender) -> Self {
        let stats = {
            let api = Arc::clone(&api);
            DataWidget::mount(
                WidgetKind::LiveStats,
                WidgetKind::LiveStats.refresh_interval(),
                events.clone(),
                move || {
                    let api = Arc::clone(&api);
                    async move { api.stats().await }
                },
            )
        };

        let stock_data = {
            let api = Arc::clone(&api);
            DataWidget::mount(
                WidgetKind::StockChart,
                WidgetKind::StockChart.refresh_interval(),
                events.clone(),
                move || {
                    let api = Arc::clone(&api);
                    async move { api.blood_stock().await }
                },
            )
        };

        let donors = {
            let api = Arc::clone(&api);
            DataWidget::mount(
                WidgetKind::RecentDonors,
                WidgetKind::RecentDonors.refresh_interval(),
                events.clone(),
                move || {
                    let api = Arc::clone(&api);
                    async move { api.recent_donors().await }
                },
            )
        };

        let requests = DataWidget::mount(
            WidgetKind::RecentRequests,
            WidgetKind::RecentRequests.refresh_interval(),
            events.clone(),
            move || {
                let api = Arc::clone(&api);
                async move { api.recent_requests().await }
            },
        );

        Self {
            stats,
            stock: StockChartWidget::new(stock_data, TerminalSurface::new(), events),
            donors,
            requests,
        }
    }

    /// Bring derived resources (the stock chart) up to date with the latest
    /// snapshots.
    pub fn sync(&mut self) {
        self.stock.sync();
    }

    pub fn teardown(&mut self) {
        self.stats.teardown();
        self.stock.teardown();
        self.donors.teardown();
        self.requests.teardown();
    }
}
