//! Blood stock widget: a [`DataWidget`] plus the chart it owns.

use super::chart::{ChartRenderer, ChartSurface, TerminalSurface};
use super::data::{DataWidget, WidgetView};
use super::WidgetKind;
use crate::api::models::StockEntry;
use crate::events::EventType;
use crate::logging::LogLevel;
use crate::workers::EventSender;

pub struct StockChartWidget<S: ChartSurface = TerminalSurface> {
    data: DataWidget<Vec<StockEntry>>,
    chart: ChartRenderer<S>,
    events: EventSender,
    /// Snapshot generation the chart was last built from.
    charted_generation: u64,
}

impl<S: ChartSurface> StockChartWidget<S> {
    pub fn new(data: DataWidget<Vec<StockEntry>>, surface: S, events: EventSender) -> Self {
        Self {
            data,
            chart: ChartRenderer::new(surface),
            events,
            charted_generation: 0,
        }
    }

    /// Rebuild the chart if a new snapshot landed since the last call.
    /// An empty stock list leaves no chart behind.
    pub fn sync(&mut self) {
        let view = self.data.view();
        if view.generation == self.charted_generation {
            return;
        }
        self.charted_generation = view.generation;

        let entries = view.snapshot.unwrap_or_default();
        if entries.is_empty() {
            self.chart.teardown();
            return;
        }
        if let Err(e) = self.chart.render(&entries) {
            self.events.send_widget_event(
                WidgetKind::StockChart,
                format!("Failed to draw stock chart: {}", e),
                EventType::Error,
                LogLevel::Warn,
            );
        }
    }

    pub fn view(&self) -> WidgetView<Vec<StockEntry>> {
        self.data.view()
    }

    pub fn chart(&self) -> Option<&S::Instance> {
        self.chart.current()
    }

    pub fn surface(&self) -> &S {
        self.chart.surface()
    }

    /// Stop polling and destroy the chart. Idempotent.
    pub fn teardown(&mut self) {
        self.data.teardown();
        self.chart.teardown();
    }
}
