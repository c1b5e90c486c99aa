//! Blood stock bar chart
//!
//! A [`ChartRenderer`] owns at most one chart instance at a time. Every render
//! releases the previous instance before acquiring a new one, so repeated
//! refreshes never accumulate instances.

use crate::api::models::StockEntry;
use crate::consts::dashboard_consts::chart::{
    BORDER_WIDTH, DATASET_LABEL, FILL_ALPHA, PALETTE, TICK_STEP, TITLE,
};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChartError {
    #[error("Cannot build a chart without stock entries")]
    EmptyDataset,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    pub label: String,
    pub value: u64,
    pub fill: Rgba,
    pub border: Rgba,
}

/// Everything needed to draw the stock chart, independent of the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChartModel {
    pub title: &'static str,
    pub dataset_label: &'static str,
    pub bars: Vec<ChartBar>,
    pub border_width: u16,
    /// Y axis always starts at zero.
    pub begin_at_zero: bool,
    pub tick_step: u64,
    pub show_legend: bool,
}

impl BarChartModel {
    /// One bar per entry, in entry order, colours cycling through the palette.
    pub fn from_entries(entries: &[StockEntry]) -> Self {
        let bars = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let (r, g, b) = PALETTE[index % PALETTE.len()];
                ChartBar {
                    label: entry.blood_group.clone(),
                    value: u64::from(entry.units),
                    fill: Rgba {
                        r,
                        g,
                        b,
                        a: FILL_ALPHA,
                    },
                    border: Rgba { r, g, b, a: 1.0 },
                }
            })
            .collect();

        Self {
            title: TITLE,
            dataset_label: DATASET_LABEL,
            bars,
            border_width: BORDER_WIDTH,
            begin_at_zero: true,
            tick_step: TICK_STEP,
            show_legend: false,
        }
    }

    /// Top of the y axis: the largest value rounded up to a whole tick.
    pub fn axis_max(&self) -> u64 {
        let max = self.bars.iter().map(|bar| bar.value).max().unwrap_or(0);
        max.div_ceil(self.tick_step) * self.tick_step
    }
}

/// Where chart instances are created and destroyed.
pub trait ChartSurface {
    type Instance;

    fn create(&mut self, model: BarChartModel) -> Result<Self::Instance, ChartError>;

    fn destroy(&mut self, instance: Self::Instance);
}

/// A chart drawn by the terminal renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartInstance {
    pub id: u64,
    pub model: BarChartModel,
}

/// Terminal surface: instances are models the ratatui renderer draws each frame.
#[derive(Debug, Default)]
pub struct TerminalSurface {
    next_id: u64,
    live: usize,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of instances created and not yet destroyed.
    pub fn live_instances(&self) -> usize {
        self.live
    }
}

impl ChartSurface for TerminalSurface {
    type Instance = ChartInstance;

    fn create(&mut self, model: BarChartModel) -> Result<ChartInstance, ChartError> {
        if model.bars.is_empty() {
            return Err(ChartError::EmptyDataset);
        }
        self.next_id += 1;
        self.live += 1;
        Ok(ChartInstance {
            id: self.next_id,
            model,
        })
    }

    fn destroy(&mut self, instance: ChartInstance) {
        log::trace!("Destroying chart instance {}", instance.id);
        self.live = self.live.saturating_sub(1);
    }
}

pub struct ChartRenderer<S: ChartSurface> {
    surface: S,
    current: Option<S::Instance>,
}

impl<S: ChartSurface> ChartRenderer<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            current: None,
        }
    }

    /// Replace the chart with one built from `entries`. The previous instance
    /// is destroyed first, even when building the new one fails.
    pub fn render(&mut self, entries: &[StockEntry]) -> Result<(), ChartError> {
        self.release();
        let instance = self.surface.create(BarChartModel::from_entries(entries))?;
        self.current = Some(instance);
        Ok(())
    }

    /// Destroy the current instance, if any. Idempotent.
    pub fn teardown(&mut self) {
        self.release();
    }

    pub fn current(&self) -> Option<&S::Instance> {
        self.current.as_ref()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    fn release(&mut self) {
        if let Some(instance) = self.current.take() {
            self.surface.destroy(instance);
        }
    }
}

impl<S: ChartSurface> Drop for ChartRenderer<S> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(group: &str, units: u32) -> StockEntry {
        StockEntry {
            blood_group: group.to_string(),
            units,
        }
    }

    fn eight_groups() -> Vec<StockEntry> {
        ["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"]
            .iter()
            .enumerate()
            .map(|(i, group)| entry(group, i as u32))
            .collect()
    }

    #[test]
    fn test_repeated_renders_keep_one_live_instance() {
        let mut renderer = ChartRenderer::new(TerminalSurface::new());
        for round in 0..5u32 {
            renderer
                .render(&[entry("O+", round), entry("A-", 2)])
                .unwrap();
            assert_eq!(renderer.surface().live_instances(), 1);
        }
        assert_eq!(renderer.current().map(|c| c.id), Some(5));

        renderer.teardown();
        renderer.teardown();
        assert_eq!(renderer.surface().live_instances(), 0);
        assert!(renderer.current().is_none());
    }

    #[test]
    fn test_failed_render_still_releases_previous_instance() {
        let mut renderer = ChartRenderer::new(TerminalSurface::new());
        renderer.render(&[entry("B+", 3)]).unwrap();

        assert_eq!(renderer.render(&[]), Err(ChartError::EmptyDataset));
        assert_eq!(renderer.surface().live_instances(), 0);
        assert!(renderer.current().is_none());
    }

    #[test]
    fn test_model_follows_entry_order_and_cycles_palette() {
        let mut entries = eight_groups();
        entries.push(entry("X", 1));
        let model = BarChartModel::from_entries(&entries);

        assert_eq!(model.bars.len(), 9);
        assert_eq!(model.bars[0].label, "A+");
        assert_eq!(model.bars[7].label, "O-");
        assert_eq!(model.bars[8].fill, model.bars[0].fill);
        assert_eq!(model.bars[0].fill.a, FILL_ALPHA);
        assert_eq!(model.bars[0].border.a, 1.0);
        assert_eq!(model.title, "Blood Inventory by Type");
        assert!(model.begin_at_zero);
        assert!(!model.show_legend);
        assert_eq!(model.axis_max(), 7);
    }
}
