//! Dashboard state update logic

use super::state::DashboardState;

impl DashboardState {
    /// Advance one UI frame: absorb queued events and bring the chart up to
    /// date with the latest stock snapshot.
    pub fn update(&mut self) {
        self.tick += 1;

        while let Some(event) = self.pending_events.pop_front() {
            self.add_to_activity_log(event);
        }

        self.widgets.sync();
    }
}
