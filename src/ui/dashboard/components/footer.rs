//! Dashboard footer component
//!
//! Renders key bindings and uptime

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use std::time::Duration;

/// Render the key binding footer.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, uptime: Duration) {
    let secs = uptime.as_secs();
    let footer_text = format!(
        "[Q] Quit | [X] Dismiss alert | Blood Bank Live Dashboard | Up {:02}:{:02}:{:02}",
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60
    );

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
