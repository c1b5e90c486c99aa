//! Alert banner strip

use super::super::utils::tone_color;
use crate::alerts::Alert;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Height the strip needs for `count` banners; zero hides it.
pub fn alerts_height(count: usize) -> u16 {
    if count == 0 {
        0
    } else {
        count as u16 + 2
    }
}

pub fn render_alerts(f: &mut Frame, area: Rect, alerts: &[Alert]) {
    if alerts.is_empty() {
        return;
    }

    let lines: Vec<Line> = alerts
        .iter()
        .map(|alert| {
            Line::from(vec![
                Span::styled("● ", Style::default().fg(tone_color(alert.tone))),
                Span::raw(alert.message.clone()),
            ])
        })
        .collect();

    let block = Block::default()
        .title(" Notices ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
