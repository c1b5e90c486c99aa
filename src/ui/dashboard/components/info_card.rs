//! Static "Quick Stats" card

use super::super::utils::tone_color;
use crate::widgets::view::Tone;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub fn render_info_card(f: &mut Frame, area: Rect, api_url: &str) {
    let lines = vec![
        Line::from(Span::styled(
            "Real-time updates every few seconds",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Dashboard updates automatically. No page refresh needed!",
            Style::default().fg(tone_color(Tone::Info)),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Backend: ", Style::default().fg(Color::DarkGray)),
            Span::raw(api_url.to_string()),
        ]),
    ];

    let block = Block::default()
        .title(" Quick Stats ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(tone_color(Tone::Info)))
        .padding(Padding::horizontal(1));

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
