//! Loading placeholder shown until a widget's first response

use super::super::utils::{spinner_frame, tone_color};
use crate::widgets::view::Tone;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_spinner(f: &mut Frame, area: Rect, title: &str, tick: usize) {
    let line = Line::from(vec![
        Span::styled(
            format!("{} ", spinner_frame(tick)),
            Style::default().fg(tone_color(Tone::Danger)),
        ),
        Span::styled("Loading...", Style::default().fg(Color::DarkGray)),
    ]);

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    f.render_widget(
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}
