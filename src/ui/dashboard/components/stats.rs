//! Live statistics cards

use super::super::utils::tone_color;
use super::spinner::render_spinner;
use crate::api::models::StatsSnapshot;
use crate::widgets::WidgetView;
use crate::widgets::view::stat_cards;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Four counter cards side by side. Before any data arrives the cards show
/// zeros; while the first request is in flight a spinner stands in for them.
pub fn render_live_stats(
    f: &mut Frame,
    area: Rect,
    view: &WidgetView<StatsSnapshot>,
    tick: usize,
) {
    if view.loading {
        render_spinner(f, area, "Live Statistics", tick);
        return;
    }

    let stats = view.snapshot.unwrap_or_default();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for (card, chunk) in stat_cards(&stats).iter().zip(chunks.iter()) {
        let color = tone_color(card.tone);
        let lines = vec![
            Line::from(Span::styled(
                card.value.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                card.caption,
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let block = Block::default()
            .title(format!(" {} ", card.title))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color));

        f.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(block),
            *chunk,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::dashboard::components::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(view: &WidgetView<StatsSnapshot>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 5)).unwrap();
        terminal
            .draw(|f| render_live_stats(f, f.area(), view, 0))
            .unwrap();
        buffer_text(&terminal)
    }

    #[test]
    fn test_cards_show_counters() {
        let text = draw(&WidgetView {
            loading: false,
            snapshot: Some(StatsSnapshot {
                total_donors: 10,
                total_requests: 5,
                pending_requests: 2,
                approved_requests: 3,
            }),
            generation: 1,
        });

        assert!(text.contains("Total Donors"));
        assert!(text.contains("Awaiting approval"));
        assert!(text.contains("10"));
        assert!(!text.contains("Loading"));
    }

    #[test]
    fn test_spinner_until_first_response() {
        let text = draw(&WidgetView {
            loading: true,
            snapshot: None,
            generation: 0,
        });
        assert!(text.contains("Loading..."));
        assert!(!text.contains("Total Donors"));
    }

    #[test]
    fn test_zero_cards_after_failed_first_load() {
        let text = draw(&WidgetView {
            loading: false,
            snapshot: None,
            generation: 0,
        });
        assert!(text.contains("Approved"));
        assert!(text.contains('0'));
    }
}
