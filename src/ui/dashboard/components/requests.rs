//! Recent blood requests table

use super::super::utils::{badge_span, tone_color};
use super::spinner::render_spinner;
use crate::api::models::RequestSummary;
use crate::widgets::WidgetView;
use crate::widgets::view::{Tone, blood_group_badge, status_badge};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table};

pub fn render_recent_requests(
    f: &mut Frame,
    area: Rect,
    view: &WidgetView<Vec<RequestSummary>>,
    tick: usize,
) {
    if view.loading {
        render_spinner(f, area, "Recent Blood Requests", tick);
        return;
    }

    let block = Block::default()
        .title(Span::styled(
            " Recent Blood Requests ",
            Style::default()
                .fg(Color::White)
                .bg(tone_color(Tone::Danger))
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    let requests = view.snapshot.as_deref().unwrap_or_default();
    if requests.is_empty() {
        f.render_widget(
            Paragraph::new("No records yet")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray))
                .block(block),
            area,
        );
        return;
    }

    let header = Row::new(["Patient", "Hospital", "Group", "Units", "Status", "Date"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows = requests.iter().map(|request| {
        Row::new(vec![
            Cell::from(request.patient_name.clone()),
            Cell::from(request.hospital_name.clone()),
            Cell::from(badge_span(&blood_group_badge(&request.blood_group))),
            Cell::from(request.units.to_string()),
            Cell::from(badge_span(&status_badge(&request.status))),
            Cell::from(Span::styled(
                request.created_at.clone(),
                Style::default().fg(Color::DarkGray),
            )),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Fill(2),
            Constraint::Fill(2),
            Constraint::Length(6),
            Constraint::Length(5),
            Constraint::Length(12),
            Constraint::Length(17),
        ],
    )
    .header(header)
    .block(block);

    f.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::RequestStatus;
    use crate::ui::dashboard::components::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn request(patient: &str, status: RequestStatus) -> RequestSummary {
        RequestSummary {
            id: 1,
            patient_name: patient.to_string(),
            hospital_name: "City Hospital".to_string(),
            blood_group: "A+".to_string(),
            units: 3,
            status,
            created_at: "2024-05-01 10:42".to_string(),
        }
    }

    #[test]
    fn test_status_badges_render_labels() {
        let mut terminal = Terminal::new(TestBackend::new(110, 8)).unwrap();
        let view = WidgetView {
            loading: false,
            snapshot: Some(vec![
                request("Meera", RequestStatus::Pending),
                request("Karan", RequestStatus::Unknown("Cancelled".to_string())),
            ]),
            generation: 1,
        };
        terminal
            .draw(|f| render_recent_requests(f, f.area(), &view, 0))
            .unwrap();
        let text = buffer_text(&terminal);

        assert!(text.contains(" Pending "));
        assert!(text.contains(" Cancelled "));
        assert!(text.contains("City Hospital"));
        assert!(text.contains("Recent Blood Requests"));
        assert!(text.contains("Date"));
        assert!(text.contains("2024-05-01 10:42"));
    }

    #[test]
    fn test_spinner_while_loading() {
        let mut terminal = Terminal::new(TestBackend::new(60, 5)).unwrap();
        let view = WidgetView {
            loading: true,
            snapshot: None,
            generation: 0,
        };
        terminal
            .draw(|f| render_recent_requests(f, f.area(), &view, 1))
            .unwrap();
        assert!(buffer_text(&terminal).contains("Loading..."));
    }
}
