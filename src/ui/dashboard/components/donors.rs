//! Recent donors table

use super::super::utils::{badge_span, tone_color};
use super::spinner::render_spinner;
use crate::api::models::DonorSummary;
use crate::widgets::WidgetView;
use crate::widgets::view::{Tone, blood_group_badge};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table};

pub fn render_recent_donors(
    f: &mut Frame,
    area: Rect,
    view: &WidgetView<Vec<DonorSummary>>,
    tick: usize,
) {
    if view.loading {
        render_spinner(f, area, "Recent Donors", tick);
        return;
    }

    let block = Block::default()
        .title(Span::styled(
            " Recent Donors ",
            Style::default()
                .fg(Color::White)
                .bg(tone_color(Tone::Danger))
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    let donors = view.snapshot.as_deref().unwrap_or_default();
    if donors.is_empty() {
        f.render_widget(
            Paragraph::new("No records yet")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray))
                .block(block),
            area,
        );
        return;
    }

    let header = Row::new(["Name", "Blood Group", "City", "Registered"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows = donors.iter().map(|donor| {
        Row::new(vec![
            Cell::from(donor.full_name.clone()),
            Cell::from(badge_span(&blood_group_badge(&donor.blood_group))),
            Cell::from(donor.city.clone()),
            Cell::from(Span::styled(
                donor.created_at.clone(),
                Style::default().fg(Color::DarkGray),
            )),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Fill(2),
            Constraint::Length(12),
            Constraint::Fill(1),
            Constraint::Length(17),
        ],
    )
    .header(header)
    .block(block);

    f.render_widget(table, area);
}
