//! Dashboard main renderer

use super::components::{alerts, donors, footer, info_card, logs, requests, stats, stock};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let banners = state.alerts.alerts();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(alerts::alerts_height(banners.len())),
            Constraint::Length(4),
            Constraint::Fill(3),
            Constraint::Fill(2),
            Constraint::Length(7),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    alerts::render_alerts(f, main_chunks[0], &banners);
    stats::render_live_stats(f, main_chunks[1], &state.widgets.stats.view(), state.tick);

    let chart_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(67), Constraint::Percentage(33)])
        .split(main_chunks[2]);
    stock::render_stock_chart(f, chart_row[0], &state.widgets.stock, state.tick);
    info_card::render_info_card(f, chart_row[1], &state.api_url);

    let table_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_chunks[3]);
    donors::render_recent_donors(f, table_row[0], &state.widgets.donors.view(), state.tick);
    requests::render_recent_requests(f, table_row[1], &state.widgets.requests.view(), state.tick);

    logs::render_logs_panel(f, main_chunks[4], state);
    footer::render_footer(f, main_chunks[5], state.start_time.elapsed());
}
