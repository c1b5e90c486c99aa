//! Blood stock bar chart component

use super::super::utils::tone_color;
use super::spinner::render_spinner;
use crate::widgets::StockChartWidget;
use crate::widgets::chart::BarChartModel;
use crate::widgets::view::Tone;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Paragraph};

const BAR_WIDTH: u16 = 5;
const BAR_GAP: u16 = 2;

pub fn render_stock_chart(f: &mut Frame, area: Rect, widget: &StockChartWidget, tick: usize) {
    if widget.view().loading {
        render_spinner(f, area, "Blood Stock", tick);
        return;
    }

    let block = Block::default()
        .title(Span::styled(
            " Blood Stock ",
            Style::default()
                .fg(Color::White)
                .bg(tone_color(Tone::Danger))
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(tone_color(Tone::Danger)));

    match widget.chart() {
        Some(instance) => draw_bar_chart(f, area, &instance.model, block),
        None => f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "No stock data",
                Style::default().fg(Color::DarkGray),
            )))
            .alignment(Alignment::Center)
            .block(block),
            area,
        ),
    }
}

fn draw_bar_chart(f: &mut Frame, area: Rect, model: &BarChartModel, block: Block) {
    let bars: Vec<Bar> = model
        .bars
        .iter()
        .map(|bar| {
            let color = Color::Rgb(bar.fill.r, bar.fill.g, bar.fill.b);
            Bar::default()
                .value(bar.value)
                .label(Line::from(bar.label.clone()))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            block
                .title(Line::from(format!(" {} ", model.dataset_label)).right_aligned())
                .title_bottom(Line::from(model.title).alignment(Alignment::Center)),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(BAR_WIDTH)
        .bar_gap(BAR_GAP)
        .max(model.axis_max().max(model.tick_step));

    f.render_widget(chart, area);
}
