//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Source;
use crate::widgets::view::{Badge, Tone};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Span;

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// Terminal colour for a contextual tone
pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Primary => Color::Rgb(13, 110, 253),
        Tone::Info => Color::Rgb(13, 202, 240),
        Tone::Warning => Color::Rgb(255, 193, 7),
        Tone::Success => Color::Rgb(25, 135, 84),
        Tone::Danger => Color::Rgb(220, 53, 69),
        Tone::Secondary => Color::Rgb(108, 117, 125),
    }
}

/// Badge rendered as a filled label
pub fn badge_span(badge: &Badge) -> Span<'static> {
    let fg = match badge.tone {
        Tone::Warning | Tone::Info => Color::Black,
        _ => Color::White,
    };
    Span::styled(
        format!(" {} ", badge.label),
        Style::default()
            .fg(fg)
            .bg(tone_color(badge.tone))
            .add_modifier(Modifier::BOLD),
    )
}

/// Get a ratatui color for an event source
pub fn get_source_color(source: &Source) -> Color {
    match source {
        Source::Widget(_) => Color::Cyan,
        Source::Alerts => Color::Yellow,
        Source::Session => Color::Green,
    }
}

/// Spinner glyph for the given animation tick
pub fn spinner_frame(tick: usize) -> &'static str {
    SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            // Extract MM-DD from date and HH:MM from time
            if let Some(month_day) = date_part.get(5..10) {
                if let Some(hour_min) = time_part.get(0..5) {
                    return format!("{} {}", month_day, hour_min);
                }
            }
        }
    }
    // Fall back to the raw timestamp if parsing fails
    timestamp.to_string()
}

/// Clean HTTP error messages
pub fn clean_http_error_message(msg: &str) -> String {
    if msg.contains("Network error") && msg.contains("onnect") {
        return "Backend unreachable - showing last good data".to_string();
    }
    if msg.contains("status 401") || msg.contains("status 403") {
        return "Backend rejected the session - check the session cookie".to_string();
    }
    msg.to_string()
}
