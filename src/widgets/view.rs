//! Toolkit-independent view models for the widget cards and badges.

use crate::api::models::{RequestStatus, StatsSnapshot};

/// Contextual colour of a card, badge or banner.
#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Tone {
    Primary,
    Info,
    Warning,
    Success,
    Danger,
    Secondary,
}

/// One of the four live statistics cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: u64,
    pub caption: &'static str,
    pub tone: Tone,
}

/// Cards in display order: donors, requests, pending, approved.
pub fn stat_cards(stats: &StatsSnapshot) -> [StatCard; 4] {
    [
        StatCard {
            title: "Total Donors",
            value: stats.total_donors,
            caption: "Registered in system",
            tone: Tone::Primary,
        },
        StatCard {
            title: "Total Requests",
            value: stats.total_requests,
            caption: "All time",
            tone: Tone::Info,
        },
        StatCard {
            title: "Pending",
            value: stats.pending_requests,
            caption: "Awaiting approval",
            tone: Tone::Warning,
        },
        StatCard {
            title: "Approved",
            value: stats.approved_requests,
            caption: "Successfully processed",
            tone: Tone::Success,
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub tone: Tone,
}

pub fn status_badge(status: &RequestStatus) -> Badge {
    let tone = match status {
        RequestStatus::Pending => Tone::Warning,
        RequestStatus::Approved => Tone::Success,
        RequestStatus::Rejected => Tone::Danger,
        RequestStatus::Unknown(_) => Tone::Secondary,
    };
    Badge {
        label: status.label().to_string(),
        tone,
    }
}

pub fn blood_group_badge(blood_group: &str) -> Badge {
    Badge {
        label: blood_group.to_string(),
        tone: Tone::Danger,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_cards_map_counters_to_tones() {
        let stats = StatsSnapshot {
            total_donors: 10,
            total_requests: 5,
            pending_requests: 2,
            approved_requests: 3,
        };
        let cards = stat_cards(&stats);
        let summary: Vec<_> = cards.iter().map(|c| (c.value, c.tone)).collect();
        assert_eq!(
            summary,
            vec![
                (10, Tone::Primary),
                (5, Tone::Info),
                (2, Tone::Warning),
                (3, Tone::Success),
            ]
        );
    }

    #[test]
    fn test_status_badges() {
        assert_eq!(status_badge(&RequestStatus::Rejected).tone, Tone::Danger);
        assert_eq!(status_badge(&RequestStatus::Pending).tone, Tone::Warning);
        assert_eq!(status_badge(&RequestStatus::Approved).tone, Tone::Success);

        let cancelled = status_badge(&RequestStatus::Unknown("Cancelled".to_string()));
        assert_eq!(cancelled.tone, Tone::Secondary);
        assert_eq!(cancelled.label, "Cancelled");
    }

    #[test]
    fn test_tone_class_names() {
        assert_eq!(Tone::Danger.to_string(), "danger");
        assert_eq!(Tone::Secondary.to_string(), "secondary");
    }
}
