//! The literal data the dashboard renders. Nothing here is fetched.

use crate::category::Category;
use crate::report::Report;
use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// The sample reports shown under "Recent Activity", timestamped relative to `now`.
pub fn sample_reports(now: DateTime<Utc>) -> Vec<Report> {
    vec![
        Report {
            id: 1,
            title: "Flood in Sector 4".to_string(),
            description: "Severe water logging observed.".to_string(),
            category: Category::Flood,
            timestamp: now - Duration::hours(1),
            location: Some("Mumbai".to_string()),
        },
        Report {
            id: 2,
            title: "Building crack observed".to_string(),
            description: "Large crack appeared after tremors.".to_string(),
            category: Category::Earthquake,
            timestamp: now - Duration::hours(2),
            location: Some("Delhi".to_string()),
        },
    ]
}

/// The headline counters in the stats panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_reports: u64,
    pub verified_events: u64,
    pub active_verifiers: u64,
}

impl Default for DashboardStats {
    fn default() -> Self {
        Self {
            total_reports: 1_024,
            verified_events: 856,
            active_verifiers: 342,
        }
    }
}

/// Formats `n` with comma thousands separators, e.g. `1,024`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_samples_with_distinct_ids() {
        let reports = sample_reports(Utc::now());
        assert_eq!(reports.len(), 2);
        assert_ne!(reports[0].id, reports[1].id);
    }

    #[test]
    fn samples_are_in_the_past() {
        let now = Utc::now();
        assert!(sample_reports(now).iter().all(|r| r.timestamp < now));
    }

    #[test]
    fn grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(856), "856");
        assert_eq!(group_thousands(1_024), "1,024");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn default_stats() {
        let stats = DashboardStats::default();
        assert_eq!(group_thousands(stats.total_reports), "1,024");
        assert_eq!(stats.verified_events, 856);
        assert_eq!(stats.active_verifiers, 342);
    }
}
