//! The report record and the form draft that produces one.

use crate::category::Category;
use crate::category::CategoryFilter;
use crate::time_ago;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// A single disaster incident record as shown on a summary card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Report {
    /// A human readable age such as "2 hours ago", relative to `now`.
    pub fn age_label(&self, now: DateTime<Utc>) -> String {
        time_ago::relative_time(self.timestamp, now)
    }

    /// The location, treating a blank string as absent.
    pub fn location(&self) -> Option<&str> {
        self.location
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
    }
}

/// Returns the reports that pass `filter`, preserving their order.
pub fn filter_reports(
    reports: &[Report],
    filter: CategoryFilter,
) -> impl Iterator<Item = &Report> + '_ {
    reports.iter().filter(move |r| filter.matches(r.category))
}

/// The in-progress contents of the report form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReportDraft {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub location: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::sample_reports;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn earthquake_filter_yields_delhi_only() {
        let reports = sample_reports(now());
        let hits: Vec<_> = filter_reports(&reports, Category::Earthquake.into()).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].location(), Some("Delhi"));
        assert_eq!(hits[0].id, 2);
    }

    #[test]
    fn all_filter_returns_list_unchanged() {
        let reports = sample_reports(now());
        let hits: Vec<Report> = filter_reports(&reports, CategoryFilter::All)
            .cloned()
            .collect();
        assert_eq!(hits, reports);
    }

    #[test]
    fn filter_with_no_matches_is_empty() {
        let reports = sample_reports(now());
        assert_eq!(filter_reports(&reports, Category::Storm.into()).count(), 0);
    }

    #[test]
    fn blank_location_is_absent() {
        let mut report = sample_reports(now()).remove(0);
        report.location = Some("   ".to_string());
        assert_eq!(report.location(), None);
        report.location = None;
        assert_eq!(report.location(), None);
    }

    #[test]
    fn age_label_uses_now() {
        let report = sample_reports(now()).remove(0);
        assert_eq!(report.age_label(now()), "1 hour ago");
    }

    #[test]
    fn draft_defaults_to_first_category() {
        let draft = ReportDraft::default();
        assert_eq!(draft.category, Category::Flood);
        assert!(draft.title.is_empty());
        assert!(draft.location.is_empty());
    }

    #[test]
    fn draft_serializes_category_id() {
        let draft = ReportDraft {
            title: "Bridge down".to_string(),
            category: Category::MedicalEmergency,
            ..Default::default()
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["category"], "medical_emergency");
        assert_eq!(json["title"], "Bridge down");
    }
}
