use api::feed::sample_reports;
use api::feed::DashboardStats;
use api::prefs::user_prefs::UserPrefs;
use api::report::Report;
use std::ops::Deref;
use std::sync::Arc;

/// Everything the screens read but never change.
#[derive(Debug, PartialEq, Eq)]
pub struct AppStateData {
    pub prefs: UserPrefs,
    pub reports: Vec<Report>,
    pub stats: DashboardStats,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(prefs: UserPrefs) -> Self {
        Self(Arc::new(AppStateData {
            prefs,
            reports: sample_reports(chrono::Utc::now()),
            stats: DashboardStats::default(),
        }))
    }
}
