//=============================================================================
// File: src/screens/dashboard.rs
//=============================================================================
use crate::components::category_tabs::CategoryTabs;
use crate::components::empty_state::EmptyState;
use crate::components::hero::Hero;
use crate::components::stats_panel::StatsPanel;
use crate::components::summary_card::SummaryCard;
use crate::AppState;
use api::category::CategoryFilter;
use api::report::filter_reports;
use api::report::Report;
use dioxus::prelude::*;
use dioxus_logger::tracing::debug;

#[component]
pub fn DashboardScreen() -> Element {
    let app_state = use_context::<AppState>();
    let mut category = use_signal(CategoryFilter::default);

    let filter = category();
    let visible: Vec<Report> = filter_reports(&app_state.reports, filter)
        .cloned()
        .collect();

    rsx! {
        div {
            class: "dashboard",
            Hero {}
            StatsPanel { stats: app_state.stats }
            section {
                id: "recent-activity",
                class: "recent-activity",
                div {
                    class: "section-heading",
                    h2 { "Recent Activity" }
                    CategoryTabs {
                        active: filter,
                        on_change: move |next: CategoryFilter| {
                            let prev = *category.peek();
                            debug!("category filter: {prev} -> {next}");
                            category.set(next);
                        },
                    }
                }
                if visible.is_empty() {
                    EmptyState {
                        title: "No reports in this category".to_string(),
                        description: Some("Try another category, or pick All to see every report.".to_string()),
                        icon: rsx! { span { "🗂" } },
                    }
                } else {
                    div {
                        class: "card-grid",
                        for report in visible {
                            SummaryCard { key: "{report.id}", report }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::button_for;
    use crate::test_util::click;
    use crate::test_util::texts;
    use crate::Screen;
    use api::prefs::user_prefs::UserPrefs;
    use api::prefs::wallet_preference::WalletPreference;
    use std::time::Duration;

    const EMPTY_TITLE: &str = "No reports in this category";

    #[component]
    fn Harness() -> Element {
        use_context_provider(|| {
            AppState::new(UserPrefs::new(WalletPreference::Disabled, Duration::ZERO))
        });
        let screen = use_signal(Screen::default);
        use_context_provider(|| screen);
        rsx! { DashboardScreen {} }
    }

    #[test]
    fn all_shows_both_samples() {
        let mut dom = VirtualDom::new(Harness);
        let text = texts(&dom.rebuild_to_vec());
        assert!(text.iter().any(|t| t == "Flood in Sector 4"));
        assert!(text.iter().any(|t| t == "Building crack observed"));
        assert!(!text.iter().any(|t| t == EMPTY_TITLE));
    }

    #[test]
    fn category_without_reports_shows_empty_state() {
        let mut dom = VirtualDom::new(Harness);
        let edits = dom.rebuild_to_vec();

        click(&dom, button_for(&edits, "fire"));
        let text = texts(&dom.render_immediate_to_vec());
        assert!(text.iter().any(|t| t == EMPTY_TITLE));
    }
}
