use crate::components::pico::Grid;
use api::feed::group_thousands;
use api::feed::DashboardStats;
use dioxus::prelude::*;

#[component]
fn StatCard(icon: &'static str, tint: &'static str, label: &'static str, value: u64) -> Element {
    let value = group_thousands(value);
    rsx! {
        article {
            class: "stat-card",
            div { class: "stat-icon {tint}", "{icon}" }
            div {
                small { "{label}" }
                h4 { "{value}" }
            }
        }
    }
}

#[component]
pub fn StatsPanel(stats: DashboardStats) -> Element {
    rsx! {
        section {
            class: "stats",
            Grid {
                StatCard { icon: "📊", tint: "tint-blue", label: "Total Reports", value: stats.total_reports }
                StatCard { icon: "✅", tint: "tint-green", label: "Verified Events", value: stats.verified_events }
                StatCard { icon: "👥", tint: "tint-purple", label: "Active Verifiers", value: stats.active_verifiers }
            }
        }
    }
}
