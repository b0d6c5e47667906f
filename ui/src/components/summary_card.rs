use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use api::report::Report;
use chrono::Utc;
use dioxus::prelude::*;

/// Badge palette keyed by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeColor {
    Blue,
    Orange,
    Amber,
    Neutral,
}

impl BadgeColor {
    /// Case-insensitive lookup; unknown categories get [`BadgeColor::Neutral`].
    pub fn for_category(category: &str) -> Self {
        match category.to_ascii_lowercase().as_str() {
            "flood" => Self::Blue,
            "fire" => Self::Orange,
            "earthquake" => Self::Amber,
            _ => Self::Neutral,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Blue => "badge badge-blue",
            Self::Orange => "badge badge-orange",
            Self::Amber => "badge badge-amber",
            Self::Neutral => "badge badge-neutral",
        }
    }
}

#[component]
pub fn SummaryCard(report: Report) -> Element {
    let badge = BadgeColor::for_category(report.category.id());
    let age = report.age_label(Utc::now());
    let stamp = report.timestamp.format("%Y-%m-%d %H:%M UTC").to_string();

    rsx! {
        article {
            class: "summary-card",
            div {
                class: "summary-card-body",
                div {
                    class: "summary-card-meta",
                    span { class: badge.class(), "{report.category.label()}" }
                    small { title: "{stamp}", "🕒 {age}" }
                }
                h3 { class: "line-clamp-1", "{report.title}" }
                p { class: "line-clamp-3", "{report.description}" }
                if let Some(location) = report.location() {
                    small { class: "summary-card-location", "📍 {location}" }
                }
            }
            footer {
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    "View Details →"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::category::Category;
    use strum::IntoEnumIterator;

    #[test]
    fn mapping_ignores_case() {
        assert_eq!(BadgeColor::for_category("flood"), BadgeColor::Blue);
        assert_eq!(BadgeColor::for_category("FLOOD"), BadgeColor::Blue);
        assert_eq!(BadgeColor::for_category("Fire"), BadgeColor::Orange);
        assert_eq!(BadgeColor::for_category("EarthQuake"), BadgeColor::Amber);
    }

    #[test]
    fn unknown_falls_back_to_neutral() {
        assert_eq!(BadgeColor::for_category("tsunami"), BadgeColor::Neutral);
        assert_eq!(BadgeColor::for_category(""), BadgeColor::Neutral);
        assert_eq!(BadgeColor::for_category(" flood"), BadgeColor::Neutral);
    }

    #[test]
    fn only_three_categories_are_colored() {
        let colored = Category::iter()
            .filter(|c| BadgeColor::for_category(c.id()) != BadgeColor::Neutral)
            .count();
        assert_eq!(colored, 3);
    }

    #[test]
    fn neutral_class() {
        assert_eq!(BadgeColor::Neutral.class(), "badge badge-neutral");
    }
}
