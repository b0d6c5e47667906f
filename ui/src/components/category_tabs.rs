use api::category::CategoryFilter;
use dioxus::prelude::*;

/// One button per filter option, "All" first.
///
/// Holds no state of its own: the parent owns `active` and receives the
/// clicked option through `on_change`, once per click.
#[component]
pub fn CategoryTabs(active: CategoryFilter, on_change: EventHandler<CategoryFilter>) -> Element {
    rsx! {
        div {
            class: "category-tabs",
            role: "group",
            for option in CategoryFilter::options() {
                button {
                    key: "{option.id()}",
                    r#type: "button",
                    class: tab_class(option, active),
                    "aria-pressed": option == active,
                    "data-category": option.id(),
                    onclick: move |_| on_change.call(option),
                    "{option.label()}"
                }
            }
        }
    }
}

fn tab_class(option: CategoryFilter, active: CategoryFilter) -> &'static str {
    if option == active {
        "category-tab active-tab"
    } else {
        "category-tab"
    }
}
