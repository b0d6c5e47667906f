use crate::components::action_link::ActionLink;
use crate::Screen;
use dioxus::prelude::*;

#[component]
pub fn Hero() -> Element {
    let active_screen = use_context::<Signal<Screen>>();

    rsx! {
        section {
            class: "hero",
            h1 { "Decentralized Disaster Response" }
            p {
                "Verify incidents in real-time using blockchain technology. "
                "Report disasters, validate claims, and help your community faster."
            }
            div {
                class: "hero-actions",
                ActionLink {
                    state: active_screen,
                    to: Screen::Submit,
                    class: "contrast",
                    "Report Incident"
                }
                a {
                    href: "#recent-activity",
                    role: "button",
                    class: "secondary outline",
                    "Verify Reports ›"
                }
            }
        }
    }
}
