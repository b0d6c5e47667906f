use chrono::Datelike;
use chrono::Utc;
use dioxus::prelude::*;

const LINKS: [(&str, &str, &str); 3] = [
    ("GitHub", "https://github.com", "⌥"),
    ("Twitter", "https://twitter.com", "✕"),
    ("LinkedIn", "https://www.linkedin.com", "in"),
];

#[component]
pub fn Footer() -> Element {
    let year = Utc::now().year();

    rsx! {
        footer {
            class: "site-footer",
            small { "© {year} Relief Dashboard. Decentralized Disaster Verification." }
            nav {
                ul {
                    for (name, href, glyph) in LINKS {
                        li {
                            key: "{name}",
                            a {
                                href: "{href}",
                                class: "secondary",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                title: "{name}",
                                span { class: "sr-only", "{name}" }
                                span { "aria-hidden": "true", "{glyph}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
