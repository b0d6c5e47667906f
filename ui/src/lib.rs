// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
pub mod compat;
mod components;
pub mod hooks;
mod screens;
#[cfg(test)]
mod test_util;
mod wallet_context;

use api::prefs::user_prefs::UserPrefs;
use app_state::AppState;
use components::footer::Footer;
use components::pico::Container;
use components::wallet_connect::WalletConnect;
use screens::dashboard::DashboardScreen;
use screens::submit::SubmitScreen;
use wallet_context::use_wallet_provider;

/// Enum to represent the different screens in our application.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum Screen {
    #[default]
    Dashboard,
    Submit,
}

impl Screen {
    /// Helper to get the display name for each screen.
    fn name(&self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::Submit => "Report Incident",
        }
    }
}

/// A list of all available screens for easy iteration.
const ALL_SCREENS: [Screen; 2] = [Screen::Dashboard, Screen::Submit];

/// The navigation tabs component.
#[component]
fn Tabs(mut active_screen: Signal<Screen>) -> Element {
    rsx! {
        nav {
            class: "tab-menu",
            ul {
                for screen in ALL_SCREENS {
                    li {
                        key: "{screen.name()}",
                        a {
                            href: "#",
                            class: if active_screen() == screen { "active-tab" } else { "" },
                            "aria-current": if active_screen() == screen { "page" } else { "false" },
                            onclick: move |event| {
                                event.prevent_default();
                                active_screen.set(screen);
                            },
                            "{screen.name()}"
                        }
                    }
                }
            }
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let dashboard_css = r#"
    /* --- APP FRAME --- */
    .app-main-container {
        min-height: 100vh;
        display: flex;
        flex-direction: column;
    }
    .app-main-container > main { flex: 1; }

    .app-main-container header nav { align-items: center; }
    .brand { margin: 0; font-size: 1.25rem; }

    /* --- NAVIGATION TABS --- */
    .tab-menu a.active-tab {
        color: var(--pico-primary) !important;
        border-bottom: 3px solid var(--pico-primary);
    }
    .tab-menu a:not(.active-tab) {
        color: var(--pico-muted-color);
        border-bottom: 3px solid transparent;
    }

    /* --- HERO --- */
    .hero {
        text-align: center;
        padding: 4rem 2rem;
        margin-bottom: 2rem;
        border-radius: 1.5rem;
        color: #fff;
        background: linear-gradient(135deg, var(--pico-primary-background), #312e81);
        box-shadow: 0 20px 40px rgba(0,0,0,0.2);
    }
    .hero h1 { color: #fff; font-size: clamp(2rem, 5vw, 3.5rem); }
    .hero p { max-width: 40rem; margin: 0 auto 2rem auto; opacity: 0.9; }
    .hero-actions { display: flex; flex-wrap: wrap; justify-content: center; gap: 1rem; }

    /* --- STATS --- */
    .stat-card { display: flex; align-items: center; gap: 1rem; }
    .stat-card h4 { margin: 0; }
    .stat-icon { font-size: 1.5rem; padding: 0.75rem; border-radius: 0.75rem; }
    .tint-blue { background: #dbeafe; }
    .tint-green { background: #dcfce7; }
    .tint-purple { background: #f3e8ff; }

    /* --- RECENT ACTIVITY --- */
    .section-heading {
        display: flex;
        flex-wrap: wrap;
        justify-content: space-between;
        align-items: center;
        gap: 1rem;
        margin-bottom: 1.5rem;
    }
    .category-tabs { display: flex; gap: 0.25rem; overflow-x: auto; }
    .category-tab {
        white-space: nowrap;
        padding: 0.4rem 0.9rem;
        font-size: 0.875rem;
        background: transparent;
        color: var(--pico-muted-color);
        border: none;
    }
    .category-tab.active-tab {
        background: var(--pico-card-background-color);
        color: var(--pico-primary);
        box-shadow: var(--pico-card-box-shadow);
    }
    .card-grid {
        display: grid;
        gap: 1.5rem;
        grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr));
    }

    /* --- SUMMARY CARD --- */
    .summary-card { display: flex; flex-direction: column; height: 100%; margin: 0; }
    .summary-card-body { flex-grow: 1; }
    .summary-card-meta { display: flex; justify-content: space-between; align-items: flex-start; margin-bottom: 1rem; }
    .summary-card-location { display: block; color: var(--pico-muted-color); }
    .line-clamp-1 { display: -webkit-box; -webkit-line-clamp: 1; -webkit-box-orient: vertical; overflow: hidden; }
    .line-clamp-3 { display: -webkit-box; -webkit-line-clamp: 3; -webkit-box-orient: vertical; overflow: hidden; }
    .badge { display: inline-block; padding: 0.1rem 0.6rem; border-radius: 999px; font-size: 0.75rem; font-weight: 600; }
    .badge-blue { background: #dbeafe; color: #1d4ed8; }
    .badge-orange { background: #ffedd5; color: #c2410c; }
    .badge-amber { background: #fef3c7; color: #b45309; }
    .badge-neutral { background: #f3f4f6; color: #374151; }

    /* --- EMPTY STATE --- */
    .empty-state {
        display: flex;
        flex-direction: column;
        align-items: center;
        padding: 2rem;
        text-align: center;
        color: var(--pico-muted-color);
        border: 2px dashed var(--pico-card-border-color);
        border-radius: var(--pico-border-radius);
    }
    .empty-state-icon { font-size: 3rem; margin-bottom: 1rem; opacity: 0.8; }

    /* --- FORM --- */
    .report-form { max-width: 36rem; }
    .full-width { width: 100%; }

    /* --- WALLET --- */
    .wallet-pill { display: flex; align-items: center; gap: 0.75rem; }
    .status-dot { width: 0.5rem; height: 0.5rem; border-radius: 50%; background: #22c55e; }
    .wallet-disconnect {
        padding: 0;
        font-size: 0.8rem;
        color: #ef4444;
        background: none;
        border: none;
    }

    /* --- FOOTER --- */
    .site-footer {
        display: flex;
        flex-wrap: wrap;
        justify-content: space-between;
        align-items: center;
        padding: 2rem 1rem;
        border-top: 1px solid var(--pico-muted-border-color);
    }
    .sr-only {
        position: absolute;
        width: 1px; height: 1px;
        overflow: hidden;
        clip: rect(0, 0, 0, 0);
        white-space: nowrap;
    }
"#;

    rsx! {
        document::Title { "Relief Dashboard" }
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Meta {
            name: "description",
            content: "Disaster reporting and verification platform",
        }
        document::Link {
            rel: "stylesheet",
            href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css",
        }
        style {
            "{dashboard_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // Read once; env vars do not change under a running UI.
    let app_state = use_hook(|| {
        let prefs = UserPrefs::default();
        dioxus_logger::tracing::info!("prefs: {:#?}", prefs);
        AppState::new(prefs)
    });

    rsx! {
        LoadedApp {
            app_state,
        }
    }
}

/// Provides the app and wallet contexts, then lays out header, screen and footer.
#[component]
fn LoadedApp(app_state: AppState) -> Element {
    // Provide the stable, non-reactive AppState.
    use_context_provider(|| app_state.clone());

    use_wallet_provider(app_state.prefs.wallet().clone());

    let active_screen = use_signal(Screen::default);

    // --- Provide the active_screen signal to the context ---
    use_context_provider(|| active_screen);

    rsx! {
        div {
            class: "app-main-container",
            header {
                class: "container",
                nav {
                    ul {
                        li {
                            strong { class: "brand", "🛟 Relief Dashboard" }
                        }
                        li {
                            Tabs {
                                active_screen,
                            }
                        }
                    }
                    ul {
                        li {
                            WalletConnect {}
                        }
                    }
                }
            }
            Container {
                match active_screen() {
                    Screen::Dashboard => rsx! {
                        DashboardScreen {}
                    },
                    Screen::Submit => rsx! {
                        SubmitScreen {}
                    },
                }
            }
            div {
                class: "container",
                Footer {}
            }
        }
    }
}
