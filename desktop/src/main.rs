use api::prefs::user_prefs::UserPrefs;
use dioxus::prelude::*;

fn main() {
    dioxus_logger::init(UserPrefs::log_level_from_env()).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::App()
}
