//=============================================================================
// File: src/screens/submit.rs
//=============================================================================
use crate::components::report_form::ReportForm;
use dioxus::prelude::*;

#[component]
pub fn SubmitScreen() -> Element {
    rsx! {
        section {
            class: "submit",
            hgroup {
                h2 { "Report an Incident" }
                p { "Describe what you saw and where it happened." }
            }
            ReportForm {}
        }
    }
}
