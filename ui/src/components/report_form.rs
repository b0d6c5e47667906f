//=============================================================================
// File: src/components/report_form.rs
//=============================================================================
use crate::compat;
use crate::components::pico::Button;
use crate::components::pico::Card;
use crate::components::pico::Input;
use crate::components::pico::Select;
use crate::components::pico::SelectOption;
use crate::components::pico::TextArea;
use crate::AppState;
use api::category::Category;
use api::report::ReportDraft;
use api::ApiError;
use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use dioxus_logger::tracing::error;
use std::future::Future;
use std::str::FromStr;
use strum::IntoEnumIterator;

/// Sets the loading flag for the duration of `work`.
///
/// The flag goes true before `work` is polled and false once it resolves.
pub async fn run_with_loading<T, F>(mut set_loading: impl FnMut(bool), work: F) -> T
where
    F: Future<Output = T>,
{
    set_loading(true);
    let out = work.await;
    set_loading(false);
    out
}

/// Runs `work` on the root scope, so leaving the screen does not cancel it.
///
/// `loading` belongs to the form; once the form is gone its writes are
/// skipped.
fn submit_detached<T, F>(mut loading: Signal<bool>, work: F)
where
    F: Future<Output = Result<T, ApiError>> + 'static,
    T: 'static,
{
    spawn_forever(async move {
        let set_loading = move |busy: bool| {
            if let Ok(mut flag) = loading.try_write() {
                *flag = busy;
            }
        };
        if let Err(e) = run_with_loading(set_loading, work).await {
            error!("report submission failed: {e}");
        }
    });
}

fn category_options() -> Vec<SelectOption> {
    Category::iter().map(|c| (c.id(), c.label())).collect()
}

/// The incident submission form.
///
/// Only the browser's `required` checks apply. Submitting waits out the
/// configured delay, logs the draft, and leaves the fields as they were.
#[component]
pub fn ReportForm() -> Element {
    let delay = use_context::<AppState>().prefs.submit_delay();

    let mut draft = use_signal(ReportDraft::default);
    let loading = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let payload = draft();
        submit_detached(loading, async move {
            compat::sleep(delay).await;
            api::submission::submit_report(&payload)
        });
    };

    rsx! {
        Card {
            class: "report-form",
            form {
                onsubmit: on_submit,
                Input {
                    label: "Title",
                    name: "title",
                    value: draft.read().title.clone(),
                    placeholder: "What happened?",
                    required: true,
                    on_input: move |evt: FormEvent| draft.with_mut(|d| d.title = evt.value()),
                }
                Select {
                    label: "Category",
                    name: "category",
                    value: draft.read().category.id(),
                    options: category_options(),
                    on_change: move |evt: FormEvent| {
                        if let Ok(category) = Category::from_str(&evt.value()) {
                            draft.with_mut(|d| d.category = category);
                        }
                    },
                }
                TextArea {
                    label: "Description",
                    name: "description",
                    value: draft.read().description.clone(),
                    placeholder: "Provide more details...",
                    required: true,
                    on_input: move |evt: FormEvent| draft.with_mut(|d| d.description = evt.value()),
                }
                Input {
                    label: "Location (optional)",
                    name: "location",
                    value: draft.read().location.clone(),
                    placeholder: "City or district",
                    on_input: move |evt: FormEvent| draft.with_mut(|d| d.location = evt.value()),
                }
                Button {
                    submit: true,
                    disabled: loading(),
                    class: "full-width",
                    if loading() { "Submitting..." } else { "Submit Report" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::sync::atomic::AtomicBool;
    use std::sync::atomic::Ordering;
    use std::time::Duration;

    static SHOW_FORM: GlobalSignal<bool> = Signal::global(|| true);
    static DELIVERED: AtomicBool = AtomicBool::new(false);

    #[component]
    fn PendingSubmission() -> Element {
        let loading = use_signal(|| false);
        use_hook(|| {
            submit_detached(loading, async {
                compat::sleep(Duration::from_millis(30)).await;
                DELIVERED.store(true, Ordering::SeqCst);
                Ok::<_, ApiError>(())
            })
        });
        rsx! { "{loading}" }
    }

    #[tokio::test(flavor = "current_thread")]
    async fn submission_completes_after_the_form_unmounts() {
        let mut dom = VirtualDom::new(|| rsx! {
            if SHOW_FORM() {
                PendingSubmission {}
            }
        });
        dom.rebuild_in_place();

        // Switch away while the delay is still running.
        dom.in_runtime(|| *SHOW_FORM.write() = false);
        let _ = dom.render_immediate_to_vec();

        let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
        while !DELIVERED.load(Ordering::SeqCst) && tokio::time::Instant::now() < deadline {
            let _ = tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work()).await;
            let _ = dom.render_immediate_to_vec();
        }
        assert!(DELIVERED.load(Ordering::SeqCst));
    }

    #[test]
    fn loading_goes_true_then_false() {
        let seen = RefCell::new(vec![false]);
        let out = block_on(run_with_loading(|b| seen.borrow_mut().push(b), async { 7 }));
        assert_eq!(out, 7);
        assert_eq!(*seen.borrow(), vec![false, true, false]);
    }

    #[test]
    fn loading_is_set_before_the_work_runs() {
        let seen = RefCell::new(Vec::new());
        block_on(run_with_loading(
            |b| seen.borrow_mut().push(b),
            async {
                assert_eq!(*seen.borrow(), vec![true]);
            },
        ));
        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn submitting_a_full_draft_succeeds() {
        let draft = ReportDraft {
            title: "Flash flood".to_string(),
            description: "River over the bank".to_string(),
            category: Category::Flood,
            location: "Pokhara".to_string(),
        };
        let seen = RefCell::new(vec![false]);
        let result = block_on(run_with_loading(
            |b| seen.borrow_mut().push(b),
            async { api::submission::submit_report(&draft) },
        ));
        assert!(result.is_ok());
        assert_eq!(*seen.borrow(), vec![false, true, false]);
    }

    #[test]
    fn select_lists_every_category_with_flood_first() {
        let options = category_options();
        assert_eq!(options.first(), Some(&("flood", "Flood")));
        assert_eq!(options.len(), Category::iter().count());
    }
}
