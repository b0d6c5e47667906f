use crate::Screen;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ActionLinkProps {
    /// The screen signal to write when clicked.
    pub state: Signal<Screen>,

    pub to: Screen,

    #[props(default, into)]
    pub class: String,

    pub children: Element,
}

/// An anchor that switches the active screen instead of navigating.
#[allow(non_snake_case)]
pub fn ActionLink(mut props: ActionLinkProps) -> Element {
    rsx! {
        a {
            href: "#",
            class: "{props.class}",
            role: "button",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                props.state.set(props.to);
            },
            {props.children}
        }
    }
}
