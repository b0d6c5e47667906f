//! A set of reusable, lifetime-free Dioxus components for the Pico.css framework.
//! To use, ensure you have pico.min.css linked in your main application.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

/// A responsive grid layout. Children become equal-width columns.
#[component]
pub fn Grid(children: Element) -> Element {
    rsx! { div { class: "grid", {children} } }
}

//=============================================================================
// Content Components
//=============================================================================

#[derive(Props, PartialEq, Clone)]
pub struct CardProps {
    children: Element,
    #[props(default, into)]
    class: String,
}

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
pub fn Card(props: CardProps) -> Element {
    rsx! { article { class: "{props.class}", {props.children} } }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(PartialEq, Clone, Copy, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
}

impl ButtonType {
    fn to_class(self, outline: bool) -> &'static str {
        match (self, outline) {
            (ButtonType::Primary, false) => "",
            (ButtonType::Primary, true) => "outline",
            (ButtonType::Secondary, false) => "secondary",
            (ButtonType::Secondary, true) => "secondary outline",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    outline: bool,
    #[props(default = false)]
    disabled: bool,
    /// Set for the button that submits its enclosing form.
    #[props(default = false)]
    submit: bool,
    #[props(default, into)]
    class: String,
}

/// A versatile button component.
pub fn Button(props: ButtonProps) -> Element {
    let class_str = format!("{} {}", props.button_type.to_class(props.outline), props.class);
    rsx! {
        button {
            class: "{class_str.trim()}",
            r#type: if props.submit { "submit" } else { "button" },
            disabled: props.disabled,
            "aria-busy": props.disabled && props.submit,
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct InputProps {
    #[props(into)]
    label: String,
    #[props(into)]
    name: String,
    #[props(into)]
    value: String,
    #[props(default, into)]
    placeholder: String,
    #[props(default = false)]
    required: bool,
    #[props(optional)]
    on_input: Option<EventHandler<FormEvent>>,
}

/// A labeled single-line text field.
pub fn Input(props: InputProps) -> Element {
    rsx! {
        label {
            "{props.label}"
            input {
                r#type: "text",
                name: "{props.name}",
                value: "{props.value}",
                placeholder: "{props.placeholder}",
                required: props.required,
                oninput: move |evt| {
                    if let Some(handler) = &props.on_input {
                        handler.call(evt);
                    }
                },
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct TextAreaProps {
    #[props(into)]
    label: String,
    #[props(into)]
    name: String,
    #[props(into)]
    value: String,
    #[props(default = 4)]
    rows: u32,
    #[props(default, into)]
    placeholder: String,
    #[props(default = false)]
    required: bool,
    #[props(optional)]
    on_input: Option<EventHandler<FormEvent>>,
}

/// A labeled multi-line text field.
pub fn TextArea(props: TextAreaProps) -> Element {
    rsx! {
        label {
            "{props.label}"
            textarea {
                name: "{props.name}",
                rows: "{props.rows}",
                value: "{props.value}",
                placeholder: "{props.placeholder}",
                required: props.required,
                oninput: move |evt| {
                    if let Some(handler) = &props.on_input {
                        handler.call(evt);
                    }
                },
            }
        }
    }
}

/// One `<option>` of a [`Select`]: `(value, label)`.
pub type SelectOption = (&'static str, &'static str);

#[derive(Props, PartialEq, Clone)]
pub struct SelectProps {
    #[props(into)]
    label: String,
    #[props(into)]
    name: String,
    #[props(into)]
    value: String,
    options: Vec<SelectOption>,
    #[props(optional)]
    on_change: Option<EventHandler<FormEvent>>,
}

/// A labeled dropdown.
pub fn Select(props: SelectProps) -> Element {
    rsx! {
        label {
            "{props.label}"
            select {
                name: "{props.name}",
                value: "{props.value}",
                onchange: move |evt| {
                    if let Some(handler) = &props.on_change {
                        handler.call(evt);
                    }
                },
                for (value, label) in props.options.iter().copied() {
                    option {
                        key: "{value}",
                        value: "{value}",
                        selected: value == props.value,
                        "{label}"
                    }
                }
            }
        }
    }
}
