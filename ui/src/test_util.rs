//! Helpers for driving components inside a headless `VirtualDom`.

use dioxus::core::AttributeValue;
use dioxus::core::ElementId;
use dioxus::core::Event;
use dioxus::core::Mutation;
use dioxus::core::Mutations;
use dioxus::html::set_event_converter;
use dioxus::html::PlatformEventData;
use dioxus::html::SerializedHtmlEventConverter;
use dioxus::html::SerializedMouseData;
use dioxus::prelude::VirtualDom;
use std::any::Any;
use std::rc::Rc;

/// Element ids of every node carrying a `data-category` attribute, in
/// render order, paired with the attribute value.
pub fn category_buttons(mutations: &Mutations) -> Vec<(String, ElementId)> {
    mutations
        .edits
        .iter()
        .filter_map(|edit| match edit {
            Mutation::SetAttribute {
                name: "data-category",
                value: AttributeValue::Text(value),
                id,
                ..
            } => Some((value.clone(), *id)),
            _ => None,
        })
        .collect()
}

pub fn button_for(mutations: &Mutations, category_id: &str) -> ElementId {
    category_buttons(mutations)
        .into_iter()
        .find(|(id, _)| id == category_id)
        .map(|(_, element)| element)
        .unwrap_or_else(|| panic!("no button rendered for {category_id}"))
}

/// Every text node created or updated by `mutations`.
pub fn texts(mutations: &Mutations) -> Vec<String> {
    mutations
        .edits
        .iter()
        .filter_map(|edit| match edit {
            Mutation::CreateTextNode { value, .. } | Mutation::SetText { value, .. } => {
                Some(value.clone())
            }
            _ => None,
        })
        .collect()
}

/// Dispatches a bubbling click to `element`, as a renderer would.
pub fn click(dom: &VirtualDom, element: ElementId) {
    set_event_converter(Box::new(SerializedHtmlEventConverter));
    let data = PlatformEventData::new(Box::<SerializedMouseData>::default());
    let event = Event::new(Rc::new(data) as Rc<dyn Any>, true);
    dom.runtime().handle_event("click", event, element);
}
