//! Expand All / Collapse All controls

use cogframe_core::Icon;
use cogframe_ui::{Button, ButtonVariant};
use dioxus::prelude::*;

use crate::context::{use_catalog, use_expansion};

/// Page-level buttons acting on every card at once
#[component]
pub fn ExpansionControls() -> Element {
    let catalog = use_catalog();
    let mut expansion = use_expansion();

    // Ids outside the registry never count
    let expanded = catalog
        .registry
        .ids()
        .filter(|id| expansion.read().is_expanded(id))
        .count();
    let total = catalog.registry.len();

    rsx! {
        div { class: "expansion-controls", role: "group", "aria-label": "Card controls",
            Button {
                variant: ButtonVariant::Control,
                icon: Icon::Maximize,
                onclick: move |_| {
                    expansion.write().expand_all(catalog.registry.ids());
                },
                "Expand All"
            }
            Button {
                variant: ButtonVariant::Control,
                icon: Icon::Minimize,
                onclick: move |_| expansion.write().collapse_all(),
                "Collapse All"
            }
        }
        p { class: "expansion-status", "aria-live": "polite",
            "{expanded} of {total} expanded"
        }
    }
}
