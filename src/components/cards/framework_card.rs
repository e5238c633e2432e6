//! Framework Card Component
//!
//! A collapsible card. The header is always rendered; the body only exists
//! while the card is expanded (it is not built and hidden, it is absent).

use cogframe_core::{render_card, CollectionInfo, FrameworkRecord};
use cogframe_ui::StepChipData;
use dioxus::prelude::*;

use super::{CardHeader, StepFlow};

/// One record as a collapsible card
///
/// `on_toggle` receives the record id; the card holds no state of its own.
#[component]
pub fn FrameworkCard(
    record: FrameworkRecord,
    /// Zero-based position in the registry (used for ordinals)
    position: usize,
    expanded: bool,
    info: CollectionInfo,
    on_toggle: EventHandler<String>,
) -> Element {
    let view = render_card(&record, position, expanded, &info);
    let body_id = view.body_dom_id();
    let id = record.id.clone();

    rsx! {
        article {
            class: if view.expanded { "framework-card framework-card--open" } else { "framework-card" },
            style: "--accent: {view.accent_color};",

            // Accent line at top
            div { class: "framework-card__accent" }

            CardHeader {
                title: view.title.to_string(),
                icon: view.icon,
                expanded: view.expanded,
                chevron_rotation: view.chevron_rotation,
                controls: body_id.clone(),
                on_toggle: move |_| on_toggle.call(id.clone()),
            }

            if let Some(body) = &view.body {
                div {
                    id: "{body_id}",
                    class: "framework-card__body",
                    role: "region",
                    "aria-label": "{view.title} steps",

                    if let Some(summary) = body.summary {
                        p { class: "framework-card__summary", "{summary}" }
                    }

                    StepFlow {
                        steps: body.steps.iter().map(StepChipData::from).collect::<Vec<_>>(),
                        layout: body.layout,
                    }
                }
            }
        }
    }
}
