//! Overview page - the whole collection as a column of cards.

use cogframe_core::Catalog;
use dioxus::prelude::*;

use crate::components::cards::FrameworkCard;
use crate::components::{ExpansionControls, PageFooter, PageHeader};
use crate::context::use_expansion;

/// Overview page component.
///
/// Provides the catalog to its children and renders one card per record,
/// in registry order.
#[component]
pub fn Overview(catalog: Catalog) -> Element {
    let catalog = use_context_provider(|| catalog);
    let mut expansion = use_expansion();
    let info = catalog.info;

    rsx! {
        main { class: "overview",
            // Background gradient
            div { class: "overview-backdrop" }

            div { class: "overview-inner",
                PageHeader { info: info }
                ExpansionControls {}

                section { class: "card-list", "aria-label": "{info.title}",
                    for (position, record) in catalog.registry.iter().enumerate() {
                        FrameworkCard {
                            key: "{record.id}",
                            record: record.clone(),
                            position: position,
                            expanded: expansion.read().is_expanded(&record.id),
                            info: info,
                            on_toggle: move |id: String| {
                                expansion.write().toggle(&id);
                            },
                        }
                    }
                }

                PageFooter { info: info }
            }
        }
    }
}
