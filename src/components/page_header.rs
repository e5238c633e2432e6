//! Page header and footer, driven by the collection's copy.

use cogframe_core::{CollectionInfo, Icon};
use cogframe_ui::Glyph;
use dioxus::prelude::*;

/// Badge, title and subtitle
#[component]
pub fn PageHeader(info: CollectionInfo) -> Element {
    rsx! {
        header { class: "page-header",
            if let Some(badge) = info.badge {
                div { class: "page-badge",
                    Glyph { icon: Icon::Layers, class: "page-badge__icon".to_string() }
                    span { "{badge}" }
                }
            }
            h1 { class: "page-title", "{info.title}" }
            p { class: "page-subtitle", "{info.subtitle}" }
        }
    }
}

#[component]
pub fn PageFooter(info: CollectionInfo) -> Element {
    rsx! {
        footer { class: "page-footer",
            for (index, line) in info.footer.iter().enumerate() {
                p {
                    key: "{index}",
                    class: if index == 0 { "page-footer__lead" } else { "page-footer__hint" },
                    "{line}"
                }
            }
        }
    }
}
