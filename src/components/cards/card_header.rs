//! Card Header Component
//!
//! The always-visible part of a card: icon, title and toggle chevron. The
//! whole header is one button so it can be activated by pointer or keyboard.

use cogframe_core::Icon;
use cogframe_ui::{Chevron, Glyph};
use dioxus::prelude::*;

/// Card header / toggle button
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     CardHeader {
///         title: "Fairness".to_string(),
///         icon: Icon::Heart,
///         expanded: false,
///         chevron_rotation: 0,
///         controls: "card-body-fairness".to_string(),
///         on_toggle: move |_| toggle(),
///     }
/// }
/// ```
#[component]
pub fn CardHeader(
    /// Card title (accent colored when open)
    title: String,
    /// Header glyph
    icon: Icon,
    expanded: bool,
    /// Chevron rotation in degrees
    chevron_rotation: u16,
    /// DOM id of the body this header controls
    controls: String,
    on_toggle: EventHandler<()>,
) -> Element {
    rsx! {
        button {
            class: "card-header",
            r#type: "button",
            "aria-expanded": if expanded { "true" } else { "false" },
            "aria-controls": "{controls}",
            onclick: move |_| on_toggle.call(()),

            div { class: "card-header__lead",
                div { class: "card-header__icon",
                    Glyph { icon: icon }
                }
                span {
                    class: "card-header__title",
                    role: "heading",
                    "aria-level": "2",
                    "{title}"
                }
            }

            div { class: "card-header__toggle",
                Chevron { rotation: chevron_rotation }
            }
        }
    }
}
