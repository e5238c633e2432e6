//! Icon glyphs
//!
//! Icons are drawn as Unicode text, tagged with their symbolic name so
//! styles can target a specific icon.

use cogframe_core::Icon;
use dioxus::prelude::*;

/// Decorative icon. Hidden from screen readers; the surrounding text
/// carries the meaning.
#[component]
pub fn Glyph(
    icon: Icon,
    /// Optional additional CSS classes
    #[props(default)]
    class: Option<String>,
) -> Element {
    let full_class = crate::join_classes("glyph", class.as_deref());

    rsx! {
        span {
            class: "{full_class}",
            "data-icon": icon.name(),
            "aria-hidden": "true",
            "{icon.glyph()}"
        }
    }
}

/// Rotating chevron for collapsible headers
#[component]
pub fn Chevron(
    /// Degrees of rotation (0 collapsed, 180 expanded)
    rotation: u16,
) -> Element {
    rsx! {
        span {
            class: if rotation == 0 { "chevron" } else { "chevron chevron--open" },
            style: "transform: rotate({rotation}deg);",
            "aria-hidden": "true",
            "{Icon::ChevronDown.glyph()}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_are_single_symbols() {
        for icon in [Icon::Scale, Icon::Shield, Icon::ChevronDown, Icon::Maximize] {
            assert_eq!(icon.glyph().chars().count(), 1, "{}", icon);
        }
    }
}
