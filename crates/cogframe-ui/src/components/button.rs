//! Button Components
//!
//! - Control: bordered pill used for page-level actions (Expand All)
//! - Accent: tinted with the surrounding `--accent` color
//! - Ghost: no border, muted text

use cogframe_core::Icon;
use dioxus::prelude::*;

use crate::components::Glyph;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Page control - dark fill, light border
    #[default]
    Control,
    /// Tinted with the current accent color
    Accent,
    /// Subtle/secondary action
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Control => "btn-control",
            ButtonVariant::Accent => "btn-accent",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Optional leading icon
    #[props(default)]
    pub icon: Option<Icon>,
    /// Button content
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Control,
///         icon: Icon::Maximize,
///         onclick: move |_| expansion.write().expand_all(registry.ids()),
///         "Expand All"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = join_classes(props.variant.class(), props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            disabled: props.disabled,
            onclick: move |_| props.onclick.call(()),
            if let Some(icon) = props.icon {
                Glyph { icon: icon, class: "btn-icon".to_string() }
            }
            {props.children}
        }
    }
}

/// `base` plus optional extra classes
pub fn join_classes(base: &str, extra: Option<&str>) -> String {
    match extra.map(str::trim) {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Control.class(), "btn-control");
        assert_eq!(ButtonVariant::Accent.class(), "btn-accent");
        assert_eq!(ButtonVariant::Ghost.class(), "btn-ghost");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Control);
    }

    #[test]
    fn extra_classes_are_appended() {
        assert_eq!(join_classes("btn-control", None), "btn-control");
        assert_eq!(join_classes("btn-control", Some("  ")), "btn-control");
        assert_eq!(join_classes("btn-ghost", Some("wide")), "btn-ghost wide");
    }
}
