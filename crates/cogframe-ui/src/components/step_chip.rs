//! Step Chip Components
//!
//! One chip per step of an expanded card, with an optional connector glyph
//! after it. The chip shape follows the card's flow layout: compact chips
//! in an inline row, wide pills in a stacked column.

use cogframe_core::{FlowLayout, StepView};
use dioxus::prelude::*;

use crate::components::Glyph;

/// Owned copy of a [`StepView`], usable as component props
#[derive(Clone, PartialEq, Debug)]
pub struct StepChipData {
    pub text: String,
    pub icon: Option<cogframe_core::Icon>,
    pub ordinal: Option<String>,
    pub connector: Option<char>,
}

impl From<&StepView<'_>> for StepChipData {
    fn from(step: &StepView<'_>) -> Self {
        Self {
            text: step.text.to_string(),
            icon: step.icon,
            ordinal: step.ordinal.clone(),
            connector: step.connector,
        }
    }
}

/// CSS class of a chip in the given layout
pub fn chip_class(layout: FlowLayout) -> &'static str {
    match layout {
        FlowLayout::Inline => "step-chip",
        FlowLayout::Stacked => "step-chip step-chip--pill",
    }
}

/// A single step, followed by its connector if it has one
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     for step in body.steps.iter() {
///         StepChip { step: StepChipData::from(step), layout: body.layout }
///     }
/// }
/// ```
#[component]
pub fn StepChip(step: StepChipData, layout: FlowLayout) -> Element {
    rsx! {
        li { class: "step",
            div { class: chip_class(layout),
                if let Some(ordinal) = &step.ordinal {
                    span { class: "step-chip__ordinal", "{ordinal}" }
                }
                if let Some(icon) = step.icon {
                    Glyph { icon: icon, class: "step-chip__icon".to_string() }
                }
                span { class: "step-chip__text", "{step.text}" }
            }
            if let Some(connector) = step.connector {
                FlowConnector { glyph: connector }
            }
        }
    }
}

/// Arrow between two steps
#[component]
pub fn FlowConnector(glyph: char) -> Element {
    rsx! {
        span { class: "flow-connector", "aria-hidden": "true", "{glyph}" }
    }
}
