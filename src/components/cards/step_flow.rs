//! Step flow: the ordered chain of step chips inside an open card.

use cogframe_core::FlowLayout;
use cogframe_ui::{StepChip, StepChipData};
use dioxus::prelude::*;

#[component]
pub fn StepFlow(steps: Vec<StepChipData>, layout: FlowLayout) -> Element {
    let class = format!("step-flow {}", layout.class());

    rsx! {
        ol { class: "{class}",
            for (index, step) in steps.into_iter().enumerate() {
                StepChip { key: "{index}", step: step, layout: layout }
            }
        }
    }
}
