use cogframe_core::ExpansionState;
use dioxus::prelude::*;

use crate::get_app_config;
use crate::pages::Overview;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the expansion state, then shows the
/// collection selected on the command line.
#[component]
pub fn App() -> Element {
    // Every card starts collapsed; nothing is persisted
    let expansion: Signal<ExpansionState> = use_signal(ExpansionState::new);
    use_context_provider(|| expansion);

    let Some(config) = get_app_config() else {
        tracing::error!("App mounted before a collection was loaded");
        return rsx! {
            style { {GLOBAL_STYLES} }
            main { class: "overview",
                p { class: "load-error", "No collection loaded." }
            }
        };
    };

    rsx! {
        style { {GLOBAL_STYLES} }
        Overview { catalog: config.catalog.clone() }
    }
}
