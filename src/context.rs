//! Context providers for the Cognitive Frameworks app.
//!
//! The loaded [`Catalog`] and the card [`ExpansionState`] are handed to
//! components through Dioxus context instead of globals.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let catalog = use_catalog();
//! let mut expansion = use_expansion();
//! expansion.write().expand_all(catalog.registry.ids());
//! ```

use cogframe_core::{Catalog, ExpansionState};
use dioxus::prelude::*;

/// Hook to access the loaded collection.
///
/// Provided by the `Overview` page.
pub fn use_catalog() -> Catalog {
    use_context::<Catalog>()
}

/// Hook to access the expansion state.
///
/// Returns the signal provided by `App`. Event handlers write to it; every
/// card reads it on render. Starts with every card collapsed.
pub fn use_expansion() -> Signal<ExpansionState> {
    use_context::<Signal<ExpansionState>>()
}
