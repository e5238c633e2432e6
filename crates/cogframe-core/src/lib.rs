//! Cognitive Frameworks Core Library
//!
//! Content registry, step parsing, icon classification and expansion state
//! for the Cognitive Frameworks desktop app. Nothing in this crate knows
//! about Dioxus; the UI crates render the view models produced here.
//!
//! ## Overview
//!
//! A *collection* is a compiled-in, ordered list of framework records. Each
//! record's content is a sentence of process steps joined by `→`. Cards
//! start collapsed; expanding one reveals its steps.
//!
//! ## Quick Start
//!
//! ```
//! use cogframe_core::{render_card, Collection, ExpansionState};
//!
//! let catalog = Collection::Frameworks.catalog().unwrap();
//! let mut expansion = ExpansionState::new();
//!
//! let first = &catalog.registry.list()[0];
//! expansion.toggle(&first.id);
//!
//! let view = render_card(first, 0, expansion.is_expanded(&first.id), &catalog.info);
//! assert!(view.body.is_some());
//! ```

pub mod catalog;
pub mod classify;
pub mod error;
pub mod expansion;
pub mod registry;
pub mod steps;
pub mod types;
pub mod view;

// Re-exports
pub use catalog::{Catalog, Collection, CollectionInfo};
pub use classify::{classify_step, classify_with, IconRule, STEP_ICON_RULES};
pub use error::{RegistryError, RegistryResult};
pub use expansion::ExpansionState;
pub use registry::{FrameworkRecord, Registry};
pub use steps::{split_steps, split_steps_on, Steps, STEP_DELIMITER};
pub use types::{FlowLayout, Icon, StepAnnotation};
pub use view::{render_card, CardBody, CardView, StepView};
