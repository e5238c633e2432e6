//! UI Components for Cognitive Frameworks.

pub mod cards;
mod controls;
mod page_header;

pub use controls::ExpansionControls;
pub use page_header::{PageFooter, PageHeader};
