//! Collapsible card components.

mod card_header;
mod framework_card;
mod step_flow;

pub use card_header::CardHeader;
pub use framework_card::FrameworkCard;
pub use step_flow::StepFlow;
