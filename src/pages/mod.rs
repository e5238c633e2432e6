//! Page components for Cognitive Frameworks.

mod overview;

pub use overview::Overview;
