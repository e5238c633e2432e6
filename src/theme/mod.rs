//! Theme: global stylesheet.

mod styles;

pub use styles::GLOBAL_STYLES;
