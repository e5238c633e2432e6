//! Reusable UI components

mod button;
mod glyph;
mod step_chip;

pub use button::*;
pub use glyph::*;
pub use step_chip::*;
