//! Cognitive Frameworks UI Components
//!
//! Small Dioxus building blocks shared by the desktop app: buttons, icon
//! glyphs and the chips/connectors of a step flow.
//!
//! Accent colors are passed down as the `--accent` CSS custom property, so
//! every component here picks up the color of the card it sits in without
//! taking a color prop itself.

pub mod components;

pub use components::*;
