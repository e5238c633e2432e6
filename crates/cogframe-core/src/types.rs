//! Core types for Cognitive Frameworks

use serde::Serialize;

/// Symbolic glyph reference.
///
/// The core only deals in names; how an icon is drawn is up to the
/// renderer. [`Icon::glyph`] gives the Unicode fallback the desktop UI uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Brain,
    Scale,
    Eye,
    Heart,
    UserCircle,
    Target,
    Shield,
    Flame,
    Search,
    Lightbulb,
    Sprout,
    Layers,
    ChevronDown,
    Maximize,
    Minimize,
}

impl Icon {
    /// Stable kebab-case name, matching the serialized form
    pub fn name(&self) -> &'static str {
        match self {
            Icon::Brain => "brain",
            Icon::Scale => "scale",
            Icon::Eye => "eye",
            Icon::Heart => "heart",
            Icon::UserCircle => "user-circle",
            Icon::Target => "target",
            Icon::Shield => "shield",
            Icon::Flame => "flame",
            Icon::Search => "search",
            Icon::Lightbulb => "lightbulb",
            Icon::Sprout => "sprout",
            Icon::Layers => "layers",
            Icon::ChevronDown => "chevron-down",
            Icon::Maximize => "maximize",
            Icon::Minimize => "minimize",
        }
    }

    /// Unicode glyph used when rendering the icon as text
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Brain => "\u{1F9E0}",
            Icon::Scale => "\u{2696}",
            Icon::Eye => "\u{25C9}",
            Icon::Heart => "\u{2665}",
            Icon::UserCircle => "\u{263A}",
            Icon::Target => "\u{25CE}",
            Icon::Shield => "\u{26E8}",
            Icon::Flame => "\u{1F525}",
            Icon::Search => "\u{2315}",
            Icon::Lightbulb => "\u{1F4A1}",
            Icon::Sprout => "\u{1F331}",
            Icon::Layers => "\u{2630}",
            Icon::ChevronDown => "\u{2304}",
            Icon::Maximize => "\u{2922}",
            Icon::Minimize => "\u{2921}",
        }
    }
}

impl std::fmt::Display for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How a card's steps are laid out when expanded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlowLayout {
    /// Wrapping row of chips joined by `→`
    #[default]
    Inline,
    /// Centered column of pills joined by `↓`
    Stacked,
}

impl FlowLayout {
    /// Glyph drawn between two consecutive steps
    pub fn connector(&self) -> char {
        match self {
            FlowLayout::Inline => '\u{2192}',
            FlowLayout::Stacked => '\u{2193}',
        }
    }

    /// CSS modifier class for the flow container
    pub fn class(&self) -> &'static str {
        match self {
            FlowLayout::Inline => "step-flow--inline",
            FlowLayout::Stacked => "step-flow--stacked",
        }
    }
}

/// Extra marker shown next to each step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepAnnotation {
    /// Plain step text
    #[default]
    None,
    /// Icon chosen by the step classifier (may still be absent per step)
    Icons,
    /// `"<card>.<step>"` numbering, both 1-based
    Ordinals,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_names_match_serde() {
        for icon in [Icon::UserCircle, Icon::ChevronDown, Icon::Scale] {
            let json = serde_json::to_string(&icon).unwrap();
            assert_eq!(json, format!("\"{}\"", icon.name()));
        }
    }

    #[test]
    fn flow_connectors() {
        assert_eq!(FlowLayout::Inline.connector(), '→');
        assert_eq!(FlowLayout::Stacked.connector(), '↓');
        assert_eq!(FlowLayout::default(), FlowLayout::Inline);
    }
}
