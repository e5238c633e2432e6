//! Keyword-based step icons.
//!
//! Rules are checked top to bottom and the first rule with a keyword
//! contained in the step (case-insensitive) decides the icon. A step that
//! matches several rules always gets the earliest one, so reordering
//! [`STEP_ICON_RULES`] changes results.

use crate::types::Icon;

/// One classification rule: any of `keywords` selects `icon`.
///
/// Keywords are lowercase substrings; they match inside words too
/// (`"evaluat"` matches "evaluate" and "evaluation").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconRule {
    pub icon: Icon,
    pub keywords: &'static [&'static str],
}

impl IconRule {
    /// Whether this rule matches an already-lowercased step
    fn matches_lowercase(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|kw| lowered.contains(kw))
    }

    /// Whether this rule matches a step, ignoring case
    pub fn matches(&self, step: &str) -> bool {
        self.matches_lowercase(&step.to_lowercase())
    }
}

/// Step classification rules, highest priority first.
pub const STEP_ICON_RULES: &[IconRule] = &[
    // Evaluative reasoning
    IconRule {
        icon: Icon::Scale,
        keywords: &["assess", "evaluat", "weigh", "test", "critique", "question", "clarif", "judg"],
    },
    // Investigation
    IconRule {
        icon: Icon::Search,
        keywords: &["identify", "trace", "extract", "detect", "separate"],
    },
    // Concept formation
    IconRule {
        icon: Icon::Lightbulb,
        keywords: &["concept", "schema", "symbol", "interpret", "inference", "insight", "frame", "nuance"],
    },
    // Goals
    IconRule {
        icon: Icon::Target,
        keywords: &["goal", "priorit", "objective", "outcome", "value"],
    },
    // Regulation
    IconRule {
        icon: Icon::Shield,
        keywords: &["inhibit", "override", "discipline", "manage", "regulat", "standard", "criteria", "uniform", "consistent"],
    },
    // Relational
    IconRule {
        icon: Icon::Heart,
        keywords: &["empath", "intent", "reciproc", "accountab", "harm", "role reversal"],
    },
    // Action
    IconRule {
        icon: Icon::Flame,
        keywords: &["action", "implement", "persist", "commit"],
    },
    // Growth
    IconRule {
        icon: Icon::Sprout,
        keywords: &["skill", "learn", "grow", "develop", "exposure", "experience", "build"],
    },
    // Self
    IconRule {
        icon: Icon::UserCircle,
        keywords: &["self", "personal", "belief", "achievement", "choice"],
    },
];

/// Icon for a step using [`STEP_ICON_RULES`]; `None` when nothing matches.
pub fn classify_step(step: &str) -> Option<Icon> {
    classify_with(STEP_ICON_RULES, step)
}

/// First-match-wins classification over a caller-supplied rule list.
pub fn classify_with(rules: &[IconRule], step: &str) -> Option<Icon> {
    let lowered = step.to_lowercase();
    rules
        .iter()
        .find(|rule| rule.matches_lowercase(&lowered))
        .map(|rule| rule.icon)
}
