//! Built-in collections.
//!
//! Two page variants ship with the app:
//!
//! - `frameworks`: eight cognitive frameworks, each a short process whose
//!   steps are shown as an inline chain of chips with classifier icons.
//! - `principles`: five sections of numbered principles, shown as a
//!   stacked column of pills.

use std::str::FromStr;

use serde::Serialize;

use crate::error::{RegistryError, RegistryResult};
use crate::registry::{FrameworkRecord, Registry};
use crate::steps::STEP_DELIMITER;
use crate::types::{FlowLayout, Icon, StepAnnotation};

/// Selectable built-in collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Collection {
    #[default]
    Frameworks,
    Principles,
}

impl Collection {
    pub const ALL: [Collection; 2] = [Collection::Frameworks, Collection::Principles];

    pub fn name(&self) -> &'static str {
        match self {
            Collection::Frameworks => "frameworks",
            Collection::Principles => "principles",
        }
    }

    /// Page copy and presentation options
    pub fn info(&self) -> CollectionInfo {
        match self {
            Collection::Frameworks => CollectionInfo {
                title: "Cognitive Frameworks",
                subtitle: "Eight essential mental models for structured thinking and personal development",
                badge: None,
                footer: &["Click on any card to expand and view the detailed process flow"],
                layout: FlowLayout::Inline,
                annotation: StepAnnotation::Icons,
                show_summary: true,
            },
            Collection::Principles => CollectionInfo {
                title: "Outline of Principles",
                subtitle: "A framework for critical thinking, ethical reasoning, and personal development",
                badge: Some("Principles Collection"),
                footer: &[
                    "Outline of Principles: structured thinking for better decision-making",
                    "Click any card to explore the principles",
                ],
                layout: FlowLayout::Stacked,
                annotation: StepAnnotation::Ordinals,
                show_summary: false,
            },
        }
    }

    /// Unvalidated records of this collection
    pub fn records(&self) -> Vec<FrameworkRecord> {
        match self {
            Collection::Frameworks => frameworks(),
            Collection::Principles => principles(),
        }
    }

    /// Build and validate the collection's registry
    pub fn catalog(&self) -> RegistryResult<Catalog> {
        let registry = Registry::new(self.records())?;
        tracing::info!(collection = self.name(), records = registry.len(), "Collection loaded");
        Ok(Catalog {
            collection: *self,
            info: self.info(),
            registry,
        })
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Collection {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Collection::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RegistryError::UnknownCollection(s.to_string()))
    }
}

/// Page copy and presentation options for a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CollectionInfo {
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Small pill above the title
    pub badge: Option<&'static str>,
    pub footer: &'static [&'static str],
    pub layout: FlowLayout,
    pub annotation: StepAnnotation,
    /// Show the full content paragraph above the step flow
    pub show_summary: bool,
}

/// A loaded collection: what to show and how
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub collection: Collection,
    pub info: CollectionInfo,
    pub registry: Registry,
}

fn frameworks() -> Vec<FrameworkRecord> {
    vec![
        FrameworkRecord::new(
            "sense-making",
            "Sense-Making",
            "Extract constant patterns from senses → form symbolic concepts → organize concepts into relational schemas → enable interpretation, inference, and evaluation.",
            "hsl(180 80% 45%)",
            Icon::Brain,
        ),
        FrameworkRecord::new(
            "critical-thinking",
            "Critical Thinking",
            "Assess proposition likelihood and evidential warrant → evaluate argument soundness and evidence relevance → clarify relations among claims, evidence, and inferences.",
            "hsl(220 80% 55%)",
            Icon::Scale,
        ),
        FrameworkRecord::new(
            "objectivity",
            "Objectivity",
            "Identify uneven evidentiary standards or motives → uniformly apply empirical and rational criteria to all conclusions → via self-critique.",
            "hsl(260 70% 55%)",
            Icon::Eye,
        ),
        FrameworkRecord::new(
            "fairness",
            "Fairness",
            "Empathetically weigh actor's intent → against accountability for consequences → in reciprocal interactions.",
            "hsl(320 70% 55%)",
            Icon::Heart,
        ),
        FrameworkRecord::new(
            "self-reflection",
            "Self-Reflection",
            "Separate personal choices from external circumstances → identify recurring patterns and controllable levers → convert insights into action.",
            "hsl(35 90% 50%)",
            Icon::UserCircle,
        ),
        FrameworkRecord::new(
            "self-efficacy",
            "Self-Efficacy",
            "Ground belief in past achievements → frame setbacks as temporary skill gaps → periodically reassess skills against objective competence.",
            "hsl(140 70% 45%)",
            Icon::Target,
        ),
        FrameworkRecord::new(
            "self-discipline",
            "Self-Discipline",
            "Establish priorities and goals → voluntarily inhibit wants → implement shoulds amid internal conflict → align behavior to long-term objectives.",
            "hsl(210 20% 55%)",
            Icon::Shield,
        ),
        FrameworkRecord::new(
            "perseverance",
            "Perseverance",
            "Commit to valued outcomes → override fear-based avoidance → persist in goal-directed action → via gradual exposure and skill-development.",
            "hsl(0 70% 50%)",
            Icon::Flame,
        ),
    ]
}

fn principle(id: &str, title: &str, items: &[&str], color: &str, icon: Icon) -> FrameworkRecord {
    let separator = format!(" {STEP_DELIMITER} ");
    let content = items.join(separator.as_str());
    FrameworkRecord::new(id, title, content, color, icon)
}

fn principles() -> Vec<FrameworkRecord> {
    vec![
        principle(
            "cognition-and-perception",
            "Cognition and Perception",
            &[
                "Framing distorts perception via cognitive anchors.",
                "Binary thinking oversimplifies; counter with nuance, avoid fallacies/biases.",
            ],
            "#14b8a6",
            Icon::Brain,
        ),
        principle(
            "evidence-and-logical-reasoning",
            "Evidence and Logical Reasoning",
            &[
                "Trace sources; test evidence.",
                "Absence \u{2260} proof of absence (except under induction-based expectation).",
                "Question via evidence techniques.",
                "Consistent standards counter biases.",
            ],
            "#3b82f6",
            Icon::Scale,
        ),
        principle(
            "ethical-and-moral",
            "Ethical and Moral",
            &[
                "Actual harm vs norm conformity.",
                "Weigh intent vs consequences; use role reversal to test fair judgment.",
            ],
            "#8b5cf6",
            Icon::Eye,
        ),
        principle(
            "personal-development-and-growth",
            "Personal Development and Growth",
            &[
                "Build on experiences; learn from errors.",
                "Define values and align them with goals.",
            ],
            "#ec4899",
            Icon::Heart,
        ),
        principle(
            "emotional-and-self-regulation",
            "Emotional and Self-Regulation",
            &[
                "Manage emotional responses before they shape decisions.",
                "Normalize discomfort through gradual, steady exposure.",
            ],
            "#f59e0b",
            Icon::UserCircle,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("frameworks".parse::<Collection>().unwrap(), Collection::Frameworks);
        assert_eq!(" Principles ".parse::<Collection>().unwrap(), Collection::Principles);
        assert_eq!(
            "mindsets".parse::<Collection>().unwrap_err(),
            RegistryError::UnknownCollection("mindsets".to_string())
        );
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for c in Collection::ALL {
            assert_eq!(c.to_string().parse::<Collection>().unwrap(), c);
        }
    }

    #[test]
    fn principles_join_items_as_steps() {
        let records = principles();
        let steps: Vec<_> = records[1].steps().collect();
        assert_eq!(
            steps,
            vec![
                "Trace sources; test evidence",
                "Absence \u{2260} proof of absence (except under induction-based expectation)",
                "Question via evidence techniques",
                "Consistent standards counter biases",
            ]
        );
    }

    #[test]
    fn frameworks_use_inline_icons() {
        let info = Collection::Frameworks.info();
        assert_eq!(info.layout, FlowLayout::Inline);
        assert_eq!(info.annotation, StepAnnotation::Icons);
        assert!(info.show_summary);
        assert!(info.badge.is_none());
    }

    #[test]
    fn principles_use_stacked_ordinals() {
        let info = Collection::Principles.info();
        assert_eq!(info.layout, FlowLayout::Stacked);
        assert_eq!(info.annotation, StepAnnotation::Ordinals);
        assert_eq!(info.footer.len(), 2);
    }
}
