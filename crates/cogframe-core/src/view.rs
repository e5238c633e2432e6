//! Card view model.
//!
//! [`render_card`] is the whole rendering decision for one card, kept free
//! of any UI framework so it can be tested directly. Components only turn
//! a [`CardView`] into markup.

use serde::Serialize;

use crate::catalog::CollectionInfo;
use crate::classify::classify_step;
use crate::registry::FrameworkRecord;
use crate::types::{FlowLayout, Icon, StepAnnotation};

/// Everything needed to draw one card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub icon: Icon,
    pub accent_color: &'a str,
    pub expanded: bool,
    /// Toggle chevron rotation in degrees
    pub chevron_rotation: u16,
    /// Present only when expanded
    pub body: Option<CardBody<'a>>,
}

/// Expanded part of a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardBody<'a> {
    /// Full content paragraph, if the collection shows it
    pub summary: Option<&'a str>,
    pub layout: FlowLayout,
    pub steps: Vec<StepView<'a>>,
}

/// One step chip
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepView<'a> {
    pub text: &'a str,
    pub icon: Option<Icon>,
    /// `"<card>.<step>"`, 1-based
    pub ordinal: Option<String>,
    /// Connector drawn after this step; `None` on the last one
    pub connector: Option<char>,
}

impl CardView<'_> {
    /// DOM id of the body region, for `aria-controls`
    pub fn body_dom_id(&self) -> String {
        format!("card-body-{}", self.id)
    }
}

/// Build the view of `record`, the card at zero-based `position`.
pub fn render_card<'a>(
    record: &'a FrameworkRecord,
    position: usize,
    expanded: bool,
    info: &CollectionInfo,
) -> CardView<'a> {
    CardView {
        id: &record.id,
        title: &record.title,
        icon: record.icon,
        accent_color: &record.accent_color,
        expanded,
        chevron_rotation: if expanded { 180 } else { 0 },
        body: expanded.then(|| render_body(record, position, info)),
    }
}

fn render_body<'a>(record: &'a FrameworkRecord, position: usize, info: &CollectionInfo) -> CardBody<'a> {
    let texts: Vec<&str> = record.steps().collect();
    let last = texts.len().saturating_sub(1);
    let steps = texts
        .into_iter()
        .enumerate()
        .map(|(index, text)| StepView {
            text,
            icon: match info.annotation {
                StepAnnotation::Icons => classify_step(text),
                _ => None,
            },
            ordinal: match info.annotation {
                StepAnnotation::Ordinals => Some(format!("{}.{}", position + 1, index + 1)),
                _ => None,
            },
            connector: (index < last).then_some(info.layout.connector()),
        })
        .collect();

    CardBody {
        summary: info.show_summary.then_some(record.content.as_str()),
        layout: info.layout,
        steps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Collection;

    fn record() -> FrameworkRecord {
        FrameworkRecord::new(
            "sense-making",
            "Sense-Making",
            "Extract patterns → form concepts → enable inference.",
            "hsl(180 80% 45%)",
            Icon::Brain,
        )
    }

    #[test]
    fn collapsed_card_has_header_only() {
        let r = record();
        let view = render_card(&r, 0, false, &Collection::Frameworks.info());
        assert_eq!(view.title, "Sense-Making");
        assert_eq!(view.icon, Icon::Brain);
        assert_eq!(view.chevron_rotation, 0);
        assert!(view.body.is_none());
    }

    #[test]
    fn expanded_frameworks_card_has_icons_and_arrows() {
        let r = record();
        let view = render_card(&r, 0, true, &Collection::Frameworks.info());
        assert_eq!(view.chevron_rotation, 180);
        let body = view.body.unwrap();
        assert_eq!(body.summary, Some(r.content.as_str()));
        assert_eq!(body.layout, FlowLayout::Inline);

        let texts: Vec<_> = body.steps.iter().map(|s| s.text).collect();
        assert_eq!(texts, vec!["Extract patterns", "form concepts", "enable inference"]);
        assert_eq!(body.steps[0].icon, Some(Icon::Search));
        assert_eq!(body.steps[1].icon, Some(Icon::Lightbulb));
        assert!(body.steps.iter().all(|s| s.ordinal.is_none()));

        let connectors: Vec<_> = body.steps.iter().map(|s| s.connector).collect();
        assert_eq!(connectors, vec![Some('→'), Some('→'), None]);
    }

    #[test]
    fn expanded_principles_card_has_ordinals() {
        let r = record();
        let view = render_card(&r, 2, true, &Collection::Principles.info());
        let body = view.body.unwrap();
        assert_eq!(body.summary, None);
        assert_eq!(body.layout, FlowLayout::Stacked);
        let ordinals: Vec<_> = body.steps.iter().map(|s| s.ordinal.clone().unwrap()).collect();
        assert_eq!(ordinals, vec!["3.1", "3.2", "3.3"]);
        assert!(body.steps.iter().all(|s| s.icon.is_none()));
        assert_eq!(body.steps[0].connector, Some('↓'));
    }

    #[test]
    fn single_step_has_no_connector() {
        let r = FrameworkRecord::new("a", "A", "Only step.", "#fff", Icon::Eye);
        let body = render_card(&r, 0, true, &Collection::Frameworks.info()).body.unwrap();
        assert_eq!(body.steps.len(), 1);
        assert_eq!(body.steps[0].connector, None);
    }

    #[test]
    fn body_dom_id_uses_record_id() {
        let r = record();
        let view = render_card(&r, 0, false, &Collection::Frameworks.info());
        assert_eq!(view.body_dom_id(), "card-body-sense-making");
    }
}
