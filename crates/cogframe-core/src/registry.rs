//! Content registry.
//!
//! A [`Registry`] is the validated, ordered list of records a page shows.
//! Validation runs once in [`Registry::new`]; after that the registry is
//! immutable and cheap to clone (records sit behind an `Arc`).

use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;

use crate::error::{RegistryError, RegistryResult};
use crate::steps::{split_steps, Steps};
use crate::types::Icon;

/// One framework or principle card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameworkRecord {
    /// Unique, stable identifier
    pub id: String,
    /// Display name
    pub title: String,
    /// Steps joined by `→`
    pub content: String,
    /// CSS color used for accents
    pub accent_color: String,
    /// Header glyph
    pub icon: Icon,
}

impl FrameworkRecord {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        accent_color: impl Into<String>,
        icon: Icon,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            accent_color: accent_color.into(),
            icon,
        }
    }

    /// The record's steps, parsed on demand
    pub fn steps(&self) -> Steps<'_> {
        split_steps(&self.content)
    }

    fn validate(&self, position: usize) -> RegistryResult<()> {
        if self.id.trim().is_empty() {
            return Err(RegistryError::EmptyId { position });
        }
        if self.title.trim().is_empty() {
            return Err(RegistryError::EmptyTitle(self.id.clone()));
        }
        if self.steps().all(str::is_empty) {
            return Err(RegistryError::NoSteps(self.id.clone()));
        }
        if let Some(index) = self.steps().position(str::is_empty) {
            return Err(RegistryError::EmptyStep {
                id: self.id.clone(),
                index,
            });
        }
        Ok(())
    }
}

/// Validated, ordered, immutable collection of records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    records: Arc<[FrameworkRecord]>,
}

impl Registry {
    /// Validate and freeze a list of records.
    ///
    /// Fails on the first empty id, empty title, duplicate id, or content
    /// that does not split into non-empty steps.
    pub fn new(records: Vec<FrameworkRecord>) -> RegistryResult<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            record.validate(position)?;
            if !seen.insert(record.id.as_str()) {
                return Err(RegistryError::DuplicateId(record.id.clone()));
            }
        }

        tracing::debug!(count = records.len(), "Registry validated");

        Ok(Self {
            records: records.into(),
        })
    }

    /// All records in display order
    pub fn list(&self) -> &[FrameworkRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FrameworkRecord> {
        self.records.iter()
    }

    /// Record ids in display order
    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.iter().map(|r| r.id.as_str())
    }

    pub fn get(&self, id: &str) -> Option<&FrameworkRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Zero-based display position of a record
    pub fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a FrameworkRecord;
    type IntoIter = std::slice::Iter<'a, FrameworkRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
