//! Entity types produced by the extraction stage.
//!
//! The recognizer reports spans with coarse labels; the extractor
//! remaps them into the four-category [`EntityBag`]. Each category is
//! an insertion-ordered, duplicate-free list of surface strings.

use serde::{Deserialize, Serialize};

/// Coarse entity category reported by the recognizer, prior to
/// domain-specific remapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoarseLabel {
    /// Geo-political entity (countries, cities, states).
    Gpe,
    /// Non-GPE location (mountain ranges, bodies of water).
    Location,
    /// Facility (buildings, airports, highways, bridges).
    Facility,
    /// Organization (companies, agencies, institutions).
    Organization,
    /// Anything else the recognizer tags.
    Other,
}

/// A text span tagged by the recognizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    /// The surface text of the span.
    pub text: String,
    /// The recognizer's coarse category.
    pub label: CoarseLabel,
}

impl EntitySpan {
    /// Creates a span from surface text and a coarse label.
    pub fn new(text: impl Into<String>, label: CoarseLabel) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }
}

/// Four-category classification of extracted text spans.
///
/// Constructed fresh per extraction call and immutable once returned.
/// Within each category a surface string appears at most once,
/// preserving first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityBag {
    /// Geo-political entities and locations.
    pub locations: Vec<String>,
    /// Facilities plus keyword-recovered venue phrases.
    pub attractions: Vec<String>,
    /// Organizations.
    pub organizations: Vec<String>,
    /// Everything else the recognizer tagged.
    pub misc: Vec<String>,
}

impl EntityBag {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends to `locations` unless the string is already present.
    pub fn push_location(&mut self, text: impl Into<String>) {
        push_unique(&mut self.locations, text.into());
    }

    /// Appends to `attractions` unless the string is already present.
    pub fn push_attraction(&mut self, text: impl Into<String>) {
        push_unique(&mut self.attractions, text.into());
    }

    /// Appends to `organizations` unless the string is already present.
    pub fn push_organization(&mut self, text: impl Into<String>) {
        push_unique(&mut self.organizations, text.into());
    }

    /// Appends to `misc` unless the string is already present.
    pub fn push_misc(&mut self, text: impl Into<String>) {
        push_unique(&mut self.misc, text.into());
    }

    /// Routes a recognizer span into its category.
    pub fn push_span(&mut self, span: EntitySpan) {
        match span.label {
            CoarseLabel::Gpe | CoarseLabel::Location => self.push_location(span.text),
            CoarseLabel::Facility => self.push_attraction(span.text),
            CoarseLabel::Organization => self.push_organization(span.text),
            CoarseLabel::Other => self.push_misc(span.text),
        }
    }

    /// True when every category is empty.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
            && self.attractions.is_empty()
            && self.organizations.is_empty()
            && self.misc.is_empty()
    }
}

fn push_unique(items: &mut Vec<String>, text: String) {
    if !items.contains(&text) {
        items.push(text);
    }
}
