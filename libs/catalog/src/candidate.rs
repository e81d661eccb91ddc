//! Pick-list candidates and the category filter that builds them.

use iguid_id::Guid;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::rules::{Category, RenderRule, CATALOG, PLACEHOLDER};

/// Which rule categories to offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Categories {
    /// Offer plain lowercase forms.
    #[serde(default = "default_true", rename = "show_lowercase")]
    pub lowercase: bool,

    /// Offer plain uppercase forms.
    #[serde(default, rename = "show_uppercase")]
    pub uppercase: bool,

    /// Offer code snippet declarations.
    #[serde(default = "default_true", rename = "show_code_snippets")]
    pub snippets: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Categories {
    fn default() -> Self {
        Self {
            lowercase: true,
            uppercase: false,
            snippets: true,
        }
    }
}

impl Categories {
    /// Every category enabled.
    pub const ALL: Self = Self {
        lowercase: true,
        uppercase: true,
        snippets: true,
    };

    /// Every category disabled. Lowercase forms are still offered.
    pub const NONE: Self = Self {
        lowercase: false,
        uppercase: false,
        snippets: false,
    };

    /// Returns true if rules of `category` pass the filter.
    ///
    /// Lowercase forms are kept whenever nothing else is enabled, so the pick
    /// list is never empty for the built-in catalog.
    pub fn includes(&self, category: Category) -> bool {
        match category {
            Category::Lowercase => self.lowercase || (!self.uppercase && !self.snippets),
            Category::Uppercase => self.uppercase,
            Category::Snippet => self.snippets,
        }
    }
}

/// One selectable rendering of a GUID.
#[derive(Debug, Clone)]
pub struct Candidate<'r> {
    ordinal: usize,
    guid: Guid,
    rule: &'r RenderRule,
}

impl<'r> Candidate<'r> {
    /// Creates a candidate with a 1-based ordinal.
    pub fn new(ordinal: usize, guid: Guid, rule: &'r RenderRule) -> Self {
        Self {
            ordinal,
            guid,
            rule,
        }
    }

    /// The 1-based position in the pick list.
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// The ordinal as shown in the pick list.
    pub fn label(&self) -> String {
        self.ordinal.to_string()
    }

    /// The rendered body for the current GUID.
    pub fn description(&self) -> String {
        self.rule.description(&self.guid)
    }

    /// Full insertable text: preface, body, epilogue.
    pub fn text(&self) -> String {
        self.rule.text(&self.guid)
    }

    /// Whether the text contains [`PLACEHOLDER`] for the user to rename.
    pub fn has_placeholder(&self) -> bool {
        self.rule.named
    }

    /// Byte offsets of each placeholder occurrence within [`Candidate::text`].
    pub fn placeholder_offsets(&self) -> Vec<usize> {
        if !self.rule.named {
            return Vec::new();
        }
        self.text()
            .match_indices(PLACEHOLDER)
            .map(|(offset, _)| offset)
            .collect()
    }

    /// Replaces this candidate's GUID with a fresh one, keeping label and rule.
    pub fn regenerate(&mut self) {
        self.guid.regenerate();
    }

    pub fn guid(&self) -> &Guid {
        &self.guid
    }

    pub fn rule(&self) -> &'r RenderRule {
        self.rule
    }
}

/// Builds the pick list for `guid` from the built-in catalog.
pub fn build_candidates(guid: Guid, categories: Categories) -> Vec<Candidate<'static>> {
    build_candidates_from(CATALOG, guid, categories)
}

/// Builds the pick list for `guid` from `catalog`.
///
/// Ordinals run 1, 2, 3, … over the rules that pass the filter, in catalog order.
pub fn build_candidates_from(
    catalog: &[RenderRule],
    guid: Guid,
    categories: Categories,
) -> Vec<Candidate<'_>> {
    let candidates: Vec<Candidate<'_>> = catalog
        .iter()
        .filter(|rule| categories.includes(rule.category))
        .enumerate()
        .map(|(index, rule)| Candidate::new(index + 1, guid, rule))
        .collect();

    debug!(
        count = candidates.len(),
        catalog = catalog.len(),
        lowercase = categories.lowercase,
        uppercase = categories.uppercase,
        snippets = categories.snippets,
        "Built candidates"
    );

    candidates
}
