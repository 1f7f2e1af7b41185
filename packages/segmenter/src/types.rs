//! Core data types for the segmenter.
//!
//! These types form the output contract consumed by the export and storage
//! layers: an ordered list of [`Unit`]s plus one [`DocumentClassification`]
//! per document. Both are produced once per orchestrator call and are
//! immutable afterwards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::HASH_DISCRIMINATOR_LEN;
use crate::text::content_digest;

/// Semantic type of a segmented unit.
///
/// Statute units (`Title`..`Disposition`) come from the hierarchical
/// segmenter, ruling units (`Recitals`..`Holding`) from the ruling
/// segmenter, and `Recital`/`Operative` from the resolution segmenter.
/// `WholeDocument` is the fallback when no structure is recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitType {
    Title,
    Chapter,
    Section,
    Article,
    Paragraph,
    Subitem,
    NumberedItem,
    Disposition,
    Recitals,
    Background,
    Analysis,
    Grounds,
    Holding,
    Recital,
    Operative,
    WholeDocument,
}

impl UnitType {
    /// Get the string value for serialized output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Chapter => "chapter",
            Self::Section => "section",
            Self::Article => "article",
            Self::Paragraph => "paragraph",
            Self::Subitem => "subitem",
            Self::NumberedItem => "numbered_item",
            Self::Disposition => "disposition",
            Self::Recitals => "recitals",
            Self::Background => "background",
            Self::Analysis => "analysis",
            Self::Grounds => "grounds",
            Self::Holding => "holding",
            Self::Recital => "recital",
            Self::Operative => "operative",
            Self::WholeDocument => "whole_document",
        }
    }

    /// Hierarchy depth implied by the unit type.
    ///
    /// 0 for structural-only units, 1 for article-level (including ruling
    /// blocks), 2 for paragraphs, 3 for sub-items, 4 for numbered items.
    #[must_use]
    pub fn depth(&self) -> u8 {
        match self {
            Self::Title
            | Self::Chapter
            | Self::Section
            | Self::Disposition
            | Self::Recital
            | Self::Operative
            | Self::WholeDocument => 0,
            Self::Article
            | Self::Recitals
            | Self::Background
            | Self::Analysis
            | Self::Grounds
            | Self::Holding => 1,
            Self::Paragraph => 2,
            Self::Subitem => 3,
            Self::NumberedItem => 4,
        }
    }
}

/// One semantic block of a segmented legal document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    /// Deterministic id: `{document_id}_{unit_type}_{discriminator}`.
    pub id: String,

    /// Semantic type of the block.
    pub unit_type: UnitType,

    /// Number label as it appears in the source (arabic, roman, or letter).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,

    /// Short caption, e.g. "OBJETO" from "ARTÍCULO 1.- (OBJETO)".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,

    /// Accumulated text body.
    pub content: String,

    /// Number of the article this unit nests under, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_article_number: Option<String>,

    /// Number of the paragraph this unit nests under, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_paragraph_number: Option<String>,

    /// Generic parent link, used by resolution operative articles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_unit_id: Option<String>,

    /// 1-based position among all units of the document.
    pub sequence_index: usize,

    /// Hierarchy depth (see [`UnitType::depth`]).
    pub depth: u8,

    /// Extracted terms, first-seen order, at most `MAX_KEYWORDS`.
    pub keywords: Vec<String>,

    /// Best-guess legal area label; inherits from the document when
    /// unit-level scoring finds nothing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
}

impl Unit {
    /// Build the deterministic unit id.
    ///
    /// The discriminator is the unit's own number when one was detected,
    /// otherwise a short content hash, so unnumbered and repeated blocks
    /// still get distinct ids.
    #[must_use]
    pub fn build_id(
        document_id: &str,
        unit_type: UnitType,
        number: Option<&str>,
        content: &str,
    ) -> String {
        let discriminator = match number {
            Some(n) if !n.trim().is_empty() => n.trim().replace(' ', "_").to_lowercase(),
            _ => content_digest(content, HASH_DISCRIMINATOR_LEN),
        };
        format!("{document_id}_{}_{discriminator}", unit_type.as_str())
    }
}

/// Immutable input to the orchestrator, owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    /// Caller-assigned document identifier.
    pub id: String,

    /// Full extracted text (PDF/OCR extraction already resolved upstream).
    pub raw_text: String,

    /// Declared document type, e.g. "Ley" or "Sentencia Constitucional".
    pub declared_type: Option<String>,

    /// Source site identifier, used as a weak type signal.
    pub source_hint: Option<String>,

    /// Document title, if known.
    pub title: Option<String>,

    /// Short summary, if known.
    pub summary: Option<String>,
}

impl SourceDocument {
    /// Create a new source document.
    #[must_use]
    pub fn new(id: impl Into<String>, raw_text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            raw_text: raw_text.into(),
            declared_type: None,
            source_hint: None,
            title: None,
            summary: None,
        }
    }

    /// Set the declared type.
    #[must_use]
    pub fn with_declared_type(mut self, declared_type: impl Into<String>) -> Self {
        self.declared_type = Some(declared_type.into());
        self
    }

    /// Set the source hint.
    #[must_use]
    pub fn with_source_hint(mut self, source_hint: impl Into<String>) -> Self {
        self.source_hint = Some(source_hint.into());
        self
    }

    /// Set the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the summary.
    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }
}

/// Validity state of a norm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidityState {
    /// In force (default; best-effort).
    #[default]
    Active,

    /// A later norm modifies this one.
    Amended,

    /// A repeal phrase referencing this norm was found.
    Repealed,
}

impl ValidityState {
    /// Get the string value for serialized output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Amended => "amended",
            Self::Repealed => "repealed",
        }
    }
}

/// Aggregate statistics over the raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStatistics {
    /// Character count.
    pub chars: usize,

    /// Whitespace-separated word count.
    pub words: usize,

    /// Estimated page count, at least 1.
    pub pages: usize,
}

/// Document-level legal classification.
///
/// Every field is independently optional: a failed extraction leaves the
/// field `None` (or empty for lists) and never aborts the others.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentClassification {
    /// Norm number as cited, e.g. "1670" or "4249".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub norm_number: Option<String>,

    /// Canonical norm type label, e.g. "ley", "decreto_supremo".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub norm_type: Option<String>,

    /// Normative rank; lower is higher authority, 99 when unknown.
    pub normative_rank: u8,

    /// Promulgation date normalized to an ISO calendar date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promulgation_date: Option<NaiveDate>,

    /// Ranked legal areas, at most `TOP_AREA_COUNT`.
    pub areas: Vec<String>,

    /// Highest-scoring legal area, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_area: Option<String>,

    /// Issuing organization, if detected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuing_entity: Option<String>,

    /// Best-effort validity state.
    pub validity_state: ValidityState,

    /// Norm numbers this document modifies.
    pub modifies: Vec<String>,

    /// Norm numbers this document repeals.
    pub repeals: Vec<String>,

    /// Extracted document-level keywords.
    pub keywords: Vec<String>,

    /// Aggregate text statistics.
    pub statistics: DocumentStatistics,

    /// Source-specific extension fields, e.g. judicial-action type.
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub extra: BTreeMap<String, String>,
}

/// Output of one orchestrator call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentationResult {
    /// Ordered unit list; `sequence_index` runs 1..=N.
    pub units: Vec<Unit>,

    /// Document-level classification.
    pub classification: DocumentClassification,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_type_as_str() {
        assert_eq!(UnitType::Article.as_str(), "article");
        assert_eq!(UnitType::NumberedItem.as_str(), "numbered_item");
        assert_eq!(UnitType::WholeDocument.as_str(), "whole_document");
    }

    #[test]
    fn test_unit_type_depth_ladder() {
        assert_eq!(UnitType::Title.depth(), 0);
        assert_eq!(UnitType::Article.depth(), 1);
        assert_eq!(UnitType::Paragraph.depth(), 2);
        assert_eq!(UnitType::Subitem.depth(), 3);
        assert_eq!(UnitType::NumberedItem.depth(), 4);
        // Ruling blocks are flat, article-level
        assert_eq!(UnitType::Analysis.depth(), 1);
    }

    #[test]
    fn test_unit_type_serialization() {
        assert_eq!(
            serde_json::to_string(&UnitType::NumberedItem).unwrap(),
            "\"numbered_item\""
        );
        assert_eq!(
            serde_json::to_string(&UnitType::WholeDocument).unwrap(),
            "\"whole_document\""
        );
    }

    #[test]
    fn test_build_id_with_number() {
        let id = Unit::build_id("ley_1670", UnitType::Article, Some("5"), "texto");
        assert_eq!(id, "ley_1670_article_5");
    }

    #[test]
    fn test_build_id_number_normalized() {
        let id = Unit::build_id("ley_1670", UnitType::Paragraph, Some("I"), "texto");
        assert_eq!(id, "ley_1670_paragraph_i");
    }

    #[test]
    fn test_build_id_hash_fallback() {
        let a = Unit::build_id("doc", UnitType::Analysis, None, "considerando uno");
        let b = Unit::build_id("doc", UnitType::Analysis, None, "considerando dos");
        assert_ne!(a, b);
        assert!(a.starts_with("doc_analysis_"));
    }

    #[test]
    fn test_build_id_blank_number_falls_back_to_hash() {
        let id = Unit::build_id("doc", UnitType::Article, Some("  "), "texto");
        let hashed = Unit::build_id("doc", UnitType::Article, None, "texto");
        assert_eq!(id, hashed);
    }

    #[test]
    fn test_source_document_builder() {
        let doc = SourceDocument::new("ley_843", "texto")
            .with_declared_type("Ley")
            .with_source_hint("gaceta")
            .with_title("Ley de Reforma Tributaria");
        assert_eq!(doc.id, "ley_843");
        assert_eq!(doc.declared_type.as_deref(), Some("Ley"));
        assert_eq!(doc.source_hint.as_deref(), Some("gaceta"));
        assert!(doc.summary.is_none());
    }

    #[test]
    fn test_validity_state_default() {
        assert_eq!(ValidityState::default(), ValidityState::Active);
        assert_eq!(ValidityState::Repealed.as_str(), "repealed");
    }
}
