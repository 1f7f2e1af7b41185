//! Segmentation strategy selection.
//!
//! A total, pure function: every input resolves to a strategy, with
//! statute as the default since statutes and decrees are the largest and
//! most generic category.

use crate::taxonomy::contains_word;
use crate::text::{fold, fold_upper};

/// The three segmentation strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentationStrategy {
    /// Judicial ruling with canonical rhetorical sections.
    Ruling,

    /// Administrative resolution (recitals + operative block).
    Resolution,

    /// Statute or decree with article hierarchy (default).
    Statute,
}

/// Declared-type keywords that signal a judicial ruling.
const RULING_TYPE_KEYWORDS: &[&str] = &[
    "sentencia",
    "auto constitucional",
    "declaracion constitucional",
    "ruling",
    "constitutional decision",
];

/// Known judicial source-site identifiers.
const JUDICIAL_SOURCES: &[&str] = &[
    "tcp",
    "tribunal_constitucional",
    "tribunal constitucional",
    "constitutional_court",
];

/// Declared-type keywords that signal an administrative resolution.
const RESOLUTION_TYPE_KEYWORDS: &[&str] = &["resolucion", "resolution"];

/// Choose a segmentation strategy from the declared type, the source hint,
/// and the text shape. First matching rule wins.
#[must_use]
pub fn select_strategy(
    declared_type: Option<&str>,
    source_hint: Option<&str>,
    raw_text: &str,
) -> SegmentationStrategy {
    let declared = declared_type.map(fold);

    if let Some(declared) = declared.as_deref() {
        if RULING_TYPE_KEYWORDS.iter().any(|kw| contains_word(declared, kw)) {
            return SegmentationStrategy::Ruling;
        }
    }

    if let Some(hint) = source_hint.map(fold) {
        if JUDICIAL_SOURCES.contains(&hint.as_str()) {
            return SegmentationStrategy::Ruling;
        }
    }

    let upper = fold_upper(raw_text);
    let has_vistos = upper.contains("VISTOS");
    let has_considerando = upper.contains("CONSIDERANDO");
    let has_decision = upper.contains("POR TANTO") || upper.contains("RESUELVE");

    if has_vistos && has_considerando && has_decision {
        return SegmentationStrategy::Ruling;
    }

    if let Some(declared) = declared.as_deref() {
        if RESOLUTION_TYPE_KEYWORDS
            .iter()
            .any(|kw| contains_word(declared, kw))
        {
            return SegmentationStrategy::Resolution;
        }
    }

    // CONSIDERANDO followed by RESUELVE, without the ruling anchors
    if !has_vistos && has_considerando {
        if let (Some(c), Some(r)) = (upper.find("CONSIDERANDO"), upper.rfind("RESUELVE")) {
            if c < r {
                return SegmentationStrategy::Resolution;
            }
        }
    }

    SegmentationStrategy::Statute
}
