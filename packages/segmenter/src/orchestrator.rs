//! Public entry point: segmentation and classification in one pass.
//!
//! Segmentation is infallible. Degenerate input degrades to a single
//! `whole_document` unit with an empty classification rather than an
//! error, so callers can feed every harvested document through without
//! special-casing.

use crate::classify::enrich_units;
use crate::metadata::classify_document;
use crate::segmenter::{segment_resolution, segment_ruling, segment_statute};
use crate::strategy::{select_strategy, SegmentationStrategy};
use crate::types::{SegmentationResult, SourceDocument};

/// Segment a document and classify it.
///
/// Selects a segmentation strategy from the document's declared type,
/// source hint, and text shape; runs the matching segmenter; then stamps
/// every sufficiently long unit with keywords and a legal area, falling
/// back to the document's primary area.
///
/// # Arguments
///
/// * `document` - The source document to process
///
/// # Returns
///
/// The ordered unit list and the document-level classification.
#[must_use]
pub fn segment_and_classify(document: &SourceDocument) -> SegmentationResult {
    let classification = classify_document(document);

    let strategy = select_strategy(
        document.declared_type.as_deref(),
        document.source_hint.as_deref(),
        &document.raw_text,
    );
    tracing::debug!(document_id = %document.id, ?strategy, "Segmenting document");

    let mut units = match strategy {
        SegmentationStrategy::Ruling => segment_ruling(&document.id, &document.raw_text),
        SegmentationStrategy::Resolution => segment_resolution(&document.id, &document.raw_text),
        SegmentationStrategy::Statute => segment_statute(&document.id, &document.raw_text),
    };

    enrich_units(&mut units, classification.primary_area.as_deref());

    tracing::debug!(
        document_id = %document.id,
        units = units.len(),
        "Segmentation complete"
    );

    SegmentationResult {
        units,
        classification,
    }
}
