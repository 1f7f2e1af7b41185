//! Tuning constants and validation functions for the segmenter.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Result, SegmenterError};

/// Minimum content length (in characters) for a unit to be classified.
///
/// Shorter fragments are too noisy for keyword extraction or area scoring
/// to say anything reliable about them.
pub const MIN_CLASSIFY_CHARS: usize = 20;

/// Maximum contribution of a single keyword to an area score.
///
/// Caps the occurrence count per keyword so one repeated term cannot
/// dominate the score. Downstream consumers depend on the resulting
/// score shape, so do not change this value lightly.
pub const KEYWORD_SCORE_CAP: usize = 10;

/// Maximum number of keywords extracted per unit or document.
pub const MAX_KEYWORDS: usize = 10;

/// Number of ranked areas kept in the document classification.
pub const TOP_AREA_COUNT: usize = 3;

/// Characters per estimated page.
pub const CHARS_PER_PAGE: usize = 3000;

/// Normative rank for unrecognized norm types.
///
/// A sentinel rather than `None` so that rank-based ordering downstream
/// stays total.
pub const UNKNOWN_NORMATIVE_RANK: u8 = 99;

/// Length of the content-hash discriminator used in unit ids.
pub const HASH_DISCRIMINATOR_LEN: usize = 12;

/// Document id pattern: letters, digits, underscore, hyphen.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DOCUMENT_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("valid regex"));

/// Validate a document identifier.
///
/// # Arguments
/// * `document_id` - The identifier to validate
///
/// # Returns
/// * `Ok(())` if valid
/// * `Err(SegmenterError::InvalidDocumentId)` if invalid
///
/// # Examples
/// ```
/// use gaceta_segmenter::config::validate_document_id;
///
/// assert!(validate_document_id("ley_1670").is_ok());
/// assert!(validate_document_id("scp-0045-2024").is_ok());
/// assert!(validate_document_id("has spaces").is_err());
/// ```
pub fn validate_document_id(document_id: &str) -> Result<()> {
    if DOCUMENT_ID_PATTERN.is_match(document_id) {
        Ok(())
    } else {
        Err(SegmenterError::InvalidDocumentId(document_id.to_string()))
    }
}
