//! Text normalization helpers.
//!
//! Scraped legal texts come from OCR and mixed-encoding sources, so
//! diacritics are unreliable ("ARTÍCULO" and "ARTICULO" both occur).
//! Taxonomy matching and anchor detection run on a folded form: lowercase
//! with combining marks stripped.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Fold text for matching: lowercase and strip diacritics.
///
/// # Examples
/// ```
/// use gaceta_segmenter::text::fold;
///
/// assert_eq!(fold("ARTÍCULO"), "articulo");
/// assert_eq!(fold("Resolución Nº 123"), "resolucion nº 123");
/// ```
#[must_use]
pub fn fold(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Fold to uppercase without diacritics, for anchor-token checks.
#[must_use]
pub fn fold_upper(text: &str) -> String {
    text.to_uppercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Compute a short hex digest of the content, used as an id discriminator
/// when a unit has no number of its own.
#[must_use]
pub fn content_digest(content: &str, len: usize) -> String {
    use sha2::{Digest, Sha256};

    let digest = format!("{:x}", Sha256::digest(content.as_bytes()));
    digest.chars().take(len).collect()
}
