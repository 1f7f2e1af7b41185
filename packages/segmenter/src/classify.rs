//! Unit Classifier: keyword extraction and area scoring.
//!
//! Both the per-unit enrichment pass and the document-level classifier go
//! through the same scoring routine: count word-boundary matches of each
//! area's keyword list over folded text, capping each keyword's
//! contribution so one repeated term cannot dominate the score.

use regex::Regex;
use std::sync::LazyLock;

use crate::config::{KEYWORD_SCORE_CAP, MAX_KEYWORDS, MIN_CLASSIFY_CHARS};
use crate::taxonomy::{LegalArea, AREA_KEYWORDS, BOILERPLATE_TERMS, DOMAIN_TERMS};
use crate::text::fold;
use crate::types::Unit;

#[allow(clippy::expect_used)] // Built from escaped literals, guaranteed valid
fn word_regex(term: &str) -> Regex {
    Regex::new(&format!(r"\b{}\b", regex::escape(term))).expect("valid regex")
}

/// Compiled word-boundary matchers per area.
static AREA_MATCHERS: LazyLock<Vec<(LegalArea, Vec<Regex>)>> = LazyLock::new(|| {
    AREA_KEYWORDS
        .iter()
        .map(|(area, keywords)| (*area, keywords.iter().map(|kw| word_regex(kw)).collect()))
        .collect()
});

/// Compiled matchers for the keyword-extraction dictionaries.
static TERM_MATCHERS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    DOMAIN_TERMS
        .iter()
        .chain(BOILERPLATE_TERMS.iter())
        .map(|term| (*term, word_regex(term)))
        .collect()
});

/// Score a text fragment against every taxonomy area.
///
/// Returns `(area, score)` pairs with nonzero scores, sorted by score
/// descending (stable for ties). Each keyword contributes at most
/// [`KEYWORD_SCORE_CAP`] occurrences.
#[must_use]
pub fn score_areas(text: &str) -> Vec<(LegalArea, usize)> {
    let folded = fold(text);
    let mut scores: Vec<(LegalArea, usize)> = AREA_MATCHERS
        .iter()
        .map(|(area, matchers)| {
            let score: usize = matchers
                .iter()
                .map(|rx| rx.find_iter(&folded).take(KEYWORD_SCORE_CAP).count())
                .sum();
            (*area, score)
        })
        .filter(|(_, score)| *score > 0)
        .collect();

    scores.sort_by(|a, b| b.1.cmp(&a.1));
    scores
}

/// Highest-scoring area for a text fragment, if any keyword matched.
#[must_use]
pub fn best_area(text: &str) -> Option<LegalArea> {
    score_areas(text).first().map(|(area, _)| *area)
}

/// Extract up to [`MAX_KEYWORDS`] legal terms, in first-seen order.
#[must_use]
pub fn extract_keywords(text: &str) -> Vec<String> {
    let folded = fold(text);
    let mut found: Vec<(usize, &str)> = TERM_MATCHERS
        .iter()
        .filter_map(|(term, rx)| rx.find(&folded).map(|m| (m.start(), *term)))
        .collect();

    found.sort_by_key(|(pos, _)| *pos);
    found
        .into_iter()
        .take(MAX_KEYWORDS)
        .map(|(_, term)| term.to_string())
        .collect()
}

/// Enrichment pass: stamp keywords and an area onto every unit whose
/// content is long enough to classify.
///
/// A unit with no keyword matches inherits the document's primary area;
/// if the document has none either, the explicit "otro" sentinel is used
/// so the field is never an ambiguous empty value. Content and hierarchy
/// fields are left untouched.
pub fn enrich_units(units: &mut [Unit], document_area: Option<&str>) {
    for unit in units.iter_mut() {
        if unit.content.chars().count() <= MIN_CLASSIFY_CHARS {
            continue;
        }

        unit.keywords = extract_keywords(&unit.content);
        unit.area = Some(
            best_area(&unit.content)
                .map(|area| area.as_str().to_string())
                .or_else(|| document_area.map(str::to_string))
                .unwrap_or_else(|| LegalArea::Other.as_str().to_string()),
        );
    }
}
