//! Document Metadata Extractor.
//!
//! Derives document-level attributes from the declared type, title,
//! summary, and raw text. Every extraction sub-step is independently
//! optional: a failed match yields `None` (or an empty list) and the
//! remaining extractions still run. Nothing here aborts the call.

use chrono::NaiveDate;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::classify::{extract_keywords, score_areas};
use crate::config::{CHARS_PER_PAGE, TOP_AREA_COUNT, UNKNOWN_NORMATIVE_RANK};
use crate::taxonomy::{norm_type_for, rank_for_label};
use crate::text::fold;
use crate::types::{DocumentClassification, DocumentStatistics, SourceDocument, ValidityState};

#[allow(clippy::expect_used)] // Static regexes that are guaranteed to be valid
fn rx(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid regex")
}

/// Citation forms for the norm number, tried in order. First match wins.
static NORM_NUMBER_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        // Type keyword followed by an optional N° marker: "Ley N° 1670", "D.S. 4249"
        rx(r"(?i)\b(?:ley|decreto\s+supremo|d\.?\s*s\.?|resoluci[oó]n(?:\s+(?:suprema|ministerial|administrativa))?|sentencia\s+constitucional(?:\s+plurinacional)?)\s+n?[°ºo]?\.?\s*(?P<num>\d+(?:/\d{2,4})?)"),
        // Bare N° marker: "N° 1670"
        rx(r"(?i)\bn[°º]\s*(?P<num>\d+(?:/\d{2,4})?)"),
        // Number/year citation: "0045/2024"
        rx(r"\b(?P<num>\d{1,4}/\d{4})\b"),
    ]
});

/// Natural-language Spanish date: "15 de mayo de 2024".
static TEXTUAL_DATE: LazyLock<Regex> = LazyLock::new(|| {
    rx(r"(?i)\b(?P<d>\d{1,2})\s+de\s+(?P<m>[a-zñáéíóú]+)\s+(?:de|del)\s+(?P<y>\d{4})\b")
});

/// ISO date: "2024-05-15".
static ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| rx(r"\b(?P<y>\d{4})-(?P<m>\d{2})-(?P<d>\d{2})\b"));

/// Numeric date: "15/05/2024".
static NUMERIC_DATE: LazyLock<Regex> =
    LazyLock::new(|| rx(r"\b(?P<d>\d{1,2})/(?P<m>\d{1,2})/(?P<y>\d{4})\b"));

/// Known issuing entities, most specific first.
static ISSUING_ENTITY_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        rx(r"(?i)\basamblea\s+legislativa\s+plurinacional\b"),
        rx(r"(?i)\bhonorable\s+congreso\s+nacional\b"),
        rx(r"(?i)\btribunal\s+constitucional\s+plurinacional\b"),
        rx(r"(?i)\btribunal\s+supremo\s+de\s+justicia\b"),
        rx(r"(?i)\bautoridad\s+de\s+supervisi[oó]n\s+del\s+sistema\s+financiero\b"),
        rx(r"(?i)\bministerio\s+de\s+\w+(?:\s+(?:y|de|del|la)\s+\w+){0,2}"),
        rx(r"(?i)\bgobierno\s+aut[oó]nomo\s+municipal\s+de\s+\w+"),
    ]
});

/// Cross-reference triggers: "modifica la Ley 843".
static MODIFIES_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    rx(r"(?i)\bmodif[ií]c(?:a|ase|anse|ando)\s+(?:la\s+|el\s+)?(?:ley|decreto\s+supremo|d\.?\s*s\.?|resoluci[oó]n\s*\w*)\s*n?[°ºo]?\.?\s*(?P<num>\d+)")
});

/// Repeal triggers: "abroga", "abrógase", "deróganse".
static REPEALS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    rx(r"(?i)\b(?:se\s+)?(?:abr[oó]g|der[oó]g)(?:a|ase|anse|ando|uese)?\s+(?:la\s+|el\s+)?(?:ley|decreto\s+supremo|d\.?\s*s\.?|resoluci[oó]n\s*\w*)\s*n?[°ºo]?\.?\s*(?P<num>\d+)")
});

/// Judicial action type, for constitutional-court sources.
static JUDICIAL_ACTION: LazyLock<Regex> = LazyLock::new(|| {
    rx(r"(?i)\bacci[oó]n\s+(?:de\s+)?(?P<kind>amparo\s+constitucional|inconstitucionalidad(?:\s+(?:abstracta|concreta))?|libertad|protecci[oó]n\s+de\s+privacidad|cumplimiento|popular)\b")
});

/// Regulated-entity category, for financial-regulator sources.
static REGULATED_ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    rx(r"(?i)\b(?P<kind>entidad(?:es)?\s+de\s+intermediaci[oó]n\s+financiera|banco(?:s)?\s+(?:m[uú]ltiple(?:s)?|pyme)|cooperativa(?:s)?\s+de\s+ahorro\s+y\s+cr[eé]dito|entidad(?:es)?\s+financiera(?:s)?\s+de\s+vivienda|casa(?:s)?\s+de\s+cambio)\b")
});

type ExtensionFn = fn(&SourceDocument, &mut BTreeMap<String, String>);

/// Per-source extension functions, keyed by source hint.
///
/// A lookup table rather than per-source branches, so new sources add an
/// entry instead of another conditional.
const SOURCE_EXTENSIONS: &[(&str, ExtensionFn)] = &[
    ("tcp", extend_constitutional_court),
    ("tribunal_constitucional", extend_constitutional_court),
    ("constitutional_court", extend_constitutional_court),
    ("asfi", extend_financial_regulator),
];

fn extend_constitutional_court(doc: &SourceDocument, extra: &mut BTreeMap<String, String>) {
    if let Some(caps) = JUDICIAL_ACTION.captures(&doc.raw_text) {
        if let Some(kind) = caps.name("kind") {
            extra.insert("judicial_action".to_string(), fold(kind.as_str()));
        }
    }
}

fn extend_financial_regulator(doc: &SourceDocument, extra: &mut BTreeMap<String, String>) {
    if let Some(caps) = REGULATED_ENTITY.captures(&doc.raw_text) {
        if let Some(kind) = caps.name("kind") {
            extra.insert("regulated_entity".to_string(), fold(kind.as_str()));
        }
    }
}

/// Classify a document: norm identity, date, areas, cross-references,
/// source extensions, and statistics.
#[must_use]
pub fn classify_document(doc: &SourceDocument) -> DocumentClassification {
    let norm_type = extract_norm_type(doc);
    let normative_rank = norm_type
        .as_deref()
        .map_or(UNKNOWN_NORMATIVE_RANK, rank_for_label);

    let norm_number = extract_norm_number(doc);
    let modifies = collect_references(&MODIFIES_PATTERN, &doc.raw_text);
    let repeals = collect_references(&REPEALS_PATTERN, &doc.raw_text);
    let validity_state = derive_validity(norm_number.as_deref(), &modifies, &repeals);

    let ranked = score_areas(&doc.raw_text);
    let areas: Vec<String> = ranked
        .iter()
        .take(TOP_AREA_COUNT)
        .map(|(area, _)| area.as_str().to_string())
        .collect();
    let primary_area = areas.first().cloned();

    let mut extra = BTreeMap::new();
    if let Some(hint) = doc.source_hint.as_deref().map(fold) {
        if let Some((_, extend)) = SOURCE_EXTENSIONS.iter().find(|(key, _)| *key == hint) {
            extend(doc, &mut extra);
        }
    }

    DocumentClassification {
        norm_number,
        norm_type,
        normative_rank,
        promulgation_date: extract_date(&doc.raw_text),
        areas,
        primary_area,
        issuing_entity: extract_issuing_entity(&doc.raw_text),
        validity_state,
        modifies,
        repeals,
        keywords: extract_keywords(&doc.raw_text),
        statistics: compute_statistics(&doc.raw_text),
        extra,
    }
}

/// Norm type: the declared type is authoritative; title, summary, and the
/// opening of the text are fallbacks, in that order.
fn extract_norm_type(doc: &SourceDocument) -> Option<String> {
    let candidates = [
        doc.declared_type.as_deref(),
        doc.title.as_deref(),
        doc.summary.as_deref(),
        Some(&doc.raw_text[..]),
    ];

    for candidate in candidates.into_iter().flatten() {
        let folded: String = fold(candidate).chars().take(600).collect();
        if let Some(norm_type) = norm_type_for(&folded) {
            return Some(norm_type.label.to_string());
        }
    }
    None
}

/// Norm number: first citation pattern that matches, title before text.
fn extract_norm_number(doc: &SourceDocument) -> Option<String> {
    for haystack in [doc.title.as_deref(), Some(&doc.raw_text[..])]
        .into_iter()
        .flatten()
    {
        for pattern in NORM_NUMBER_PATTERNS.iter() {
            if let Some(caps) = pattern.captures(haystack) {
                if let Some(num) = caps.name("num") {
                    return Some(num.as_str().to_string());
                }
            }
        }
    }
    None
}

const MONTHS: &[(&str, u32)] = &[
    ("enero", 1),
    ("febrero", 2),
    ("marzo", 3),
    ("abril", 4),
    ("mayo", 5),
    ("junio", 6),
    ("julio", 7),
    ("agosto", 8),
    ("septiembre", 9),
    ("setiembre", 9),
    ("octubre", 10),
    ("noviembre", 11),
    ("diciembre", 12),
];

/// Promulgation date, normalized to an ISO calendar date.
///
/// Invalid calendar dates (e.g. "31 de febrero") yield `None`; the date is
/// never guessed.
fn extract_date(text: &str) -> Option<NaiveDate> {
    if let Some(caps) = TEXTUAL_DATE.captures(text) {
        let day: u32 = caps.name("d")?.as_str().parse().ok()?;
        let month_name = fold(caps.name("m")?.as_str());
        let year: i32 = caps.name("y")?.as_str().parse().ok()?;
        let month = MONTHS
            .iter()
            .find(|(name, _)| *name == month_name)
            .map(|(_, m)| *m)?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    if let Some(caps) = ISO_DATE.captures(text) {
        let year: i32 = caps.name("y")?.as_str().parse().ok()?;
        let month: u32 = caps.name("m")?.as_str().parse().ok()?;
        let day: u32 = caps.name("d")?.as_str().parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    if let Some(caps) = NUMERIC_DATE.captures(text) {
        let day: u32 = caps.name("d")?.as_str().parse().ok()?;
        let month: u32 = caps.name("m")?.as_str().parse().ok()?;
        let year: i32 = caps.name("y")?.as_str().parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    None
}

fn extract_issuing_entity(text: &str) -> Option<String> {
    ISSUING_ENTITY_PATTERNS
        .iter()
        .find_map(|pattern| pattern.find(text))
        .map(|m| m.as_str().trim().to_string())
}

/// Collect referenced norm numbers after a trigger phrase, deduplicated,
/// first-seen order.
fn collect_references(pattern: &Regex, text: &str) -> Vec<String> {
    let mut numbers: Vec<String> = Vec::new();
    for caps in pattern.captures_iter(text) {
        if let Some(num) = caps.name("num") {
            let num = num.as_str().to_string();
            if !numbers.contains(&num) {
                numbers.push(num);
            }
        }
    }
    numbers
}

/// Best-effort validity: repealed if a repeal phrase targets this very
/// norm, amended if a modifies phrase does, active otherwise.
fn derive_validity(
    norm_number: Option<&str>,
    modifies: &[String],
    repeals: &[String],
) -> ValidityState {
    let Some(own) = norm_number else {
        return ValidityState::Active;
    };
    if repeals.iter().any(|n| n == own) {
        ValidityState::Repealed
    } else if modifies.iter().any(|n| n == own) {
        ValidityState::Amended
    } else {
        ValidityState::Active
    }
}

fn compute_statistics(text: &str) -> DocumentStatistics {
    let chars = text.chars().count();
    DocumentStatistics {
        chars,
        words: text.split_whitespace().count(),
        pages: std::cmp::max(1, chars / CHARS_PER_PAGE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn doc(text: &str) -> SourceDocument {
        SourceDocument::new("doc", text)
    }

    #[test]
    fn test_norm_number_from_type_keyword() {
        let c = classify_document(&doc("La presente Ley N° 1670 regula el sistema."));
        assert_eq!(c.norm_number.as_deref(), Some("1670"));
    }

    #[test]
    fn test_norm_number_bare_marker() {
        let c = classify_document(&doc("Se promulga la norma N° 843 en la fecha."));
        assert_eq!(c.norm_number.as_deref(), Some("843"));
    }

    #[test]
    fn test_norm_number_slash_year() {
        let c = classify_document(&doc("SENTENCIA CONSTITUCIONAL PLURINACIONAL 0045/2024"));
        assert_eq!(c.norm_number.as_deref(), Some("0045/2024"));
    }

    #[test]
    fn test_norm_number_title_preferred() {
        let d = doc("El texto menciona la Ley N° 999 de pasada.")
            .with_title("Ley N° 1670 de Reactivación Económica");
        let c = classify_document(&d);
        assert_eq!(c.norm_number.as_deref(), Some("1670"));
    }

    #[test]
    fn test_norm_number_absent() {
        let c = classify_document(&doc("Texto sin citas."));
        assert_eq!(c.norm_number, None);
    }

    #[test]
    fn test_norm_type_from_declared_type() {
        let d = doc("cualquier texto").with_declared_type("Decreto Supremo");
        let c = classify_document(&d);
        assert_eq!(c.norm_type.as_deref(), Some("decreto_supremo"));
        assert_eq!(c.normative_rank, 3);
    }

    #[test]
    fn test_norm_type_inferred_from_text() {
        let c = classify_document(&doc("RESOLUCIÓN MINISTERIAL N° 055/2023"));
        assert_eq!(c.norm_type.as_deref(), Some("resolucion_ministerial"));
        assert_eq!(c.normative_rank, 5);
    }

    #[test]
    fn test_unknown_norm_type_gets_sentinel_rank() {
        let c = classify_document(&doc("Informe técnico sin tipo."));
        assert_eq!(c.norm_type, None);
        assert_eq!(c.normative_rank, UNKNOWN_NORMATIVE_RANK);
    }

    #[test]
    fn test_textual_date() {
        let c = classify_document(&doc("LEY DE 15 DE MAYO DE 2024"));
        assert_eq!(
            c.promulgation_date,
            NaiveDate::from_ymd_opt(2024, 5, 15)
        );
    }

    #[test]
    fn test_numeric_and_iso_dates() {
        assert_eq!(
            extract_date("Promulgada el 03/01/2020."),
            NaiveDate::from_ymd_opt(2020, 1, 3)
        );
        assert_eq!(
            extract_date("Fecha: 2019-12-31."),
            NaiveDate::from_ymd_opt(2019, 12, 31)
        );
    }

    #[test]
    fn test_invalid_date_not_guessed() {
        assert_eq!(extract_date("El 31 de febrero de 2024."), None);
        assert_eq!(extract_date("Sin fecha alguna."), None);
    }

    #[test]
    fn test_modifies_extraction() {
        let c = classify_document(&doc("La presente norma modifica la Ley 843."));
        assert_eq!(c.modifies, vec!["843"]);
    }

    #[test]
    fn test_repeals_extraction() {
        let c = classify_document(&doc("Abrógase el Decreto Supremo N° 21060."));
        assert_eq!(c.repeals, vec!["21060"]);
    }

    #[test]
    fn test_references_deduplicated() {
        let text = "Modifica la Ley 843. Asimismo modifica la Ley 843 y modifica la Ley 1606.";
        let c = classify_document(&doc(text));
        assert_eq!(c.modifies, vec!["843", "1606"]);
    }

    #[test]
    fn test_validity_repealed_when_self_referenced() {
        let text = "Ley N° 100. Se abroga la Ley N° 100 en su integridad.";
        let c = classify_document(&doc(text));
        assert_eq!(c.validity_state, ValidityState::Repealed);
    }

    #[test]
    fn test_validity_defaults_to_active() {
        let c = classify_document(&doc("Ley N° 200 sin cláusulas de abrogación."));
        assert_eq!(c.validity_state, ValidityState::Active);
    }

    #[test]
    fn test_issuing_entity() {
        let c = classify_document(&doc(
            "La Asamblea Legislativa Plurinacional ha sancionado la siguiente ley.",
        ));
        assert_eq!(
            c.issuing_entity.as_deref(),
            Some("Asamblea Legislativa Plurinacional")
        );
    }

    #[test]
    fn test_areas_top_ranked() {
        let text = "El impuesto grava al contribuyente. El trabajador recibe su salario.";
        let c = classify_document(&doc(text));
        assert!(c.areas.len() <= TOP_AREA_COUNT);
        assert_eq!(c.primary_area.as_deref(), Some("tributario"));
    }

    #[test]
    fn test_area_cap_on_repeated_keyword() {
        // 20 repetitions of one tax phrase must not inflate beyond the cap
        let text = "Impuesto al Valor Agregado. ".repeat(20);
        let c = classify_document(&doc(&text));
        assert_eq!(c.primary_area.as_deref(), Some("tributario"));
    }

    #[test]
    fn test_no_areas_leaves_primary_none() {
        let c = classify_document(&doc("Texto neutro."));
        assert!(c.areas.is_empty());
        assert_eq!(c.primary_area, None);
    }

    #[test]
    fn test_source_extension_judicial_action() {
        let d = doc("Dentro de la acción de amparo constitucional interpuesta por...")
            .with_source_hint("tcp");
        let c = classify_document(&d);
        assert_eq!(
            c.extra.get("judicial_action").map(String::as_str),
            Some("amparo constitucional")
        );
    }

    #[test]
    fn test_source_extension_regulated_entity() {
        let d = doc("Aplicable a toda entidad de intermediación financiera del país.")
            .with_source_hint("asfi");
        let c = classify_document(&d);
        assert_eq!(
            c.extra.get("regulated_entity").map(String::as_str),
            Some("entidad de intermediacion financiera")
        );
    }

    #[test]
    fn test_unknown_source_hint_no_extras() {
        let d = doc("acción de amparo constitucional").with_source_hint("gaceta");
        let c = classify_document(&d);
        assert!(c.extra.is_empty());
    }

    #[test]
    fn test_statistics() {
        let c = classify_document(&doc("uno dos tres"));
        assert_eq!(c.statistics.words, 3);
        assert_eq!(c.statistics.chars, 12);
        assert_eq!(c.statistics.pages, 1);
    }

    #[test]
    fn test_statistics_page_estimate() {
        let text = "a".repeat(9500);
        let c = classify_document(&doc(&text));
        assert_eq!(c.statistics.pages, 3);
    }

    #[test]
    fn test_empty_text_all_defaults() {
        let c = classify_document(&doc(""));
        assert_eq!(c.norm_number, None);
        assert_eq!(c.norm_type, None);
        assert_eq!(c.normative_rank, UNKNOWN_NORMATIVE_RANK);
        assert_eq!(c.promulgation_date, None);
        assert!(c.areas.is_empty());
        assert!(c.modifies.is_empty());
        assert_eq!(c.validity_state, ValidityState::Active);
        assert_eq!(c.statistics.pages, 1);
    }
}
