//! Pattern Library: ordered header-matching dispatch tables.
//!
//! Each structural concept has 2-4 alternative surface forms (punctuation,
//! abbreviations, diacritics) tried in order; the first match wins and
//! provides the `num`/`head`/`rest` capture groups. Patterns are data, not
//! code: adding a surface form means adding a regex literal, not control
//! flow.
//!
//! Diacritics are matched explicitly (`[ií]`, `[aá]`, ...) because OCR
//! output drops accents inconsistently; `(?i)` handles case.

use regex::Regex;
use std::sync::LazyLock;

use crate::types::UnitType;

/// Result of matching a line against a header table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMatch {
    /// Which unit the header opens.
    pub unit_type: UnitType,

    /// Number label as captured (arabic, roman, letter, or ordinal word).
    pub number: Option<String>,

    /// Short caption, e.g. "OBJETO" from "(OBJETO)".
    pub heading: Option<String>,

    /// Inline content trailing the header on the same line.
    pub rest: Option<String>,
}

/// One concept in a dispatch table: unit type plus its surface forms.
struct HeaderPattern {
    unit_type: UnitType,
    forms: Vec<Regex>,
}

#[allow(clippy::expect_used)] // Static regexes that are guaranteed to be valid
fn rx(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid regex")
}

/// Statute header table, in match-priority order: structural headers,
/// closing dispositions, articles, paragraphs, sub-items, numbered items.
static STATUTE_PATTERNS: LazyLock<Vec<HeaderPattern>> = LazyLock::new(|| {
    vec![
        HeaderPattern {
            unit_type: UnitType::Title,
            forms: vec![
                rx(r"(?i)^t[ií]tulo\s+(?P<num>[ivxlcdm]+|\d+|preliminar|[uú]nico)\b\s*[.:\-–]*\s*(?P<head>.*)$"),
            ],
        },
        HeaderPattern {
            unit_type: UnitType::Chapter,
            forms: vec![
                rx(r"(?i)^cap[ií]tulo\s+(?P<num>[ivxlcdm]+|\d+|[uú]nico)\b\s*[.:\-–]*\s*(?P<head>.*)$"),
            ],
        },
        HeaderPattern {
            unit_type: UnitType::Section,
            forms: vec![
                rx(r"(?i)^secci[oó]n\s+(?P<num>[ivxlcdm]+|\d+|[uú]nica)\b\s*[.:\-–]*\s*(?P<head>.*)$"),
            ],
        },
        HeaderPattern {
            unit_type: UnitType::Disposition,
            forms: vec![
                rx(r"(?i)^disposici[oó]n(?:es)?\s+(?P<head>final(?:es)?|transitoria(?:s)?|adicional(?:es)?|abrogatoria(?:s)?(?:\s+y\s+derogatoria(?:s)?)?|derogatoria(?:s)?)\b\s*(?P<num>[ivxlcdm]+|\d+|primera|segunda|tercera|cuarta|quinta|sexta|s[eé]ptima|octava|novena|d[eé]cima|[uú]nica)?\s*[.:\-–]*\s*(?P<rest>.*)$"),
            ],
        },
        HeaderPattern {
            unit_type: UnitType::Article,
            forms: vec![
                rx(r"(?i)^art[ií]culo\s+(?P<num>\d+[a-z]*(?:\s(?:bis|ter|quater))?|[uú]nico)\s*[º°]?\s*[.:\-–]*\s*(?:\((?P<head>[^)]*)\)\s*[.:\-–]*\s*)?(?P<rest>.*)$"),
                rx(r"(?i)^art\.?\s*(?P<num>\d+[a-z]*)\s*[º°]?\s*[.:\-–]+\s*(?:\((?P<head>[^)]*)\)\s*[.:\-–]*\s*)?(?P<rest>.*)$"),
            ],
        },
        HeaderPattern {
            unit_type: UnitType::Paragraph,
            forms: vec![
                rx(r"(?i)^par[aá]grafo\s+(?P<num>[ivxlcdm]+|\d+|[uú]nico)\b\s*[.:\-–]*\s*(?P<rest>.*)$"),
                rx(r"(?i)^p[aá]rrafo\s+(?P<num>[ivxlcdm]+|\d+)\b\s*[.:\-–]*\s*(?P<rest>.*)$"),
            ],
        },
        HeaderPattern {
            unit_type: UnitType::Subitem,
            forms: vec![
                rx(r"^(?P<num>[a-z])\)\s*(?P<rest>.*)$"),
                rx(r"^\((?P<num>[a-z0-9]{1,3})\)\s*(?P<rest>.*)$"),
            ],
        },
        HeaderPattern {
            unit_type: UnitType::NumberedItem,
            forms: vec![
                rx(r"^(?P<num>\d{1,2})[º°]\.?\s*(?P<rest>.*)$"),
                rx(r"^(?P<num>\d{1,2})\)\s+(?P<rest>.*)$"),
                rx(r"^(?P<num>\d{1,2})\.\-\s*(?P<rest>.*)$"),
            ],
        },
    ]
});

/// Ruling section header table; flat, no numbering.
static RULING_PATTERNS: LazyLock<Vec<HeaderPattern>> = LazyLock::new(|| {
    vec![
        HeaderPattern {
            unit_type: UnitType::Recitals,
            forms: vec![rx(r"(?i)^vistos\b\s*[,:;.\-–]*\s*(?P<rest>.*)$")],
        },
        HeaderPattern {
            unit_type: UnitType::Background,
            forms: vec![
                rx(r"(?i)^resultando\b\s*[,:;.\-–]*\s*(?P<rest>.*)$"),
                rx(r"(?i)^antecedentes\b\s*(?:con\s+relevancia\s+jur[ií]dica)?\s*[,:;.\-–]*\s*(?P<rest>.*)$"),
            ],
        },
        HeaderPattern {
            unit_type: UnitType::Analysis,
            forms: vec![rx(r"(?i)^considerando\b\s*[,:;.\-–]*\s*(?P<rest>.*)$")],
        },
        HeaderPattern {
            unit_type: UnitType::Grounds,
            forms: vec![
                rx(r"(?i)^fundamentos\s+jur[ií]dicos(?:\s+del\s+fallo)?\b\s*[,:;.\-–]*\s*(?P<rest>.*)$"),
                rx(r"(?i)^fundamentos\b\s*[,:;.\-–]*\s*(?P<rest>.*)$"),
            ],
        },
        HeaderPattern {
            unit_type: UnitType::Holding,
            forms: vec![
                rx(r"(?i)^por\s+tanto\b\s*[,:;.\-–]*\s*(?P<rest>.*)$"),
                rx(r"(?i)^(?:se\s+)?resuelve\b\s*[,:;.\-–]*\s*(?P<rest>.*)$"),
                rx(r"(?i)^falla\b\s*[,:;.\-–]*\s*(?P<rest>.*)$"),
            ],
        },
    ]
});

/// Resolution header table: repeated recitals plus one operative header.
static RESOLUTION_PATTERNS: LazyLock<Vec<HeaderPattern>> = LazyLock::new(|| {
    vec![
        HeaderPattern {
            unit_type: UnitType::Recital,
            forms: vec![rx(r"(?i)^considerando\b\s*[,:;.\-–]*\s*(?P<rest>.*)$")],
        },
        HeaderPattern {
            unit_type: UnitType::Operative,
            forms: vec![
                rx(r"(?i)^(?:se\s+)?resuelve\b\s*[,:;.\-–]*\s*(?P<rest>.*)$"),
                rx(r"(?i)^parte\s+resolutiva\b\s*[,:;.\-–]*\s*(?P<rest>.*)$"),
            ],
        },
    ]
});

fn capture(name: &str, caps: &regex::Captures<'_>) -> Option<String> {
    caps.name(name)
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
}

fn try_table(table: &[HeaderPattern], line: &str) -> Option<HeaderMatch> {
    for pattern in table {
        for form in &pattern.forms {
            if let Some(caps) = form.captures(line) {
                return Some(HeaderMatch {
                    unit_type: pattern.unit_type,
                    number: capture("num", &caps),
                    heading: capture("head", &caps),
                    rest: capture("rest", &caps),
                });
            }
        }
    }
    None
}

/// Match a line against the statute header table.
#[must_use]
pub fn match_statute_header(line: &str) -> Option<HeaderMatch> {
    try_table(&STATUTE_PATTERNS, line)
}

/// Match a line against the article patterns only.
///
/// Used by the resolution segmenter to recognize articles enumerated
/// inside the operative section, without paragraph/sub-item patterns.
#[must_use]
pub fn match_article_header(line: &str) -> Option<HeaderMatch> {
    STATUTE_PATTERNS
        .iter()
        .filter(|p| p.unit_type == UnitType::Article)
        .find_map(|p| {
            p.forms.iter().find_map(|form| {
                form.captures(line).map(|caps| HeaderMatch {
                    unit_type: UnitType::Article,
                    number: capture("num", &caps),
                    heading: capture("head", &caps),
                    rest: capture("rest", &caps),
                })
            })
        })
}

/// Match a line against the ruling section header table.
#[must_use]
pub fn match_ruling_header(line: &str) -> Option<HeaderMatch> {
    try_table(&RULING_PATTERNS, line)
}

/// Match a line against the resolution header table.
#[must_use]
pub fn match_resolution_header(line: &str) -> Option<HeaderMatch> {
    try_table(&RESOLUTION_PATTERNS, line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_article_with_heading() {
        let m = match_statute_header("ARTÍCULO 1.- (OBJETO)").unwrap();
        assert_eq!(m.unit_type, UnitType::Article);
        assert_eq!(m.number.as_deref(), Some("1"));
        assert_eq!(m.heading.as_deref(), Some("OBJETO"));
        assert_eq!(m.rest, None);
    }

    #[test]
    fn test_article_without_diacritics() {
        let m = match_statute_header("ARTICULO 25.- Texto inmediato.").unwrap();
        assert_eq!(m.unit_type, UnitType::Article);
        assert_eq!(m.number.as_deref(), Some("25"));
        assert_eq!(m.rest.as_deref(), Some("Texto inmediato."));
    }

    #[test]
    fn test_article_abbreviated() {
        let m = match_statute_header("Art. 7.- De los plazos.").unwrap();
        assert_eq!(m.unit_type, UnitType::Article);
        assert_eq!(m.number.as_deref(), Some("7"));
    }

    #[test]
    fn test_article_unico() {
        let m = match_statute_header("ARTÍCULO ÚNICO.- Apruébase el reglamento.").unwrap();
        assert_eq!(m.unit_type, UnitType::Article);
        assert_eq!(m.number.as_deref(), Some("ÚNICO"));
    }

    #[test]
    fn test_article_with_letter_suffix() {
        let m = match_statute_header("ARTÍCULO 16a.-").unwrap();
        assert_eq!(m.number.as_deref(), Some("16a"));
    }

    #[test]
    fn test_paragraph_roman() {
        let m = match_statute_header("PARÁGRAFO I.- Detalle.").unwrap();
        assert_eq!(m.unit_type, UnitType::Paragraph);
        assert_eq!(m.number.as_deref(), Some("I"));
        assert_eq!(m.rest.as_deref(), Some("Detalle."));
    }

    #[test]
    fn test_paragraph_unaccented() {
        let m = match_statute_header("PARAGRAFO II. Texto.").unwrap();
        assert_eq!(m.unit_type, UnitType::Paragraph);
        assert_eq!(m.number.as_deref(), Some("II"));
    }

    #[test]
    fn test_title_chapter_section() {
        let m = match_statute_header("TÍTULO I").unwrap();
        assert_eq!(m.unit_type, UnitType::Title);
        assert_eq!(m.number.as_deref(), Some("I"));

        let m = match_statute_header("CAPITULO II DEL HECHO GENERADOR").unwrap();
        assert_eq!(m.unit_type, UnitType::Chapter);
        assert_eq!(m.number.as_deref(), Some("II"));
        assert_eq!(m.heading.as_deref(), Some("DEL HECHO GENERADOR"));

        let m = match_statute_header("SECCIÓN ÚNICA").unwrap();
        assert_eq!(m.unit_type, UnitType::Section);
    }

    #[test]
    fn test_disposition() {
        let m = match_statute_header("DISPOSICIONES TRANSITORIAS").unwrap();
        assert_eq!(m.unit_type, UnitType::Disposition);
        assert_eq!(m.heading.as_deref(), Some("TRANSITORIAS"));

        let m = match_statute_header("DISPOSICIÓN FINAL PRIMERA.- Queda encargado.").unwrap();
        assert_eq!(m.unit_type, UnitType::Disposition);
        assert_eq!(m.number.as_deref(), Some("PRIMERA"));
    }

    #[test]
    fn test_subitem_forms() {
        let m = match_statute_header("a) Primer punto.").unwrap();
        assert_eq!(m.unit_type, UnitType::Subitem);
        assert_eq!(m.number.as_deref(), Some("a"));
        assert_eq!(m.rest.as_deref(), Some("Primer punto."));

        let m = match_statute_header("(b) Segundo punto.").unwrap();
        assert_eq!(m.unit_type, UnitType::Subitem);
        assert_eq!(m.number.as_deref(), Some("b"));
    }

    #[test]
    fn test_numbered_item_forms() {
        let m = match_statute_header("1° Primer numeral.").unwrap();
        assert_eq!(m.unit_type, UnitType::NumberedItem);
        assert_eq!(m.number.as_deref(), Some("1"));

        let m = match_statute_header("2) Segundo numeral.").unwrap();
        assert_eq!(m.unit_type, UnitType::NumberedItem);

        let m = match_statute_header("3.- Tercer numeral.").unwrap();
        assert_eq!(m.unit_type, UnitType::NumberedItem);
        assert_eq!(m.number.as_deref(), Some("3"));
    }

    #[test]
    fn test_plain_text_no_match() {
        assert!(match_statute_header("El presente reglamento rige desde su publicación.").is_none());
        assert!(match_statute_header("").is_none());
    }

    #[test]
    fn test_structural_beats_article_priority() {
        // "TÍTULO" before "ARTÍCULO" in the table; a title line never
        // falls through to lower-priority patterns
        let m = match_statute_header("TITULO II REGIMEN COMPLEMENTARIO").unwrap();
        assert_eq!(m.unit_type, UnitType::Title);
    }

    #[test]
    fn test_ruling_headers() {
        assert_eq!(
            match_ruling_header("VISTOS:").unwrap().unit_type,
            UnitType::Recitals
        );
        assert_eq!(
            match_ruling_header("ANTECEDENTES CON RELEVANCIA JURÍDICA").unwrap().unit_type,
            UnitType::Background
        );
        assert_eq!(
            match_ruling_header("CONSIDERANDO:").unwrap().unit_type,
            UnitType::Analysis
        );
        assert_eq!(
            match_ruling_header("FUNDAMENTOS JURÍDICOS DEL FALLO").unwrap().unit_type,
            UnitType::Grounds
        );
        assert_eq!(
            match_ruling_header("POR TANTO:").unwrap().unit_type,
            UnitType::Holding
        );
        assert_eq!(
            match_ruling_header("FALLA:").unwrap().unit_type,
            UnitType::Holding
        );
    }

    #[test]
    fn test_ruling_header_rest() {
        let m = match_ruling_header("VISTOS: el expediente remitido.").unwrap();
        assert_eq!(m.rest.as_deref(), Some("el expediente remitido."));
    }

    #[test]
    fn test_resolution_headers() {
        assert_eq!(
            match_resolution_header("CONSIDERANDO:").unwrap().unit_type,
            UnitType::Recital
        );
        assert_eq!(
            match_resolution_header("SE RESUELVE:").unwrap().unit_type,
            UnitType::Operative
        );
        assert_eq!(
            match_resolution_header("RESUELVE:").unwrap().unit_type,
            UnitType::Operative
        );
    }

    #[test]
    fn test_match_article_header_only() {
        assert!(match_article_header("ARTÍCULO 1.- Texto.").is_some());
        // Paragraph and sub-item patterns are not part of this table
        assert!(match_article_header("PARÁGRAFO I.-").is_none());
        assert!(match_article_header("a) punto").is_none());
    }
}
