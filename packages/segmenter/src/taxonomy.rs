//! Static legal-domain taxonomy tables.
//!
//! Three data sets, no logic beyond lookups:
//!
//! - legal-area keyword lists used for area scoring,
//! - the norm-type table with its normative-rank ladder,
//! - legal-term dictionaries used for keyword extraction.
//!
//! All table entries are stored folded (lowercase, no diacritics) and are
//! matched against folded text, see [`crate::text::fold`].

use serde::{Deserialize, Serialize};

use crate::config::UNKNOWN_NORMATIVE_RANK;

/// One label from the fixed legal-area taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegalArea {
    Constitutional,
    Tax,
    Labor,
    Criminal,
    Civil,
    Commercial,
    Administrative,
    Environmental,
    Health,
    Education,
    Electoral,
    Financial,
    Agrarian,
    Family,
    SocialSecurity,
    /// Sentinel for texts no area keyword matches.
    Other,
}

impl LegalArea {
    /// Get the string label for serialized output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Constitutional => "constitucional",
            Self::Tax => "tributario",
            Self::Labor => "laboral",
            Self::Criminal => "penal",
            Self::Civil => "civil",
            Self::Commercial => "comercial",
            Self::Administrative => "administrativo",
            Self::Environmental => "ambiental",
            Self::Health => "salud",
            Self::Education => "educacion",
            Self::Electoral => "electoral",
            Self::Financial => "financiero",
            Self::Agrarian => "agrario",
            Self::Family => "familiar",
            Self::SocialSecurity => "seguridad_social",
            Self::Other => "otro",
        }
    }
}

/// Keyword lists per legal area, folded form.
///
/// The `Other` sentinel has no keywords: it is assigned, never scored.
pub const AREA_KEYWORDS: &[(LegalArea, &[&str])] = &[
    (
        LegalArea::Constitutional,
        &[
            "constitucion politica del estado",
            "derechos fundamentales",
            "garantias constitucionales",
            "accion de amparo",
            "accion de inconstitucionalidad",
            "tribunal constitucional",
            "habeas corpus",
            "supremacia constitucional",
        ],
    ),
    (
        LegalArea::Tax,
        &[
            "impuesto",
            "impuesto al valor agregado",
            "tributo",
            "tributario",
            "contribuyente",
            "alicuota",
            "hecho generador",
            "servicio de impuestos nacionales",
            "gravamen arancelario",
            "regimen aduanero",
        ],
    ),
    (
        LegalArea::Labor,
        &[
            "trabajador",
            "empleador",
            "salario",
            "contrato de trabajo",
            "jornada laboral",
            "sindicato",
            "beneficios sociales",
            "despido",
            "ley general del trabajo",
            "indemnizacion laboral",
        ],
    ),
    (
        LegalArea::Criminal,
        &[
            "delito",
            "pena privativa de libertad",
            "imputado",
            "ministerio publico",
            "codigo penal",
            "sancion penal",
            "proceso penal",
            "reclusion",
            "presidio",
        ],
    ),
    (
        LegalArea::Civil,
        &[
            "codigo civil",
            "propiedad",
            "usucapion",
            "obligaciones contractuales",
            "herencia",
            "sucesion",
            "prescripcion",
            "responsabilidad civil",
        ],
    ),
    (
        LegalArea::Commercial,
        &[
            "sociedad comercial",
            "codigo de comercio",
            "registro de comercio",
            "quiebra",
            "titulo valor",
            "empresa",
            "comerciante",
        ],
    ),
    (
        LegalArea::Administrative,
        &[
            "servidor publico",
            "administracion publica",
            "procedimiento administrativo",
            "contratacion estatal",
            "licitacion publica",
            "funcion publica",
            "silencio administrativo",
        ],
    ),
    (
        LegalArea::Environmental,
        &[
            "medio ambiente",
            "recursos naturales",
            "licencia ambiental",
            "areas protegidas",
            "contaminacion",
            "evaluacion de impacto ambiental",
            "madre tierra",
        ],
    ),
    (
        LegalArea::Health,
        &[
            "salud publica",
            "establecimiento de salud",
            "medicamento",
            "seguro de salud",
            "epidemia",
            "vigilancia epidemiologica",
        ],
    ),
    (
        LegalArea::Education,
        &[
            "educacion",
            "unidad educativa",
            "universidad",
            "docente",
            "curricula",
            "titulo profesional",
        ],
    ),
    (
        LegalArea::Electoral,
        &[
            "organo electoral",
            "eleccion",
            "sufragio",
            "padron electoral",
            "candidatura",
            "referendo",
            "voto",
        ],
    ),
    (
        LegalArea::Financial,
        &[
            "entidad financiera",
            "banco",
            "intermediacion financiera",
            "seguro",
            "valores",
            "credito",
            "tasa de interes",
            "autoridad de supervision del sistema financiero",
        ],
    ),
    (
        LegalArea::Agrarian,
        &[
            "tierra",
            "reforma agraria",
            "propiedad agraria",
            "saneamiento de tierras",
            "instituto nacional de reforma agraria",
            "comunidad campesina",
        ],
    ),
    (
        LegalArea::Family,
        &[
            "matrimonio",
            "divorcio",
            "asistencia familiar",
            "patria potestad",
            "union libre",
            "filiacion",
            "adopcion",
        ],
    ),
    (
        LegalArea::SocialSecurity,
        &[
            "seguridad social",
            "pension",
            "jubilacion",
            "aporte",
            "gestora publica",
            "renta de vejez",
            "caja de salud",
        ],
    ),
];

/// A norm type with its position on the normative-rank ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormType {
    /// Canonical label, e.g. "decreto_supremo".
    pub label: &'static str,

    /// Rank; lower is higher authority.
    pub rank: u8,

    /// Folded keyword forms that identify the type.
    pub keywords: &'static [&'static str],
}

/// Norm types in match-priority order: specific forms before generic ones,
/// so "resolucion suprema" is tried before bare "resolucion" and
/// "sentencia constitucional" before "constitucion".
pub const NORM_TYPES: &[NormType] = &[
    NormType {
        label: "sentencia_constitucional",
        rank: 7,
        keywords: &[
            "sentencia constitucional plurinacional",
            "sentencia constitucional",
            "sentencia",
        ],
    },
    NormType {
        label: "declaracion_constitucional",
        rank: 8,
        keywords: &["declaracion constitucional"],
    },
    NormType {
        label: "auto_constitucional",
        rank: 9,
        keywords: &["auto constitucional"],
    },
    NormType {
        label: "constitucion",
        rank: 1,
        keywords: &["constitucion politica del estado", "constitucion"],
    },
    NormType {
        label: "decreto_supremo",
        rank: 3,
        keywords: &["decreto supremo", "d.s."],
    },
    NormType {
        label: "resolucion_suprema",
        rank: 4,
        keywords: &["resolucion suprema"],
    },
    NormType {
        label: "resolucion_ministerial",
        rank: 5,
        keywords: &["resolucion ministerial"],
    },
    NormType {
        label: "resolucion_administrativa",
        rank: 6,
        keywords: &["resolucion administrativa"],
    },
    NormType {
        label: "ordenanza_municipal",
        rank: 10,
        keywords: &["ordenanza municipal", "ley municipal"],
    },
    NormType {
        label: "circular",
        rank: 11,
        keywords: &["circular"],
    },
    NormType {
        label: "resolucion",
        rank: 12,
        keywords: &["resolucion", "resolution"],
    },
    NormType {
        label: "ley",
        rank: 2,
        keywords: &["ley", "law"],
    },
];

/// Domain-context nouns for keyword extraction, folded form.
pub const DOMAIN_TERMS: &[&str] = &[
    "impuesto",
    "tributo",
    "contribuyente",
    "trabajador",
    "empleador",
    "salario",
    "delito",
    "pena",
    "contrato",
    "obligacion",
    "propiedad",
    "herencia",
    "matrimonio",
    "servidor publico",
    "licitacion",
    "concesion",
    "medio ambiente",
    "recursos naturales",
    "banco",
    "seguro",
    "pension",
    "jubilacion",
    "eleccion",
    "voto",
    "tierra",
    "universidad",
    "medicamento",
];

/// Legal boilerplate verbs and modal terms, folded form.
pub const BOILERPLATE_TERMS: &[&str] = &[
    "debera",
    "podra",
    "queda prohibido",
    "sancion",
    "multa",
    "plazo",
    "responsabilidad",
    "vigencia",
    "abrogase",
    "derogase",
    "reglamento",
    "cumplimiento",
    "notificacion",
    "recurso",
    "competencia",
    "jurisdiccion",
    "procedimiento",
];

/// Check whether `needle` occurs in `haystack` at word boundaries.
///
/// Both inputs are expected in folded form. Boundaries are non-alphanumeric
/// neighbors, so "ley" does not match inside "leyenda".
#[must_use]
pub fn contains_word(haystack: &str, needle: &str) -> bool {
    let mut start = 0;
    while let Some(pos) = haystack[start..].find(needle) {
        let abs = start + pos;
        let before_ok = abs == 0
            || !haystack[..abs]
                .chars()
                .next_back()
                .is_some_and(char::is_alphanumeric);
        let end = abs + needle.len();
        let after_ok = end >= haystack.len()
            || !haystack[end..].chars().next().is_some_and(char::is_alphanumeric);
        if before_ok && after_ok {
            return true;
        }
        start = abs + needle.len().max(1);
    }
    false
}

/// Match a folded text fragment against the norm-type table.
///
/// First type whose keyword occurs at a word boundary wins.
#[must_use]
pub fn norm_type_for(folded: &str) -> Option<&'static NormType> {
    NORM_TYPES
        .iter()
        .find(|nt| nt.keywords.iter().any(|kw| contains_word(folded, kw)))
}

/// Look up the normative rank for a canonical norm-type label.
///
/// Unknown labels resolve to [`UNKNOWN_NORMATIVE_RANK`], never to an
/// absent value, so downstream ordering stays stable.
#[must_use]
pub fn rank_for_label(label: &str) -> u8 {
    NORM_TYPES
        .iter()
        .find(|nt| nt.label == label)
        .map_or(UNKNOWN_NORMATIVE_RANK, |nt| nt.rank)
}
