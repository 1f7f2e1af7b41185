//! Hierarchical segmenter for statutes and decrees.
//!
//! Single left-to-right scan over the lines, carrying two pieces of local
//! context: the current article number and the current paragraph number.
//! Header lines open a new unit (flushing the previous one); everything
//! else accumulates as content. Sub-items and numbered items are stamped
//! with the article/paragraph they nest under.

use crate::patterns::{match_statute_header, HeaderMatch};
use crate::segmenter::{flush, whole_document_fallback, OpenUnit};
use crate::types::{Unit, UnitType};

/// Mutable parsing context, local to one scan.
#[derive(Debug, Default)]
struct ScanContext {
    current_article: Option<String>,
    current_paragraph: Option<String>,
}

/// Segment a statute or decree text into an ordered unit list.
///
/// Never fails: text with no recognizable structure yields exactly one
/// `whole_document` unit with the full content.
#[must_use]
pub fn segment_statute(document_id: &str, text: &str) -> Vec<Unit> {
    let mut units: Vec<Unit> = Vec::new();
    let mut open: Option<OpenUnit> = None;
    let mut ctx = ScanContext::default();

    for line in text.lines() {
        let trimmed = line.trim();

        match match_statute_header(trimmed) {
            Some(header) if accepts(&header, &ctx) => {
                flush(&mut units, open.take(), document_id);
                open = Some(open_from_header(header, &mut ctx));
            }
            _ => {
                // Content line; a synthetic leading unit catches text that
                // precedes the first recognized header
                let target = open.get_or_insert_with(|| OpenUnit::new(UnitType::WholeDocument));
                target.push_line(line);
            }
        }
    }

    flush(&mut units, open, document_id);

    if units.is_empty() {
        return whole_document_fallback(document_id, text);
    }
    units
}

/// A paragraph header needs an open article to nest under; without one the
/// line stays plain content.
fn accepts(header: &HeaderMatch, ctx: &ScanContext) -> bool {
    header.unit_type != UnitType::Paragraph || ctx.current_article.is_some()
}

/// Open a unit for a matched header and update the scan context.
fn open_from_header(header: HeaderMatch, ctx: &mut ScanContext) -> OpenUnit {
    let HeaderMatch {
        unit_type,
        number,
        heading,
        rest,
    } = header;

    let mut open = match unit_type {
        UnitType::Title | UnitType::Chapter | UnitType::Section | UnitType::Disposition => {
            // Structural headers do not nest under articles
            ctx.current_article = None;
            ctx.current_paragraph = None;
            OpenUnit::new(unit_type).with_number(number).with_heading(heading)
        }
        UnitType::Article => {
            ctx.current_article = number.clone();
            ctx.current_paragraph = None;
            OpenUnit::new(unit_type).with_number(number).with_heading(heading)
        }
        UnitType::Paragraph => {
            ctx.current_paragraph = number.clone();
            OpenUnit::new(unit_type)
                .with_number(number)
                .with_parents(ctx.current_article.clone(), None)
        }
        // Subitem and NumberedItem read the context without changing it
        _ => OpenUnit::new(unit_type).with_number(number).with_parents(
            ctx.current_article.clone(),
            ctx.current_paragraph.clone(),
        ),
    };

    if let Some(rest) = rest {
        open.push_line(&rest);
    }
    open
}
