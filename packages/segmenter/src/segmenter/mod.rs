//! Segmentation strategies.
//!
//! All three segmenters share the same single-pass shape: scan lines left
//! to right, open a unit when a header pattern fires, append everything
//! else as content to the currently open unit, and always flush the last
//! open unit before returning. They differ only in which pattern table
//! they consult and how much hierarchy context they track.

mod resolution;
mod ruling;
mod statute;

pub use resolution::segment_resolution;
pub use ruling::segment_ruling;
pub use statute::segment_statute;

use crate::types::{Unit, UnitType};

/// A unit being accumulated during the scan.
#[derive(Debug)]
pub(crate) struct OpenUnit {
    unit_type: UnitType,
    number: Option<String>,
    heading: Option<String>,
    parent_article_number: Option<String>,
    parent_paragraph_number: Option<String>,
    parent_unit_id: Option<String>,
    lines: Vec<String>,
}

impl OpenUnit {
    pub(crate) fn new(unit_type: UnitType) -> Self {
        Self {
            unit_type,
            number: None,
            heading: None,
            parent_article_number: None,
            parent_paragraph_number: None,
            parent_unit_id: None,
            lines: Vec::new(),
        }
    }

    pub(crate) fn with_number(mut self, number: Option<String>) -> Self {
        self.number = number;
        self
    }

    pub(crate) fn with_heading(mut self, heading: Option<String>) -> Self {
        self.heading = heading;
        self
    }

    pub(crate) fn with_parents(
        mut self,
        article: Option<String>,
        paragraph: Option<String>,
    ) -> Self {
        self.parent_article_number = article;
        self.parent_paragraph_number = paragraph;
        self
    }

    pub(crate) fn with_parent_unit(mut self, parent_unit_id: Option<String>) -> Self {
        self.parent_unit_id = parent_unit_id;
        self
    }

    /// Append a content line, trimmed. Blank lines are preserved as
    /// paragraph breaks but never lead a unit.
    pub(crate) fn push_line(&mut self, line: &str) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            if !self.lines.is_empty() {
                self.lines.push(String::new());
            }
        } else {
            self.lines.push(trimmed.to_string());
        }
    }

    /// Close the unit: join content, compute the id, stamp the sequence
    /// index and depth.
    pub(crate) fn into_unit(mut self, document_id: &str, sequence_index: usize) -> Unit {
        while self.lines.last().is_some_and(String::is_empty) {
            self.lines.pop();
        }
        let content = self.lines.join("\n");
        let id = Unit::build_id(document_id, self.unit_type, self.number.as_deref(), &content);

        Unit {
            id,
            unit_type: self.unit_type,
            number: self.number,
            heading: self.heading,
            content,
            parent_article_number: self.parent_article_number,
            parent_paragraph_number: self.parent_paragraph_number,
            parent_unit_id: self.parent_unit_id,
            sequence_index,
            depth: self.unit_type.depth(),
            keywords: Vec::new(),
            area: None,
        }
    }
}

/// Flush the open unit (if any) onto the output list.
pub(crate) fn flush(units: &mut Vec<Unit>, open: Option<OpenUnit>, document_id: &str) {
    if let Some(open) = open {
        let sequence_index = units.len() + 1;
        units.push(open.into_unit(document_id, sequence_index));
    }
}

/// Fallback when a segmenter produced nothing: one `whole_document` unit
/// carrying the full text, so no content is ever silently dropped.
pub(crate) fn whole_document_fallback(document_id: &str, text: &str) -> Vec<Unit> {
    let mut open = OpenUnit::new(UnitType::WholeDocument);
    for line in text.lines() {
        open.push_line(line);
    }
    vec![open.into_unit(document_id, 1)]
}
