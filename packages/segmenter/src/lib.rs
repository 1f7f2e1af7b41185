//! Gaceta Segmenter - Segment and classify Bolivian legal texts.
//!
//! This crate turns a flat legal text (statute, constitutional ruling, or
//! administrative resolution) into an ordered tree of typed units and a
//! document-level legal classification.
//!
//! # Example
//!
//! ```
//! use gaceta_segmenter::orchestrator::segment_and_classify;
//! use gaceta_segmenter::types::SourceDocument;
//!
//! let doc = SourceDocument::new("ley_1670", "ARTÍCULO 1.- (OBJETO) Texto.")
//!     .with_declared_type("Ley");
//! let result = segment_and_classify(&doc);
//! assert!(!result.units.is_empty());
//! ```
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`config`]: Tuning constants and validation
//! - [`types`]: Core data types (Unit, SourceDocument, DocumentClassification)
//! - [`error`]: Error types and Result alias
//! - [`text`]: Diacritic folding and text helpers
//! - [`taxonomy`]: Legal-area keyword tables and the normative-rank ladder
//! - [`patterns`]: Ordered header-matching dispatch tables
//! - [`strategy`]: Segmentation strategy selection
//! - [`segmenter`]: Statute, ruling, and resolution segmenters
//! - [`classify`]: Keyword extraction and area scoring
//! - [`metadata`]: Document-level metadata extraction
//! - [`orchestrator`]: Public entry point
//! - [`cli`]: Command-line interface

pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod metadata;
pub mod orchestrator;
pub mod patterns;
pub mod segmenter;
pub mod strategy;
pub mod taxonomy;
pub mod text;
pub mod types;

// Re-export main entry point
pub use orchestrator::segment_and_classify;

// Re-export commonly used items
pub use config::validate_document_id;
pub use error::{Result, SegmenterError};
pub use types::{
    DocumentClassification, SegmentationResult, SourceDocument, Unit, UnitType, ValidityState,
};
