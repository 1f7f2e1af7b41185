//! Command-line interface for the segmenter.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;

use crate::config::validate_document_id;
use crate::error::{Result, SegmenterError};
use crate::orchestrator::segment_and_classify;
use crate::types::SourceDocument;

/// Gaceta Segmenter - Segment and classify Bolivian legal texts.
#[derive(Parser)]
#[command(name = "gaceta-segmenter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Segment a plain-text legal document and emit JSON.
    Segment {
        /// Path to the extracted plain-text document
        input: PathBuf,

        /// Document identifier (default: the input file stem)
        #[arg(short, long)]
        id: Option<String>,

        /// Declared document type (e.g., "Ley", "Sentencia Constitucional")
        #[arg(short = 't', long = "doc-type")]
        doc_type: Option<String>,

        /// Source site identifier (e.g., gaceta, tcp, asfi)
        #[arg(short, long)]
        source: Option<String>,

        /// Document title, used as a metadata fallback
        #[arg(long)]
        title: Option<String>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Segment {
            input,
            id,
            doc_type,
            source,
            title,
            output,
            pretty,
        } => segment_command(
            &input,
            id.as_deref(),
            doc_type.as_deref(),
            source.as_deref(),
            title.as_deref(),
            output.as_deref(),
            pretty,
        ),
    }
}

/// Execute the segment command.
fn segment_command(
    input: &Path,
    id: Option<&str>,
    doc_type: Option<&str>,
    source: Option<&str>,
    title: Option<&str>,
    output: Option<&Path>,
    pretty: bool,
) -> Result<()> {
    // Derive the id from the file stem when not given explicitly
    let document_id = match id {
        Some(id) => id.to_string(),
        None => input
            .file_stem()
            .and_then(|stem| stem.to_str())
            .map(str::to_string)
            .ok_or_else(|| SegmenterError::InvalidDocumentId(input.display().to_string()))?,
    };

    // Validate before touching the filesystem
    validate_document_id(&document_id)?;

    let raw_text = std::fs::read_to_string(input)?;

    let mut doc = SourceDocument::new(&document_id, raw_text);
    if let Some(doc_type) = doc_type {
        doc = doc.with_declared_type(doc_type);
    }
    if let Some(source) = source {
        doc = doc.with_source_hint(source);
    }
    if let Some(title) = title {
        doc = doc.with_title(title);
    }

    let result = segment_and_classify(&doc);

    println!(
        "{} {}",
        style("Segmented").bold(),
        style(&document_id).cyan()
    );
    println!("  Units: {}", result.units.len());
    if let Some(norm_type) = &result.classification.norm_type {
        println!("  Type: {norm_type}");
    }
    if let Some(norm_number) = &result.classification.norm_number {
        println!("  Number: {norm_number}");
    }
    if let Some(area) = &result.classification.primary_area {
        println!("  Area: {}", style(area).green());
    }

    let json = if pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };

    match output {
        Some(path) => {
            std::fs::write(path, json)?;
            println!();
            println!("{} {}", style("Saved to:").green().bold(), path.display());
        }
        None => {
            println!();
            println!("{json}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_segment() {
        let cli = Cli::parse_from(["gaceta-segmenter", "segment", "ley_1670.txt"]);

        let Commands::Segment {
            input, id, pretty, ..
        } = cli.command;
        assert_eq!(input, PathBuf::from("ley_1670.txt"));
        assert!(id.is_none());
        assert!(!pretty);
    }

    #[test]
    fn test_cli_parse_segment_with_options() {
        let cli = Cli::parse_from([
            "gaceta-segmenter",
            "segment",
            "doc.txt",
            "--id",
            "scp_0045_2024",
            "--doc-type",
            "Sentencia Constitucional",
            "--source",
            "tcp",
            "--pretty",
        ]);

        let Commands::Segment {
            id,
            doc_type,
            source,
            pretty,
            ..
        } = cli.command;
        assert_eq!(id, Some("scp_0045_2024".to_string()));
        assert_eq!(doc_type, Some("Sentencia Constitucional".to_string()));
        assert_eq!(source, Some("tcp".to_string()));
        assert!(pretty);
    }
}
