//! Annotated-dataset I/O.
//!
//! Input is a headerless four-column TSV: `articleID`, `toponym`, `geoID`,
//! `isTitle`. Output is the same table with a `predID` column appended and a
//! header row, which is what downstream consumers of earlier runs expect.

pub mod error;


pub use error::DatasetError;

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// One toponym annotation as read from the input table. Immutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// Opaque identifier of the source article.
    pub article_id: String,
    /// The mention text.
    pub toponym: String,
    /// Ground-truth GeoNames identifier, when annotated.
    pub expected_id: Option<u64>,
    /// Whether the mention occurred in the article title.
    pub is_title: bool,
}

const INPUT_COLUMNS: usize = 4;
const OUTPUT_HEADER: &str = "articleID\ttoponym\tgeoID\tisTitle\tpredID";

/// Reads annotations from a headerless TSV file.
pub fn read_tsv(path: &Path) -> Result<Vec<Annotation>, DatasetError> {
    let file = File::open(path).map_err(|e| DatasetError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut annotations = Vec::new();
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|e| DatasetError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        if line.is_empty() {
            continue;
        }
        annotations.push(parse_row(&line, index + 1)?);
    }

    Ok(annotations)
}

/// Writes annotations plus their predicted identifiers as a TSV with header.
///
/// `predicted` must hold one identifier per annotation, in the same order.
pub fn write_tsv(
    path: &Path,
    annotations: &[Annotation],
    predicted: &[u64],
) -> Result<(), DatasetError> {
    if annotations.len() != predicted.len() {
        return Err(DatasetError::LengthMismatch {
            annotations: annotations.len(),
            predictions: predicted.len(),
        });
    }

    let file = File::create(path).map_err(|e| DatasetError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);

    let write_err = |e| DatasetError::Io {
        path: path.to_path_buf(),
        source: e,
    };

    writeln!(writer, "{OUTPUT_HEADER}").map_err(write_err)?;
    for (annotation, &pred_id) in annotations.iter().zip(predicted) {
        let expected = annotation
            .expected_id
            .map(|id| id.to_string())
            .unwrap_or_default();
        let is_title = if annotation.is_title { "True" } else { "False" };

        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}",
            annotation.article_id, annotation.toponym, expected, is_title, pred_id
        )
        .map_err(write_err)?;
    }

    writer.flush().map_err(write_err)?;
    Ok(())
}

fn parse_row(line: &str, line_number: usize) -> Result<Annotation, DatasetError> {
    let columns: Vec<&str> = line.split('\t').collect();
    if columns.len() != INPUT_COLUMNS {
        return Err(DatasetError::MalformedRow {
            line: line_number,
            reason: format!("expected {INPUT_COLUMNS} columns, got {}", columns.len()),
        });
    }

    let expected_id = match columns[2].trim() {
        "" => None,
        value => Some(value.parse().map_err(|_| DatasetError::MalformedRow {
            line: line_number,
            reason: format!("invalid gazetteer identifier '{value}'"),
        })?),
    };

    let is_title = parse_bool(columns[3].trim()).ok_or_else(|| DatasetError::MalformedRow {
        line: line_number,
        reason: format!("invalid title flag '{}'", columns[3]),
    })?;

    Ok(Annotation {
        article_id: columns[0].trim().to_string(),
        toponym: columns[1].trim().to_string(),
        expected_id,
        is_title,
    })
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "True" | "true" | "TRUE" | "1" => Some(true),
        "False" | "false" | "FALSE" | "0" => Some(false),
        _ => None,
    }
}
