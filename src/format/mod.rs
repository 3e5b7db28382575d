// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pensum-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pensum and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Import/export boundary.
//!
//! Imports are all-or-nothing: a document either parses into a fresh graph
//! value or the caller keeps its previous graph untouched. A structured JSON
//! document replaces the whole graph; a tabular document replaces only the
//! facet it carries (semesters or links), merging with the current graph.

use std::fmt;

pub mod csv;
pub mod json;

pub use csv::{parse_document, parse_rows, TabularDocument};
pub use json::{export_graph, parse_graph};

use crate::model::{Graph, IdError};

/// How a raw import document should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    Json,
    Csv,
}

impl ImportFormat {
    /// Detection by file name, as the original file picker did: `.json`
    /// (case-insensitive) means structured, anything else is tabular.
    pub fn detect(file_name: &str) -> Self {
        let is_json = file_name
            .rsplit('.')
            .next()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::Json
        } else {
            Self::Csv
        }
    }
}

#[derive(Debug)]
pub enum ImportError {
    Json { source: serde_json::Error },
    EmptyDocument,
    UnrecognizedHeader { header: Vec<String> },
    InvalidCourseId { value: String, source: IdError },
    InvalidSemesterKey { value: String, source: IdError },
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json { source } => write!(f, "invalid graph document: {source}"),
            Self::EmptyDocument => f.write_str("document contains no rows"),
            Self::UnrecognizedHeader { header } => {
                write!(
                    f,
                    "unrecognized header '{}': expected semester,id,title[,credits] or from,to[,type]",
                    header.join(",")
                )
            }
            Self::InvalidCourseId { value, source } => {
                write!(f, "invalid course id '{value}': {source}")
            }
            Self::InvalidSemesterKey { value, source } => {
                write!(f, "invalid semester key '{value}': {source}")
            }
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json { source } => Some(source),
            Self::InvalidCourseId { source, .. } | Self::InvalidSemesterKey { source, .. } => {
                Some(source)
            }
            Self::EmptyDocument | Self::UnrecognizedHeader { .. } => None,
        }
    }
}

#[derive(Debug)]
pub enum ExportError {
    Json { source: serde_json::Error },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json { source } => write!(f, "failed to serialize graph: {source}"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json { source } => Some(source),
        }
    }
}

/// Parses `text` and merges it with `current`, returning a fresh graph.
/// `current` is never mutated.
pub fn import_document(
    current: &Graph,
    text: &str,
    format: ImportFormat,
) -> Result<Graph, ImportError> {
    let merged = match format {
        ImportFormat::Json => parse_graph(text)?,
        ImportFormat::Csv => match parse_document(text)? {
            TabularDocument::Semesters(semesters) => {
                Graph::new(semesters, current.links().to_vec())
            }
            TabularDocument::Links(links) => Graph::new(current.semesters().to_vec(), links),
        },
    };

    let dangling = merged
        .links()
        .iter()
        .filter(|link| !merged.contains_course(link.from()) || !merged.contains_course(link.to()))
        .count();
    if dangling > 0 {
        // Tolerated: such links are skipped at render time.
        tracing::warn!(dangling, "imported graph has links to unknown courses");
    }

    Ok(merged)
}
