// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pensum-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pensum and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Tabular (CSV) graph documents.
//!
//! Two row shapes are recognized, decided by the header row
//! (case-insensitive):
//!
//! - course rows `semester,id,title[,credits]` — one semester facet,
//! - link rows `from,to[,type]` — one link facet.
//!
//! The tokenizer is deliberately tiny: double quotes open a quoted cell,
//! `""` inside one is a literal quote, `\r` is skipped, and rows that are
//! empty or all-blank are dropped.

use std::collections::BTreeMap;

use super::ImportError;
use crate::model::{Course, CourseId, Link, LinkKind, Semester, SemesterKey};

/// One parsed tabular document: exactly one facet of the graph.
#[derive(Debug, Clone, PartialEq)]
pub enum TabularDocument {
    Semesters(Vec<Semester>),
    Links(Vec<Link>),
}

/// Splits raw CSV text into rows of cells.
pub fn parse_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' && chars.peek() == Some(&'"') {
                cell.push('"');
                chars.next();
            } else if ch == '"' {
                in_quotes = false;
            } else {
                cell.push(ch);
            }
        } else {
            match ch {
                '"' => in_quotes = true,
                ',' => row.push(std::mem::take(&mut cell)),
                '\n' => {
                    row.push(std::mem::take(&mut cell));
                    rows.push(std::mem::take(&mut row));
                }
                '\r' => {}
                _ => cell.push(ch),
            }
        }
    }
    if !cell.is_empty() || !row.is_empty() {
        row.push(cell);
        rows.push(row);
    }

    rows.retain(|row| !row.is_empty() && row.iter().any(|cell| !cell.is_empty()));
    rows
}

/// Classifies and parses a tabular document into one graph facet.
pub fn parse_document(text: &str) -> Result<TabularDocument, ImportError> {
    let rows = parse_rows(text);
    let Some((header, body)) = rows.split_first() else {
        return Err(ImportError::EmptyDocument);
    };

    let header: Vec<String> = header.iter().map(|cell| cell.to_lowercase()).collect();
    let column = |name: &str| header.iter().position(|cell| cell == name);

    if let (Some(semester_col), Some(id_col), Some(title_col)) =
        (column("semester"), column("id"), column("title"))
    {
        let credits_col = column("credits");
        let type_col = column("type");
        parse_course_rows(body, semester_col, id_col, title_col, credits_col, type_col)
            .map(TabularDocument::Semesters)
    } else if let (Some(from_col), Some(to_col)) = (column("from"), column("to")) {
        let type_col = column("type");
        parse_link_rows(body, from_col, to_col, type_col).map(TabularDocument::Links)
    } else {
        Err(ImportError::UnrecognizedHeader { header })
    }
}

fn cell<'a>(row: &'a [String], index: usize) -> &'a str {
    row.get(index).map(String::as_str).unwrap_or("")
}

fn parse_course_rows(
    body: &[Vec<String>],
    semester_col: usize,
    id_col: usize,
    title_col: usize,
    credits_col: Option<usize>,
    type_col: Option<usize>,
) -> Result<Vec<Semester>, ImportError> {
    // Buckets sorted lexicographically by semester key, not first-seen order.
    let mut buckets: BTreeMap<String, Vec<Course>> = BTreeMap::new();

    for row in body {
        let semester_value = cell(row, semester_col).to_owned();
        let id_value = cell(row, id_col).to_owned();
        let id = CourseId::new(id_value.clone()).map_err(|source| {
            ImportError::InvalidCourseId {
                value: id_value,
                source,
            }
        })?;

        let credits = credits_col
            .map(|col| cell(row, col))
            .filter(|value| !value.is_empty())
            .and_then(|value| value.parse::<f64>().ok());
        let course_type = type_col
            .map(|col| cell(row, col))
            .filter(|value| !value.is_empty())
            .map(ToOwned::to_owned);

        buckets
            .entry(semester_value)
            .or_default()
            .push(Course::new_with(id, cell(row, title_col), credits, course_type));
    }

    let mut semesters = Vec::with_capacity(buckets.len());
    for (key_value, courses) in buckets {
        let key = SemesterKey::new(key_value.clone()).map_err(|source| {
            ImportError::InvalidSemesterKey {
                value: key_value,
                source,
            }
        })?;
        let name = format!("Semestre {key}");
        semesters.push(Semester::new_with(key, Some(name), courses));
    }
    Ok(semesters)
}

fn parse_link_rows(
    body: &[Vec<String>],
    from_col: usize,
    to_col: usize,
    type_col: Option<usize>,
) -> Result<Vec<Link>, ImportError> {
    let mut links = Vec::with_capacity(body.len());
    for row in body {
        let from_value = cell(row, from_col).to_owned();
        let from = CourseId::new(from_value.clone()).map_err(|source| {
            ImportError::InvalidCourseId {
                value: from_value,
                source,
            }
        })?;
        let to_value = cell(row, to_col).to_owned();
        let to = CourseId::new(to_value.clone()).map_err(|source| {
            ImportError::InvalidCourseId {
                value: to_value,
                source,
            }
        })?;
        let kind = LinkKind::parse(type_col.map(|col| cell(row, col)));
        links.push(Link::new(from, to, kind));
    }
    Ok(links)
}
