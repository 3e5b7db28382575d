// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pensum-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pensum and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! JSON graph documents.
//!
//! The wire shape is the one the original dataset uses, field names kept
//! byte-identical:
//!
//! ```json
//! {
//!   "semesters": [
//!     { "key": "01", "name": "Semestre 01",
//!       "courses": [{ "id": "MATH1", "title": "Calculus I",
//!                     "credits": 4, "type": "core" }] }
//!   ],
//!   "links": [{ "from": "MATH1", "to": "PHYS1", "type": "prereq" }]
//! }
//! ```
//!
//! Deserialization enforces exactly the structural shape the graph needs:
//! `semesters` and `links` must be present as sequences. Everything else is
//! passed through.

use serde::{Deserialize, Serialize};

use super::{ExportError, ImportError};
use crate::model::{Course, CourseId, Graph, Link, LinkKind, Semester, SemesterKey};

#[derive(Debug, Serialize, Deserialize)]
struct GraphDoc {
    semesters: Vec<SemesterDoc>,
    links: Vec<LinkDoc>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SemesterDoc {
    key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    courses: Vec<CourseDoc>,
}

#[derive(Debug, Serialize, Deserialize)]
struct CourseDoc {
    id: String,
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    credits: Option<f64>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    course_type: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct LinkDoc {
    from: String,
    to: String,
    #[serde(rename = "type", default)]
    kind: Option<String>,
}

/// Parses a structured graph document. Replaces the whole graph.
pub fn parse_graph(text: &str) -> Result<Graph, ImportError> {
    let doc: GraphDoc =
        serde_json::from_str(text).map_err(|source| ImportError::Json { source })?;

    let mut semesters = Vec::with_capacity(doc.semesters.len());
    for semester in doc.semesters {
        let key = SemesterKey::new(semester.key.clone()).map_err(|source| {
            ImportError::InvalidSemesterKey {
                value: semester.key,
                source,
            }
        })?;
        let mut courses = Vec::with_capacity(semester.courses.len());
        for course in semester.courses {
            let id = CourseId::new(course.id.clone()).map_err(|source| {
                ImportError::InvalidCourseId {
                    value: course.id,
                    source,
                }
            })?;
            courses.push(Course::new_with(
                id,
                course.title,
                course.credits,
                course.course_type,
            ));
        }
        semesters.push(Semester::new_with(key, semester.name, courses));
    }

    let mut links = Vec::with_capacity(doc.links.len());
    for link in doc.links {
        links.push(parse_link(link)?);
    }

    Ok(Graph::new(semesters, links))
}

fn parse_link(link: LinkDoc) -> Result<Link, ImportError> {
    let from =
        CourseId::new(link.from.clone()).map_err(|source| ImportError::InvalidCourseId {
            value: link.from,
            source,
        })?;
    let to = CourseId::new(link.to.clone()).map_err(|source| ImportError::InvalidCourseId {
        value: link.to,
        source,
    })?;
    Ok(Link::new(from, to, LinkKind::parse(link.kind.as_deref())))
}

/// Serializes the graph back to the wire shape, pretty-printed with the
/// 2-space indent the original export used. Link kinds are written in their
/// canonical lower-case form.
pub fn export_graph(graph: &Graph) -> Result<String, ExportError> {
    let doc = GraphDoc {
        semesters: graph
            .semesters()
            .iter()
            .map(|semester| SemesterDoc {
                key: semester.key().to_string(),
                name: semester.name().map(ToOwned::to_owned),
                courses: semester
                    .courses()
                    .iter()
                    .map(|course| CourseDoc {
                        id: course.id().to_string(),
                        title: course.title().to_owned(),
                        credits: course.credits(),
                        course_type: course.course_type().map(ToOwned::to_owned),
                    })
                    .collect(),
            })
            .collect(),
        links: graph
            .links()
            .iter()
            .map(|link| LinkDoc {
                from: link.from().to_string(),
                to: link.to().to_string(),
                kind: Some(link.kind().as_str().to_owned()),
            })
            .collect(),
    };

    serde_json::to_string_pretty(&doc).map_err(|source| ExportError::Json { source })
}

#[cfg(test)]
mod tests {
    use super::{export_graph, parse_graph};
    use crate::format::ImportError;
    use crate::model::LinkKind;

    const SAMPLE: &str = r#"{
        "semesters": [
            { "key": "01", "name": "Semestre 01", "courses": [
                { "id": "MATH1", "title": "Calculus I", "credits": 4 },
                { "id": "PHYS1", "title": "Physics I", "type": "core" }
            ] },
            { "key": "02", "courses": [
                { "id": "AERO", "title": "Aerodynamics" }
            ] }
        ],
        "links": [
            { "from": "MATH1", "to": "AERO" },
            { "from": "PHYS1", "to": "AERO", "type": "COREQ" }
        ]
    }"#;

    #[test]
    fn parses_structured_document() {
        let graph = parse_graph(SAMPLE).expect("graph");
        assert_eq!(graph.semesters().len(), 2);
        assert_eq!(graph.course_count(), 3);
        assert_eq!(graph.links().len(), 2);
        assert_eq!(graph.links()[0].kind(), LinkKind::Prereq);
        assert_eq!(graph.links()[1].kind(), LinkKind::Coreq);
    }

    #[test]
    fn missing_links_array_fails_validation() {
        let result = parse_graph(r#"{ "semesters": [] }"#);
        assert!(matches!(result, Err(ImportError::Json { .. })));
    }

    #[test]
    fn links_as_object_fails_validation() {
        let result = parse_graph(r#"{ "semesters": [], "links": {} }"#);
        assert!(matches!(result, Err(ImportError::Json { .. })));
    }

    #[test]
    fn empty_course_id_fails_validation() {
        let text = r#"{
            "semesters": [{ "key": "01", "courses": [{ "id": "", "title": "x" }] }],
            "links": []
        }"#;
        let result = parse_graph(text);
        assert!(matches!(result, Err(ImportError::InvalidCourseId { .. })));
    }

    #[test]
    fn round_trip_preserves_the_graph() {
        let graph = parse_graph(SAMPLE).expect("graph");
        let exported = export_graph(&graph).expect("json");
        let reparsed = parse_graph(&exported).expect("graph");
        assert_eq!(graph, reparsed);
    }

    #[test]
    fn export_omits_absent_optional_fields() {
        let graph = parse_graph(SAMPLE).expect("graph");
        let exported = export_graph(&graph).expect("json");
        // The second semester has no name; no null placeholder is written.
        assert!(!exported.contains("null"));
        assert!(exported.contains("\"name\": \"Semestre 01\""));
    }
}
