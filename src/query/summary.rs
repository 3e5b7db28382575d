// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pensum-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pensum and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Prerequisite summaries for the info panel.

use std::collections::BTreeSet;

use crate::model::{CourseId, Graph, LinkKind};

/// One info-panel row for a course inside the prerequisite closure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrereqSummary {
    course_id: CourseId,
    title: String,
    kind: LinkKind,
}

impl PrereqSummary {
    pub fn course_id(&self) -> &CourseId {
        &self.course_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn kind(&self) -> LinkKind {
        self.kind
    }
}

/// Builds the panel listing for a selection and its closure node set.
///
/// The title falls back to the raw id for dangling references. The kind is
/// taken from the first direct link from the node to the selected course;
/// transitive-only nodes default to `Prereq`. Rows are sorted by title
/// (stable, so equal titles keep closure order).
pub fn prereq_summaries(
    graph: &Graph,
    selected: &CourseId,
    closure_nodes: &BTreeSet<CourseId>,
) -> Vec<PrereqSummary> {
    let mut rows: Vec<PrereqSummary> = closure_nodes
        .iter()
        .map(|node_id| {
            let title = graph
                .find_course(node_id)
                .map(|course| course.title().to_owned())
                .unwrap_or_else(|| node_id.to_string());
            let kind = graph
                .links()
                .iter()
                .find(|link| link.from() == node_id && link.to() == selected)
                .map(|link| link.kind())
                .unwrap_or_default();
            PrereqSummary {
                course_id: node_id.clone(),
                title,
                kind,
            }
        })
        .collect();

    rows.sort_by(|a, b| a.title.cmp(&b.title));
    rows
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::prereq_summaries;
    use crate::model::{Course, CourseId, Graph, Link, LinkKind, Semester, SemesterKey};

    fn id(value: &str) -> CourseId {
        CourseId::new(value).expect("course id")
    }

    fn graph() -> Graph {
        let semester = Semester::new_with(
            SemesterKey::new("01").expect("key"),
            None,
            vec![
                Course::new(id("MATH1"), "Calculus I"),
                Course::new(id("PHYS1"), "Physics I"),
                Course::new(id("AERO"), "Aerodynamics"),
            ],
        );
        let links = vec![
            Link::new(id("MATH1"), id("AERO"), LinkKind::Prereq),
            Link::new(id("PHYS1"), id("AERO"), LinkKind::Coreq),
            Link::new(id("MATH1"), id("PHYS1"), LinkKind::Prereq),
        ];
        Graph::new(vec![semester], links)
    }

    #[test]
    fn summaries_are_sorted_by_title_with_direct_link_kind() {
        let graph = graph();
        let nodes: BTreeSet<CourseId> = [id("MATH1"), id("PHYS1")].into_iter().collect();

        let rows = prereq_summaries(&graph, &id("AERO"), &nodes);
        let titles: Vec<&str> = rows.iter().map(|r| r.title()).collect();
        assert_eq!(titles, vec!["Calculus I", "Physics I"]);
        assert_eq!(rows[0].kind(), LinkKind::Prereq);
        assert_eq!(rows[1].kind(), LinkKind::Coreq);
    }

    #[test]
    fn dangling_node_falls_back_to_raw_id_and_default_kind() {
        let graph = graph();
        let nodes: BTreeSet<CourseId> = [id("GHOST")].into_iter().collect();

        let rows = prereq_summaries(&graph, &id("AERO"), &nodes);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title(), "GHOST");
        assert_eq!(rows[0].kind(), LinkKind::Prereq);
    }
}
