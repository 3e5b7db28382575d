// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pensum-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pensum and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Prerequisite closure over the link list.
//!
//! The transitive traversal is depth-first with immediate visited-marking:
//! a node enters the visited set before the walk recurses into it. The
//! visited set is the only cycle guard; cyclic graphs terminate but edges
//! into an already-visited node are only recorded when traversed before the
//! target was marked. On diamond-shaped graphs the recorded edge set is
//! therefore a function of link insertion order. That is intentional and
//! pinned by tests; do not replace this with BFS or post-order collection.

use std::collections::BTreeSet;

use crate::model::{CourseId, Graph, Link};

/// Result of a transitive prerequisite walk.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PrereqClosure {
    nodes: BTreeSet<CourseId>,
    edges: Vec<Link>,
}

impl PrereqClosure {
    pub fn nodes(&self) -> &BTreeSet<CourseId> {
        &self.nodes
    }

    pub fn edges(&self) -> &[Link] {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

/// Direct prerequisites: links pointing at `course_id`, in link order.
pub fn direct_prereqs<'a>(graph: &'a Graph, course_id: &CourseId) -> Vec<&'a Link> {
    graph
        .links()
        .iter()
        .filter(|link| link.to() == course_id)
        .collect()
}

/// Everything that feeds into `course_id`, directly or transitively.
///
/// A course with no incoming links yields an empty closure, never an error.
pub fn transitive_prereqs(graph: &Graph, course_id: &CourseId) -> PrereqClosure {
    let mut closure = PrereqClosure::default();
    expand(graph, course_id, &mut closure);
    closure
}

fn expand(graph: &Graph, to_id: &CourseId, closure: &mut PrereqClosure) {
    for link in graph.links() {
        if link.to() == to_id && !closure.nodes.contains(link.from()) {
            closure.nodes.insert(link.from().clone());
            closure.edges.push(link.clone());
            expand(graph, link.from(), closure);
        }
    }
}
