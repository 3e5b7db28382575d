// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pensum-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pensum and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! In-memory graph store.
//!
//! The store is the single owner of the current [`Graph`]. Mutation is
//! replacement only: the whole graph on a structured import, or one facet
//! (semesters or links) on a tabular import. There are no partial in-place
//! edits, so a replacement is atomic at the value level.

use crate::model::{Course, CourseId, Graph, Link, Semester};

#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    graph: Graph,
}

impl GraphStore {
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Wholesale replacement; the previous graph is dropped.
    pub fn replace(&mut self, graph: Graph) {
        self.graph = graph;
    }

    /// Replaces the semester facet, keeping the current link list.
    pub fn replace_semesters(&mut self, semesters: Vec<Semester>) {
        let links = std::mem::take(&mut self.graph).into_parts().1;
        self.graph = Graph::new(semesters, links);
    }

    /// Replaces the link facet, keeping the current semester columns.
    pub fn replace_links(&mut self, links: Vec<Link>) {
        let semesters = std::mem::take(&mut self.graph).into_parts().0;
        self.graph = Graph::new(semesters, links);
    }

    pub fn find_course(&self, id: &CourseId) -> Option<&Course> {
        self.graph.find_course(id)
    }

    pub fn all_links(&self) -> &[Link] {
        self.graph.links()
    }
}
