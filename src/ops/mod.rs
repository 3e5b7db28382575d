// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pensum-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pensum and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Command surface for an interactive session.
//!
//! The [`Explorer`] owns the graph store, the selection and the two toggle
//! flags. Every command runs to completion synchronously and hands back a
//! freshly computed [`HighlightState`]; a presentation layer subscribes to
//! these snapshots instead of mutating shared state from callbacks.

use std::collections::BTreeSet;

use crate::format::{export_graph, import_document, ExportError, ImportError, ImportFormat};
use crate::model::{CourseId, Graph};
use crate::query::{
    direct_prereqs, prereq_summaries, search_dim, transitive_prereqs, PrereqSummary,
};
use crate::render::{compute_highlight, HighlightState};
use crate::store::GraphStore;

#[derive(Debug, Clone, Default)]
pub struct Explorer {
    store: GraphStore,
    selection: Option<CourseId>,
    transitive: bool,
    show_all_edges: bool,
}

impl Explorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_graph(graph: Graph) -> Self {
        Self {
            store: GraphStore::new(graph),
            ..Self::default()
        }
    }

    pub fn graph(&self) -> &Graph {
        self.store.graph()
    }

    pub fn selection(&self) -> Option<&CourseId> {
        self.selection.as_ref()
    }

    pub fn transitive(&self) -> bool {
        self.transitive
    }

    pub fn show_all_edges(&self) -> bool {
        self.show_all_edges
    }

    /// Recomputes the highlight snapshot for the current state.
    pub fn highlight(&self) -> HighlightState {
        compute_highlight(
            self.store.graph(),
            self.selection.as_ref(),
            self.transitive,
            self.show_all_edges,
        )
    }

    /// Selects a course. An id absent from the graph clears the selection
    /// instead of erroring.
    pub fn select(&mut self, id: CourseId) -> HighlightState {
        self.selection = if self.store.find_course(&id).is_some() {
            Some(id)
        } else {
            None
        };
        self.highlight()
    }

    pub fn clear_selection(&mut self) -> HighlightState {
        self.selection = None;
        self.highlight()
    }

    pub fn set_transitive(&mut self, transitive: bool) -> HighlightState {
        self.transitive = transitive;
        self.highlight()
    }

    pub fn set_show_all_edges(&mut self, show_all_edges: bool) -> HighlightState {
        self.show_all_edges = show_all_edges;
        self.highlight()
    }

    /// Imports a document, replacing the whole graph (JSON) or one facet
    /// (CSV). On success the selection is cleared; on error the previous
    /// graph and selection stay untouched.
    pub fn import(
        &mut self,
        text: &str,
        format: ImportFormat,
    ) -> Result<HighlightState, ImportError> {
        let merged = import_document(self.store.graph(), text, format)?;
        self.store.replace(merged);
        self.selection = None;
        Ok(self.highlight())
    }

    /// Serializes the current graph to the JSON wire shape.
    pub fn export_json(&self) -> Result<String, ExportError> {
        export_graph(self.store.graph())
    }

    /// Per-course opacity for a search query.
    pub fn search(&self, query: &str) -> std::collections::BTreeMap<CourseId, f32> {
        search_dim(self.store.graph(), query)
    }

    /// Info-panel rows for the current selection, honoring the transitive
    /// toggle. Empty when nothing is selected.
    pub fn panel(&self) -> Vec<PrereqSummary> {
        let Some(selected) = self.selection.as_ref() else {
            return Vec::new();
        };

        let graph = self.store.graph();
        let nodes: BTreeSet<CourseId> = if self.transitive {
            transitive_prereqs(graph, selected).nodes().clone()
        } else {
            direct_prereqs(graph, selected)
                .iter()
                .map(|link| link.from().clone())
                .collect()
        };
        prereq_summaries(graph, selected, &nodes)
    }
}
