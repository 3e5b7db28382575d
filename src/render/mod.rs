// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pensum-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pensum and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Highlight calculation.
//!
//! [`compute_highlight`] derives the complete visual state for every course
//! card and every drawable edge from (graph, selection, transitive flag,
//! show-all flag). The output is always rebuilt from scratch; previous
//! snapshots are never patched, so stale-highlight bugs cannot exist.
//!
//! Links with an endpoint that does not resolve to a course are dropped from
//! the edge output. That mirrors the render surface, which has no element to
//! attach them to.

use std::collections::{BTreeMap, BTreeSet};

use crate::model::{CourseId, Graph, LinkKind};
use crate::query::{direct_prereqs, transitive_prereqs};

/// Visual state of one course card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeState {
    #[default]
    None,
    Selected,
    Prereq,
}

/// Stroke color of one edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeColor {
    Default,
    Coreq,
    Active,
    Hidden,
}

/// Stroke styling of one edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeStyle {
    pub color: EdgeColor,
    pub width: f32,
    pub opacity: f32,
}

const BASE_WIDTH: f32 = 2.0;
const ACTIVE_WIDTH: f32 = 3.5;
const DIMMED_OPACITY: f32 = 0.15;

/// Edge identity as the render surface keys it: the `(from, to)` pair.
/// A prereq and a coreq link between the same pair share one key; the later
/// link in insertion order wins the styling entry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct EdgeKey {
    from: CourseId,
    to: CourseId,
}

impl EdgeKey {
    pub fn new(from: CourseId, to: CourseId) -> Self {
        Self { from, to }
    }

    pub fn from(&self) -> &CourseId {
        &self.from
    }

    pub fn to(&self) -> &CourseId {
        &self.to
    }
}

/// Complete per-node and per-edge visual state for one selection.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HighlightState {
    node_states: BTreeMap<CourseId, NodeState>,
    edge_states: BTreeMap<EdgeKey, EdgeStyle>,
}

impl HighlightState {
    pub fn node_states(&self) -> &BTreeMap<CourseId, NodeState> {
        &self.node_states
    }

    pub fn edge_states(&self) -> &BTreeMap<EdgeKey, EdgeStyle> {
        &self.edge_states
    }

    pub fn node_state(&self, id: &CourseId) -> NodeState {
        self.node_states.get(id).copied().unwrap_or_default()
    }

    pub fn edge_style(&self, key: &EdgeKey) -> Option<&EdgeStyle> {
        self.edge_states.get(key)
    }

    pub fn active_edge_count(&self) -> usize {
        self.edge_states
            .values()
            .filter(|style| style.color == EdgeColor::Active)
            .count()
    }
}

/// Derives the full highlight snapshot.
///
/// A selection id absent from the graph behaves like no selection at all
/// (the original treats it as a cleared highlight, not an error).
pub fn compute_highlight(
    graph: &Graph,
    selection: Option<&CourseId>,
    use_transitive: bool,
    show_all_edges: bool,
) -> HighlightState {
    let selected = selection.filter(|&id| graph.contains_course(id));

    let (prereq_nodes, active_keys) = match selected {
        None => (BTreeSet::new(), BTreeSet::new()),
        Some(id) => {
            if use_transitive {
                let closure = transitive_prereqs(graph, id);
                let keys = closure
                    .edges()
                    .iter()
                    .map(|l| EdgeKey::new(l.from().clone(), l.to().clone()))
                    .collect();
                (closure.nodes().clone(), keys)
            } else {
                let direct = direct_prereqs(graph, id);
                let nodes = direct.iter().map(|l| l.from().clone()).collect();
                let keys = direct
                    .iter()
                    .map(|l| EdgeKey::new(l.from().clone(), l.to().clone()))
                    .collect();
                (nodes, keys)
            }
        }
    };

    let mut node_states = BTreeMap::new();
    for semester in graph.semesters() {
        for course in semester.courses() {
            let state = match selected {
                Some(id) if course.id() == id => NodeState::Selected,
                _ if prereq_nodes.contains(course.id()) => NodeState::Prereq,
                _ => NodeState::None,
            };
            node_states.insert(course.id().clone(), state);
        }
    }

    let mut edge_states = BTreeMap::new();
    for link in graph.links() {
        if !graph.contains_course(link.from()) || !graph.contains_course(link.to()) {
            continue; // dangling reference, nothing to draw
        }

        let base_color = if link.kind() == LinkKind::Coreq {
            EdgeColor::Coreq
        } else if show_all_edges {
            EdgeColor::Default
        } else {
            EdgeColor::Hidden
        };
        let mut style = EdgeStyle {
            color: base_color,
            width: BASE_WIDTH,
            opacity: 1.0,
        };

        let key = EdgeKey::new(link.from().clone(), link.to().clone());
        if selected.is_some() {
            if active_keys.contains(&key) {
                style.color = EdgeColor::Active;
                style.width = ACTIVE_WIDTH;
            } else if !show_all_edges {
                style.opacity = DIMMED_OPACITY;
            }
        }

        edge_states.insert(key, style);
    }

    HighlightState {
        node_states,
        edge_states,
    }
}

#[cfg(test)]
mod tests {
    use super::{compute_highlight, EdgeColor, EdgeKey, NodeState};
    use crate::model::{Course, CourseId, Graph, Link, LinkKind, Semester, SemesterKey};

    fn id(value: &str) -> CourseId {
        CourseId::new(value).expect("course id")
    }

    fn key(from: &str, to: &str) -> EdgeKey {
        EdgeKey::new(id(from), id(to))
    }

    fn graph() -> Graph {
        let semester = |k: &str, courses: Vec<Course>| {
            Semester::new_with(SemesterKey::new(k).expect("key"), None, courses)
        };
        let semesters = vec![
            semester(
                "01",
                vec![
                    Course::new(id("A"), "Algebra"),
                    Course::new(id("B"), "Biology"),
                ],
            ),
            semester("02", vec![Course::new(id("C"), "Chemistry")]),
        ];
        let links = vec![
            Link::new(id("A"), id("B"), LinkKind::Prereq),
            Link::new(id("B"), id("C"), LinkKind::Prereq),
            Link::new(id("A"), id("C"), LinkKind::Coreq),
        ];
        Graph::new(semesters, links)
    }

    #[test]
    fn no_selection_applies_base_rule_per_edge() {
        let state = compute_highlight(&graph(), None, true, false);

        assert!(state
            .node_states()
            .values()
            .all(|&s| s == NodeState::None));

        let ab = state.edge_style(&key("A", "B")).expect("edge");
        assert_eq!(ab.color, EdgeColor::Hidden);
        assert_eq!(ab.width, 2.0);
        assert_eq!(ab.opacity, 1.0);

        let ac = state.edge_style(&key("A", "C")).expect("edge");
        assert_eq!(ac.color, EdgeColor::Coreq);
    }

    #[test]
    fn show_all_turns_hidden_edges_into_default() {
        let state = compute_highlight(&graph(), None, true, true);
        let ab = state.edge_style(&key("A", "B")).expect("edge");
        assert_eq!(ab.color, EdgeColor::Default);
    }

    #[test]
    fn transitive_selection_marks_closure_and_active_edges() {
        let selection = id("C");
        let state = compute_highlight(&graph(), Some(&selection), true, false);

        assert_eq!(state.node_state(&id("C")), NodeState::Selected);
        assert_eq!(state.node_state(&id("A")), NodeState::Prereq);
        assert_eq!(state.node_state(&id("B")), NodeState::Prereq);

        let bc = state.edge_style(&key("B", "C")).expect("edge");
        assert_eq!(bc.color, EdgeColor::Active);
        assert_eq!(bc.width, 3.5);
        assert_eq!(bc.opacity, 1.0);

        // A->B is reached through the closure of C.
        let ab = state.edge_style(&key("A", "B")).expect("edge");
        assert_eq!(ab.color, EdgeColor::Active);
    }

    #[test]
    fn active_overrides_coreq_coloring() {
        let selection = id("C");
        let state = compute_highlight(&graph(), Some(&selection), true, false);
        let ac = state.edge_style(&key("A", "C")).expect("edge");
        assert_eq!(ac.color, EdgeColor::Active);
    }

    #[test]
    fn direct_selection_only_marks_direct_prereqs() {
        let selection = id("C");
        let state = compute_highlight(&graph(), Some(&selection), false, false);

        assert_eq!(state.node_state(&id("B")), NodeState::Prereq);
        assert_eq!(state.node_state(&id("A")), NodeState::Prereq); // via coreq A->C

        let ab = state.edge_style(&key("A", "B")).expect("edge");
        assert_ne!(ab.color, EdgeColor::Active);
        assert_eq!(ab.opacity, 0.15);
    }

    #[test]
    fn inactive_edges_keep_base_rule_when_show_all_is_on() {
        let selection = id("B");
        let state = compute_highlight(&graph(), Some(&selection), false, true);

        let bc = state.edge_style(&key("B", "C")).expect("edge");
        assert_eq!(bc.color, EdgeColor::Default);
        assert_eq!(bc.opacity, 1.0);

        let ab = state.edge_style(&key("A", "B")).expect("edge");
        assert_eq!(ab.color, EdgeColor::Active);
    }

    #[test]
    fn unknown_selection_clears_highlight() {
        let selection = id("GHOST");
        let state = compute_highlight(&graph(), Some(&selection), true, false);

        assert!(state
            .node_states()
            .values()
            .all(|&s| s == NodeState::None));
        assert_eq!(state.active_edge_count(), 0);
    }

    #[test]
    fn selection_with_no_incoming_links_marks_only_itself() {
        let selection = id("A");
        let state = compute_highlight(&graph(), Some(&selection), true, false);

        assert_eq!(state.node_state(&id("A")), NodeState::Selected);
        assert_eq!(state.node_state(&id("B")), NodeState::None);
        assert_eq!(state.node_state(&id("C")), NodeState::None);
        assert_eq!(state.active_edge_count(), 0);
    }

    #[test]
    fn dangling_links_are_absent_from_edge_output() {
        let mut links = graph().links().to_vec();
        links.push(Link::new(id("GHOST"), id("C"), LinkKind::Prereq));
        let graph = Graph::new(graph().semesters().to_vec(), links);

        let selection = id("C");
        let state = compute_highlight(&graph, Some(&selection), true, false);
        assert!(state.edge_style(&key("GHOST", "C")).is_none());
    }

    #[test]
    fn recomputation_is_idempotent() {
        let selection = id("C");
        let first = compute_highlight(&graph(), Some(&selection), true, false);
        let second = compute_highlight(&graph(), Some(&selection), true, false);
        assert_eq!(first, second);
    }
}
