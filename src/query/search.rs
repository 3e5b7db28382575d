// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pensum-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pensum and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Search filter over course cards.
//!
//! Matching is a case-insensitive substring test against the text a card
//! displays: title, credits chip and upper-cased type chip. The result maps
//! every course to the opacity the render surface should apply.

use std::collections::BTreeMap;

use crate::model::{Course, CourseId, Graph};

const DIMMED: f32 = 0.15;
const FULL: f32 = 1.0;

/// Per-course opacity for a search query. An empty or whitespace-only query
/// restores every card to full opacity.
pub fn search_dim(graph: &Graph, query: &str) -> BTreeMap<CourseId, f32> {
    let needle = query.trim().to_lowercase();

    graph
        .semesters()
        .iter()
        .flat_map(|semester| semester.courses().iter())
        .map(|course| {
            let opacity = if needle.is_empty() || matches(course, &needle) {
                FULL
            } else {
                DIMMED
            };
            (course.id().clone(), opacity)
        })
        .collect()
}

fn matches(course: &Course, needle: &str) -> bool {
    card_text(course).to_lowercase().contains(needle)
}

fn card_text(course: &Course) -> String {
    let mut text = course.title().to_owned();
    if let Some(credits) = course.credits() {
        text.push_str(&format!(" {credits} cr"));
    }
    if let Some(course_type) = course.course_type() {
        text.push(' ');
        text.push_str(&course_type.to_uppercase());
    }
    text
}
