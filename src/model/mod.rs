// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pensum-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pensum and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A curriculum is a sequence of semester columns plus a flat link list.
//! Course ids are the join key between the two; the model tolerates links
//! whose endpoints do not resolve (dropped at render time, never fatal).

pub mod graph;
pub mod ids;

pub use graph::{Course, Graph, Link, LinkKind, Semester};
pub use ids::{CourseId, Id, IdError, SemesterKey};
