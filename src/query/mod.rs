// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pensum-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pensum and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-side queries over the graph. All functions here are total: they
//! never error, even on dangling references or cyclic link lists.

pub mod closure;
pub mod search;
pub mod summary;

pub use closure::{direct_prereqs, transitive_prereqs, PrereqClosure};
pub use search::search_dim;
pub use summary::{prereq_summaries, PrereqSummary};
