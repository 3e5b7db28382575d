// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pensum-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pensum and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Pensum — curriculum prerequisite graph core (model + closure + highlight).
//!
//! The crate holds the graph model, the prerequisite-closure engine, and the
//! highlight/geometry calculations. Rendering surfaces, file pickers and
//! transports are external collaborators: they hand in fully materialized
//! strings and bounding boxes and consume the returned snapshots.

pub mod format;
pub mod layout;
pub mod model;
pub mod ops;
pub mod query;
pub mod render;
pub mod store;

#[cfg(test)]
mod tests {
    #[test]
    fn sanity() {
        assert_eq!(2 + 2, 4);
    }
}
