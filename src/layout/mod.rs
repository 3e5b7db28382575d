// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pensum-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pensum and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Edge geometry.
//!
//! The layout collaborator owns pixel placement and hands in bounding boxes
//! in a shared coordinate space; this module only turns a pair of boxes into
//! the cubic bezier the render surface paints. Pure functions, no graph
//! access.

/// Axis-aligned bounding box of a placed course card.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NodeBox {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl NodeBox {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Right-center anchor: where outgoing edges leave the card.
    pub fn right_center(&self) -> Point {
        Point::new(self.x + self.w, self.y + self.h / 2.0)
    }

    /// Left-center anchor: where incoming edges enter the card.
    pub fn left_center(&self) -> Point {
        Point::new(self.x, self.y + self.h / 2.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Cubic bezier from a prerequisite card to the card it feeds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicCurve {
    start: Point,
    c1: Point,
    c2: Point,
    end: Point,
}

impl CubicCurve {
    pub fn start(&self) -> Point {
        self.start
    }

    pub fn c1(&self) -> Point {
        self.c1
    }

    pub fn c2(&self) -> Point {
        self.c2
    }

    pub fn end(&self) -> Point {
        self.end
    }

    /// SVG path data (`M … C …`) for the render surface.
    pub fn to_svg_path(&self) -> String {
        format!(
            "M {},{} C {},{} {},{} {},{}",
            self.start.x, self.start.y, self.c1.x, self.c1.y, self.c2.x, self.c2.y, self.end.x,
            self.end.y
        )
    }
}

const MIN_CONTROL_OFFSET: f64 = 40.0;
const CONTROL_OFFSET_RATIO: f64 = 0.35;

/// Connects the right-center of `from` to the left-center of `to` with a
/// symmetric S-curve.
///
/// The horizontal control offset is `max(40, |x2 - x1| * 0.35)`, applied
/// outward from each anchor with zero vertical offset: short spans degrade
/// to a near-straight line, long spans and vertical stacks bow wide.
pub fn curve_between(from: &NodeBox, to: &NodeBox) -> CubicCurve {
    let start = from.right_center();
    let end = to.left_center();
    let dx = MIN_CONTROL_OFFSET.max((end.x - start.x).abs() * CONTROL_OFFSET_RATIO);

    CubicCurve {
        start,
        c1: Point::new(start.x + dx, start.y),
        c2: Point::new(end.x - dx, end.y),
        end,
    }
}
