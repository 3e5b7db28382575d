// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pensum-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pensum and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::{CourseId, SemesterKey};

/// One course card. Identity is the id; everything else is display metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    id: CourseId,
    title: String,
    credits: Option<f64>,
    course_type: Option<String>,
}

impl Course {
    pub fn new(id: CourseId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            credits: None,
            course_type: None,
        }
    }

    pub fn new_with(
        id: CourseId,
        title: impl Into<String>,
        credits: Option<f64>,
        course_type: Option<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            credits,
            course_type,
        }
    }

    pub fn id(&self) -> &CourseId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn credits(&self) -> Option<f64> {
        self.credits
    }

    pub fn set_credits(&mut self, credits: Option<f64>) {
        self.credits = credits;
    }

    pub fn course_type(&self) -> Option<&str> {
        self.course_type.as_deref()
    }

    pub fn set_course_type<T: Into<String>>(&mut self, course_type: Option<T>) {
        self.course_type = course_type.map(Into::into);
    }
}

/// A semester column: ordered courses under a stable key.
///
/// Column order is display-relevant but not semantically enforced; nothing
/// checks that a course's semester precedes its prerequisites' semester.
#[derive(Debug, Clone, PartialEq)]
pub struct Semester {
    key: SemesterKey,
    name: Option<String>,
    courses: Vec<Course>,
}

impl Semester {
    pub fn new(key: SemesterKey) -> Self {
        Self {
            key,
            name: None,
            courses: Vec::new(),
        }
    }

    pub fn new_with(key: SemesterKey, name: Option<String>, courses: Vec<Course>) -> Self {
        Self { key, name, courses }
    }

    pub fn key(&self) -> &SemesterKey {
        &self.key
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name<T: Into<String>>(&mut self, name: Option<T>) {
        self.name = name.map(Into::into);
    }

    /// Display label: explicit name, falling back to the key.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or_else(|| self.key.as_str())
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn courses_mut(&mut self) -> &mut Vec<Course> {
        &mut self.courses
    }
}

/// Link kind. Anything that does not compare equal to `coreq` after
/// lower-casing is treated as a plain prerequisite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum LinkKind {
    #[default]
    Prereq,
    Coreq,
}

impl LinkKind {
    /// Canonicalizes a raw kind value. Absent or empty defaults to `Prereq`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(value) if value.eq_ignore_ascii_case("coreq") => Self::Coreq,
            _ => Self::Prereq,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prereq => "prereq",
            Self::Coreq => "coreq",
        }
    }
}

/// A directed link: `from` is a prerequisite/corequisite of `to`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    from: CourseId,
    to: CourseId,
    kind: LinkKind,
}

impl Link {
    pub fn new(from: CourseId, to: CourseId, kind: LinkKind) -> Self {
        Self { from, to, kind }
    }

    pub fn from(&self) -> &CourseId {
        &self.from
    }

    pub fn to(&self) -> &CourseId {
        &self.to
    }

    pub fn kind(&self) -> LinkKind {
        self.kind
    }
}

/// The whole curriculum: semester columns plus the link list.
///
/// Link insertion order is preserved; the closure traversal walks links in
/// this order, so reordering the list can change which diamond edges get
/// recorded (see `query::closure`).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Graph {
    semesters: Vec<Semester>,
    links: Vec<Link>,
}

impl Graph {
    pub fn new(semesters: Vec<Semester>, links: Vec<Link>) -> Self {
        Self { semesters, links }
    }

    pub fn semesters(&self) -> &[Semester] {
        &self.semesters
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn into_parts(self) -> (Vec<Semester>, Vec<Link>) {
        (self.semesters, self.links)
    }

    /// Linear scan across all semester columns; first match wins.
    pub fn find_course(&self, id: &CourseId) -> Option<&Course> {
        self.semesters
            .iter()
            .flat_map(|semester| semester.courses().iter())
            .find(|course| course.id() == id)
    }

    pub fn contains_course(&self, id: &CourseId) -> bool {
        self.find_course(id).is_some()
    }

    pub fn course_count(&self) -> usize {
        self.semesters
            .iter()
            .map(|semester| semester.courses().len())
            .sum()
    }
}
