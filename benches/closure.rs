// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pensum-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pensum and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use pensum::model::{Course, CourseId, Graph, Link, LinkKind, Semester, SemesterKey};
use pensum::query::transitive_prereqs;
use pensum::render::compute_highlight;

// Benchmark identity (keep stable):
// - Group names in this file: `closure.transitive`, `highlight.compute`
// - Case IDs (the string after the `/`) must remain stable across refactors
//   so results stay comparable over time (e.g. `chain`, `fan_in`, `layered`).

fn course_id(index: usize) -> CourseId {
    CourseId::new(format!("C{index:04}")).expect("course id")
}

/// One semester per 8 courses, links per the requested shape.
fn graph(courses: usize, links: Vec<Link>) -> Graph {
    let mut semesters: Vec<Semester> = Vec::new();
    for index in 0..courses {
        if index % 8 == 0 {
            let key = SemesterKey::new(format!("{:02}", index / 8)).expect("key");
            semesters.push(Semester::new(key));
        }
        let semester = semesters.last_mut().expect("semester bucket");
        semester
            .courses_mut()
            .push(Course::new(course_id(index), format!("Course {index}")));
    }
    Graph::new(semesters, links)
}

/// A single long prerequisite chain C0 -> C1 -> … -> Cn.
fn chain(courses: usize) -> Graph {
    let links = (1..courses)
        .map(|index| Link::new(course_id(index - 1), course_id(index), LinkKind::Prereq))
        .collect();
    graph(courses, links)
}

/// Every earlier course feeds the last one directly.
fn fan_in(courses: usize) -> Graph {
    let last = course_id(courses - 1);
    let links = (0..courses - 1)
        .map(|index| Link::new(course_id(index), last.clone(), LinkKind::Prereq))
        .collect();
    graph(courses, links)
}

/// Semester-layered curriculum: each course requires two from the previous
/// layer, producing many shared-prerequisite diamonds.
fn layered(layers: usize, per_layer: usize) -> Graph {
    let mut links = Vec::new();
    for layer in 1..layers {
        for slot in 0..per_layer {
            let to = course_id(layer * per_layer + slot);
            for offset in 0..2 {
                let from = course_id((layer - 1) * per_layer + (slot + offset) % per_layer);
                links.push(Link::new(from, to.clone(), LinkKind::Prereq));
            }
        }
    }
    graph(layers * per_layer, links)
}

fn benches_closure(c: &mut Criterion) {
    let mut group = c.benchmark_group("closure.transitive");

    for (case_id, graph) in [
        ("chain", chain(64)),
        ("fan_in", fan_in(64)),
        ("layered", layered(8, 8)),
    ] {
        let target = course_id(graph.course_count() - 1);
        group.throughput(Throughput::Elements(graph.links().len() as u64));
        group.bench_function(case_id, move |b| {
            b.iter(|| {
                let closure = transitive_prereqs(black_box(&graph), black_box(&target));
                black_box(closure.nodes().len() + closure.edges().len())
            })
        });
    }

    group.finish();
}

fn benches_highlight(c: &mut Criterion) {
    let mut group = c.benchmark_group("highlight.compute");

    for (case_id, graph) in [("chain", chain(64)), ("layered", layered(8, 8))] {
        let target = course_id(graph.course_count() - 1);
        group.throughput(Throughput::Elements(graph.links().len() as u64));
        group.bench_function(case_id, move |b| {
            b.iter(|| {
                let state =
                    compute_highlight(black_box(&graph), Some(black_box(&target)), true, false);
                black_box(state.edge_states().len())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, benches_closure, benches_highlight);
criterion_main!(benches);
