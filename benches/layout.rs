// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-TriViet-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Trí Việt and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use triviet::layout::{LayoutConfig, TreeLayoutEngine};

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group names in this file: `layout.tree`
// - Case IDs (the string after the `/`) must remain stable across refactors so
//   results stay comparable over time (e.g. `lesson`, `balanced`, `deep_chain`).
fn benches_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout.tree");
    let engine = TreeLayoutEngine::new(LayoutConfig::default()).expect("engine");

    for case in [
        fixtures::Case::Lesson,
        fixtures::Case::Balanced,
        fixtures::Case::Wide,
        fixtures::Case::DeepChain,
    ] {
        let root = fixtures::fixture(case);
        group.throughput(Throughput::Elements(root.node_count() as u64));
        group.bench_function(case.id(), move |b| {
            b.iter(|| {
                let layout = engine.layout(black_box(&root)).expect("layout");
                black_box(fixtures::checksum_layout(&layout))
            })
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_layout
}
criterion_main!(benches);
