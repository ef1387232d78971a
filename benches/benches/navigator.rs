// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use serde_json::json;
use signpost::{
    AnchorLayout, AnchorScroller, DocNavigator, Document, IntersectionSource, NavigatorConfig,
};
use std::collections::HashMap;

#[derive(Default)]
struct Host {
    tops: HashMap<String, f64>,
    watching: usize,
}

impl AnchorLayout for Host {
    fn anchor_top(&self, id: &str) -> Option<f64> {
        self.tops.get(id).copied()
    }
}

impl IntersectionSource for Host {
    fn watch(&mut self, _id: &str, _threshold: f64) {
        self.watching += 1;
    }

    fn unwatch(&mut self, _id: &str) {
        self.watching -= 1;
    }
}

impl AnchorScroller for Host {
    fn scroll_into_view(&mut self, _id: &str) {}
}

/// `chapters` top-level sections with `per_chapter` children each.
fn document(chapters: usize, per_chapter: usize) -> (Document, Host) {
    let mut host = Host::default();
    let mut y = 0.0;
    let sections: Vec<_> = (0..chapters)
        .map(|c| {
            let slug = format!("ch-{c}");
            host.tops.insert(slug.clone(), y);
            y += 400.0;
            let children: Vec<_> = (0..per_chapter)
                .map(|s| {
                    let slug = format!("ch-{c}-{s}");
                    host.tops.insert(slug.clone(), y);
                    y += 250.0;
                    json!({ "slug": slug, "title": format!("Section {c}.{s}") })
                })
                .collect();
            json!({ "slug": slug, "title": format!("Chapter {c}"), "children": children })
        })
        .collect();
    let document = serde_json::from_value(json!({ "sections": sections, "content": "" }))
        .expect("generated document is valid");
    (document, host)
}

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigator/load");

    for (chapters, per_chapter) in [(8usize, 4usize), (32, 8), (128, 16)] {
        let (doc, host) = document(chapters, per_chapter);
        let anchors = chapters * (per_chapter + 1);
        group.throughput(Throughput::Elements(anchors as u64));
        group.bench_with_input(BenchmarkId::from_parameter(anchors), &doc, |b, doc| {
            b.iter_batched(
                || {
                    let host = Host {
                        tops: host.tops.clone(),
                        watching: 0,
                    };
                    (DocNavigator::<u32>::new(NavigatorConfig::default()), doc.clone(), host)
                },
                |(mut nav, doc, mut host)| {
                    let report = nav.load(doc, Some("#ch-1"), &mut host);
                    black_box(report)
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_toc_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigator/toc_rows");

    for (chapters, per_chapter) in [(8usize, 4usize), (128, 16)] {
        let (doc, mut host) = document(chapters, per_chapter);
        let mut nav = DocNavigator::<u32>::new(NavigatorConfig::default());
        let _ = nav.load(doc, None, &mut host);
        for c in (0..chapters).step_by(2) {
            nav.toggle_branch(&format!("Chapter {c}"));
        }
        let rows = chapters * (per_chapter + 1);
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_function(BenchmarkId::from_parameter(rows), |b| {
            b.iter(|| black_box(nav.toc_rows()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_load, bench_toc_rows);
criterion_main!(benches);
