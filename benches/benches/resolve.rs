// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use signpost_scrollspy::{
    ActiveSectionResolver, AnchorLayout, ResolverConfig, VisibilityEvent, resolve_active,
};
use signpost_timing::Throttle;
use std::collections::HashMap;

/// Anchors spaced 100px apart, scrolled by `scroll`.
struct Tops {
    tops: HashMap<String, f64>,
}

impl Tops {
    fn new(anchors: &[String], scroll: f64) -> Self {
        let tops = anchors
            .iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), i as f64 * 100.0 - scroll))
            .collect();
        Self { tops }
    }
}

impl AnchorLayout for Tops {
    fn anchor_top(&self, id: &str) -> Option<f64> {
        self.tops.get(id).copied()
    }
}

fn anchors(len: usize) -> Vec<String> {
    (0..len).map(|i| format!("section-{i}")).collect()
}

fn bench_resolve_active(c: &mut Criterion) {
    let mut group = c.benchmark_group("scrollspy/resolve_active");

    // The scan is linear and stops at the first anchor below the trigger, so
    // cost grows with how far down the page the reader is.
    for len in [16usize, 128, 1_024] {
        let ids = anchors(len);
        group.throughput(Throughput::Elements(len as u64));
        for (label, fraction) in [("top", 0.0), ("middle", 0.5), ("bottom", 1.0)] {
            let scroll = fraction * (len as f64 - 1.0) * 100.0;
            let layout = Tops::new(&ids, scroll);
            group.bench_with_input(BenchmarkId::new(label, len), &ids, |b, ids| {
                b.iter(|| black_box(resolve_active(ids, black_box(0.0), &layout)));
            });
        }
    }

    group.finish();
}

fn bench_resolver_burst(c: &mut Criterion) {
    let mut group = c.benchmark_group("scrollspy/resolver_burst");

    // A fast fling delivers many notifications inside one window; only the last
    // one is resolved.
    for burst in [4usize, 64, 512] {
        let ids = anchors(256);
        let layout = Tops::new(&ids, 12_800.0);
        let events: Vec<VisibilityEvent> = (0..burst)
            .map(|i| {
                let id = &ids[i % ids.len()];
                VisibilityEvent::new(id.as_str(), 0.75, layout.tops[id])
            })
            .collect();
        group.throughput(Throughput::Elements(burst as u64));
        group.bench_with_input(BenchmarkId::from_parameter(burst), &events, |b, events| {
            b.iter_batched(
                || {
                    let mut resolver = ActiveSectionResolver::new(ResolverConfig::default());
                    resolver.set_anchors(ids.iter().cloned());
                    (resolver, events.clone())
                },
                |(mut resolver, events)| {
                    for (t, event) in events.into_iter().enumerate() {
                        let _ = resolver.offer(event, t as u64);
                    }
                    black_box(resolver.flush(&layout));
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_throttle(c: &mut Criterion) {
    c.bench_function("timing/throttle_push_poll", |b| {
        b.iter_batched(
            || Throttle::<u32>::new(75),
            |mut throttle| {
                for now in 0..1_000u64 {
                    let _ = throttle.push(black_box(now as u32), now);
                    black_box(throttle.poll(now));
                }
                black_box(throttle.released())
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_resolve_active,
    bench_resolver_burst,
    bench_throttle
);
criterion_main!(benches);
