// SPDX-License-Identifier: MPL-2.0
use classroom_i18n::i18n::{MemoryStore, Translator};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn translate_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("translate");
    let translator = Translator::builtin(MemoryStore::new()).unwrap();
    translator.select_code("hi");

    group.bench_function("active_hit", |b| {
        b.iter(|| black_box(translator.translate(black_box("profile.title"))));
    });

    group.bench_function("base_fallback", |b| {
        b.iter(|| black_box(translator.translate(black_box("language.current"))));
    });

    group.bench_function("key_echo", |b| {
        b.iter(|| black_box(translator.translate(black_box("no.such.key"))));
    });

    group.bench_function("interpolate", |b| {
        b.iter(|| {
            black_box(translator.translate_with(
                black_box("language.current"),
                &[("language", "हिंदी")],
            ))
        });
    });

    group.finish();
}

criterion_group!(benches, translate_benchmark);
criterion_main!(benches);
