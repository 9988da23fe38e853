use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gradient_colormap::{to_unit, Preset};

fn evaluate(c: &mut Criterion) {
    let short = Preset::Greyscale.gradient().unwrap();
    let long = Preset::BluToRedJet.gradient().unwrap();
    c.bench_function("evaluate greyscale", |b| {
        b.iter(|| {
            for v in 0..=255u8 {
                black_box(short.evaluate(to_unit(black_box(v))).unwrap());
            }
        })
    });
    c.bench_function("evaluate blutoredjet", |b| {
        b.iter(|| {
            for v in 0..=255u8 {
                black_box(long.evaluate(to_unit(black_box(v))).unwrap());
            }
        })
    });
}

fn resolve(c: &mut Criterion) {
    c.bench_function("builtin registry", |b| {
        b.iter(|| gradient_colormap::PaletteRegistry::builtin().unwrap())
    });
}

criterion_group!(benches, evaluate, resolve);
criterion_main!(benches);
