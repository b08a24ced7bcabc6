#[macro_use]
extern crate criterion;

use criterion::Criterion;
use image::DynamicImage;
use reseam::SeamCarver;

fn synthetic(w: u32, h: u32) -> DynamicImage {
    let raw: Vec<u8> = (0..3 * w * h)
        .map(|i| (i.wrapping_mul(2_654_435_761) >> 8) as u8)
        .collect();
    DynamicImage::ImageRgb8(image::RgbImage::from_raw(w, h, raw).unwrap())
}

fn carve_benchmark(c: &mut Criterion) {
    let img = synthetic(64, 64);
    c.bench_function("remove 8 seams from 64x64", move |b| {
        b.iter(|| {
            let mut carver = SeamCarver::new(&img).unwrap();
            carver.remove_seams(8)
        })
    });
}

fn round_trip_benchmark(c: &mut Criterion) {
    let img = synthetic(64, 64);
    c.bench_function("remove and reinsert 8 seams, 64x64", move |b| {
        let mut carver = SeamCarver::new(&img).unwrap();
        b.iter(|| {
            carver.remove_seams(8);
            carver.insert_seams(8)
        })
    });
}

criterion_group!(benches, carve_benchmark, round_trip_benchmark);
criterion_main!(benches);
