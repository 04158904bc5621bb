// ISEA
// SPDX-License-Identifier: Apache-2.0
// Copyright (c) ISEA contributors

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use isea::{AddressForm, DggConfig, GeoPoint, IseaProjection, PlanarPoint};

fn forward_plane(c: &mut Criterion) {
    let mut proj = IseaProjection::new(DggConfig::default());
    let point = GeoPoint::new(0.6, -1.2);

    c.bench_function("forward plane", |b| {
        b.iter(|| proj.forward(black_box(point)).unwrap())
    });
}

fn forward_seqnum(c: &mut Criterion) {
    let mut proj = IseaProjection::new(DggConfig::default().output(AddressForm::SeqNum));
    let point = GeoPoint::new(0.6, -1.2);

    c.bench_function("forward seqnum", |b| {
        b.iter(|| proj.forward(black_box(point)).unwrap())
    });
}

fn inverse_plane(c: &mut Criterion) {
    let proj = IseaProjection::new(DggConfig::default());
    let point = PlanarPoint::new(0.25, -0.125);

    c.bench_function("inverse plane", |b| {
        b.iter(|| proj.inverse(black_box(point)).unwrap())
    });
}

criterion_group!(benches, forward_plane, forward_seqnum, inverse_plane);
criterion_main!(benches);
