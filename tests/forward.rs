// ISEA
// SPDX-License-Identifier: Apache-2.0
// Copyright (c) ISEA contributors

use isea::{AddressForm, DggConfig, GeoPoint, IseaProjection, Projected};
use serde_json::Value;
use std::collections::HashSet;

const TOLERANCE: f64 = 1e-9;

fn close_to(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() < tolerance
}

fn geo(lat_deg: f64, lon_deg: f64) -> GeoPoint {
    GeoPoint::new(lat_deg.to_radians(), lon_deg.to_radians())
}

fn fixtures() -> Value {
    serde_json::from_str(include_str!("fixtures/forward.json")).unwrap()
}

#[test]
fn test_forward_plane() {
    let data = fixtures();
    let mut proj = IseaProjection::new(DggConfig::default());

    for case in data["forward_plane"].as_array().unwrap() {
        let lat = case["lat"].as_f64().unwrap();
        let lon = case["lon"].as_f64().unwrap();
        let expected_x = case["x"].as_f64().unwrap();
        let expected_y = case["y"].as_f64().unwrap();

        let result = proj.forward(geo(lat, lon)).unwrap();
        match result {
            Projected::Plane(pt) => {
                assert!(
                    close_to(pt.x, expected_x, TOLERANCE) && close_to(pt.y, expected_y, TOLERANCE),
                    "plane mismatch for ({}, {}). Expected ({}, {}), got ({}, {})",
                    lat,
                    lon,
                    expected_x,
                    expected_y,
                    pt.x,
                    pt.y
                );
            }
            other => panic!("expected Plane output, got {:?}", other),
        }
        assert_eq!(
            proj.state().triangle,
            case["face"].as_u64().unwrap() as usize,
            "face mismatch for ({}, {})",
            lat,
            lon
        );
    }
}

#[test]
fn test_forward_plane_rescale() {
    let data = fixtures();
    let case = &data["forward_plane_rescale"];
    let mut proj = IseaProjection::new(DggConfig::default().rescale());

    let result = proj
        .forward(geo(
            case["lat"].as_f64().unwrap(),
            case["lon"].as_f64().unwrap(),
        ))
        .unwrap();
    match result {
        Projected::Plane(pt) => {
            assert!(close_to(pt.x, case["x"].as_f64().unwrap(), TOLERANCE));
            assert!(close_to(pt.y, case["y"].as_f64().unwrap(), TOLERANCE));
        }
        other => panic!("expected Plane output, got {:?}", other),
    }
}

#[test]
fn test_forward_projtri() {
    let data = fixtures();
    let mut proj = IseaProjection::new(DggConfig::default().output(AddressForm::ProjTri));

    for case in data["forward_projtri"].as_array().unwrap() {
        let result = proj
            .forward(geo(
                case["lat"].as_f64().unwrap(),
                case["lon"].as_f64().unwrap(),
            ))
            .unwrap();
        match result {
            Projected::ProjTri(pt) => {
                assert!(close_to(pt.x, case["x"].as_f64().unwrap(), TOLERANCE));
                assert!(close_to(pt.y, case["y"].as_f64().unwrap(), TOLERANCE));
            }
            other => panic!("expected ProjTri output, got {:?}", other),
        }
    }
}

#[test]
fn test_forward_q2dd() {
    let data = fixtures();
    let mut proj = IseaProjection::new(DggConfig::default().output(AddressForm::Q2dd));

    for case in data["forward_q2dd"].as_array().unwrap() {
        let result = proj
            .forward(geo(
                case["lat"].as_f64().unwrap(),
                case["lon"].as_f64().unwrap(),
            ))
            .unwrap();
        match result {
            Projected::Q2dd { quad, point } => {
                assert_eq!(quad, case["quad"].as_u64().unwrap() as usize);
                assert!(close_to(point.x, case["x"].as_f64().unwrap(), TOLERANCE));
                assert!(close_to(point.y, case["y"].as_f64().unwrap(), TOLERANCE));
            }
            other => panic!("expected Q2dd output, got {:?}", other),
        }
    }
}

#[test]
fn vertex2dd_matches_q2dd_payload() {
    let point = geo(23.0, -67.0);

    let mut dd = IseaProjection::new(DggConfig::default().output(AddressForm::Q2dd));
    let mut vertex = IseaProjection::new(DggConfig::default().output(AddressForm::Vertex2dd));

    match (dd.forward(point).unwrap(), vertex.forward(point).unwrap()) {
        (Projected::Q2dd { quad: q1, point: p1 }, Projected::Vertex2dd { quad: q2, point: p2 }) => {
            assert_eq!(q1, q2);
            assert_eq!(p1, p2);
        }
        other => panic!("unexpected output pair {:?}", other),
    }
}

#[test]
fn every_face_is_selected_for_some_input() {
    let mut proj = IseaProjection::new(DggConfig::default());
    let mut faces = HashSet::new();

    let mut lat = -87.0;
    while lat < 90.0 {
        let mut lon = -177.0;
        while lon < 180.0 {
            proj.forward(geo(lat, lon)).unwrap();
            faces.insert(proj.state().triangle);
            lon += 6.0;
        }
        lat += 6.0;
    }

    assert_eq!(faces, (1..=20).collect::<HashSet<_>>());
}

#[test]
fn forward_fails_without_touching_state() {
    let mut proj = IseaProjection::new(DggConfig::default());
    proj.forward(geo(10.0, 20.0)).unwrap();
    let before = *proj.state();

    let err = proj.forward(GeoPoint::new(f64::NAN, 0.0)).unwrap_err();
    assert_eq!(err, isea::Error::OutsideDomain);
    assert_eq!(*proj.state(), before);
}

#[test]
fn forward_succeeds_at_the_poles() {
    // Under the standard orientation the poles sit on triangle-edge
    // midpoints; the lower-indexed face wins.
    let mut proj = IseaProjection::new(DggConfig::default());
    proj.forward(GeoPoint::new(std::f64::consts::FRAC_PI_2, 0.0))
        .unwrap();
    assert!((1..=20).contains(&proj.state().triangle));
    proj.forward(GeoPoint::new(-std::f64::consts::FRAC_PI_2, 0.0))
        .unwrap();
    assert!((1..=20).contains(&proj.state().triangle));
}
