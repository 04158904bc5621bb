// ISEA
// SPDX-License-Identifier: Apache-2.0
// Copyright (c) ISEA contributors

//! Icosahedron geometry tables.
//!
//! Faces are numbered 1..=20: rows of five, from the north cap down.
//! Face `f` points downward iff `((f - 1) / 5) % 2 == 1`.

use crate::coordinate_systems::{GeoPoint, PlanarPoint};
use crate::core::constants::*;

/// The 12 icosahedron vertices: north pole, upper belt, lower belt, south pole.
pub const VERTICES: [GeoPoint; 12] = [
    GeoPoint::new(DEG_90, 0.0),      // vertex  0
    GeoPoint::new(V_LAT, DEG_180),   // vertex  1
    GeoPoint::new(V_LAT, -DEG_108),  // vertex  2
    GeoPoint::new(V_LAT, -DEG_36),   // vertex  3
    GeoPoint::new(V_LAT, DEG_36),    // vertex  4
    GeoPoint::new(V_LAT, DEG_108),   // vertex  5
    GeoPoint::new(-V_LAT, -DEG_144), // vertex  6
    GeoPoint::new(-V_LAT, -DEG_72),  // vertex  7
    GeoPoint::new(-V_LAT, 0.0),      // vertex  8
    GeoPoint::new(-V_LAT, DEG_72),   // vertex  9
    GeoPoint::new(-V_LAT, DEG_144),  // vertex 10
    GeoPoint::new(-DEG_90, 0.0),     // vertex 11
];

/// Spherical centers of the 20 faces, indexed by face - 1.
const FACE_CENTERS: [GeoPoint; 20] = [
    GeoPoint::new(E_RAD, -DEG_144),  // face  1
    GeoPoint::new(E_RAD, -DEG_72),   // face  2
    GeoPoint::new(E_RAD, 0.0),       // face  3
    GeoPoint::new(E_RAD, DEG_72),    // face  4
    GeoPoint::new(E_RAD, DEG_144),   // face  5
    GeoPoint::new(F_RAD, -DEG_144),  // face  6
    GeoPoint::new(F_RAD, -DEG_72),   // face  7
    GeoPoint::new(F_RAD, 0.0),       // face  8
    GeoPoint::new(F_RAD, DEG_72),    // face  9
    GeoPoint::new(F_RAD, DEG_144),   // face 10
    GeoPoint::new(-F_RAD, -DEG_108), // face 11
    GeoPoint::new(-F_RAD, -DEG_36),  // face 12
    GeoPoint::new(-F_RAD, DEG_36),   // face 13
    GeoPoint::new(-F_RAD, DEG_108),  // face 14
    GeoPoint::new(-F_RAD, DEG_180),  // face 15
    GeoPoint::new(-E_RAD, -DEG_108), // face 16
    GeoPoint::new(-E_RAD, -DEG_36),  // face 17
    GeoPoint::new(-E_RAD, DEG_36),   // face 18
    GeoPoint::new(-E_RAD, DEG_108),  // face 19
    GeoPoint::new(-E_RAD, DEG_180),  // face 20
];

/// Reference vertex of each face (index into [`VERTICES`]), by face - 1.
/// It anchors the local azimuth offset of the Snyder equations.
const FACE_REF_VERTEX: [usize; 20] = [
    0, 0, 0, 0, 0, // north cap faces point at the north pole
    6, 7, 8, 9, 10, // second row points at the lower belt
    2, 3, 4, 5, 1, // third row points at the upper belt
    11, 11, 11, 11, 11, // south cap faces point at the south pole
];

/// Spherical center of `face` (1..=20).
pub fn face_center(face: usize) -> GeoPoint {
    FACE_CENTERS[face - 1]
}

/// True when `face` points downward on the unfolded mosaic.
pub fn is_down_face(face: usize) -> bool {
    ((face - 1) / 5) % 2 == 1
}

/// Bearing from the center of `face` to its reference vertex.
pub fn az_adjustment(face: usize) -> f64 {
    let v = VERTICES[FACE_REF_VERTEX[face - 1]];
    let c = face_center(face);

    (v.lat.cos() * (v.lon - c.lon).sin()).atan2(
        c.lat.cos() * v.lat.sin() - c.lat.sin() * v.lat.cos() * (v.lon - c.lon).cos(),
    )
}

/// Center of `face` on the unfolded planar mosaic, in R' units.
///
/// The mosaic lays the faces out in four rows of five, the lower two rows
/// shifted right by half a column.
pub fn face_center_planar(face: usize) -> PlanarPoint {
    let t = (face - 1) % 20;

    let mut x = TABLE_G * ((t % 5) as f64 - 2.0) * 2.0;
    if t > 9 {
        x += TABLE_G;
    }
    let y = match t / 5 {
        0 => 5.0 * TABLE_H,
        1 => TABLE_H,
        2 => -TABLE_H,
        _ => -5.0 * TABLE_H,
    };

    PlanarPoint::new(x * R_PRIME, y * R_PRIME)
}
