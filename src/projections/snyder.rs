// ISEA
// SPDX-License-Identifier: Apache-2.0
// Copyright (c) ISEA contributors

//! Forward Snyder equal-area projection onto the icosahedron.
//!
//! Equation numbers refer to John P. Snyder, "An equal-area map projection
//! for polyhedral globes", Cartographica 29(1), 1992.

use std::f64::consts::PI;

use crate::coordinate_systems::{GeoPoint, PlanarPoint};
use crate::core::constants::{
    DEG_120, DEG_180, R_PRIME, SNYDER_BIG_G_DEG, SNYDER_G_DEG, SNYDER_THETA_DEG,
};
use crate::core::icosahedron::{az_adjustment, face_center};
use crate::error::Error;

/// Tolerance accepting points exactly on a face edge into the
/// lower-indexed face.
const EDGE_EPSILON: f64 = 0.000005;

/// Initial bearing on the sphere from `from` to `to` (Snyder eq 14).
pub fn azimuth(from: GeoPoint, to: GeoPoint) -> f64 {
    (to.lat.cos() * (to.lon - from.lon).sin()).atan2(
        from.lat.cos() * to.lat.sin() - from.lat.sin() * to.lat.cos() * (to.lon - from.lon).cos(),
    )
}

fn normalize_lon(mut lon: f64) -> f64 {
    lon = lon % (2.0 * PI);
    while lon > PI {
        lon -= 2.0 * PI;
    }
    while lon < -PI {
        lon += 2.0 * PI;
    }
    lon
}

/// Rotates `pt` into the coordinate system whose north pole is at `np`
/// (Snyder, Map Projections: A Working Manual, p. 31).
pub fn rotate_to_pole(np: GeoPoint, pt: GeoPoint) -> GeoPoint {
    let phi = pt.lat;
    let lambda = pt.lon;
    let alpha = np.lat;
    let beta = np.lon;
    let lambda0 = beta;

    let cos_p = phi.cos();
    let sin_a = alpha.sin();

    // mpawm 5-7
    let sin_phip = sin_a * phi.sin() - alpha.cos() * cos_p * (lambda - lambda0).cos();

    // mpawm 5-8b, two-argument form so we end up in the right quadrant
    let lp_b = (cos_p * (lambda - lambda0).sin())
        .atan2(sin_a * cos_p * (lambda - lambda0).cos() + alpha.cos() * phi.sin());

    GeoPoint::new(sin_phip.asin(), normalize_lon(lp_b + beta))
}

/// Pole rotation in the ISEA convention.
///
/// Snyder's reference edge runs down triangle 3; ISEA's runs along the
/// side of triangle 1 between vertices 0 and 1. The two are 180 degrees
/// apart, hence the longitude shifts on either side of the rotation.
pub fn rotate_to_isea_pole(np: GeoPoint, pt: GeoPoint, lon0: f64) -> GeoPoint {
    let shifted = GeoPoint::new(np.lat, np.lon + PI);
    let rotated = rotate_to_pole(shifted, pt);

    let lon = rotated.lon - (PI - lon0 + np.lon) + PI;
    GeoPoint::new(rotated.lat, normalize_lon(lon))
}

/// Maps a point already rotated into ISEA-pole coordinates onto the face
/// containing it, returning the face index and face-local coordinates in
/// R' units.
pub fn snyder_forward(ll: GeoPoint) -> Result<(usize, PlanarPoint), Error> {
    let theta = SNYDER_THETA_DEG.to_radians();
    let g = SNYDER_G_DEG.to_radians();
    let big_g = SNYDER_BIG_G_DEG.to_radians();

    let cot_theta = 1.0 / theta.tan();
    let tan_g = g.tan();

    for face in 1..=20 {
        let center = face_center(face);

        // step 1: spherical distance from the face center
        let cos_z = center.lat.sin() * ll.lat.sin()
            + center.lat.cos() * ll.lat.cos() * (ll.lon - center.lon).cos();
        let z = cos_z.clamp(-1.0, 1.0).acos();

        // not on this face; the negated form also rejects NaN inputs
        if !(z <= g + EDGE_EPSILON) {
            continue;
        }

        // step 2: azimuth relative to the face's reference vertex
        let mut az = azimuth(center, ll) - az_adjustment(face);
        if az < 0.0 {
            az += 2.0 * PI;
        }

        // bring Az into [0, 120 degrees], recording the number of
        // adjustments so the output azimuth can be restored
        let mut az_adjust_multiples = 0i32;
        while az < 0.0 {
            az += DEG_120;
            az_adjust_multiples -= 1;
        }
        while az > DEG_120 + f64::EPSILON {
            az -= DEG_120;
            az_adjust_multiples += 1;
        }

        // step 3, eq 9: distance to the face edge along Az
        let q = tan_g.atan2(az.cos() + az.sin() * cot_theta);

        // not on this face
        if !(z <= q + EDGE_EPSILON) {
            continue;
        }

        // step 4: eqs 5-8 and 10-12 in order
        let big_h = (az.sin() * big_g.sin() * g.cos() - az.cos() * big_g.cos()).acos(); // eq 6
        let ag = az + big_g + big_h - DEG_180; // eq 7
        let az_prime = (2.0 * ag).atan2(R_PRIME * R_PRIME * tan_g * tan_g - 2.0 * ag * cot_theta); // eq 8
        let d_prime = R_PRIME * tan_g / (az_prime.cos() + az_prime.sin() * cot_theta); // eq 10
        let f = d_prime / (2.0 * R_PRIME * (q / 2.0).sin()); // eq 11
        let rho = 2.0 * R_PRIME * f * (z / 2.0).sin(); // eq 12

        let az_prime = az_prime + DEG_120 * az_adjust_multiples as f64;

        return Ok((
            face,
            PlanarPoint::new(rho * az_prime.sin(), rho * az_prime.cos()),
        ));
    }

    // the coordinate is not on any face
    Err(Error::OutsideDomain)
}
