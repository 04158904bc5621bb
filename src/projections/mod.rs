// ISEA
// SPDX-License-Identifier: Apache-2.0
// Copyright (c) ISEA contributors

pub mod inverse;
pub mod snyder;

use crate::core::constants::{WGS84_MAJOR, WGS84_MINOR};

/// Converts a geocentric latitude to the WGS84 geodetic latitude.
///
/// Not applied anywhere by default; callers that align against
/// ellipsoidal data sets can run inverse results through it.
pub fn lat_geocentric_to_geodetic(theta: f64) -> f64 {
    let a2_over_b2 = (WGS84_MAJOR * WGS84_MAJOR) / (WGS84_MINOR * WGS84_MINOR);
    (theta.tan() * a2_over_b2).atan()
}
