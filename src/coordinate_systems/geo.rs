// ISEA
// SPDX-License-Identifier: Apache-2.0
// Copyright (c) ISEA contributors

//! Geographic coordinate system using latitude and longitude.

/// Spherical point in radians.
///
/// Latitude lies in `[-pi/2, pi/2]`; longitude is kept normalized to
/// `(-pi, pi]` by the rotation routines.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct GeoPoint {
    /// Latitude, in radians.
    pub lat: f64,
    /// Longitude, in radians.
    pub lon: f64,
}

impl GeoPoint {
    /// Sentinel returned by the inverse projection for inputs it does not
    /// support (outside the mosaic, or an unsupported configuration).
    pub const INFINITE: GeoPoint = GeoPoint {
        lat: f64::INFINITY,
        lon: f64::INFINITY,
    };

    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// True unless this is the infinite sentinel (or otherwise non-finite).
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}
