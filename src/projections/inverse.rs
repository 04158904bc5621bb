// ISEA
// SPDX-License-Identifier: Apache-2.0
// Copyright (c) ISEA contributors

//! Inverse Snyder projection for the default planar configurations.
//!
//! Supported for `output == Plane`, zero azimuth, aperture 3 and
//! resolution 4, under the `isea` or `pole` orientation; anything else
//! yields [`GeoPoint::INFINITE`]. The face is identified by undoing the
//! rhombic mosaic tiling, then the spherical point is recovered by
//! Newton-Raphson iteration on Snyder's area equation.
//!
//! See Erika Harrison, Ali Mahdavi-Amiri, Faramarz Samavati,
//! "Optimization of inverse Snyder polyhedral projection", Cyberworlds 2011.

use lazy_static::lazy_static;

use crate::coordinate_systems::{GeoPoint, PlanarPoint};
use crate::core::config::{AddressForm, DggConfig};
use crate::core::constants::{
    AUTHALIC_RADIUS, DEG_120, DEG_144, DEG_180, DEG_90, ISEA_STD_LAT, ISEA_STD_LONG,
};
use crate::error::Error;

/// R'/R as the inverse derivation states it: (1/(2 sqrt(5)) + 1/6) * sqrt(pi sqrt(3))
const RPRIME_OVER_R: f64 = 0.9103832815095032;

/// R^2 for the authalic sphere
const R2: f64 = AUTHALIC_RADIUS * AUTHALIC_RADIUS;

/// tan(g), g the center-to-vertex spherical distance
const TAN_G: f64 = 0.763932022500419;

const SQRT_3: f64 = 1.73205080756887729352744634150587236694280525381038;

/// Longitude of the west vertex of the first face row
const WEST_VERTEX_LON: f64 = -DEG_144;

/// Azimuth period of a triangular face
const AZ_MAX: f64 = DEG_120;

/// Newton termination threshold (1e-11 degrees)
const NEWTON_PRECISION: f64 = 1e-11 * std::f64::consts::PI / 180.0;

/// Iteration cap; the loop settles well under 30 steps for sane inputs
const NEWTON_MAX_ITERATIONS: u32 = 100;

/// Latitudes this close to a pole get their longitude forced to zero
/// (1e-5 degrees)
const POLE_PRECISION: f64 = 1e-5 * std::f64::consts::PI / 180.0;

/// Boundary nudge for the face identification; 1e-11 is too small for the
/// forward projection's precision at face boundaries
const EPSILON: f64 = 2e-8;

/// Mosaic geometry in meters of the authalic sphere.
struct MosaicGeometry {
    /// R', the planar face scale
    rprime: f64,
    /// R' tan g, twice the center-to-base distance
    rprime_tan_g: f64,
    center_to_base: f64,
    tri_width: f64,
    /// (R' tan g)^2
    rprime2_tan2_g: f64,
    cot_theta: f64,
    /// cos G
    cos_big_g: f64,
    /// sin G cos g
    sin_big_g_cos_g: f64,
    /// mosaic row offsets, in center-to-base units
    y_offsets: [f64; 4],
    /// spherical face centers as the inverse derivation defines them
    face_centers: [GeoPoint; 20],
}

impl MosaicGeometry {
    fn new() -> Self {
        let e_lat = 52.6226318593487_f64.to_radians();
        let f_lat = 10.8123169635739_f64.to_radians();

        let rprime = RPRIME_OVER_R * AUTHALIC_RADIUS;
        let rprime_tan_g = rprime * TAN_G;
        let center_to_base = rprime_tan_g / 2.0;

        let mut face_centers = [GeoPoint::default(); 20];
        let rows: [(f64, [f64; 5]); 4] = [
            (e_lat, [-144.0, -72.0, 0.0, 72.0, 144.0]),
            (f_lat, [-144.0, -72.0, 0.0, 72.0, 144.0]),
            (-f_lat, [-108.0, -36.0, 36.0, 108.0, 180.0]),
            (-e_lat, [-108.0, -36.0, 36.0, 108.0, 180.0]),
        ];
        for (row, (lat, lons)) in rows.iter().enumerate() {
            for (col, lon) in lons.iter().enumerate() {
                face_centers[row * 5 + col] = GeoPoint::new(*lat, lon.to_radians());
            }
        }

        // g restated from the dodecahedron vertex angles:
        // F + 2 atan(phi) - 90 degrees
        let g = f_lat + 2.0 * 58.2825255885418_f64.to_radians() - DEG_90;

        Self {
            rprime,
            rprime_tan_g,
            center_to_base,
            tri_width: rprime_tan_g * SQRT_3,
            rprime2_tan2_g: rprime_tan_g * rprime_tan_g,
            cot_theta: 1.0 / 30f64.to_radians().tan(),
            cos_big_g: 36f64.to_radians().cos(),
            sin_big_g_cos_g: 36f64.to_radians().sin() * g.cos(),
            y_offsets: [
                -2.0 * center_to_base,
                -4.0 * center_to_base,
                -5.0 * center_to_base,
                -7.0 * center_to_base,
            ],
            face_centers,
        }
    }
}

/// Inverse planar projection for one fixed orientation.
struct PlanarInverse {
    orientation: GeoPoint,
    cos_orientation_lat: f64,
    sin_orientation_lat: f64,
}

lazy_static! {
    static ref GEOMETRY: MosaicGeometry = MosaicGeometry::new();

    /// Orientation symmetric to the equator (`orient=isea`): poles on
    /// edge midpoints, orientation pole at ((E + F)/2, -11.25 degrees).
    static ref STANDARD_ISEA: PlanarInverse = PlanarInverse::new(GeoPoint::new(
        (52.6226318593487_f64.to_radians() + 10.8123169635739_f64.to_radians()) / 2.0,
        (-11.25_f64).to_radians(),
    ));

    /// Polar orientation (`orient=pole`): icosahedron vertices on the
    /// geographic poles.
    static ref POLAR_ISEA: PlanarInverse = PlanarInverse::new(GeoPoint::new(0.0, 0.0));
}

/// Azimuth origin of a face on the mosaic: up-pointing rows start at 0,
/// down-pointing rows half a turn later.
fn face_orientation(face: usize) -> f64 {
    if (1..=5).contains(&face) || (11..=15).contains(&face) {
        0.0
    } else {
        DEG_180
    }
}

impl PlanarInverse {
    fn new(orientation: GeoPoint) -> Self {
        Self {
            orientation,
            cos_orientation_lat: orientation.lat.cos(),
            sin_orientation_lat: orientation.lat.sin(),
        }
    }

    /// Identifies the face under a mosaic point (in meters) and recovers
    /// the geographic coordinate. `None` when the point is outside the
    /// rhombic tiling.
    fn cartesian_to_geo(&self, position: PlanarPoint) -> Result<Option<GeoPoint>, Error> {
        let geom = &*GEOMETRY;

        // Rotate and shear the mosaic into a [0,5] x [0,6] rhombus grid
        let sr = -(SQRT_3 / 2.0); // sin(-60)
        let cr = 0.5; // cos(-60)
        let shear_x = 1.0 / SQRT_3;
        let sx = 1.0 / geom.tri_width;
        let sy = 1.0 / (3.0 * geom.center_to_base);

        let yp = -(position.x * sr + position.y * cr);
        let mut x = (position.x * cr - position.y * sr + yp * shear_x) * sx;
        let mut y = yp * sy;

        // nudge grid-boundary points toward the interior
        if x < 0.0 || (y > x && x < 5.0 - EPSILON) {
            x += EPSILON;
        } else if x > 5.0 || (y < x && x > EPSILON) {
            x -= EPSILON;
        }
        if y < 0.0 || (x > y && y < 6.0 - EPSILON) {
            y += EPSILON;
        } else if y > 6.0 || (x < y && y > EPSILON) {
            y -= EPSILON;
        }

        if !(0.0..=5.0).contains(&x) || !(0.0..=6.0).contains(&y) {
            return Ok(None);
        }

        let ix = (x as i64).clamp(0, 4);
        let iy = (y as i64).clamp(0, 5);
        if iy != ix && iy != ix + 1 {
            return Ok(None);
        }

        // Each rhombus holds one up-pointing and one down-pointing face
        let rhombus = ix + iy;
        let top = x - ix as f64 > y - iy as f64;
        let face = match (rhombus, top) {
            (0, true) => 1,
            (0, false) => 6,
            (2, true) => 2,
            (2, false) => 7,
            (4, true) => 3,
            (4, false) => 8,
            (6, true) => 4,
            (6, false) => 9,
            (8, true) => 5,
            (8, false) => 10,
            (1, true) => 11,
            (1, false) => 16,
            (3, true) => 12,
            (3, false) => 17,
            (5, true) => 13,
            (5, false) => 18,
            (7, true) => 14,
            (7, false) => 19,
            (9, true) => 15,
            (9, false) => 20,
            _ => return Ok(None),
        };

        // face-local offset from the face's mosaic center
        let fy = (face - 1) / 5;
        let fx = (face - 1) - 5 * fy;
        let rx = position.x - (2 * fx + fy / 2 + 1) as f64 * geom.tri_width / 2.0;
        let ry = position.y - (geom.y_offsets[fy] + 3.0 * geom.center_to_base);

        let dst = self.icosahedron_to_sphere(face, PlanarPoint::new(rx, ry))?;

        let mut lon = dst.lon;
        if lon < -std::f64::consts::PI - EPSILON {
            lon += 2.0 * std::f64::consts::PI;
        } else if lon > std::f64::consts::PI + EPSILON {
            lon -= 2.0 * std::f64::consts::PI;
        }

        Ok(Some(GeoPoint::new(dst.lat, lon)))
    }

    /// Converts face-local coordinates (meters) back to geographic
    /// coordinates by inverting Snyder's equal-area equations.
    fn icosahedron_to_sphere(&self, face: usize, c: PlanarPoint) -> Result<GeoPoint, Error> {
        let geom = &*GEOMETRY;

        let mut az = c.x.atan2(c.y); // Az'
        let rho = (c.x * c.x + c.y * c.y).sqrt();
        let mut az_adjustment = face_orientation(face);

        az += az_adjustment;
        while az < 0.0 {
            az_adjustment += AZ_MAX;
            az += AZ_MAX;
        }
        while az > AZ_MAX {
            az_adjustment -= AZ_MAX;
            az -= AZ_MAX;
        }

        let sin_az = az.sin();
        let cos_az = az.cos();
        let cot_az = cos_az / sin_az;

        // A_{ABD}, the planar area swept out up to Az'
        let area = geom.rprime2_tan2_g / (2.0 * (cot_az + geom.cot_theta));
        let area_term = area / R2 - WEST_VERTEX_LON;

        // Newton-Raphson for the azimuth on the sphere
        let mut az_earth = az;
        let mut delta_az = 10.0 * NEWTON_PRECISION;
        let mut iterations = 0;
        while delta_az.abs() > NEWTON_PRECISION {
            if iterations >= NEWTON_MAX_ITERATIONS {
                return Err(Error::Convergence);
            }
            let sin_az_earth = az_earth.sin();
            let cos_az_earth = az_earth.cos();
            let big_h =
                (sin_az_earth * geom.sin_big_g_cos_g - cos_az_earth * geom.cos_big_g).acos();
            let f_az = area_term - big_h - az_earth;
            let f_prime_az =
                (cos_az_earth * geom.sin_big_g_cos_g + sin_az_earth * geom.cos_big_g) / big_h.sin()
                    - 1.0;
            delta_az = -f_az / f_prime_az;
            az_earth += delta_az;
            iterations += 1;
        }

        let sin_az_earth = az_earth.sin();
        let cos_az_earth = az_earth.cos();
        let q = TAN_G.atan2(cos_az_earth + sin_az_earth * geom.cot_theta);
        let d = geom.rprime_tan_g / (cos_az + sin_az * geom.cot_theta); // d'
        let f = d / (2.0 * geom.rprime * (q / 2.0).sin());
        let z = 2.0 * (rho / (2.0 * geom.rprime * f)).asin();

        az_earth -= az_adjustment;

        let center = geom.face_centers[face - 1];
        let sin_lat0 = center.lat.sin();
        let cos_lat0 = center.lat.cos();
        let sin_z = z.sin();
        let cos_z = z.cos();
        let cos_lat0_sin_z = cos_lat0 * sin_z;

        let lat = (sin_lat0 * cos_z + cos_lat0_sin_z * az_earth.cos()).asin();
        let lon = center.lon
            + (az_earth.sin() * cos_lat0_sin_z).atan2(cos_z - sin_lat0 * lat.sin());

        Ok(self.revert_orientation(GeoPoint::new(lat, lon)))
    }

    /// Undoes the pole orientation, clamping near-polar longitudes to zero.
    fn revert_orientation(&self, c: GeoPoint) -> GeoPoint {
        let lon = if c.lat < -DEG_90 + POLE_PRECISION || c.lat > DEG_90 - POLE_PRECISION {
            0.0
        } else {
            c.lon
        };

        if self.orientation.lat != 0.0 || self.orientation.lon != 0.0 {
            let sin_lat = c.lat.sin();
            let cos_lat = c.lat.cos();
            let sin_lon = lon.sin();
            let cos_lon = lon.cos();
            let cos_lon_cos_lat = cos_lon * cos_lat;
            GeoPoint::new(
                (sin_lat * self.cos_orientation_lat - cos_lon_cos_lat * self.sin_orientation_lat)
                    .asin(),
                (sin_lon * cos_lat).atan2(
                    cos_lon_cos_lat * self.cos_orientation_lat
                        + sin_lat * self.sin_orientation_lat,
                ) - self.orientation.lon,
            )
        } else {
            GeoPoint::new(c.lat, lon)
        }
    }
}

/// Returns the inverse projection instance matching the configuration, if
/// the configuration is one of the supported ones.
fn supported_inverse(cfg: &DggConfig) -> Option<&'static PlanarInverse> {
    if cfg.output != AddressForm::Plane
        || cfg.origin_az != 0.0
        || cfg.aperture != 3
        || cfg.resolution != 4
    {
        return None;
    }
    if cfg.origin_lat == ISEA_STD_LAT.get() && cfg.origin_lon == ISEA_STD_LONG.get() {
        Some(&STANDARD_ISEA)
    } else if cfg.origin_lat == DEG_90 && cfg.origin_lon == 0.0 {
        Some(&POLAR_ISEA)
    } else {
        None
    }
}

/// Inverse projection of a planar point in units of the authalic radius.
///
/// Returns [`GeoPoint::INFINITE`] when the configuration is unsupported or
/// the input falls outside the rhombic mosaic.
pub fn inverse(cfg: &DggConfig, pt: PlanarPoint) -> Result<GeoPoint, Error> {
    let projection = match supported_inverse(cfg) {
        Some(p) => p,
        None => return Ok(GeoPoint::INFINITE),
    };

    let geom = &*GEOMETRY;
    let input = PlanarPoint::new(
        pt.x * AUTHALIC_RADIUS + 2.5 * geom.tri_width,
        pt.y * AUTHALIC_RADIUS - 1.5 * geom.center_to_base,
    );

    Ok(projection
        .cartesian_to_geo(input)?
        .unwrap_or(GeoPoint::INFINITE))
}
