// ISEA
// SPDX-License-Identifier: Apache-2.0
// Copyright (c) ISEA contributors

use crate::coordinate_systems::Radians;

/// 36 degrees in radians
pub const DEG_36: f64 = 0.62831853071795864768;

/// 72 degrees in radians
pub const DEG_72: f64 = 1.25663706143591729537;

/// 90 degrees in radians
pub const DEG_90: f64 = std::f64::consts::FRAC_PI_2;

/// 108 degrees in radians
pub const DEG_108: f64 = 1.88495559215387594306;

/// 120 degrees in radians
pub const DEG_120: f64 = 2.09439510239319549229;

/// 144 degrees in radians
pub const DEG_144: f64 = 2.51327412287183459075;

/// 180 degrees in radians
pub const DEG_180: f64 = std::f64::consts::PI;

/// Standard ISEA planar scale = sqrt(5)/pi
pub const ISEA_SCALE: f64 = 0.8301572857837594396028083;

/// Latitude of the icosahedron vertex belts = atan(1/2) = 26.565051177 degrees
pub const V_LAT: f64 = 0.46364760899944494524;

/// Latitude of the upper face-center row = atan((3 + sqrt(5))/4) = 52.62263186 degrees
pub const E_RAD: f64 = 0.91843818702186776133;

/// Latitude of the second face-center row = atan((3 - sqrt(5))/4) = 10.81231696 degrees
pub const F_RAD: f64 = 0.18871053072122403508;

/// Mosaic column spacing = tan(g) * sin(60 degrees), in R' units
pub const TABLE_G: f64 = 0.6615845383;

/// Mosaic row spacing unit = tan(g)/4, in R' units
pub const TABLE_H: f64 = 0.1909830056;

/// Pole latitude of the standard ISEA orientation (radians)
pub const ISEA_STD_LAT: Radians = Radians::new_unchecked(1.01722196792335072101);

/// Pole longitude of the standard ISEA orientation (radians) = 11.25 degrees
pub const ISEA_STD_LONG: Radians = Radians::new_unchecked(0.19634954084936207740);

/// Planar face scale R'/R = (1/(2 sqrt(5)) + 1/6) * sqrt(pi sqrt(3))
pub const R_PRIME: f64 = 0.91038328153090290025;

/// Spherical distance from a face center to its vertices, degrees (Snyder's g)
pub const SNYDER_G_DEG: f64 = 37.37736814;

/// Half the central angle of a spherical face, degrees (Snyder's G)
pub const SNYDER_BIG_G_DEG: f64 = 36.0;

/// Half the central angle of a planar face, degrees (Snyder's theta)
pub const SNYDER_THETA_DEG: f64 = 30.0;

/// cos(30 degrees), the apex-to-base height of a unit rhombus half
pub const COS_30: f64 = 0.86602540378443864672;

/// Vertical offset of the normalized projected triangle = sqrt(3)/12
pub const TRI_Y_OFFSET: f64 = 0.14433756729740644112;

/// WGS84 semi-major axis in meters
pub const WGS84_MAJOR: f64 = 6378137.0;

/// WGS84 inverse flattening
pub const WGS84_INV_FLATTENING: f64 = 298.257223563;

/// WGS84 semi-minor axis in meters
pub const WGS84_MINOR: f64 = WGS84_MAJOR - WGS84_MAJOR / WGS84_INV_FLATTENING;

/// Radius of the sphere with the surface area of the WGS84 ellipsoid, meters
pub const AUTHALIC_RADIUS: f64 = 6371007.18091875;
