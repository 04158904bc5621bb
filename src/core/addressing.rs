// ISEA
// SPDX-License-Identifier: Apache-2.0
// Copyright (c) ISEA contributors

//! Discrete global grid addressing on top of the projected faces.
//!
//! The 20 triangular faces pair up into 10 rhombic quads (1..=5 upper,
//! 6..=10 lower); quads 0 and 11 are the degenerate polar cells. Points
//! binned onto a quad edge are remapped into the neighbouring quad, and
//! the two cap vertices collapse onto the polar quads.

use crate::coordinate_systems::PlanarPoint;
use crate::core::config::DggConfig;
use crate::core::constants::COS_30;
use crate::core::hex::hexbin;
use crate::core::icosahedron::{face_center_planar, is_down_face};
use crate::error::Error;

/// Translates face-local coordinates onto the planar mosaic, scaled by
/// `radius`. Down-pointing faces are rotated upright first.
pub fn face_to_plane(face: usize, pt: PlanarPoint, radius: f64) -> PlanarPoint {
    let pt = if is_down_face(face) {
        pt.rotate_cw(180.0)
    } else {
        pt
    };
    let center = face_center_planar(face);
    PlanarPoint::new(pt.x + center.x * radius, pt.y + center.y * radius)
}

/// Rotates projected-triangle coordinates into the rhombic quad frame and
/// returns the quad number together with the quad-local point.
pub fn face_to_quad(face: usize, pt: PlanarPoint) -> (usize, PlanarPoint) {
    let down = is_down_face(face);
    let quad = ((face - 1) % 5) + ((face - 1) / 10) * 5 + 1;

    let mut pt = pt.rotate_cw(if down { 240.0 } else { 60.0 });
    if down {
        pt.x += 0.5;
        pt.y += COS_30;
    }
    (quad, pt)
}

/// Hex discretization for aperture 3 at odd resolutions, where the lattice
/// is rotated 30 degrees relative to the even case.
fn quad_to_di_ap3odd(
    cfg: &DggConfig,
    quad: usize,
    pt: PlanarPoint,
) -> Result<(usize, i64, i64), Error> {
    // number of hexes from apex to base of a triangle
    let sidelength = (2f64.powi(cfg.resolution as i32) + 1.0) / 2.0;

    // apex to base is cos(30 degrees)
    let hexwidth = COS_30 / sidelength;

    let maxcoord = (sidelength * 2.0).round() as i64;

    let h = hexbin(hexwidth, pt.x, pt.y)?.to_cube();

    let mut quad = quad;
    let mut d = h.x - h.z;
    let mut i = h.x + h.y + h.y;

    // Test for max coordinates toward the next quad in the same row first,
    // so the both-max corner lands on the pole.
    if quad <= 5 {
        if d == 0 && i == maxcoord {
            // north pole
            quad = 0;
            d = 0;
            i = 0;
        } else if i == maxcoord {
            // upper right in next quad
            quad += 1;
            if quad == 6 {
                quad = 1;
            }
            i = maxcoord - d;
            d = 0;
        } else if d == maxcoord {
            // lower right in quad to lower right
            quad += 5;
            d = 0;
        }
    } else {
        if i == 0 && d == maxcoord {
            // south pole
            quad = 11;
            d = 0;
            i = 0;
        } else if d == maxcoord {
            // lower right in next quad
            quad += 1;
            if quad == 11 {
                quad = 6;
            }
            d = maxcoord - i;
            i = 0;
        } else if i == maxcoord {
            // upper right in quad to upper right
            quad = (quad - 4) % 5;
            i = 0;
        }
    }

    Ok((quad, d, i))
}

/// Bins a quad-local point into discrete hex indices `(d, i)`, remapping
/// across quad boundaries where the bin lands on an edge.
pub fn quad_to_di(cfg: &DggConfig, quad: usize, pt: PlanarPoint) -> Result<(usize, i64, i64), Error> {
    if cfg.aperture == 3 && cfg.resolution % 2 != 0 {
        return quad_to_di_ap3odd(cfg, quad, pt);
    }

    let sidelength = if cfg.aperture > 0 {
        let s = (cfg.aperture as f64).powf(cfg.resolution as f64 / 2.0);
        if s.abs() > i32::MAX as f64 {
            return Err(Error::Domain);
        }
        s.round() as i64
    } else {
        cfg.resolution as i64
    };

    if sidelength == 0 {
        return Err(Error::Domain);
    }
    let hexwidth = 1.0 / sidelength as f64;

    let v = pt.rotate_cw(-30.0);
    let mut h = hexbin(hexwidth, v.x, v.y)?.to_cube();

    let mut quad = quad;
    // the bin may actually be on another quad
    if quad <= 5 {
        if h.x == 0 && h.z == -sidelength {
            // north pole
            quad = 0;
            h.z = 0;
            h.y = 0;
            h.x = 0;
        } else if h.z == -sidelength {
            quad += 1;
            if quad == 6 {
                quad = 1;
            }
            h.y = sidelength - h.x;
            h.z = h.x - sidelength;
            h.x = 0;
        } else if h.x == sidelength {
            quad += 5;
            h.y = -h.z;
            h.x = 0;
        }
    } else {
        if h.z == 0 && h.x == sidelength {
            // south pole
            quad = 11;
            h.x = 0;
            h.y = 0;
            h.z = 0;
        } else if h.x == sidelength {
            quad += 1;
            if quad == 11 {
                quad = 6;
            }
            h.x = h.y + sidelength;
            h.y = 0;
            h.z = -h.x;
        } else if h.y == -sidelength {
            quad -= 4;
            h.y = 0;
            h.z = -h.x;
        }
    }

    Ok((quad, h.x, -h.z))
}

/// Combined face-to-quad transform and hex discretization.
pub fn face_to_di(
    cfg: &DggConfig,
    face: usize,
    pt: PlanarPoint,
) -> Result<(usize, i64, i64), Error> {
    let (quad, v) = face_to_quad(face, pt);
    quad_to_di(cfg, quad, v)
}

/// Encodes a quad + hex index pair as a global sequence number.
///
/// Quad 0 is cell 1, quads 1..=10 hold `aperture^resolution` cells each,
/// and quad 11 is the last cell.
pub fn di_to_serial(cfg: &DggConfig, quad: usize, d: i64, i: i64) -> u64 {
    if quad == 0 {
        return 1;
    }
    // hexes in a quad
    let hexes = (cfg.aperture as f64).powi(cfg.resolution as i32).round() as i64;
    if quad == 11 {
        return (1 + 10 * hexes + 1) as u64;
    }

    let sn = if cfg.aperture == 3 && cfg.resolution % 2 == 1 {
        let height = (cfg.aperture as f64)
            .powf((cfg.resolution as f64 - 1.0) / 2.0)
            .floor() as i64;
        d * height + i / height + (quad as i64 - 1) * hexes + 2
    } else {
        let sidelength = (cfg.aperture as f64).powf(cfg.resolution as f64 / 2.0).round() as i64;
        (quad as i64 - 1) * hexes + sidelength * d + i + 2
    };

    sn as u64
}

/// Packs the quad number into the low four bits of the axial x coordinate.
pub fn di_to_hex(quad: usize, d: i64, i: i64) -> Result<(i64, i64), Error> {
    if d < (i32::MIN >> 4) as i64 || d > (i32::MAX >> 4) as i64 {
        return Err(Error::InvalidShift);
    }
    Ok((d * 16 + quad as i64, i))
}
