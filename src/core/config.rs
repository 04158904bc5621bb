// ISEA
// SPDX-License-Identifier: Apache-2.0
// Copyright (c) ISEA contributors

use crate::core::constants::{DEG_90, ISEA_SCALE, ISEA_STD_LAT, ISEA_STD_LONG};

/// Pole placement presets.
///
/// `Isea` maps the geographic poles onto triangle-edge midpoints so the
/// equator is covered symmetrically; `Pole` puts an icosahedron vertex on
/// each geographic pole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Isea,
    Pole,
}

/// Output form of the forward transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressForm {
    /// Planar mosaic coordinates (`mode=plane`).
    Plane,
    /// Normalized projected-triangle coordinates.
    ProjTri,
    /// Rhombic quad coordinates, vertex flavor.
    Vertex2dd,
    /// Rhombic quad coordinates (`mode=dd`).
    Q2dd,
    /// Quad plus discrete hex indices (`mode=di`).
    Q2di,
    /// Global cell sequence number.
    SeqNum,
    /// Quad packed into the axial x coordinate (`mode=hex`).
    Hex,
}

/// Configuration record consumed by the projection core.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DggConfig {
    /// Orientation pole latitude, radians.
    pub origin_lat: f64,
    /// Orientation pole longitude, radians.
    pub origin_lon: f64,
    /// Azimuth offset at the orientation pole, radians.
    pub origin_az: f64,
    /// Hex subdivision ratio per resolution step (3 or 4).
    pub aperture: u32,
    /// Hex subdivision depth.
    pub resolution: u32,
    /// Scale applied to planar output.
    pub radius: f64,
    /// Output form of the forward transform.
    pub output: AddressForm,
}

impl Default for DggConfig {
    fn default() -> Self {
        Self {
            origin_lat: ISEA_STD_LAT.get(),
            origin_lon: ISEA_STD_LONG.get(),
            origin_az: 0.0,
            aperture: 3,
            resolution: 4,
            radius: 1.0,
            output: AddressForm::Plane,
        }
    }
}

impl DggConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects one of the pole placement presets (`orient=`).
    pub fn orient(mut self, orientation: Orientation) -> Self {
        match orientation {
            Orientation::Isea => {
                self.origin_lat = ISEA_STD_LAT.get();
                self.origin_lon = ISEA_STD_LONG.get();
            }
            Orientation::Pole => {
                self.origin_lat = DEG_90;
                self.origin_lon = 0.0;
            }
        }
        self.origin_az = 0.0;
        self
    }

    /// Overrides the orientation azimuth, radians (`azi=`).
    pub fn azi(mut self, az: f64) -> Self {
        self.origin_az = az;
        self
    }

    /// Overrides the orientation pole longitude, radians (`lon_0=`).
    pub fn lon_0(mut self, lon: f64) -> Self {
        self.origin_lon = lon;
        self
    }

    /// Overrides the orientation pole latitude, radians (`lat_0=`).
    pub fn lat_0(mut self, lat: f64) -> Self {
        self.origin_lat = lat;
        self
    }

    /// Selects the output form (`mode=`).
    pub fn output(mut self, output: AddressForm) -> Self {
        self.output = output;
        self
    }

    /// Sets the planar scale to the standard ISEA scale sqrt(5)/pi
    /// (`rescale` flag).
    pub fn rescale(mut self) -> Self {
        self.radius = ISEA_SCALE;
        self
    }

    pub fn resolution(mut self, resolution: u32) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn aperture(mut self, aperture: u32) -> Self {
        self.aperture = aperture;
        self
    }
}

/// Transient record describing the last successful forward call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DggState {
    /// Face used by the last transform (1..=20, 0 before any call).
    pub triangle: usize,
    /// Quad assigned by the last discretization (0..=11).
    pub quad: usize,
    /// Last sequence number emitted.
    pub serial: u64,
}
