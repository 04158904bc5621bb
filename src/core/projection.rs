// ISEA
// SPDX-License-Identifier: Apache-2.0
// Copyright (c) ISEA contributors

//! Top-level projection dispatcher.

use crate::coordinate_systems::{GeoPoint, PlanarPoint};
use crate::core::addressing::{di_to_hex, di_to_serial, face_to_di, face_to_plane, face_to_quad};
use crate::core::config::{AddressForm, DggConfig, DggState};
use crate::core::constants::{ISEA_SCALE, TRI_Y_OFFSET};
use crate::error::Error;
use crate::projections::inverse;
use crate::projections::snyder::{rotate_to_isea_pole, snyder_forward};

/// Result of a forward transform, tagged by the configured output form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projected {
    /// Planar mosaic coordinates scaled by the configured radius.
    Plane(PlanarPoint),
    /// Normalized projected-triangle coordinates.
    ProjTri(PlanarPoint),
    /// Rhombic quad coordinates, vertex flavor.
    Vertex2dd { quad: usize, point: PlanarPoint },
    /// Rhombic quad coordinates.
    Q2dd { quad: usize, point: PlanarPoint },
    /// Quad plus discrete hex indices.
    Q2di { quad: usize, d: i64, i: i64 },
    /// Global cell sequence number.
    SeqNum(u64),
    /// Axial coordinate with the quad packed into the low bits of x.
    Hex { x: i64, y: i64 },
}

/// ISEA projection engine holding one configuration and the transient
/// state of the last successful forward call.
///
/// Forward and inverse calls are pure functions of the configuration;
/// only the state record is mutated, so distinct instances can be used
/// freely across threads.
#[derive(Debug, Clone)]
pub struct IseaProjection {
    config: DggConfig,
    state: DggState,
}

impl IseaProjection {
    pub fn new(config: DggConfig) -> Self {
        Self {
            config,
            state: DggState::default(),
        }
    }

    pub fn config(&self) -> &DggConfig {
        &self.config
    }

    /// Metadata recorded by the last successful forward call.
    pub fn state(&self) -> &DggState {
        &self.state
    }

    /// Projects a geographic point into the configured output form.
    ///
    /// The state record is left untouched when an error is returned.
    pub fn forward(&mut self, geo: GeoPoint) -> Result<Projected, Error> {
        let cfg = &self.config;

        let pole = GeoPoint::new(cfg.origin_lat, cfg.origin_lon);
        let rotated = rotate_to_isea_pole(pole, geo, cfg.origin_az);
        let (face, out) = snyder_forward(rotated)?;

        let mut state = DggState {
            triangle: face,
            quad: 0,
            serial: 0,
        };

        if cfg.output == AddressForm::Plane {
            let plane = face_to_plane(
                face,
                PlanarPoint::new(out.x * cfg.radius, out.y * cfg.radius),
                cfg.radius,
            );
            self.state = state;
            return Ok(Projected::Plane(plane));
        }

        // convert to the ISEA standard triangle size
        let out = PlanarPoint::new(
            out.x * ISEA_SCALE + 0.5,
            out.y * ISEA_SCALE + 2.0 * TRI_Y_OFFSET,
        );

        let projected = match cfg.output {
            AddressForm::ProjTri => Projected::ProjTri(out),
            AddressForm::Vertex2dd => {
                let (quad, point) = face_to_quad(face, out);
                state.quad = quad;
                Projected::Vertex2dd { quad, point }
            }
            AddressForm::Q2dd => {
                let (quad, point) = face_to_quad(face, out);
                state.quad = quad;
                Projected::Q2dd { quad, point }
            }
            AddressForm::Q2di => {
                let (quad, d, i) = face_to_di(cfg, face, out)?;
                state.quad = quad;
                Projected::Q2di { quad, d, i }
            }
            AddressForm::SeqNum => {
                let (quad, d, i) = face_to_di(cfg, face, out)?;
                let serial = di_to_serial(cfg, quad, d, i);
                state.quad = quad;
                state.serial = serial;
                Projected::SeqNum(serial)
            }
            AddressForm::Hex => {
                let (quad, d, i) = face_to_di(cfg, face, out)?;
                let (x, y) = di_to_hex(quad, d, i)?;
                state.quad = quad;
                Projected::Hex { x, y }
            }
            AddressForm::Plane => unreachable!("handled above"),
        };

        self.state = state;
        Ok(projected)
    }

    /// Recovers the geographic point under a planar coordinate, in units
    /// of the authalic radius.
    ///
    /// Returns [`GeoPoint::INFINITE`] when the configuration is not one of
    /// the supported inverse configurations or the input lies outside the
    /// mosaic.
    pub fn inverse(&self, pt: PlanarPoint) -> Result<GeoPoint, Error> {
        inverse::inverse(&self.config, pt)
    }
}
