// ISEA
// SPDX-License-Identifier: Apache-2.0
// Copyright (c) ISEA contributors

//! Coordinate systems used by the projection internally.

mod base;
pub use base::{Degrees, Radians};

mod geo;
pub use geo::GeoPoint;

mod planar;
pub use planar::PlanarPoint;
