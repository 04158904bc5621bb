// ISEA
// SPDX-License-Identifier: Apache-2.0
// Copyright (c) ISEA contributors

// Internal modules - public only for testing
#[cfg_attr(not(test), allow(unused))]
pub mod coordinate_systems;
#[cfg_attr(not(test), allow(unused))]
pub mod core;
#[cfg_attr(not(test), allow(unused))]
pub mod projections;

pub mod error;

// PUBLIC API
// Projection
pub use core::projection::{IseaProjection, Projected};

// Configuration
pub use core::config::{AddressForm, DggConfig, DggState, Orientation};

// Types
pub use coordinate_systems::{Degrees, GeoPoint, PlanarPoint, Radians};
pub use error::Error;
