// ISEA
// SPDX-License-Identifier: Apache-2.0
// Copyright (c) ISEA contributors

use thiserror::Error as DeriveError;

/// Failure kinds surfaced by the projection core.
#[derive(Debug, DeriveError, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// The face search exhausted all 20 icosahedron faces without a match.
    #[error("coordinate transform outside projection domain")]
    OutsideDomain,

    /// A numeric precondition of hex binning was violated (zero hex width,
    /// or coordinates too large to round into integer axial space).
    #[error("numeric domain violation in hex binning")]
    Domain,

    /// Packing the quad into the axial coordinate would shift bits out of
    /// the 28-bit signed range.
    #[error("hex coordinate too large to encode")]
    InvalidShift,

    /// Newton iteration of the inverse projection failed to converge
    /// within the iteration cap.
    #[error("inverse projection failed to converge")]
    Convergence,
}
