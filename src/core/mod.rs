// ISEA
// SPDX-License-Identifier: Apache-2.0
// Copyright (c) ISEA contributors

pub mod addressing;
pub mod config;
pub mod constants;
pub mod hex;
pub mod icosahedron;
pub mod projection;
