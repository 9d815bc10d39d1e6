// Released under MIT License.
// Copyright (c) 2025 Ladislav Bartos

//! Post-processing of hydrogen bonds identified in molecular dynamics trajectories.
//!
//! Hydrogen bonds are first converted from atom indices into labels ([`convert`]),
//! optionally identifying tracked water molecules by their letter codes ([`remap`]).
//! Labeled hydrogen bonds of one or more trajectories can then be aggregated into
//! a frequency matrix ([`matrix`]) or analyzed for a single participant ([`timeline`]).

pub mod convert;
pub mod labeler;
pub mod matrix;
pub mod plot;
pub mod remap;
pub mod timeline;
