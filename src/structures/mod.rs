// Released under MIT License.
// Copyright (c) 2025 Ladislav Bartos

//! Implementation of various structures used in the `hbfreq_rs` library.

pub mod atom;
pub mod classes;
pub mod label;
pub mod residue;
