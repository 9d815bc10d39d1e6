// Released under MIT License.
// Copyright (c) 2025 Ladislav Bartos

//! # hbfreq_rs: Hydrogen Bond Frequency Analysis for Rust
//!
//! Rust library for post-processing hydrogen bonds identified in molecular dynamics simulations.
//!
//! `hbfreq_rs` does not search for hydrogen bonds itself. It takes donor-hydrogen-acceptor
//! atom indices produced by a hydrogen bond detector for each frame of a trajectory,
//! converts them into human-readable labels, and aggregates them across frames and trajectories.
//!
//! ## Usage
//!
//! Run
//!
//! ```bash
//! $ cargo add hbfreq_rs
//! ```
//!
//! Import the crate in your Rust code:
//! ```
//! use hbfreq_rs::prelude::*;
//! ```
//!
//! ## Hydrogen bond labels
//!
//! Each donor and acceptor atom is converted into a label `<residue name><residue number><role>-<element>`,
//! where the role is `b` for protein backbone atoms, `s` for sidechain atoms, and `w` for water atoms.
//! For instance, the sidechain oxygen of serine 195 is labeled `SER195s-O`
//! and the oxygen of water molecule 1001 is labeled `HOH1001w-O`.
//!
//! Water molecules that are tracked across the trajectory can instead be labeled by a letter code
//! (e.g., `w1`), see [`hbonds::remap::map_waters_to_letters`].
//!
//! ## Examples
//!
//! #### Frequency matrix of hydrogen bonds
//!
//! Label hydrogen bonds from two independent trajectories and calculate how often each
//! donor-acceptor pair is observed.
//!
//! ```no_run
//! use hbfreq_rs::prelude::*;
//! use ndarray::Array2;
//! use std::error::Error;
//!
//! fn matrix(
//!     system: &System,
//!     hbonds1: &[Array2<usize>],
//!     hbonds2: &[Array2<usize>],
//! ) -> Result<(), Box<dyn Error>> {
//!     // convert atom indices into labels
//!     let trj1 = hbonds_to_labels(hbonds1, system, None)?;
//!     let trj2 = hbonds_to_labels(hbonds2, system, None)?;
//!
//!     // frames of both trajectories are pooled
//!     let matrix = HBondMatrix::new(&[trj1, trj2])?;
//!
//!     for (donor, acceptor, frequency) in matrix.pairs() {
//!         println!("{} -> {}: {:.3}", donor, acceptor, frequency);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! #### Partners of a single participant
//!
//! Identify the most frequent donors of hydrogen bonds accepted by serine 195
//! in a reduced trajectory with tracked water molecules.
//!
//! ```no_run
//! use hbfreq_rs::prelude::*;
//! use hbfreq_rs::io::water_index::read_water_indices;
//! use indexmap::IndexMap;
//! use ndarray::Array2;
//! use std::error::Error;
//!
//! fn partners(
//!     full: &System,
//!     reduced: &System,
//!     tracked_oxygens: &IndexMap<String, Vec<usize>>,
//!     hbonds: &[Array2<usize>],
//! ) -> Result<(), Box<dyn Error>> {
//!     // water residues of the full trajectory kept in each frame of the reduced trajectory
//!     let rows = read_water_indices("water_indices.dat")?;
//!     let letters = map_waters_to_letters(full, reduced, &rows, tracked_oxygens)?;
//!
//!     let trj = hbonds_to_labels(hbonds, reduced, Some(&letters))?;
//!     let frequencies = most_frequent(&[trj], "SER195s-O")?;
//!
//!     for (donor, frequency) in frequencies.donors().iter().take(6) {
//!         println!("{}: {:.1} %", donor, frequency * 100.0);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Topology
//!
//! Residue and atom information is accessed through the [`topology::Topology`] trait.
//! [`system::System`] is an in-memory implementation; residues are classified as water
//! or protein and atoms as backbone or sidechain atoms based on [`structures::classes::ResidueClasses`],
//! which can be customized using a YAML file.
//!
//! ## Logging
//!
//! `hbfreq_rs` reports its progress using the `log` crate. No logger is installed by the library.
//!
//! ## Error handling
//! The individual error types provided by `hbfreq_rs` are not exported into the `prelude` module.
//! If you want to work with a specific error type, include it explicitly from the `errors` module:
//! ```
//! use hbfreq_rs::errors::RemapError;
//! ```
//!
//! ## License
//! This library is released under the MIT License.

/// Current version of the `hbfreq_rs` library.
pub const HBFREQ_VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod errors;
pub mod hbonds;
pub mod io {
    pub mod water_index;
}
pub mod structures;
pub mod system;
mod test_utilities;
pub mod topology;

/// Reexported basic `hbfreq_rs` structures, traits, and functions.
pub mod prelude {
    pub use crate::hbonds::convert::hbonds_to_labels;
    pub use crate::hbonds::labeler::AtomLabeler;
    pub use crate::hbonds::matrix::HBondMatrix;
    pub use crate::hbonds::plot::{FrequencyPlot, PartnerRole, PlotBar};
    pub use crate::hbonds::remap::{map_waters_to_letters, WaterLetterMapping};
    pub use crate::hbonds::timeline::{most_frequent, ParticipantTimeline, PartnerFrequencies};
    pub use crate::structures::atom::Atom;
    pub use crate::structures::classes::ResidueClasses;
    pub use crate::structures::label::{
        AtomRole, FrameHBonds, HBondAtom, LabeledHBond, TrajectoryHBonds,
    };
    pub use crate::structures::residue::Residue;
    pub use crate::system::System;
    pub use crate::topology::{Selection, Topology};
}
