// Released under MIT License.
// Copyright (c) 2025 Ladislav Bartos

//! Read-only view of a trajectory topology used for labeling hydrogen bond participants.

use crate::structures::residue::Residue;

/// Predicates for selecting atoms of a topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Atoms of amino acid sidechains.
    Sidechain,
    /// Atoms of water molecules.
    Water,
}

/// Topology of a trajectory.
///
/// Implement this trait for your own structures to use them with `hbfreq_rs`.
/// [`crate::system::System`] provides an in-memory implementation.
pub trait Topology {
    /// Number of atoms in the topology.
    fn n_atoms(&self) -> usize;

    /// Number of residues in the topology.
    fn n_residues(&self) -> usize;

    /// Number of frames of the trajectory this topology belongs to.
    fn n_frames(&self) -> usize;

    /// Index of the residue the atom belongs to.
    /// Returns `None` if the atom does not exist.
    fn atom_residue(&self, atom: usize) -> Option<usize>;

    /// Element symbol of the atom.
    /// Returns `None` if the atom does not exist or has no element.
    fn atom_element(&self, atom: usize) -> Option<&str>;

    /// Residue with the given index.
    /// Returns `None` if the residue does not exist.
    fn residue(&self, index: usize) -> Option<&Residue>;

    /// Indices of all atoms matching the selection, in ascending order.
    fn select(&self, selection: Selection) -> Vec<usize>;

    /// Indices of all water residues, in ascending order.
    fn water_residues(&self) -> Vec<usize> {
        (0..self.n_residues())
            .filter(|&i| self.residue(i).is_some_and(|res| res.is_water()))
            .collect()
    }
}
