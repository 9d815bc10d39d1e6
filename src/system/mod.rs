// Released under MIT License.
// Copyright (c) 2025 Ladislav Bartos

//! Implementation of the System structure and its methods.

use getset::{CopyGetters, Getters};

use crate::errors::TopologyError;
use crate::structures::{atom::Atom, classes::ResidueClasses, residue::Residue};
use crate::topology::{Selection, Topology};

/// In-memory topology of a simulated molecular system.
#[derive(Debug, Clone, Getters, CopyGetters)]
pub struct System {
    /// Name of the molecular system.
    #[getset(get = "pub")]
    name: String,
    /// Atoms of the system.
    #[getset(get = "pub")]
    atoms: Vec<Atom>,
    /// Residues of the system.
    #[getset(get = "pub")]
    residues: Vec<Residue>,
    /// Number of frames of the associated trajectory.
    #[getset(get_copy = "pub")]
    n_frames: usize,
    /// Names used to distinguish backbone and sidechain atoms.
    classes: ResidueClasses,
}

impl System {
    /// Create a new `System` from atoms and residues.
    /// Atoms are classified as backbone or sidechain atoms using the default [`ResidueClasses`].
    ///
    /// ## Returns
    /// - `System` if successful.
    /// - `TopologyError::InvalidResidueIndex` if any atom refers to a residue that does not exist.
    ///
    /// ## Example
    /// ```
    /// use hbfreq_rs::prelude::*;
    ///
    /// let classes = ResidueClasses::default();
    /// let residues = vec![classes.residue("SER", 195), classes.residue("HOH", 1001)];
    /// let atoms = vec![
    ///     Atom::new("N", Some("N"), 0),
    ///     Atom::new("OG", Some("O"), 0),
    ///     Atom::new("O", Some("O"), 1),
    /// ];
    ///
    /// let system = System::new("protein in water", atoms, residues, 100).unwrap();
    /// assert_eq!(system.select(Selection::Sidechain), vec![1]);
    /// assert_eq!(system.select(Selection::Water), vec![2]);
    /// ```
    pub fn new(
        name: &str,
        atoms: Vec<Atom>,
        residues: Vec<Residue>,
        n_frames: usize,
    ) -> Result<Self, TopologyError> {
        System::with_classes(name, atoms, residues, n_frames, ResidueClasses::default())
    }

    /// Create a new `System` using custom residue classes for identifying backbone atoms.
    pub fn with_classes(
        name: &str,
        atoms: Vec<Atom>,
        residues: Vec<Residue>,
        n_frames: usize,
        classes: ResidueClasses,
    ) -> Result<Self, TopologyError> {
        if let Some((index, atom)) = atoms
            .iter()
            .enumerate()
            .find(|(_, atom)| atom.residue() >= residues.len())
        {
            return Err(TopologyError::InvalidResidueIndex(
                index,
                atom.residue(),
                residues.len(),
            ));
        }

        Ok(System {
            name: name.to_owned(),
            atoms,
            residues,
            n_frames,
            classes,
        })
    }

    /// Check whether the atom is part of an amino acid sidechain.
    fn is_sidechain(&self, atom: &Atom) -> bool {
        // safety: residue indices are validated when the system is constructed
        let residue = &self.residues[atom.residue()];
        residue.is_protein() && !self.classes.is_backbone(atom.name())
    }
}

impl Topology for System {
    #[inline(always)]
    fn n_atoms(&self) -> usize {
        self.atoms.len()
    }

    #[inline(always)]
    fn n_residues(&self) -> usize {
        self.residues.len()
    }

    #[inline(always)]
    fn n_frames(&self) -> usize {
        self.n_frames
    }

    #[inline(always)]
    fn atom_residue(&self, atom: usize) -> Option<usize> {
        self.atoms.get(atom).map(|a| a.residue())
    }

    #[inline(always)]
    fn atom_element(&self, atom: usize) -> Option<&str> {
        self.atoms.get(atom).and_then(|a| a.element().as_deref())
    }

    #[inline(always)]
    fn residue(&self, index: usize) -> Option<&Residue> {
        self.residues.get(index)
    }

    fn select(&self, selection: Selection) -> Vec<usize> {
        self.atoms
            .iter()
            .enumerate()
            .filter(|(_, atom)| match selection {
                Selection::Sidechain => self.is_sidechain(atom),
                Selection::Water => self.residues[atom.residue()].is_water(),
            })
            .map(|(i, _)| i)
            .collect()
    }
}
