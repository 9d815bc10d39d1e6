// Released under MIT License.
// Copyright (c) 2025 Ladislav Bartos

//! Conversion of atom indices into hydrogen bond labels.

use hashbrown::HashSet;

use crate::errors::LabelError;
use crate::hbonds::remap::WaterLetterMapping;
use crate::structures::label::{AtomRole, HBondAtom};
use crate::topology::{Selection, Topology};

/// Converts atoms of a topology into hydrogen bond labels.
///
/// Labels have the format `<residue name><residue number><role>-<element>`,
/// where role is `b` for backbone atoms, `s` for sidechain atoms, and `w` for water atoms.
/// For instance, the sidechain oxygen of serine 195 is labeled `SER195s-O`.
///
/// If a [`WaterLetterMapping`] is attached, water atoms of tracked water molecules
/// are labeled by their letter code instead.
#[derive(Debug, Clone)]
pub struct AtomLabeler<'a, T: Topology> {
    topology: &'a T,
    sidechain: HashSet<usize>,
    water: HashSet<usize>,
    letters: Option<&'a WaterLetterMapping>,
}

impl<'a, T: Topology> AtomLabeler<'a, T> {
    /// Create a new labeler for the topology.
    /// Sidechain and water atoms are selected once, during construction.
    pub fn new(topology: &'a T) -> Self {
        AtomLabeler {
            topology,
            sidechain: topology.select(Selection::Sidechain).into_iter().collect(),
            water: topology.select(Selection::Water).into_iter().collect(),
            letters: None,
        }
    }

    /// Label tracked water molecules using the provided letter codes.
    pub fn with_letter_mapping(mut self, letters: &'a WaterLetterMapping) -> Self {
        self.letters = Some(letters);
        self
    }

    /// Get the hydrogen bond label of an atom.
    ///
    /// ## Parameters
    /// - `atom`: atom index or an already constructed label (which is returned unchanged)
    /// - `frame`: index of the frame the hydrogen bond was identified in;
    ///   only required if a letter mapping is attached
    ///
    /// ## Returns
    /// - Label of the atom.
    /// - `LabelError` if the atom does not exist, has no element,
    ///   or the letter mapping can not be applied.
    ///
    /// ## Example
    /// ```
    /// use hbfreq_rs::prelude::*;
    ///
    /// let classes = ResidueClasses::default();
    /// let residues = vec![classes.residue("ALA", 10)];
    /// let atoms = vec![Atom::new("N", Some("N"), 0), Atom::new("CB", Some("C"), 0)];
    /// let system = System::new("alanine", atoms, residues, 1).unwrap();
    ///
    /// let labeler = AtomLabeler::new(&system);
    /// assert_eq!(labeler.label(&HBondAtom::Index(0), None).unwrap(), "ALA10b-N");
    /// assert_eq!(labeler.label(&HBondAtom::Index(1), None).unwrap(), "ALA10s-C");
    /// ```
    pub fn label(&self, atom: &HBondAtom, frame: Option<usize>) -> Result<String, LabelError> {
        match atom {
            HBondAtom::Label(label) => Ok(label.clone()),
            HBondAtom::Index(index) => self.label_index(*index, frame),
        }
    }

    /// Get the hydrogen bond label of an atom with the given index.
    pub(crate) fn label_index(&self, index: usize, frame: Option<usize>) -> Result<String, LabelError> {
        let residue_index = self
            .topology
            .atom_residue(index)
            .ok_or(LabelError::InvalidAtomIndex(index))?;
        let residue = self
            .topology
            .residue(residue_index)
            .ok_or(LabelError::InvalidAtomIndex(index))?;

        let role = if self.water.contains(&index) {
            if let Some(letter) = self.letter_code(residue_index, frame)? {
                return Ok(letter.to_owned());
            }
            AtomRole::Water
        } else if self.sidechain.contains(&index) {
            AtomRole::Sidechain
        } else {
            AtomRole::Backbone
        };

        let element = self
            .topology
            .atom_element(index)
            .ok_or(LabelError::NoElement(index))?;

        Ok(format!(
            "{}{}{}-{}",
            residue.name(),
            residue.resseq(),
            role.code(),
            element
        ))
    }

    /// Find the letter code of the water molecule occupying the residue in the given frame.
    fn letter_code(
        &self,
        residue: usize,
        frame: Option<usize>,
    ) -> Result<Option<&'a str>, LabelError> {
        let Some(letters) = self.letters else {
            return Ok(None);
        };

        let frame = frame.ok_or(LabelError::FrameNotSpecified)?;

        let mut found: Option<&'a str> = None;
        for (letter, residues) in letters.iter() {
            let mapped = *residues
                .get(frame)
                .ok_or_else(|| LabelError::FrameOutOfRange(letter.clone(), frame))?;

            if mapped == 0 || mapped != residue {
                continue;
            }

            if let Some(previous) = found {
                return Err(LabelError::AmbiguousLetterCode(
                    previous.to_owned(),
                    letter.clone(),
                    residue,
                    frame,
                ));
            }

            found = Some(letter.as_str());
        }

        Ok(found)
    }
}
