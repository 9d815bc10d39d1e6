// Released under MIT License.
// Copyright (c) 2025 Ladislav Bartos

//! Conversion of hydrogen bonds identified by a detector into labeled hydrogen bonds.

use ndarray::{Array2, ArrayView2};

use crate::errors::ConvertError;
use crate::hbonds::labeler::AtomLabeler;
use crate::hbonds::remap::WaterLetterMapping;
use crate::structures::label::{FrameHBonds, LabeledHBond, TrajectoryHBonds};
use crate::topology::Topology;

impl<T: Topology> AtomLabeler<'_, T> {
    /// Convert hydrogen bonds of a single frame into labeled hydrogen bonds.
    ///
    /// ## Parameters
    /// - `hbonds`: array of shape (n_bonds, 3) with columns donor atom, hydrogen atom, acceptor atom
    /// - `frame`: index of the frame in the trajectory
    ///
    /// ## Notes
    /// - Hydrogen atoms are discarded.
    /// - The order of hydrogen bonds is preserved.
    pub fn convert_frame(
        &self,
        hbonds: ArrayView2<usize>,
        frame: usize,
    ) -> Result<FrameHBonds, ConvertError> {
        if hbonds.ncols() != 3 {
            return Err(ConvertError::InvalidShape(frame, hbonds.ncols()));
        }

        hbonds
            .rows()
            .into_iter()
            .map(|bond| {
                let donor = self
                    .label_index(bond[0], Some(frame))
                    .map_err(ConvertError::LabelError)?;
                let acceptor = self
                    .label_index(bond[2], Some(frame))
                    .map_err(ConvertError::LabelError)?;

                Ok(LabeledHBond::from((donor, acceptor)))
            })
            .collect()
    }

    /// Convert hydrogen bonds of all frames of a trajectory into labeled hydrogen bonds.
    /// Frame `i` of `hbonds` is labeled using frame `i` of the attached letter mapping (if any).
    pub fn convert_trajectory(
        &self,
        hbonds: &[Array2<usize>],
    ) -> Result<TrajectoryHBonds, ConvertError> {
        hbonds
            .iter()
            .enumerate()
            .map(|(frame, bonds)| self.convert_frame(bonds.view(), frame))
            .collect()
    }
}

/// Convert atom indices of hydrogen bonds into hydrogen bond labels.
///
/// ## Parameters
/// - `hbonds`: for each frame, array of shape (n_bonds, 3) with columns donor atom, hydrogen atom, acceptor atom
/// - `topology`: topology of the trajectory in which the hydrogen bonds were identified
/// - `letters`: optional mapping of water letter codes to water residues in each frame
///
/// ## Returns
/// - Labeled donor-acceptor pairs for each frame.
/// - `ConvertError` if any frame has an invalid shape or any atom could not be labeled.
///
/// ## Example
/// ```
/// use hbfreq_rs::prelude::*;
/// use ndarray::{array, Array2};
///
/// let classes = ResidueClasses::default();
/// let residues = vec![classes.residue("SER", 195), classes.residue("HOH", 1001)];
/// let atoms = vec![
///     Atom::new("OG", Some("O"), 0),
///     Atom::new("HG", Some("H"), 0),
///     Atom::new("O", Some("O"), 1),
/// ];
/// let system = System::new("serine in water", atoms, residues, 2).unwrap();
///
/// let hbonds: Vec<Array2<usize>> = vec![array![[0, 1, 2]], array![[0, 1, 2], [0, 1, 2]]];
/// let labeled = hbonds_to_labels(&hbonds, &system, None).unwrap();
///
/// assert_eq!(labeled.len(), 2);
/// assert_eq!(labeled[1].len(), 2);
/// assert_eq!(labeled[0][0].donor(), "SER195s-O");
/// assert_eq!(labeled[0][0].acceptor(), "HOH1001w-O");
/// ```
pub fn hbonds_to_labels(
    hbonds: &[Array2<usize>],
    topology: &impl Topology,
    letters: Option<&WaterLetterMapping>,
) -> Result<TrajectoryHBonds, ConvertError> {
    let labeler = match letters {
        Some(mapping) => AtomLabeler::new(topology).with_letter_mapping(mapping),
        None => AtomLabeler::new(topology),
    };

    let labeled = labeler.convert_trajectory(hbonds)?;

    log::info!(
        "Labeled {} hydrogen bonds in {} frames.",
        labeled.iter().map(Vec::len).sum::<usize>(),
        labeled.len()
    );

    Ok(labeled)
}
