// Released under MIT License.
// Copyright (c) 2025 Ladislav Bartos

//! Mapping of tracked water molecules onto residues of a reduced trajectory.

use indexmap::IndexMap;

use crate::errors::RemapError;
use crate::topology::Topology;

/// Residue index occupied by each tracked water molecule in each frame.
/// Keys are water letter codes. Values have one entry per frame;
/// `0` means the water is not present in the frame.
pub type WaterLetterMapping = IndexMap<String, Vec<usize>>;

/// Map water letter codes to indices of water residues in each frame of a reduced trajectory.
///
/// ## Parameters
/// - `full`: topology of the whole trajectory in which the water molecules were tracked
/// - `reduced`: topology of the reduced trajectory containing only a subset of water molecules in each frame
/// - `water_rows`: for each frame, indices of water residues of the whole trajectory kept in the reduced trajectory
///   (see [`crate::io::water_index::read_water_indices`])
/// - `atom_mapping`: for each letter code, index of the tracked water oxygen (in the whole trajectory) in each frame
///
/// ## Returns
/// - `WaterLetterMapping` with residue indices in the numbering of the reduced trajectory.
///   Each array has `full.n_frames()` entries.
/// - `RemapError::AmbiguousMapping` if a residue index occurs more than once in a row of `water_rows`.
/// - Other `RemapError` variants if the input data are inconsistent.
///
/// ## Notes
/// - The n-th water residue listed for a frame in `water_rows` corresponds
///   to the n-th water residue of the reduced trajectory.
/// - Letter codes keep the order of `atom_mapping`.
pub fn map_waters_to_letters(
    full: &impl Topology,
    reduced: &impl Topology,
    water_rows: &[Vec<usize>],
    atom_mapping: &IndexMap<String, Vec<usize>>,
) -> Result<WaterLetterMapping, RemapError> {
    let reduced_waters = reduced.water_residues();
    let n_frames = full.n_frames();

    let mut mapping = WaterLetterMapping::with_capacity(atom_mapping.len());
    for (letter, atoms) in atom_mapping.iter() {
        let mut residues = vec![0usize; n_frames];

        for (frame, reduced_residue) in residues.iter_mut().enumerate() {
            let atom = *atoms
                .get(frame)
                .ok_or_else(|| RemapError::MissingFrame(letter.clone(), frame))?;

            let residue = full
                .atom_residue(atom)
                .ok_or_else(|| RemapError::InvalidAtomIndex(atom, letter.clone()))?;

            let row = water_rows
                .get(frame)
                .ok_or(RemapError::MissingIndexRow(frame))?;

            *reduced_residue = match find_unique(row, residue, frame)? {
                Some(position) => *reduced_waters.get(position).ok_or(
                    RemapError::ReducedIndexOutOfRange(position, frame, reduced_waters.len()),
                )?,
                None => 0,
            };
        }

        log::debug!(
            "Water '{}' is present in {} out of {} frames of the reduced trajectory.",
            letter,
            residues.iter().filter(|&&r| r != 0).count(),
            n_frames
        );

        mapping.insert(letter.clone(), residues);
    }

    Ok(mapping)
}

/// Find the position of `residue` in `row`.
/// Returns an error if the residue is present multiple times.
fn find_unique(row: &[usize], residue: usize, frame: usize) -> Result<Option<usize>, RemapError> {
    let mut positions = row
        .iter()
        .enumerate()
        .filter(|(_, &r)| r == residue)
        .map(|(i, _)| i);

    match (positions.next(), positions.next()) {
        (None, _) => Ok(None),
        (Some(position), None) => Ok(Some(position)),
        (Some(_), Some(_)) => Err(RemapError::AmbiguousMapping(residue, frame)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utilities::utilities::{full_system, reduced_system};

    fn atom_mapping() -> IndexMap<String, Vec<usize>> {
        // water oxygens 8, 11, 14 belong to residues 3, 4, 5 of the full system
        let mut mapping = IndexMap::new();
        mapping.insert("w1".to_owned(), vec![8, 8, 11, 14, 14]);
        mapping.insert("w2".to_owned(), vec![11, 14, 8, 8, 11]);
        mapping
    }

    fn water_rows() -> Vec<Vec<usize>> {
        vec![
            vec![3, 4],
            vec![5, 3],
            vec![4, 5],
            vec![3, 4],
            vec![5, 4],
        ]
    }

    #[test]
    fn map_simple() {
        let mapping = map_waters_to_letters(
            &full_system(),
            &reduced_system(),
            &water_rows(),
            &atom_mapping(),
        )
        .unwrap();

        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.get_index(0).unwrap().0, "w1");
        assert_eq!(mapping.get("w1").unwrap(), &vec![3, 4, 3, 0, 3]);
        assert_eq!(mapping.get("w2").unwrap(), &vec![4, 3, 0, 3, 4]);
    }

    #[test]
    fn map_ambiguous() {
        let mut rows = water_rows();
        rows[2] = vec![4, 4];

        match map_waters_to_letters(&full_system(), &reduced_system(), &rows, &atom_mapping()) {
            Err(RemapError::AmbiguousMapping(4, 2)) => (),
            Ok(_) => panic!("Function should have failed."),
            Err(e) => panic!("Incorrect error type `{:?}` returned.", e),
        }
    }

    #[test]
    fn map_missing_frame() {
        let mut atoms = atom_mapping();
        atoms.get_mut("w2").unwrap().pop();

        match map_waters_to_letters(&full_system(), &reduced_system(), &water_rows(), &atoms) {
            Err(RemapError::MissingFrame(letter, 4)) => assert_eq!(letter, "w2"),
            Ok(_) => panic!("Function should have failed."),
            Err(e) => panic!("Incorrect error type `{:?}` returned.", e),
        }
    }

    #[test]
    fn map_invalid_atom() {
        let mut atoms = atom_mapping();
        atoms.get_mut("w1").unwrap()[1] = 17;

        match map_waters_to_letters(&full_system(), &reduced_system(), &water_rows(), &atoms) {
            Err(RemapError::InvalidAtomIndex(17, letter)) => assert_eq!(letter, "w1"),
            Ok(_) => panic!("Function should have failed."),
            Err(e) => panic!("Incorrect error type `{:?}` returned.", e),
        }
    }

    #[test]
    fn map_missing_row() {
        let mut rows = water_rows();
        rows.pop();

        match map_waters_to_letters(&full_system(), &reduced_system(), &rows, &atom_mapping()) {
            Err(RemapError::MissingIndexRow(4)) => (),
            Ok(_) => panic!("Function should have failed."),
            Err(e) => panic!("Incorrect error type `{:?}` returned.", e),
        }
    }

    #[test]
    fn map_reduced_out_of_range() {
        let mut rows = water_rows();
        rows[0] = vec![5, 4, 3];

        match map_waters_to_letters(&full_system(), &reduced_system(), &rows, &atom_mapping()) {
            Err(RemapError::ReducedIndexOutOfRange(2, 0, 2)) => (),
            Ok(_) => panic!("Function should have failed."),
            Err(e) => panic!("Incorrect error type `{:?}` returned.", e),
        }
    }
}
