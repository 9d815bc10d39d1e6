// Released under MIT License.
// Copyright (c) 2025 Ladislav Bartos

//! Implementation of the hydrogen bond frequency matrix.

use getset::{CopyGetters, Getters};
use hashbrown::HashSet;
use indexmap::IndexSet;
use ndarray::Array2;
use regex::Regex;
use std::sync::OnceLock;

use crate::errors::MatrixError;
use crate::structures::label::TrajectoryHBonds;

/// Frequencies of hydrogen bonds between all donors and acceptors of one or more trajectories.
///
/// Element `[i, j]` of the matrix corresponds to the hydrogen bond between donor `donors[i]`
/// and acceptor `acceptors[j]`. Each element is the fraction of frames in which
/// the hydrogen bond was observed, so all frequencies lie in `[0, 1]`.
///
/// ## Ordering of labels
/// Labels that act both as donors and as acceptors are placed first in both lists
/// and are sorted by their residue number. They are followed by labels acting only
/// as donors (or only as acceptors) in the order in which they were first encountered.
#[derive(Debug, Clone, Getters, CopyGetters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HBondMatrix {
    /// Number of frames in which each hydrogen bond was observed.
    /// A hydrogen bond appearing multiple times in one frame is counted once for that frame.
    #[getset(get = "pub")]
    counts: Array2<usize>,
    /// Labels of donors (rows of the matrix).
    #[getset(get = "pub")]
    donors: IndexSet<String>,
    /// Labels of acceptors (columns of the matrix).
    #[getset(get = "pub")]
    acceptors: IndexSet<String>,
    /// Total number of frames of all trajectories.
    #[getset(get_copy = "pub")]
    n_frames: usize,
}

impl HBondMatrix {
    /// Construct a hydrogen bond frequency matrix from labeled hydrogen bonds of one or more trajectories.
    ///
    /// ## Returns
    /// - `HBondMatrix` if successful.
    /// - `MatrixError::NoFrames` if the trajectories contain no frames.
    ///
    /// ## Notes
    /// - Frames of all trajectories are pooled. Frequencies are calculated as the number of
    ///   frames containing the hydrogen bond divided by the total number of frames of all trajectories.
    /// - Identical hydrogen bonds within a single frame (e.g. two nitrogens of one arginine
    ///   sidechain bonding the same acceptor) are counted once.
    ///
    /// ## Example
    /// ```
    /// use hbfreq_rs::prelude::*;
    ///
    /// let trj1 = vec![vec![LabeledHBond::new("SER195s-O", "w1")]; 10];
    /// let trj2 = vec![vec![LabeledHBond::new("SER195s-O", "w1")]; 20];
    ///
    /// let matrix = HBondMatrix::new(&[trj1, trj2]).unwrap();
    /// assert_eq!(matrix.n_frames(), 30);
    /// assert_eq!(matrix.get_frequency("SER195s-O", "w1"), Some(1.0));
    /// ```
    pub fn new(trajectories: &[TrajectoryHBonds]) -> Result<Self, MatrixError> {
        let n_frames = trajectories.iter().map(Vec::len).sum::<usize>();
        if n_frames == 0 {
            return Err(MatrixError::NoFrames);
        }

        let (donors, acceptors) = collect_participants(trajectories);
        let (donors, acceptors) = sort_participants(donors, acceptors);

        let mut counts = Array2::<usize>::zeros((donors.len(), acceptors.len()));
        let mut observed = HashSet::new();
        for frame in trajectories.iter().flatten() {
            observed.clear();
            for hbond in frame.iter() {
                // safety: every donor and acceptor has been collected above
                let i = donors.get_index_of(hbond.donor().as_str()).expect(
                    "FATAL HBFREQ ERROR | HBondMatrix::new | Donor should have been collected.",
                );
                let j = acceptors.get_index_of(hbond.acceptor().as_str()).expect(
                    "FATAL HBFREQ ERROR | HBondMatrix::new | Acceptor should have been collected.",
                );

                if observed.insert((i, j)) {
                    counts[[i, j]] += 1;
                }
            }
        }

        log::info!(
            "Constructed hydrogen bond matrix with {} donors and {} acceptors from {} frames of {} trajectories.",
            donors.len(),
            acceptors.len(),
            n_frames,
            trajectories.len(),
        );

        Ok(HBondMatrix {
            counts,
            donors: donors.into_iter().map(str::to_owned).collect(),
            acceptors: acceptors.into_iter().map(str::to_owned).collect(),
            n_frames,
        })
    }

    /// Get the frequency matrix. Each element is the number of frames containing
    /// the hydrogen bond divided by the total number of frames.
    pub fn frequencies(&self) -> Array2<f64> {
        self.counts.mapv(|count| count as f64 / self.n_frames as f64)
    }

    /// Get the frequency of the hydrogen bond between the specified donor and acceptor.
    /// Returns `None` if the donor or the acceptor is not part of the matrix.
    pub fn get_frequency(&self, donor: &str, acceptor: &str) -> Option<f64> {
        self.get_count(donor, acceptor)
            .map(|count| count as f64 / self.n_frames as f64)
    }

    /// Get the number of frames containing the hydrogen bond between the specified donor and acceptor.
    /// Returns `None` if the donor or the acceptor is not part of the matrix.
    pub fn get_count(&self, donor: &str, acceptor: &str) -> Option<usize> {
        let i = self.donors.get_index_of(donor)?;
        let j = self.acceptors.get_index_of(acceptor)?;

        Some(self.counts[[i, j]])
    }

    /// Get all observed hydrogen bonds sorted by decreasing frequency.
    /// Hydrogen bonds with the same frequency keep the order of the matrix (row-major).
    pub fn pairs(&self) -> Vec<(&str, &str, f64)> {
        let mut pairs = self
            .counts
            .indexed_iter()
            .filter(|(_, &count)| count > 0)
            .map(|((i, j), &count)| {
                (
                    self.donors[i].as_str(),
                    self.acceptors[j].as_str(),
                    count as f64 / self.n_frames as f64,
                )
            })
            .collect::<Vec<_>>();

        pairs.sort_by(|a, b| b.2.total_cmp(&a.2));
        pairs
    }
}

impl PartialEq for HBondMatrix {
    /// Matrices are equal only if their labels are in the same order.
    fn eq(&self, other: &Self) -> bool {
        self.n_frames == other.n_frames
            && self.donors.iter().eq(other.donors.iter())
            && self.acceptors.iter().eq(other.acceptors.iter())
            && self.counts == other.counts
    }
}

/// Collect all donors and acceptors in the order in which they are first encountered.
fn collect_participants(trajectories: &[TrajectoryHBonds]) -> (IndexSet<&str>, IndexSet<&str>) {
    let mut donors = IndexSet::new();
    let mut acceptors = IndexSet::new();

    for frame in trajectories.iter().flatten() {
        for hbond in frame.iter() {
            donors.insert(hbond.donor().as_str());
        }
        for hbond in frame.iter() {
            acceptors.insert(hbond.acceptor().as_str());
        }
    }

    (donors, acceptors)
}

/// Place labels which are both donors and acceptors first, sorted by residue number.
/// The remaining labels keep their original order.
fn sort_participants<'a>(
    donors: IndexSet<&'a str>,
    acceptors: IndexSet<&'a str>,
) -> (IndexSet<&'a str>, IndexSet<&'a str>) {
    let mut mutual = donors
        .iter()
        .filter(|d| acceptors.contains(*d))
        .copied()
        .collect::<Vec<_>>();
    // stable sort: labels with the same residue number keep their order
    mutual.sort_by_key(|label| resseq_key(label));

    let sorted_donors = mutual
        .iter()
        .copied()
        .chain(donors.iter().copied())
        .collect::<IndexSet<_>>();
    let sorted_acceptors = mutual
        .iter()
        .copied()
        .chain(acceptors.iter().copied())
        .collect::<IndexSet<_>>();

    (sorted_donors, sorted_acceptors)
}

/// Key used to sort labels by residue number.
///
/// The key is the first number found in the label. Labels without any digits
/// (letter codes) are assigned the code point of their first character increased by 10000
/// so that they are placed after all numbered residues.
/// Numbers not fitting into `u64` saturate to `u64::MAX`.
pub(crate) fn resseq_key(label: &str) -> u64 {
    static RESSEQ: OnceLock<Regex> = OnceLock::new();
    let regex = RESSEQ.get_or_init(|| {
        Regex::new(r"[0-9]+").expect(
            "FATAL HBFREQ ERROR | matrix::resseq_key | Could not compile residue number regex.",
        )
    });

    match regex.find(label) {
        // a run of digits can only fail to parse by overflowing
        Some(m) => m.as_str().parse::<u64>().unwrap_or(u64::MAX),
        None => label.chars().next().map(|c| c as u64).unwrap_or(0) + 10000,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utilities::utilities::frame;
    use float_cmp::assert_approx_eq;

    fn labels(set: &IndexSet<String>) -> Vec<&str> {
        set.iter().map(String::as_str).collect()
    }

    #[test]
    fn resseq_keys() {
        assert_eq!(resseq_key("SER195s-O"), 195);
        assert_eq!(resseq_key("HOH1001w-O"), 1001);
        assert_eq!(resseq_key("w1"), 1);
        assert_eq!(resseq_key("a"), 97 + 10000);
        assert_eq!(resseq_key("WA"), 87 + 10000);
        assert_eq!(resseq_key(""), 10000);
    }

    #[test]
    fn resseq_key_overflow() {
        assert_eq!(resseq_key("HOH123456789012345678901234w-O"), u64::MAX);
        assert!(resseq_key("HOH123456789012345678901234w-O") > resseq_key("a"));
    }

    #[test]
    fn canonical_ordering() {
        let trj = vec![frame(&[("A1b-N", "B2s-O"), ("B2s-O", "C3w-O")])];

        let matrix = HBondMatrix::new(&[trj]).unwrap();
        assert_eq!(labels(matrix.donors()), vec!["B2s-O", "A1b-N"]);
        assert_eq!(labels(matrix.acceptors()), vec!["B2s-O", "C3w-O"]);

        assert_eq!(matrix.counts()[[0, 0]], 0);
        assert_eq!(matrix.counts()[[0, 1]], 1);
        assert_eq!(matrix.counts()[[1, 0]], 1);
        assert_eq!(matrix.counts()[[1, 1]], 0);
    }

    #[test]
    fn mutual_sorted_by_resseq() {
        let trj = vec![
            frame(&[("LYS40s-N", "GLU7s-O"), ("GLU7s-O", "LYS40s-N")]),
            frame(&[("X", "THR12s-O"), ("THR12s-O", "X"), ("SER3b-N", "w")]),
            frame(&[("w", "ARG5s-N")]),
        ];

        let matrix = HBondMatrix::new(&[trj]).unwrap();
        assert_eq!(
            labels(matrix.donors()),
            vec!["GLU7s-O", "THR12s-O", "LYS40s-N", "X", "w", "SER3b-N"]
        );
        assert_eq!(
            labels(matrix.acceptors()),
            vec!["GLU7s-O", "THR12s-O", "LYS40s-N", "X", "w", "ARG5s-N"]
        );
    }

    #[test]
    fn letter_codes_after_residues() {
        let trj = vec![frame(&[
            ("b", "a"),
            ("a", "b"),
            ("HOH20000w-O", "a"),
            ("a", "HOH20000w-O"),
            ("SER5s-O", "b"),
            ("b", "SER5s-O"),
        ])];

        let matrix = HBondMatrix::new(&[trj]).unwrap();
        assert_eq!(
            labels(matrix.donors()),
            vec!["SER5s-O", "a", "b", "HOH20000w-O"]
        );
    }

    #[test]
    fn frame_count_pooling() {
        let trj1 = vec![frame(&[("SER195s-O", "HOH5w-O")]); 10];
        let trj2 = vec![frame(&[("SER195s-O", "HOH5w-O")]); 20];

        let matrix = HBondMatrix::new(&[trj1, trj2]).unwrap();
        assert_eq!(matrix.n_frames(), 30);
        assert_eq!(matrix.get_count("SER195s-O", "HOH5w-O"), Some(30));
        assert_approx_eq!(
            f64,
            matrix.get_frequency("SER195s-O", "HOH5w-O").unwrap(),
            1.0
        );
    }

    #[test]
    fn frequencies_multiple_trajectories() {
        let trj1 = vec![
            frame(&[("A1s-O", "B2s-N"), ("C3b-N", "B2s-N")]),
            frame(&[("A1s-O", "B2s-N")]),
            frame(&[]),
        ];
        let trj2 = vec![frame(&[("C3b-N", "B2s-N")])];

        let matrix = HBondMatrix::new(&[trj1, trj2]).unwrap();
        assert_eq!(matrix.n_frames(), 4);

        let frequencies = matrix.frequencies();
        assert_eq!(frequencies.dim(), (2, 1));
        assert_approx_eq!(f64, frequencies[[0, 0]], 0.5);
        assert_approx_eq!(f64, frequencies[[1, 0]], 0.5);

        assert!(frequencies.iter().all(|&f| (0.0..=1.0).contains(&f)));
        assert_eq!(matrix.counts().sum(), 4);
    }

    #[test]
    fn repeated_bond_in_frame() {
        let trj = vec![frame(&[("A1s-O", "B2s-N"), ("A1s-O", "B2s-N")]), frame(&[])];

        let matrix = HBondMatrix::new(&[trj]).unwrap();
        assert_eq!(matrix.get_count("A1s-O", "B2s-N"), Some(1));
        assert_approx_eq!(f64, matrix.get_frequency("A1s-O", "B2s-N").unwrap(), 0.5);
    }

    #[test]
    fn repeated_bond_single_frame() {
        let trj = vec![frame(&[
            ("ARG5s-N", "GLU7s-O"),
            ("ARG5s-N", "GLU7s-O"),
            ("ARG5s-N", "GLU7s-O"),
            ("HOH9w-O", "GLU7s-O"),
        ])];

        let matrix = HBondMatrix::new(&[trj]).unwrap();
        assert_eq!(matrix.get_count("ARG5s-N", "GLU7s-O"), Some(1));

        let frequencies = matrix.frequencies();
        assert_approx_eq!(f64, frequencies[[0, 0]], 1.0);
        assert!(frequencies.iter().all(|&f| (0.0..=1.0).contains(&f)));
    }

    #[test]
    fn equality_respects_order() {
        let trj1 = vec![frame(&[("A1s-O", "C3s-N"), ("B2s-O", "C3s-N")])];
        let trj2 = vec![frame(&[("B2s-O", "C3s-N"), ("A1s-O", "C3s-N")])];

        let matrix1 = HBondMatrix::new(&[trj1.clone()]).unwrap();
        assert_eq!(matrix1, HBondMatrix::new(&[trj1]).unwrap());
        assert_ne!(matrix1, HBondMatrix::new(&[trj2]).unwrap());
    }

    #[test]
    fn unknown_labels() {
        let trj = vec![frame(&[("A1s-O", "B2s-N")])];

        let matrix = HBondMatrix::new(&[trj]).unwrap();
        assert_eq!(matrix.get_frequency("B2s-N", "A1s-O"), None);
        assert_eq!(matrix.get_count("A1s-O", "C3s-O"), None);
    }

    #[test]
    fn pairs_sorted() {
        let trj = vec![
            frame(&[("A1s-O", "B2s-N"), ("C3b-N", "D4s-O")]),
            frame(&[("C3b-N", "D4s-O")]),
            frame(&[("C3b-N", "B2s-N"), ("C3b-N", "D4s-O")]),
            frame(&[("A1s-O", "B2s-N")]),
        ];

        let matrix = HBondMatrix::new(&[trj]).unwrap();
        let pairs = matrix.pairs();

        assert_eq!(pairs.len(), 3);
        assert_eq!((pairs[0].0, pairs[0].1), ("C3b-N", "D4s-O"));
        assert_approx_eq!(f64, pairs[0].2, 0.75);
        assert_eq!((pairs[1].0, pairs[1].1), ("A1s-O", "B2s-N"));
        assert_approx_eq!(f64, pairs[1].2, 0.5);
        assert_eq!((pairs[2].0, pairs[2].1), ("C3b-N", "B2s-N"));
        assert_approx_eq!(f64, pairs[2].2, 0.25);
    }

    #[test]
    fn no_frames() {
        assert_eq!(HBondMatrix::new(&[]), Err(MatrixError::NoFrames));
        assert_eq!(
            HBondMatrix::new(&[vec![], vec![]]),
            Err(MatrixError::NoFrames)
        );
    }

    #[test]
    fn empty_frames() {
        let matrix = HBondMatrix::new(&[vec![frame(&[]), frame(&[])]]).unwrap();
        assert_eq!(matrix.n_frames(), 2);
        assert!(matrix.donors().is_empty());
        assert!(matrix.acceptors().is_empty());
        assert_eq!(matrix.frequencies().dim(), (0, 0));
    }
}
