// Released under MIT License.
// Copyright (c) 2025 Ladislav Bartos

//! Timelines and frequencies of hydrogen bonds formed by a single participant.

use getset::{CopyGetters, Getters};
use indexmap::IndexMap;

use crate::errors::FrequencyError;
use crate::structures::label::TrajectoryHBonds;

/// Hydrogen bonds formed by a single participant in each frame of concatenated trajectories.
///
/// Frames of the individual trajectories are concatenated in the order in which
/// the trajectories were provided, i.e. frame `k` of trajectory `i` has the global index
/// `k + (number of frames of trajectories 0 to i-1)`.
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParticipantTimeline {
    /// Label of the analyzed participant.
    #[getset(get = "pub")]
    participant: String,
    /// Total number of frames of all trajectories.
    #[getset(get_copy = "pub")]
    n_frames: usize,
    /// For each acceptor the participant donates a hydrogen bond to,
    /// number of such hydrogen bonds in each frame.
    #[getset(get = "pub")]
    donates_to: IndexMap<String, Vec<u32>>,
    /// For each donor the participant accepts a hydrogen bond from,
    /// number of such hydrogen bonds in each frame.
    #[getset(get = "pub")]
    accepts_from: IndexMap<String, Vec<u32>>,
}

impl ParticipantTimeline {
    /// Collect hydrogen bonds formed by `participant` in each frame of the trajectories.
    ///
    /// ## Example
    /// ```
    /// use hbfreq_rs::prelude::*;
    ///
    /// let trj1 = vec![vec![], vec![LabeledHBond::new("SER195s-O", "w1")]];
    /// let trj2 = vec![vec![LabeledHBond::new("w1", "SER195s-O")]];
    ///
    /// let timeline = ParticipantTimeline::new(&[trj1, trj2], "SER195s-O");
    /// assert_eq!(timeline.n_frames(), 3);
    /// assert_eq!(timeline.donates_to().get("w1").unwrap(), &vec![0, 1, 0]);
    /// assert_eq!(timeline.accepts_from().get("w1").unwrap(), &vec![0, 0, 1]);
    /// ```
    pub fn new(trajectories: &[TrajectoryHBonds], participant: &str) -> Self {
        let n_frames = trajectories.iter().map(Vec::len).sum::<usize>();

        let mut donates_to: IndexMap<String, Vec<u32>> = IndexMap::new();
        let mut accepts_from: IndexMap<String, Vec<u32>> = IndexMap::new();

        for (global_frame, frame) in trajectories.iter().flatten().enumerate() {
            for hbond in frame.iter().filter(|hb| hb.donor() == participant) {
                donates_to
                    .entry(hbond.acceptor().clone())
                    .or_insert_with(|| vec![0; n_frames])[global_frame] += 1;
            }

            for hbond in frame.iter().filter(|hb| hb.acceptor() == participant) {
                accepts_from
                    .entry(hbond.donor().clone())
                    .or_insert_with(|| vec![0; n_frames])[global_frame] += 1;
            }
        }

        log::debug!(
            "Participant '{}' donates to {} and accepts from {} partners in {} frames.",
            participant,
            donates_to.len(),
            accepts_from.len(),
            n_frames
        );

        ParticipantTimeline {
            participant: participant.to_owned(),
            n_frames,
            donates_to,
            accepts_from,
        }
    }

    /// Calculate the fraction of frames in which the participant forms at least one
    /// hydrogen bond with each of its partners.
    ///
    /// ## Returns
    /// - `PartnerFrequencies` with partners sorted by decreasing frequency.
    /// - `FrequencyError` if the participant accepts no hydrogen bonds or donates no hydrogen bonds.
    pub fn frequencies(&self) -> Result<PartnerFrequencies, FrequencyError> {
        if self.accepts_from.is_empty() {
            return Err(FrequencyError::NoDonors(self.participant.clone()));
        }

        if self.donates_to.is_empty() {
            return Err(FrequencyError::NoAcceptors(self.participant.clone()));
        }

        Ok(PartnerFrequencies {
            donors: frame_fractions(&self.accepts_from, self.n_frames),
            acceptors: frame_fractions(&self.donates_to, self.n_frames),
        })
    }
}

/// Frequencies of hydrogen bonds between a participant and its partners.
#[derive(Debug, Clone, PartialEq, Getters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartnerFrequencies {
    /// Donors donating a hydrogen bond to the participant and the fraction of frames in which they do so.
    /// Sorted by decreasing frequency.
    #[getset(get = "pub")]
    donors: IndexMap<String, f64>,
    /// Acceptors accepting a hydrogen bond from the participant and the fraction of frames in which they do so.
    /// Sorted by decreasing frequency.
    #[getset(get = "pub")]
    acceptors: IndexMap<String, f64>,
}

/// Identify the most frequent donors and acceptors of hydrogen bonds formed by `participant`.
///
/// ## Returns
/// - `PartnerFrequencies` with partners sorted by decreasing frequency.
///   Partners with the same frequency are kept in the order in which they were first encountered.
/// - `FrequencyError` if no donor or no acceptor was found for the participant.
///
/// ## Notes
/// - The frequency is the fraction of frames in which at least one hydrogen bond is formed,
///   i.e. multiple hydrogen bonds to the same partner in one frame are counted once.
pub fn most_frequent(
    trajectories: &[TrajectoryHBonds],
    participant: &str,
) -> Result<PartnerFrequencies, FrequencyError> {
    ParticipantTimeline::new(trajectories, participant).frequencies()
}

/// Fraction of frames with non-zero counts for each partner, sorted by decreasing fraction.
fn frame_fractions(timelines: &IndexMap<String, Vec<u32>>, n_frames: usize) -> IndexMap<String, f64> {
    let mut fractions = timelines
        .iter()
        .map(|(partner, counts)| {
            let present = counts.iter().filter(|&&c| c != 0).count();
            (partner.clone(), present as f64 / n_frames as f64)
        })
        .collect::<IndexMap<_, _>>();

    // `sort_by` is stable: partners with the same frequency keep their order
    fractions.sort_by(|_, f1, _, f2| f2.total_cmp(f1));
    fractions
}
