// Released under MIT License.
// Copyright (c) 2025 Ladislav Bartos

//! Structures describing participants of hydrogen bonds.

use getset::Getters;
use std::fmt;

/// Participant of a hydrogen bond: either a raw atom index or an already resolved label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HBondAtom {
    /// Index of an atom in the topology. Atoms are indexed starting from 0.
    Index(usize),
    /// Hydrogen bond label, e.g. `SER195s-O` or a water letter code.
    Label(String),
}

impl From<usize> for HBondAtom {
    fn from(index: usize) -> Self {
        HBondAtom::Index(index)
    }
}

impl From<&str> for HBondAtom {
    fn from(label: &str) -> Self {
        HBondAtom::Label(label.to_owned())
    }
}

impl From<String> for HBondAtom {
    fn from(label: String) -> Self {
        HBondAtom::Label(label)
    }
}

/// Part of a molecule an atom belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AtomRole {
    Backbone,
    Sidechain,
    Water,
}

impl AtomRole {
    /// Single-character code of the role used in hydrogen bond labels.
    #[inline(always)]
    pub fn code(&self) -> char {
        match self {
            AtomRole::Backbone => 'b',
            AtomRole::Sidechain => 's',
            AtomRole::Water => 'w',
        }
    }
}

/// Hydrogen bond between two labeled participants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LabeledHBond {
    /// Label of the hydrogen bond donor.
    #[getset(get = "pub")]
    donor: String,
    /// Label of the hydrogen bond acceptor.
    #[getset(get = "pub")]
    acceptor: String,
}

impl LabeledHBond {
    /// Create a new labeled hydrogen bond.
    pub fn new(donor: &str, acceptor: &str) -> Self {
        LabeledHBond {
            donor: donor.to_owned(),
            acceptor: acceptor.to_owned(),
        }
    }
}

impl From<(String, String)> for LabeledHBond {
    fn from((donor, acceptor): (String, String)) -> Self {
        LabeledHBond { donor, acceptor }
    }
}

impl fmt::Display for LabeledHBond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.donor, self.acceptor)
    }
}

/// Labeled hydrogen bonds identified in a single frame.
pub type FrameHBonds = Vec<LabeledHBond>;

/// Labeled hydrogen bonds for each frame of a trajectory. Frames are ordered in time.
pub type TrajectoryHBonds = Vec<FrameHBonds>;
