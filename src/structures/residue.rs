// Released under MIT License.
// Copyright (c) 2025 Ladislav Bartos

//! Implementation of the Residue structure.

use getset::{CopyGetters, Getters};

/// Residue of a topology.
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Residue {
    /// Name of the residue.
    #[getset(get = "pub")]
    name: String,
    /// Sequence number of the residue as written in the structure file.
    #[getset(get_copy = "pub")]
    resseq: i64,
    /// Is the residue a water molecule?
    #[getset(get_copy = "pub")]
    is_water: bool,
    /// Is the residue an amino acid?
    #[getset(get_copy = "pub")]
    is_protein: bool,
}

impl Residue {
    /// Create a new `Residue`.
    ///
    /// ## Notes
    /// - Use [`crate::structures::classes::ResidueClasses::residue`] to construct
    ///   a residue which is classified automatically based on its name.
    pub fn new(name: &str, resseq: i64, is_water: bool, is_protein: bool) -> Self {
        Residue {
            name: name.to_owned(),
            resseq,
            is_water,
            is_protein,
        }
    }
}
