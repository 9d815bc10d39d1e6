// Released under MIT License.
// Copyright (c) 2025 Ladislav Bartos

//! Implementation of the Atom structure and its methods.

use getset::{CopyGetters, Getters};

/// Atom of a topology.
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Atom {
    /// Name of the atom.
    #[getset(get = "pub")]
    name: String,
    /// Symbol of the element of the atom.
    /// Can be `None` for virtual sites.
    #[getset(get = "pub")]
    element: Option<String>,
    /// Index of the residue the atom belongs to. Residues are indexed starting from 0.
    #[getset(get_copy = "pub")]
    residue: usize,
}

impl Atom {
    /// Create a new `Atom` with the specified name, element symbol, and index of its residue.
    ///
    /// ## Example
    /// ```
    /// use hbfreq_rs::prelude::*;
    ///
    /// let atom = Atom::new("OG", Some("O"), 3);
    /// assert_eq!(atom.name(), "OG");
    /// assert_eq!(atom.element().as_deref(), Some("O"));
    /// assert_eq!(atom.residue(), 3);
    /// ```
    pub fn new(name: &str, element: Option<&str>, residue: usize) -> Self {
        Atom {
            name: name.to_owned(),
            element: element.map(str::to_owned),
            residue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_without_element() {
        let atom = Atom::new("MW", None, 17);
        assert_eq!(atom.name(), "MW");
        assert!(atom.element().is_none());
        assert_eq!(atom.residue(), 17);
    }
}
