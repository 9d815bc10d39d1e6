// Released under MIT License.
// Copyright (c) 2025 Ladislav Bartos

//! Implementation of the ResidueClasses structure used to classify residues and atoms.

use indexmap::IndexSet;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::errors::ParseClassesError;
use crate::structures::residue::Residue;

/// Names of residues and atoms used to classify residues as water or protein
/// and atoms of protein residues as backbone or sidechain atoms.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResidueClasses {
    /// Names of water residues.
    #[serde(default)]
    water: IndexSet<String>,
    /// Names of amino acid residues.
    #[serde(default)]
    protein: IndexSet<String>,
    /// Names of protein backbone atoms. All other atoms of amino acid residues are sidechain atoms.
    #[serde(default)]
    backbone: IndexSet<String>,
}

impl Default for ResidueClasses {
    /// Construct a default `ResidueClasses` structure.
    ///
    /// ## Notes
    /// - This function parses YAML content from `src/config/residues.yaml`
    ///   which is included in the `hbfreq_rs` library at compile time.
    fn default() -> Self {
        let yaml = include_str!("../config/residues.yaml");

        ResidueClasses::from_string(yaml)
            .expect("FATAL HBFREQ ERROR | ResidueClasses::default | Default `residues.yaml` file could not be parsed.")
    }
}

impl ResidueClasses {
    /// Construct a new `ResidueClasses` structure from the provided YAML file.
    ///
    /// ## Example
    /// The YAML file should look like this:
    /// ```yaml
    /// ---
    /// water: [HOH, SOL]
    /// protein: [ALA, GLY, SER]
    /// backbone: [N, CA, C, O, H, HA]
    /// ```
    pub fn from_file(filename: impl AsRef<Path>) -> Result<Self, ParseClassesError> {
        ResidueClasses::from_string(&ResidueClasses::load_yaml_to_string(filename)?)
    }

    /// Extend the `ResidueClasses` structure with names from the provided YAML file.
    ///
    /// ## Notes
    /// - Names are only added, never removed.
    /// - If an error occurs, the structure is not changed.
    pub fn update_from_file(&mut self, filename: impl AsRef<Path>) -> Result<(), ParseClassesError> {
        let parsed = ResidueClasses::from_file(filename)?;

        self.water.extend(parsed.water);
        self.protein.extend(parsed.protein);
        self.backbone.extend(parsed.backbone);

        Ok(())
    }

    /// Construct a `Residue` and classify it based on its name.
    pub fn residue(&self, name: &str, resseq: i64) -> Residue {
        Residue::new(name, resseq, self.is_water(name), self.is_protein(name))
    }

    /// Check whether a residue with the given name is a water residue.
    #[inline(always)]
    pub fn is_water(&self, resname: &str) -> bool {
        self.water.contains(resname)
    }

    /// Check whether a residue with the given name is an amino acid.
    #[inline(always)]
    pub fn is_protein(&self, resname: &str) -> bool {
        self.protein.contains(resname)
    }

    /// Check whether an atom with the given name belongs to the protein backbone.
    /// The atom must be part of an amino acid residue.
    #[inline(always)]
    pub fn is_backbone(&self, atomname: &str) -> bool {
        self.backbone.contains(atomname)
    }

    fn from_string(yaml: &str) -> Result<Self, ParseClassesError> {
        serde_yaml::from_str(yaml).map_err(ParseClassesError::CouldNotParseYaml)
    }

    fn load_yaml_to_string(filename: impl AsRef<Path>) -> Result<String, ParseClassesError> {
        let mut file = File::open(filename.as_ref())
            .map_err(|_| ParseClassesError::FileNotFound(Box::from(filename.as_ref())))?;

        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|_| ParseClassesError::FileCouldNotBeRead(Box::from(filename.as_ref())))?;

        Ok(content)
    }
}
