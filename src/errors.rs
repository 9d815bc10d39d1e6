// Released under MIT License.
// Copyright (c) 2025 Ladislav Bartos

//! Implementation of errors that can be returned by the `hbfreq_rs` library.

use colored::{ColoredString, Colorize};
use std::path::Path;
use thiserror::Error;

fn path_to_yellow(path: &Path) -> ColoredString {
    path.to_str().unwrap_or("<invalid path>").yellow()
}

/// Errors that can occur when constructing a topology.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TopologyError {
    #[error("{} atom '{}' refers to residue index '{}' but the topology only contains '{}' residues", "error:".red().bold(), .0.to_string().yellow(), .1.to_string().yellow(), .2.to_string().yellow())]
    InvalidResidueIndex(usize, usize, usize),
}

/// Errors that can occur when reading a file with water residue indices.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseIndexError {
    #[error("{} file '{}' was not found", "error:".red().bold(), path_to_yellow(.0))]
    FileNotFound(Box<Path>),
    #[error("{} file '{}' could not be read", "error:".red().bold(), path_to_yellow(.0))]
    LineNotFound(Box<Path>),
    #[error("{} could not parse line '{}' as residue indices", "error:".red().bold(), .0.yellow())]
    ParseLineErr(String),
}

/// Errors that can occur when reading residue classes from a YAML file.
#[derive(Error, Debug)]
pub enum ParseClassesError {
    #[error("{} file '{}' was not found", "error:".red().bold(), path_to_yellow(.0))]
    FileNotFound(Box<Path>),
    #[error("{} file '{}' could not be read", "error:".red().bold(), path_to_yellow(.0))]
    FileCouldNotBeRead(Box<Path>),
    #[error("{} could not parse residue classes ({})", "error:".red().bold(), .0)]
    CouldNotParseYaml(serde_yaml::Error),
}

/// Errors that can occur when mapping water letter codes to residues of a reduced trajectory.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RemapError {
    #[error("{} atom index '{}' tracked by letter code '{}' does not exist in the full trajectory", "error:".red().bold(), .0.to_string().yellow(), .1.yellow())]
    InvalidAtomIndex(usize, String),
    #[error("{} letter code '{}' has no atom index for frame '{}'", "error:".red().bold(), .0.yellow(), .1.to_string().yellow())]
    MissingFrame(String, usize),
    #[error("{} no water indices were provided for frame '{}'", "error:".red().bold(), .0.to_string().yellow())]
    MissingIndexRow(usize),
    #[error("{} more than one index '{}' in frame '{}'", "error:".red().bold(), .0.to_string().yellow(), .1.to_string().yellow())]
    AmbiguousMapping(usize, usize),
    #[error("{} position '{}' in frame '{}' exceeds the number of water residues in the reduced trajectory ('{}')", "error:".red().bold(), .0.to_string().yellow(), .1.to_string().yellow(), .2.to_string().yellow())]
    ReducedIndexOutOfRange(usize, usize, usize),
}

/// Errors that can occur when converting an atom into a hydrogen bond label.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LabelError {
    #[error("{} atom index '{}' does not exist in the topology", "error:".red().bold(), .0.to_string().yellow())]
    InvalidAtomIndex(usize),
    #[error("{} atom '{}' has no element assigned", "error:".red().bold(), .0.to_string().yellow())]
    NoElement(usize),
    #[error("{} water letter mapping is used but no frame was specified", "error:".red().bold())]
    FrameNotSpecified,
    #[error("{} letter code '{}' has no residue index for frame '{}'", "error:".red().bold(), .0.yellow(), .1.to_string().yellow())]
    FrameOutOfRange(String, usize),
    #[error("{} letter codes '{}' and '{}' both map to residue '{}' in frame '{}'", "error:".red().bold(), .0.yellow(), .1.yellow(), .2.to_string().yellow(), .3.to_string().yellow())]
    AmbiguousLetterCode(String, String, usize, usize),
}

/// Errors that can occur when converting hydrogen bonds into labels.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConvertError {
    #[error("{} hydrogen bonds of frame '{}' have '{}' columns (expected 3: donor, hydrogen, acceptor)", "error:".red().bold(), .0.to_string().yellow(), .1.to_string().yellow())]
    InvalidShape(usize, usize),
    #[error("{}", .0)]
    LabelError(LabelError),
}

/// Errors that can occur when constructing a hydrogen bond frequency matrix.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MatrixError {
    #[error("{} the provided trajectories contain no frames", "error:".red().bold())]
    NoFrames,
}

/// Errors that can occur when calculating frequencies of hydrogen bond partners.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FrequencyError {
    #[error("{} no donors donating a hydrogen bond to '{}' were found", "error:".red().bold(), .0.yellow())]
    NoDonors(String),
    #[error("{} no acceptors accepting a hydrogen bond from '{}' were found", "error:".red().bold(), .0.yellow())]
    NoAcceptors(String),
}

/// Errors that can occur when writing plot data.
#[derive(Error, Debug)]
pub enum WritePlotError {
    #[error("{} file '{}' could not be created", "error:".red().bold(), path_to_yellow(.0))]
    CouldNotCreate(Box<Path>),
    #[error("{} could not serialize plot data ({})", "error:".red().bold(), .0)]
    CouldNotSerialize(serde_yaml::Error),
}
