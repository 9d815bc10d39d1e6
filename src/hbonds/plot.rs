// Released under MIT License.
// Copyright (c) 2025 Ladislav Bartos

//! Data for plotting the most frequent hydrogen bond partners of a participant.
//!
//! No rendering is performed by `hbfreq_rs`. The plot description can be written
//! into a YAML file and rendered by an external program as a bar chart.

use getset::{CopyGetters, Getters};
use indexmap::IndexMap;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::errors::WritePlotError;

/// Role of the partners shown in the plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PartnerRole {
    Donors,
    Acceptors,
}

impl PartnerRole {
    /// Color of the bars.
    pub fn color(&self) -> &'static str {
        match self {
            PartnerRole::Donors => "darkblue",
            PartnerRole::Acceptors => "darkred",
        }
    }

    /// Label of the x-axis.
    pub fn axis_label(&self) -> &'static str {
        match self {
            PartnerRole::Donors => "Donors",
            PartnerRole::Acceptors => "Acceptors",
        }
    }
}

/// Single bar of the plot.
#[derive(Debug, Clone, PartialEq, Serialize, Getters, CopyGetters)]
pub struct PlotBar {
    /// Label of the partner (tick label).
    #[getset(get = "pub")]
    label: String,
    /// Frequency of the hydrogen bond in percent.
    #[getset(get_copy = "pub")]
    percent: f64,
}

/// Bar chart of the most frequent donors or acceptors of a hydrogen bond participant.
#[derive(Debug, Clone, PartialEq, Serialize, Getters, CopyGetters)]
pub struct FrequencyPlot {
    /// Label of the analyzed participant (plot title).
    #[getset(get = "pub")]
    participant: String,
    /// Role of the plotted partners.
    #[getset(get_copy = "pub")]
    role: PartnerRole,
    /// Color of the bars.
    #[getset(get_copy = "pub")]
    color: &'static str,
    /// Label of the x-axis.
    #[getset(get_copy = "pub")]
    x_label: &'static str,
    /// Label of the y-axis.
    #[getset(get_copy = "pub")]
    y_label: &'static str,
    /// Range of the y-axis.
    #[getset(get_copy = "pub")]
    y_range: (f64, f64),
    /// Number of requested bars (ticks). Can be higher than the number of `bars`.
    #[getset(get_copy = "pub")]
    n_ticks: usize,
    /// Plotted bars.
    #[getset(get = "pub")]
    bars: Vec<PlotBar>,
}

impl FrequencyPlot {
    /// Prepare a plot of the `n` most frequent partners.
    ///
    /// ## Parameters
    /// - `frequencies`: frequencies of partners sorted by decreasing frequency
    ///   (see [`crate::hbonds::timeline::most_frequent`])
    /// - `participant`: label of the analyzed participant
    /// - `n`: number of partners to plot
    /// - `role`: role of the partners
    ///
    /// ## Example
    /// ```
    /// use hbfreq_rs::prelude::*;
    ///
    /// let trj = vec![
    ///     vec![LabeledHBond::new("SER195s-O", "w1"), LabeledHBond::new("HIS57s-N", "SER195s-O")],
    ///     vec![LabeledHBond::new("SER195s-O", "w2")],
    /// ];
    ///
    /// let frequencies = most_frequent(&[trj], "SER195s-O").unwrap();
    /// let plot = FrequencyPlot::new(frequencies.acceptors(), "SER195s-O", 6, PartnerRole::Acceptors);
    ///
    /// assert_eq!(plot.bars().len(), 2);
    /// assert_eq!(plot.color(), "darkred");
    /// assert_eq!(plot.bars()[0].label(), "w1");
    /// assert_eq!(plot.bars()[0].percent(), 50.0);
    /// ```
    pub fn new(
        frequencies: &IndexMap<String, f64>,
        participant: &str,
        n: usize,
        role: PartnerRole,
    ) -> Self {
        let bars = frequencies
            .iter()
            .take(n)
            .map(|(label, frequency)| PlotBar {
                label: label.clone(),
                percent: frequency * 100.0,
            })
            .collect();

        FrequencyPlot {
            participant: participant.to_owned(),
            role,
            color: role.color(),
            x_label: role.axis_label(),
            y_label: "Frequency [%]",
            y_range: (0.0, 100.0),
            n_ticks: n,
            bars,
        }
    }

    /// Write the plot description into a YAML file.
    pub fn write_yaml(&self, filename: impl AsRef<Path>) -> Result<(), WritePlotError> {
        let file = File::create(filename.as_ref())
            .map_err(|_| WritePlotError::CouldNotCreate(Box::from(filename.as_ref())))?;

        serde_yaml::to_writer(BufWriter::new(file), self).map_err(WritePlotError::CouldNotSerialize)
    }
}
