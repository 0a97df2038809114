// File: crates/dash-core/src/view.rs
// Summary: Selection state (region, distribution mode) and title formatting.

use crate::derive::DerivedSeries;

/// Raw values vs polynomial-regression-filtered values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DistributionMode {
    #[default]
    Discrete,
    Smoothed,
}

impl DistributionMode {
    pub fn label(&self) -> &'static str {
        match self {
            DistributionMode::Discrete => "Discrete",
            DistributionMode::Smoothed => "Smoothed",
        }
    }

    /// Selector options in presentation order.
    pub fn options() -> [&'static str; 2] {
        ["Discrete", "Smoothed"]
    }
}

/// The known regions of the dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    Jawa,
    Kalimantan,
    Papua,
    Sumatera,
}

impl Region {
    /// Alphabetical, matching presentation order.
    pub const ALL: [Region; 4] = [
        Region::Jawa,
        Region::Kalimantan,
        Region::Papua,
        Region::Sumatera,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Region::Jawa => "Jawa",
            Region::Kalimantan => "Kalimantan",
            Region::Papua => "Papua",
            Region::Sumatera => "Sumatera",
        }
    }

    /// Selector options, sorted alphabetically.
    pub fn options() -> Vec<&'static str> {
        Self::ALL.iter().map(|r| r.label()).collect()
    }
}

/// Plot title for a region selection.
pub fn title_for(region: &str) -> String {
    format!("Covid cases for {region}")
}

/// Current selection plus the series derived from it.
/// Owned exclusively by the orchestrator; mutated only on selection changes.
#[derive(Clone, Debug, Default)]
pub struct ViewState {
    pub selected_region: String,
    pub mode: DistributionMode,
    pub current_series: DerivedSeries,
}

impl ViewState {
    pub fn new(region: &str) -> Self {
        Self {
            selected_region: region.to_string(),
            mode: DistributionMode::default(),
            current_series: DerivedSeries::default(),
        }
    }
}
