// File: crates/dash-core/src/lib.rs
// Summary: Core library entry point; exports the data-derivation and interaction-state API.

pub mod dataset;
pub mod derive;
pub mod smoothing;
pub mod view;
pub mod zoom;
pub mod orchestrator;

pub use dataset::{Counter, DatasetError, RawDataset, Record};
pub use derive::{derive_series, DerivedPoint, DerivedSeries};
pub use smoothing::{savgol, smooth_series};
pub use view::{title_for, DistributionMode, Region, ViewState};
pub use zoom::{AxisRange, RangeController, RangeMutation, ZoomState};
pub use orchestrator::{RenderPayload, RenderSink, ViewOrchestrator};
