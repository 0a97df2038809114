// File: crates/dash-core/src/orchestrator.rs
// Summary: Event orchestration; composes derivation + smoothing and feeds the render sink.

use crate::dataset::RawDataset;
use crate::derive::{derive_series, DerivedSeries};
use crate::smoothing::smooth_series;
use crate::view::{title_for, DistributionMode, ViewState};
use crate::zoom::{AxisRange, RangeController, RangeMutation, ZoomState};

/// Boundary to the external rendering collaborator. Implementations must
/// tolerate an empty series (blank plot).
pub trait RenderSink {
    fn update_series(&mut self, series: &DerivedSeries);
    fn set_title(&mut self, title: &str);
    fn set_ranges(&mut self, x_range: AxisRange, y_range: AxisRange);
}

/// What one selection change hands to the renderer.
#[derive(Clone, Debug)]
pub struct RenderPayload {
    pub title: String,
    pub series: DerivedSeries,
}

/// Drives the view: recomputes the derived series on selection changes and
/// forwards zoom mutations, pushing everything to the render sink.
///
/// All handlers run synchronously inside the caller's event dispatch, one
/// event at a time; the raw dataset is never mutated after load.
pub struct ViewOrchestrator<R: RenderSink> {
    raw: RawDataset,
    state: ViewState,
    zoom: RangeController,
    sink: R,
}

impl<R: RenderSink> ViewOrchestrator<R> {
    /// Build the orchestrator with an initial region in Discrete mode and
    /// push the initial render. Zoom ranges start from the series extent.
    pub fn new(raw: RawDataset, region: &str, sink: R) -> Self {
        let mut orch = Self {
            raw,
            state: ViewState::new(region),
            zoom: RangeController::new(AxisRange::new(0.0, 1.0), AxisRange::new(0.0, 1.0)),
            sink,
        };
        let payload = orch.on_selection_change(region, DistributionMode::default());
        let (x, y) = initial_ranges(&payload.series);
        orch.zoom = RangeController::new(x, y);
        orch
    }

    pub fn view_state(&self) -> &ViewState {
        &self.state
    }

    pub fn zoom_state(&self) -> &ZoomState {
        self.zoom.state()
    }

    pub fn sink(&self) -> &R {
        &self.sink
    }

    /// Recompute the derived series for a new selection and emit it with an
    /// updated title. An unknown region yields an empty series, not an error.
    pub fn on_selection_change(
        &mut self,
        region: &str,
        mode: DistributionMode,
    ) -> RenderPayload {
        let derived = derive_series(&self.raw, region);
        let series = match mode {
            DistributionMode::Discrete => derived,
            DistributionMode::Smoothed => smooth_series(&derived),
        };

        self.state.selected_region = region.to_string();
        self.state.mode = mode;
        self.state.current_series = series.clone();

        let title = title_for(region);
        self.sink.set_title(&title);
        self.sink.update_series(&series);
        RenderPayload { title, series }
    }

    /// Feed one slider event through the range controller, forwarding the
    /// mutated ranges to the sink when a mutation applied.
    pub fn on_zoom_event(&mut self, value: f64) -> Option<RangeMutation> {
        let mutation = self.zoom.on_slider_change(value)?;
        self.sink.set_ranges(mutation.x_range, mutation.y_range);
        Some(mutation)
    }
}

/// Starting ranges for the zoom controller: x spans the series windows in
/// day units, y spans zero to the largest counter. Unit spans for an empty
/// series.
fn initial_ranges(series: &DerivedSeries) -> (AxisRange, AxisRange) {
    let x = match series.x_extent() {
        Some((start, end)) => AxisRange::new(start, end),
        None => AxisRange::new(0.0, 1.0),
    };
    let y = match series.max_counter_value() {
        Some(max) if max > 0.0 => AxisRange::new(0.0, max),
        _ => AxisRange::new(0.0, 1.0),
    };
    (x, y)
}
