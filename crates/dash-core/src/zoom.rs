// File: crates/dash-core/src/zoom.rs
// Summary: Relative-zoom state machine converting slider events into range mutations.

/// Slider domain, matching the dashboard control.
pub const SLIDER_MIN: f64 = -400.0;
pub const SLIDER_MAX: f64 = 800.0;
pub const SLIDER_STEP: f64 = 100.0;
pub const SLIDER_DEFAULT: f64 = 0.0;

/// A visible interval on one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    pub start: f64,
    pub end: f64,
}

impl AxisRange {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn span(&self) -> f64 {
        self.end - self.start
    }
}

/// Ranges produced by one accepted slider event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeMutation {
    pub x_range: AxisRange,
    pub y_range: AxisRange,
}

/// Zoom baseline plus the current visible ranges.
/// `last_slider_value` starts unset and is set after every event, never reset.
#[derive(Clone, Copy, Debug)]
pub struct ZoomState {
    pub last_slider_value: Option<f64>,
    pub x_range: AxisRange,
    pub y_range: AxisRange,
}

/// Converts slider events into range mutations.
///
/// The first event only establishes the baseline; every later nonzero event
/// compares the new value against the previous one and applies a symmetric
/// add/subtract pattern to both axes. The comparison reacts to the sign and
/// relative magnitude of consecutive absolute slider positions, not to their
/// difference; kept as observed rather than normalized to a delta-based
/// zoom.
#[derive(Clone, Copy, Debug)]
pub struct RangeController {
    state: ZoomState,
}

impl RangeController {
    pub fn new(x_range: AxisRange, y_range: AxisRange) -> Self {
        Self {
            state: ZoomState {
                last_slider_value: None,
                x_range,
                y_range,
            },
        }
    }

    pub fn state(&self) -> &ZoomState {
        &self.state
    }

    /// Handle one slider event. Returns the mutated ranges, or `None` when
    /// no mutation applied (first event, or `v == 0`).
    pub fn on_slider_change(&mut self, v: f64) -> Option<RangeMutation> {
        let mutated = match self.state.last_slider_value {
            None => false,
            Some(p) => {
                if v > 0.0 {
                    if v > p {
                        self.contract(v);
                    } else {
                        self.expand(v);
                    }
                    true
                } else if v < 0.0 {
                    // Mirrored comparison; with v negative the contract
                    // arithmetic widens and the expand arithmetic narrows.
                    if v < p {
                        self.contract(v);
                    } else {
                        self.expand(v);
                    }
                    true
                } else {
                    false
                }
            }
        };
        self.state.last_slider_value = Some(v);
        if mutated {
            Some(RangeMutation {
                x_range: self.state.x_range,
                y_range: self.state.y_range,
            })
        } else {
            None
        }
    }

    fn contract(&mut self, v: f64) {
        self.state.x_range.start += v;
        self.state.x_range.end -= v;
        self.state.y_range.start += v;
        self.state.y_range.end -= v;
    }

    fn expand(&mut self, v: f64) {
        self.state.x_range.start -= v;
        self.state.x_range.end += v;
        self.state.y_range.start -= v;
        self.state.y_range.end += v;
    }
}
