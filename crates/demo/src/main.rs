// File: crates/demo/src/main.rs
// Summary: Demo loads the regional CSV and replays selection + slider events through the orchestrator.

use anyhow::{Context, Result};
use dash_core::zoom::{SLIDER_DEFAULT, SLIDER_MAX, SLIDER_MIN, SLIDER_STEP};
use dash_core::{
    AxisRange, Counter, DerivedSeries, DistributionMode, RawDataset, Region, RenderSink,
    ViewOrchestrator,
};
use std::path::PathBuf;

fn main() -> Result<()> {
    // Accept path from CLI or fall back to the bundled sample
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/data/covid.csv")));
    println!("Using input file: {}", path.display());

    let raw = RawDataset::from_csv_path(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    println!("Loaded {} rows; regions: {:?}", raw.len(), raw.regions());

    if raw.is_empty() {
        anyhow::bail!("no rows loaded - check headers/delimiter.");
    }

    println!(
        "controls: pulau {:?}  distribution {:?}  slider [{}, {}] step {} default {}",
        Region::options(),
        DistributionMode::options(),
        SLIDER_MIN,
        SLIDER_MAX,
        SLIDER_STEP,
        SLIDER_DEFAULT
    );

    let mut orch = ViewOrchestrator::new(raw, Region::Jawa.label(), StdoutSink);

    // Walk the region selector in presentation order
    for region in Region::options() {
        orch.on_selection_change(region, DistributionMode::Discrete);
    }

    // Switch the distribution selector to Smoothed on the default region
    orch.on_selection_change(Region::Jawa.label(), DistributionMode::Smoothed);

    // Replay a run of slider events across the control's domain
    for v in [100.0, 300.0, -100.0, 0.0, 800.0] {
        match orch.on_zoom_event(v) {
            Some(m) => println!(
                "slider {v:>6}: x [{:.1}, {:.1}]  y [{:.1}, {:.1}]",
                m.x_range.start, m.x_range.end, m.y_range.start, m.y_range.end
            ),
            None => println!("slider {v:>6}: baseline only"),
        }
    }

    Ok(())
}

/// Stand-in render collaborator printing what a real plot would consume.
struct StdoutSink;

impl RenderSink for StdoutSink {
    fn update_series(&mut self, series: &DerivedSeries) {
        if series.is_empty() {
            println!("  series: empty plot");
            return;
        }
        let cases = series.counter_values(Counter::NewCases);
        let peak = cases.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        println!(
            "  series: {} buckets for {}, peak new cases {:.1}",
            series.len(),
            series.region,
            peak
        );
    }

    fn set_title(&mut self, title: &str) {
        println!("  title: {title}");
    }

    fn set_ranges(&mut self, x_range: AxisRange, y_range: AxisRange) {
        println!(
            "  ranges: x [{:.1}, {:.1}]  y [{:.1}, {:.1}]",
            x_range.start, x_range.end, y_range.start, y_range.end
        );
    }
}
