// File: crates/dash-core/src/smoothing.rs
// Summary: Savitzky-Golay smoothing pass over the six counter columns.

use crate::dataset::Counter;
use crate::derive::DerivedSeries;

/// Fixed filter window length for the Smoothed distribution mode.
pub const SAVGOL_WINDOW: usize = 51;
/// Fixed polynomial degree for the Smoothed distribution mode.
pub const SAVGOL_DEGREE: usize = 3;

/// Smooth all six counters of a derived series.
///
/// Length and ordering are preserved; only counter values change. Series
/// shorter than the fixed window fall back to a shrunk window (largest odd
/// length that fits); series shorter than `SAVGOL_DEGREE + 2` rows are
/// returned unchanged.
pub fn smooth_series(series: &DerivedSeries) -> DerivedSeries {
    let mut out = series.clone();
    for counter in Counter::ALL {
        let values = series.counter_values(counter);
        let smoothed = savgol(&values, SAVGOL_WINDOW, SAVGOL_DEGREE);
        for (point, value) in out.points.iter_mut().zip(smoothed) {
            point.record.set_counter(counter, value);
        }
    }
    out
}

/// Savitzky-Golay filter: replace each sample with the value of a
/// degree-`degree` polynomial least-squares-fitted to the `window` samples
/// centered on it.
///
/// Edges use an edge-adjusted window: the fit runs over the first (or last)
/// full window and the polynomial is evaluated at the sample's actual offset
/// within it. If the input is shorter than `window`, the window shrinks to
/// the largest odd length that fits; inputs shorter than `degree + 2` are
/// returned as-is.
pub fn savgol(values: &[f64], window: usize, degree: usize) -> Vec<f64> {
    let n = values.len();
    if n < degree + 2 {
        return values.to_vec();
    }
    let mut w = window.min(n);
    if w % 2 == 0 {
        w -= 1;
    }
    if w <= degree {
        return values.to_vec();
    }
    let half = w / 2;

    // Interior samples share one weight vector (evaluation at window center);
    // each edge offset gets its own.
    let center = fit_weights(w, degree, half as f64);

    let mut out = Vec::with_capacity(n);
    let mut edge;
    for i in 0..n {
        let (lo, weights) = if i < half {
            edge = fit_weights(w, degree, i as f64);
            (0, edge.as_slice())
        } else if i + half >= n {
            edge = fit_weights(w, degree, (i - (n - w)) as f64);
            (n - w, edge.as_slice())
        } else {
            (i - half, center.as_slice())
        };
        let fitted = weights
            .iter()
            .zip(&values[lo..lo + w])
            .map(|(wt, y)| wt * y)
            .sum::<f64>();
        out.push(fitted);
    }
    out
}

/// Weight vector such that `dot(weights, window)` equals the least-squares
/// degree-`degree` polynomial fit over `window` samples evaluated at offset
/// `x0`. Falls back to a unit weight at `x0` if the normal equations are
/// singular (cannot happen for distinct sample positions, kept as a guard).
fn fit_weights(window: usize, degree: usize, x0: f64) -> Vec<f64> {
    let m = degree + 1;
    // Sample positions are centered on the window midpoint; the moment
    // matrix stays well conditioned that way.
    let mid = (window as f64 - 1.0) / 2.0;

    // Moment matrix of the centered positions and the evaluation vector
    // [1, t0, t0^2, ...]; solving gives the dual coefficients z with
    // weights[k] = sum_j z[j] * t_k^j.
    let mut ata = vec![vec![0.0f64; m]; m];
    for k in 0..window {
        let t = k as f64 - mid;
        let mut powers = vec![1.0f64; 2 * degree + 1];
        for j in 1..powers.len() {
            powers[j] = powers[j - 1] * t;
        }
        for r in 0..m {
            for c in 0..m {
                ata[r][c] += powers[r + c];
            }
        }
    }
    let t0 = x0 - mid;
    let mut rhs = vec![0.0f64; m];
    let mut p = 1.0f64;
    for r in rhs.iter_mut() {
        *r = p;
        p *= t0;
    }

    match solve_linear(ata, rhs) {
        Some(z) => (0..window)
            .map(|k| {
                let t = k as f64 - mid;
                let mut acc = 0.0;
                for &zj in z.iter().rev() {
                    acc = acc * t + zj;
                }
                acc
            })
            .collect(),
        None => {
            let mut unit = vec![0.0; window];
            unit[(x0.round() as usize).min(window - 1)] = 1.0;
            unit
        }
    }
}

/// Gaussian elimination with partial pivoting. `None` on a singular system.
fn solve_linear(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Option<Vec<f64>> {
    let n = b.len();
    for col in 0..n {
        let mut pivot = col;
        for row in (col + 1)..n {
            if a[row][col].abs() > a[pivot][col].abs() {
                pivot = row;
            }
        }
        if a[pivot][col].abs() < 1e-12 {
            return None;
        }
        a.swap(col, pivot);
        b.swap(col, pivot);

        for row in (col + 1)..n {
            let factor = a[row][col] / a[col][col];
            for c in col..n {
                a[row][c] -= factor * a[col][c];
            }
            b[row] -= factor * b[col];
        }
    }
    let mut x = vec![0.0f64; n];
    for row in (0..n).rev() {
        let mut acc = b[row];
        for c in (row + 1)..n {
            acc -= a[row][c] * x[c];
        }
        x[row] = acc / a[row][row];
    }
    Some(x)
}
