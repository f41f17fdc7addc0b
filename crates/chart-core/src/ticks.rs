// File: crates/chart-core/src/ticks.rs
// Summary: Axis tick selection (extended Wilkinson search) and tick label formatting.
// Notes:
// - Candidates are (j, q, k, z, start): skip factor j, nice multiplier q from
//   NICE_STEPS, tick count k, power of ten z and the first tick index. Each
//   candidate is scored on simplicity, coverage, density and legibility, and
//   the search loops are pruned with upper bounds on the attainable score.

use tracing::trace;

use crate::error::{ChartError, Result};

/// Nice step multipliers, simplest first.
pub const NICE_STEPS: [f64; 4] = [1.0, 5.0, 2.0, 2.5];

/// Tick count most axes ask for.
pub const DEFAULT_TICK_COUNT: usize = 5;

/// Largest target count the search honours; larger requests are clamped.
pub const MAX_TICK_COUNT: usize = 100;

/// Labels needing more decimals than this print in scientific notation.
pub const MAX_FIXED_DECIMALS: usize = 6;

/// Labels at or above this magnitude print in scientific notation.
pub const SCIENTIFIC_ABOVE: f64 = 1e6;

/// Relative weights of simplicity, coverage, density and legibility.
/// Density outweighs simplicity so the count stays near the target.
const WEIGHTS: [f64; 4] = [0.15, 0.2, 0.6, 0.05];

// Hard caps on the search; the score bounds normally stop long before these.
const MAX_SKIP: usize = 64;
const MAX_EXTRA_TICKS: usize = 64;
const MAX_DECADES: i32 = 32;

// Decimals probed past the step's leading digit (covers 2.5 and skipped starts).
const EXTRA_DECIMALS: f64 = 3.0;
// Beyond this 10^d is no longer a finite f64.
const MAX_DECIMALS: f64 = 308.0;

const EPS: f64 = f64::EPSILON * 100.0;

#[derive(Clone, Copy, Debug)]
struct Candidate {
    lmin: f64,
    step: f64,
    count: usize,
    score: f64,
}

/// Choose evenly spaced, round-numbered ticks covering `[data_min, data_max]`.
///
/// Returns ticks in increasing order. A pair equal to within rounding of its
/// own magnitude yields a single value; `target_count` is clamped to
/// `2..=MAX_TICK_COUNT`. Fails with [`ChartError::InvalidRange`] for
/// non-finite or inverted input.
pub fn select_ticks(data_min: f64, data_max: f64, target_count: usize) -> Result<Vec<f64>> {
    if !data_min.is_finite() || !data_max.is_finite() || data_min > data_max {
        return Err(ChartError::InvalidRange { min: data_min, max: data_max });
    }
    if data_max - data_min <= EPS * data_min.abs().max(data_max.abs()) {
        return Ok(vec![data_min]);
    }
    let m = target_count.clamp(2, MAX_TICK_COUNT);

    let best = search(data_min, data_max, m);
    let Some(best) = best else {
        // Only reachable when the range is too wide for f64 arithmetic.
        return Ok(vec![data_min, data_max]);
    };
    trace!(
        data_min,
        data_max,
        target = m,
        step = best.step,
        count = best.count,
        score = best.score,
        "selected ticks"
    );
    Ok(materialize(&best))
}

fn search(dmin: f64, dmax: f64, m: usize) -> Option<Candidate> {
    let [w_simp, w_cov, w_dens, w_leg] = WEIGHTS;
    let mut best: Option<Candidate> = None;
    let best_score = |b: &Option<Candidate>| b.map_or(-2.0, |c| c.score);

    'skip: for j in 1..=MAX_SKIP {
        for (qi, &q) in NICE_STEPS.iter().enumerate() {
            let sm = simplicity_max(qi, j);
            if w_simp * sm + w_cov + w_dens + w_leg < best_score(&best) {
                break 'skip;
            }

            for k in 2..m.saturating_add(MAX_EXTRA_TICKS) {
                let dm = density_max(k, m);
                if w_simp * sm + w_cov + w_dens * dm + w_leg < best_score(&best) {
                    break;
                }

                let delta = (dmax - dmin) / (k + 1) as f64 / j as f64 / q;
                let z0 = delta.log10().ceil();
                if !z0.is_finite() {
                    continue;
                }
                let z0 = z0 as i32;

                for z in z0..z0 + MAX_DECADES {
                    let step = j as f64 * q * 10f64.powi(z);
                    if !step.is_finite() || step <= 0.0 {
                        break;
                    }
                    let cm = coverage_max(dmin, dmax, step * (k - 1) as f64);
                    if w_simp * sm + w_cov * cm + w_dens * dm + w_leg < best_score(&best) {
                        break;
                    }

                    let min_start = (dmax / step).floor() * j as f64 - ((k - 1) * j) as f64;
                    let max_start = (dmin / step).ceil() * j as f64;
                    if min_start > max_start {
                        continue;
                    }

                    let step_decimals = decimals_for(step);
                    let mut start = min_start;
                    while start <= max_start {
                        let lmin = start * (step / j as f64);
                        let lmax = lmin + step * (k - 1) as f64;

                        let s = simplicity(qi, j, lmin, lmax, step);
                        let c = coverage(dmin, dmax, lmin, lmax);
                        let g = density(k, m, dmin, dmax, lmin, lmax);
                        let l = legibility(lmin, lmax, step, step_decimals);
                        let score = w_simp * s + w_cov * c + w_dens * g + w_leg * l;

                        if score > best_score(&best) {
                            best = Some(Candidate { lmin, step, count: k, score });
                        }
                        start += 1.0;
                    }
                }
            }
        }
    }
    best
}

fn materialize(c: &Candidate) -> Vec<f64> {
    (0..c.count)
        .map(|i| {
            let v = c.lmin + c.step * i as f64;
            snap(v, c.step)
        })
        .collect()
}

// Clear accumulated rounding noise (e.g. 0.30000000000000004) relative to the step.
fn snap(v: f64, step: f64) -> f64 {
    let v = if v.abs() < step * 1e-9 { 0.0 } else { v };
    let digits = decimals_for(step);
    let scale = 10f64.powi(digits as i32);
    let snapped = (v * scale).round() / scale;
    if snapped.is_finite() && (snapped - v).abs() <= step * 1e-6 {
        snapped
    } else {
        v
    }
}

fn simplicity(qi: usize, j: usize, lmin: f64, lmax: f64, step: f64) -> f64 {
    let n = NICE_STEPS.len() as f64;
    let rem = lmin.rem_euclid(step);
    let has_zero = (rem < EPS || step - rem < EPS) && lmin <= 0.0 && lmax >= 0.0;
    let v = if has_zero { 1.0 } else { 0.0 };
    1.0 - qi as f64 / (n - 1.0) - j as f64 + v
}

fn simplicity_max(qi: usize, j: usize) -> f64 {
    let n = NICE_STEPS.len() as f64;
    1.0 - qi as f64 / (n - 1.0) - j as f64 + 1.0
}

// Distances are taken relative to the range so tiny magnitudes do not underflow.
fn coverage(dmin: f64, dmax: f64, lmin: f64, lmax: f64) -> f64 {
    let unit = 0.1 * (dmax - dmin);
    1.0 - 0.5 * (((dmax - lmax) / unit).powi(2) + ((dmin - lmin) / unit).powi(2))
}

fn coverage_max(dmin: f64, dmax: f64, span: f64) -> f64 {
    let range = dmax - dmin;
    if span > range {
        let half = (span - range) / 2.0 / (0.1 * range);
        1.0 - half * half
    } else {
        1.0
    }
}

fn density(k: usize, m: usize, dmin: f64, dmax: f64, lmin: f64, lmax: f64) -> f64 {
    let covered = lmax.max(dmax) - dmin.min(lmin);
    let ratio = (k - 1) as f64 / (m - 1) as f64 * (covered / (lmax - lmin));
    2.0 - ratio.max(1.0 / ratio)
}

// Format legibility: labels should need no more decimals than the step and
// should stay in fixed notation. Never exceeds 1, so the pruning bounds hold.
fn legibility(lmin: f64, lmax: f64, step: f64, step_decimals: usize) -> f64 {
    let decimals = shared_decimals(&[lmin, lmin + step]).max(step_decimals);
    let mut l = 1.0;
    if decimals > step_decimals {
        l -= 0.25;
    }
    if needs_scientific(decimals, lmin.abs().max(lmax.abs())) {
        l -= 0.5;
    }
    l
}

fn density_max(k: usize, m: usize) -> f64 {
    if k >= m {
        2.0 - (k - 1) as f64 / (m - 1) as f64
    } else {
        1.0
    }
}

/// Smallest number of decimals that prints every tick faithfully.
///
/// The search is bounded by the smallest spacing between ticks (or the
/// smallest nonzero magnitude for a single tick), so tiny steps get as many
/// decimals as they need.
pub fn shared_decimals(ticks: &[f64]) -> usize {
    let step = ticks
        .windows(2)
        .map(|w| (w[1] - w[0]).abs())
        .fold(f64::INFINITY, f64::min);
    let unit = if step.is_finite() && step > 0.0 {
        step
    } else {
        ticks.iter().map(|v| v.abs()).filter(|v| *v > 0.0).fold(f64::INFINITY, f64::min)
    };
    if !unit.is_finite() {
        return 0;
    }
    let tol = unit * 1e-6;
    let limit = (EXTRA_DECIMALS - unit.log10().floor()).clamp(0.0, MAX_DECIMALS) as usize;
    (0..=limit)
        .find(|&d| {
            let scale = 10f64.powi(d as i32);
            ticks.iter().all(|v| ((v * scale).round() / scale - v).abs() <= tol)
        })
        .unwrap_or(limit)
}

fn needs_scientific(decimals: usize, magnitude: f64) -> bool {
    decimals > MAX_FIXED_DECIMALS || magnitude >= SCIENTIFIC_ABOVE
}

fn decimals_for(step: f64) -> usize {
    shared_decimals(&[0.0, step])
}

/// Format a tick value with a fixed number of decimals, never printing `-0`.
pub fn format_tick(value: f64, decimals: usize) -> String {
    let s = format!("{:.*}", decimals, value);
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
        s[1..].to_string()
    } else {
        s
    }
}

/// Format a tick value in scientific notation with `precision` mantissa
/// decimals. Zero prints as `0`.
pub fn format_tick_scientific(value: f64, precision: usize) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{:.*e}", precision, value)
}

/// Format all ticks of one axis with a shared precision.
///
/// Fixed notation is used unless the labels would need more than
/// [`MAX_FIXED_DECIMALS`] decimals or reach [`SCIENTIFIC_ABOVE`]; then all
/// labels switch to scientific notation with a shared mantissa precision.
pub fn format_ticks(ticks: &[f64]) -> Vec<String> {
    let d = shared_decimals(ticks);
    let magnitude = ticks.iter().fold(0.0f64, |acc, v| acc.max(v.abs()));
    if !needs_scientific(d, magnitude) {
        return ticks.iter().map(|&v| format_tick(v, d)).collect();
    }
    let tol = ticks
        .windows(2)
        .map(|w| (w[1] - w[0]).abs())
        .fold(f64::INFINITY, f64::min)
        .min(magnitude)
        * 1e-6;
    let precision = (0..=16)
        .find(|&p| {
            ticks.iter().all(|&v| {
                format_tick_scientific(v, p)
                    .parse::<f64>()
                    .map_or(false, |back| (back - v).abs() <= tol)
            })
        })
        .unwrap_or(16);
    ticks.iter().map(|&v| format_tick_scientific(v, precision)).collect()
}
