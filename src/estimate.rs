//! Rate derivation and total-time estimation.
//!
//! Everything here is a pure function of its arguments: the CLI re-runs the
//! whole pipeline on every invocation and nothing is cached between calls.

use tracing::debug;

/// A measured reading sample: elapsed time over some number of units
/// (chapters or pages, depending on the mode).
#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub elapsed_minutes: f64,
    pub units_read: f64,
}

impl Sample {
    /// Builds a sample from an hours/minutes split over `units_read` units.
    /// The arithmetic is done in `f64` so no hour count can overflow.
    pub fn from_split(hours: u32, minutes: u32, units_read: f64) -> Self {
        Self {
            elapsed_minutes: hours as f64 * 60.0 + minutes as f64,
            units_read,
        }
    }
}

/// How the per-unit rate is supplied.
#[derive(Debug, Clone, Copy)]
pub enum SampleInput {
    /// Total time spent over a sample of N units; the rate is derived.
    TotalOverUnits(Sample),
    /// The reader already knows their average, in minutes per unit.
    DirectAverage(f64),
}

impl SampleInput {
    /// Minutes per unit, pauses not included.
    pub fn rate(&self) -> f64 {
        match *self {
            SampleInput::TotalOverUnits(sample) => {
                average_per_unit(sample.elapsed_minutes, sample.units_read)
            }
            SampleInput::DirectAverage(avg) => avg,
        }
    }
}

/// How the total unit count of the work is supplied.
#[derive(Debug, Clone, Copy)]
pub enum TotalUnits {
    Direct(u32),
    /// Volume count times an average units-per-volume figure.
    Volumes { volumes: u32, units_per_volume: f64 },
}

impl TotalUnits {
    pub fn resolve(&self) -> u32 {
        match *self {
            TotalUnits::Direct(total) => total,
            TotalUnits::Volumes {
                volumes,
                units_per_volume,
            } => total_units_from_volumes(volumes, units_per_volume),
        }
    }
}

/// A point estimate with its uncertainty band and daily-budget projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimateResult {
    pub point_minutes: f64,
    pub low_minutes: f64,
    pub high_minutes: f64,
    pub days: f64,
    pub weeks: f64,
}

/// `a / b`, or `default` when the denominator is zero.
pub fn safe_div(a: f64, b: f64, default: f64) -> f64 {
    if b == 0.0 { default } else { a / b }
}

/// Average minutes per unit over a sample, 0.0 for an empty sample.
pub fn average_per_unit(sample_elapsed_minutes: f64, sample_units: f64) -> f64 {
    safe_div(sample_elapsed_minutes, sample_units, 0.0)
}

/// Projects a per-unit rate onto the whole work.
///
/// The band is symmetric: `uncertainty_pct` of 15 gives low/high at ±15% of
/// the point estimate. The engine accepts any percentage and does not clamp;
/// input bounds are the caller's job. A zero daily budget yields an infinite
/// projection, which the caller must render as such.
pub fn estimate_total(
    average_per_unit: f64,
    overhead_per_unit: f64,
    total_units: f64,
    uncertainty_pct: f64,
    minutes_per_day: f64,
) -> EstimateResult {
    let effective_rate = average_per_unit + overhead_per_unit;
    let point = effective_rate * total_units;
    let low = point * (1.0 - uncertainty_pct / 100.0);
    let high = point * (1.0 + uncertainty_pct / 100.0);
    let days = if minutes_per_day > 0.0 {
        point / minutes_per_day
    } else {
        f64::INFINITY
    };
    let weeks = days / crate::constants::DAYS_PER_WEEK;

    debug!(
        "estimate: rate={:.3} min/unit over {} units -> {:.1} min",
        effective_rate, total_units, point
    );

    EstimateResult {
        point_minutes: point,
        low_minutes: low,
        high_minutes: high,
        days,
        weeks,
    }
}

/// Total unit count from a volume count and an average units-per-volume.
pub fn total_units_from_volumes(volumes: u32, units_per_volume: f64) -> u32 {
    (volumes as f64 * units_per_volume).round() as u32
}

/// Spreads a per-chapter overhead across the pages of an assumed chapter
/// length, so page-mode estimates do not ignore pauses entirely.
pub fn per_unit_proration(overhead_per_chapter: f64, assumed_units_per_chapter: f64) -> f64 {
    overhead_per_chapter / assumed_units_per_chapter.max(1.0)
}
