use crate::error::{ScopeResult, ShotScopeError};
use crate::shot::{EnrichedShot, MetricField};
use serde::Serialize;

/// Descriptive statistics for one metric column of a shot group.
///
/// `count` is the number of shots that actually reported the measurement;
/// when it is zero the remaining statistics are NaN and renderers must check
/// the count before printing them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryStats {
    pub field: MetricField,
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub max: f64,
    pub min: f64,
    pub p90: f64,
}

/// Scalar extremes the plotting stage sizes its axes from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisBounds {
    pub max_lateral_yds: f64,
    pub min_lateral_yds: f64,
    pub max_apex_height_yds: f64,
}

impl AxisBounds {
    pub fn from_shots(shots: &[EnrichedShot]) -> ScopeResult<Self> {
        if shots.is_empty() {
            return Err(ShotScopeError::EmptyGroup);
        }

        let mut bounds = AxisBounds {
            max_lateral_yds: f64::NEG_INFINITY,
            min_lateral_yds: f64::INFINITY,
            max_apex_height_yds: f64::NEG_INFINITY,
        };
        for shot in shots {
            let lat = shot.record.lateral_distance_yds;
            bounds.max_lateral_yds = bounds.max_lateral_yds.max(lat);
            bounds.min_lateral_yds = bounds.min_lateral_yds.min(lat);
            bounds.max_apex_height_yds = bounds.max_apex_height_yds.max(shot.apex_height_yds);
        }
        Ok(bounds)
    }

    /// Half-width of a symmetric lateral axis covering every landing point.
    pub fn lateral_extent(&self) -> f64 {
        self.max_lateral_yds.abs().max(self.min_lateral_yds.abs())
    }
}

/// Linear-interpolation percentile between closest ranks (rank = p * (n - 1)),
/// the convention mainstream statistics libraries default to. `sorted` must
/// be ascending and non-empty.
fn percentile(sorted: &[f64], p: f64) -> f64 {
    let rank = p * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        sorted[lo] + (rank - lo as f64) * (sorted[hi] - sorted[lo])
    }
}

fn summarize_field(shots: &[EnrichedShot], field: MetricField) -> SummaryStats {
    let mut values: Vec<f64> = shots.iter().filter_map(|s| field.extract(s)).collect();
    values.sort_by(f64::total_cmp);

    if values.is_empty() {
        return SummaryStats {
            field,
            count: 0,
            mean: f64::NAN,
            median: f64::NAN,
            max: f64::NAN,
            min: f64::NAN,
            p90: f64::NAN,
        };
    }

    let count = values.len();
    SummaryStats {
        field,
        count,
        mean: values.iter().sum::<f64>() / count as f64,
        median: percentile(&values, 0.5),
        max: values[count - 1],
        min: values[0],
        p90: percentile(&values, 0.9),
    }
}

/// Summarize the requested columns over a group, one entry per field in
/// request order. A group with zero shots has no statistics at all and is the
/// caller's cue to skip reporting.
pub fn summarize(shots: &[EnrichedShot], fields: &[MetricField]) -> ScopeResult<Vec<SummaryStats>> {
    if shots.is_empty() {
        return Err(ShotScopeError::EmptyGroup);
    }
    Ok(fields
        .iter()
        .map(|&field| summarize_field(shots, field))
        .collect())
}
