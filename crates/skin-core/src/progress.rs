//! Progress statistics over a user's skin-condition log.
//!
//! Inputs are entries ordered newest first, as the log is displayed.

use std::cmp::Ordering;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::ProgressEntry;
use crate::enums::ProgressTrend;

/// Round to one decimal place. Exact halves go to the even digit
/// (6.25 -> 6.2, 6.75 -> 6.8); a value whose binary form sits just above or
/// below a half rounds toward its true side (6.45 -> 6.5).
#[must_use]
#[allow(clippy::float_cmp)]
pub fn round1(value: f64) -> f64 {
    let scaled = value * 10.0;
    // Exact error of the scaling, so `scaled + residual == value * 10` exactly.
    let residual = value.mul_add(10.0, -scaled);
    let rounded = if (scaled - scaled.trunc()).abs() == 0.5 {
        match residual.partial_cmp(&0.0) {
            Some(Ordering::Greater) => scaled.ceil(),
            Some(Ordering::Less) => scaled.floor(),
            _ => scaled.round_ties_even(),
        }
    } else {
        scaled.round_ties_even()
    };
    rounded / 10.0
}

/// Summary numbers for a progress log.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ProgressStats {
    pub total_entries: usize,
    pub avg_satisfaction: f64,
    pub avg_condition: f64,
    /// Percent of entries where the routine was followed.
    pub routine_compliance: f64,
    /// `None` with fewer than two entries.
    pub trend: Option<ProgressTrend>,
    pub trend_diff: Option<f64>,
}

/// Compute stats over `entries` (newest first). `None` for an empty log.
///
/// The trend compares the mean satisfaction of the newest half
/// (`len / 2` entries) against the rest, each rounded to one decimal.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn compute_stats(entries: &[ProgressEntry]) -> Option<ProgressStats> {
    if entries.is_empty() {
        return None;
    }
    let len = entries.len() as f64;

    let avg_satisfaction = round1(satisfaction_sum(entries) / len);
    let avg_condition = round1(
        entries
            .iter()
            .map(ProgressEntry::overall_condition)
            .sum::<f64>()
            / len,
    );
    let followed = entries.iter().filter(|e| e.routine_followed).count() as f64;
    let routine_compliance = round1(followed / len * 100.0);

    let mid = entries.len() / 2;
    let (trend, trend_diff) = if mid > 0 {
        let (recent, older) = entries.split_at(mid);
        let recent_avg = round1(satisfaction_sum(recent) / recent.len() as f64);
        let older_avg = round1(satisfaction_sum(older) / older.len() as f64);
        let trend = if recent_avg > older_avg {
            ProgressTrend::Improving
        } else if (recent_avg - older_avg).abs() < f64::EPSILON {
            ProgressTrend::Stable
        } else {
            ProgressTrend::Declining
        };
        (Some(trend), Some(round1((recent_avg - older_avg).abs())))
    } else {
        (None, None)
    };

    Some(ProgressStats {
        total_entries: entries.len(),
        avg_satisfaction,
        avg_condition,
        routine_compliance,
        trend,
        trend_diff,
    })
}

fn satisfaction_sum(entries: &[ProgressEntry]) -> f64 {
    entries
        .iter()
        .map(|e| f64::from(e.satisfaction_rating))
        .sum()
}

/// Chart series, oldest entry first.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ProgressChart {
    pub dates: Vec<String>,
    pub satisfaction: Vec<u8>,
    pub hydration: Vec<u8>,
    pub clarity: Vec<u8>,
    pub breakouts: Vec<u8>,
    pub redness: Vec<u8>,
    pub overall: Vec<f64>,
}

impl ProgressChart {
    /// Build series from entries ordered newest first.
    #[must_use]
    pub fn from_entries(entries: &[ProgressEntry]) -> Self {
        let mut chart = Self::default();
        for entry in entries.iter().rev() {
            chart.dates.push(entry.date.format("%b %d").to_string());
            chart.satisfaction.push(entry.satisfaction_rating);
            chart.hydration.push(entry.hydration_level);
            chart.clarity.push(entry.clarity);
            chart.breakouts.push(entry.breakouts);
            chart.redness.push(entry.redness);
            chart.overall.push(entry.overall_condition());
        }
        chart
    }
}
