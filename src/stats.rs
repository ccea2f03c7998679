use crate::models::ReportRow;
use serde::{Deserialize, Serialize};

/// Summary statistics of population over the reported rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub total: u64,
    pub min: Option<u64>,
    pub max: Option<u64>,
    pub mean: Option<f64>,
    pub median: Option<f64>,
}

/// Compute population statistics across `rows`.
pub fn population_summary(rows: &[ReportRow]) -> Summary {
    let mut vals: Vec<u64> = rows.iter().map(|r| r.population).collect();
    vals.sort_unstable();
    let count = vals.len();
    let total: u64 = vals.iter().sum();
    let mean = if count > 0 {
        Some(total as f64 / count as f64)
    } else {
        None
    };
    let median = if count == 0 {
        None
    } else if count % 2 == 1 {
        Some(vals[count / 2] as f64)
    } else {
        Some((vals[count / 2 - 1] as f64 + vals[count / 2] as f64) / 2.0)
    };
    Summary {
        count,
        total,
        min: vals.first().copied(),
        max: vals.last().copied(),
        mean,
        median,
    }
}
