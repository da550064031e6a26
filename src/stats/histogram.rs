use serde::Serialize;
use crate::stats::Sample;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBucket {
    pub range_start: f64,
    pub range_end: f64,
    pub count: u64,
    pub density: f64,
}

/// Equal-width histogram over the sample's own range, scaled so the bar
/// areas sum to one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DensityHistogram {
    pub buckets: Vec<HistogramBucket>,
    pub total_observations: u64,
}

impl DensityHistogram {
    pub fn from_sample(sample: &Sample, bins: usize) -> Self {
        let bins = bins.max(1);

        // A single-valued sample still needs a non-empty range; ±0.5 vanishes
        // below float resolution for large magnitudes
        let (lo, hi) = if sample.min() == sample.max() {
            let half = 0.5f64.max(sample.min().abs() * 1e-6);
            (sample.min() - half, sample.max() + half)
        } else {
            (sample.min(), sample.max())
        };
        let width = (hi - lo) / bins as f64;

        let mut counts = vec![0u64; bins];
        for &x in sample.values() {
            // Right edge belongs to the last bucket
            let idx = (((x - lo) / width).floor() as usize).min(bins - 1);
            counts[idx] += 1;
        }

        let total = sample.len() as u64;
        let buckets = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| {
                let range_start = lo + width * i as f64;
                let range_end = if i == bins - 1 { hi } else { lo + width * (i + 1) as f64 };
                HistogramBucket {
                    range_start,
                    range_end,
                    count,
                    density: count as f64 / (total as f64 * width),
                }
            })
            .collect();

        Self {
            buckets,
            total_observations: total,
        }
    }

    pub fn max_density(&self) -> f64 {
        self.buckets.iter().map(|b| b.density).fold(0.0, f64::max)
    }

    pub fn area(&self) -> f64 {
        self.buckets
            .iter()
            .map(|b| (b.range_end - b.range_start) * b.density)
            .sum()
    }
}
