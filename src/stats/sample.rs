use itertools::{Itertools, MinMaxResult};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SampleError {
    #[error("Sample must contain at least one value")]
    Empty,

    #[error("Sample value at index {index} is not finite: {value}")]
    NonFinite { index: usize, value: f64 },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReferenceError {
    #[error("Reference parameters must be finite (mean={mean}, std_dev={std_dev})")]
    NonFinite { mean: f64, std_dev: f64 },

    #[error("Reference standard deviation must be greater than zero, got {0}")]
    NonPositiveStdDev(f64),
}

/// A non-empty set of finite observations with its population moments.
///
/// The moments are computed once on construction; the value order is kept
/// but carries no meaning.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    values: Vec<f64>,
    mean: f64,
    std_dev: f64,
    min: f64,
    max: f64,
}

impl Sample {
    pub fn new(values: Vec<f64>) -> Result<Self, SampleError> {
        if let Some((index, &value)) = values.iter().find_position(|v| !v.is_finite()) {
            return Err(SampleError::NonFinite { index, value });
        }

        let (min, max) = match values.iter().copied().minmax_by(f64::total_cmp) {
            MinMaxResult::NoElements => return Err(SampleError::Empty),
            MinMaxResult::OneElement(v) => (v, v),
            MinMaxResult::MinMax(lo, hi) => (lo, hi),
        };

        // All-equal samples get exact moments; summation would leave rounding residue
        if min == max {
            return Ok(Self {
                values,
                mean: min,
                std_dev: 0.0,
                min,
                max,
            });
        }

        // Moments are taken on values divided by a power of two, which is exact
        // and keeps the sums finite for magnitudes near f64::MAX
        let scale = power_of_two_scale(min.abs().max(max.abs()));
        let n = values.len() as f64;
        let scaled_mean = values.iter().map(|&x| x / scale).sum::<f64>() / n;

        // Second central moment, divided by N (population estimator)
        let m2: f64 = values
            .iter()
            .map(|&x| {
                let delta = x / scale - scaled_mean;
                delta * delta
            })
            .sum();
        let mean = scaled_mean * scale;
        let std_dev = (m2 / n).sqrt() * scale;

        Ok(Self {
            values,
            mean,
            std_dev,
            min,
            max,
        })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Population standard deviation (sum of squared deviations over N).
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// True when every value is identical, so no normal density fits the data.
    pub fn is_degenerate(&self) -> bool {
        self.std_dev == 0.0
    }
}

fn power_of_two_scale(max_abs: f64) -> f64 {
    if max_abs > 1.0 {
        // log2(f64::MAX) rounds up to 1024, one past the largest finite power
        2f64.powi(max_abs.log2().floor().min(1023.0) as i32)
    } else {
        1.0
    }
}

/// User-supplied normal distribution the sample is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferenceDistribution {
    mean: f64,
    std_dev: f64,
}

impl ReferenceDistribution {
    pub fn new(mean: f64, std_dev: f64) -> Result<Self, ReferenceError> {
        if !mean.is_finite() || !std_dev.is_finite() {
            return Err(ReferenceError::NonFinite { mean, std_dev });
        }
        if std_dev <= 0.0 {
            return Err(ReferenceError::NonPositiveStdDev(std_dev));
        }
        Ok(Self { mean, std_dev })
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }
}
