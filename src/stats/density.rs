use std::f64::consts::PI;
use serde::Serialize;
use crate::constants::{DOMAIN_PADDING, DOMAIN_SIGMAS};
use crate::stats::{ReferenceDistribution, Sample};

/// Normal probability density `1/(σ√(2π)) · exp(−(x−μ)²/(2σ²))`.
///
/// Only defined for `std_dev > 0`; callers check degeneracy first.
pub fn normal_pdf(x: f64, mean: f64, std_dev: f64) -> f64 {
    let z = (x - mean) / std_dev;
    (-0.5 * z * z).exp() / (std_dev * (2.0 * PI).sqrt())
}

/// `n` evenly spaced points from `start` to `end`, both included.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// The common x-axis range shared by the histogram and both curves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Domain {
    pub start: f64,
    pub end: f64,
}

impl Domain {
    /// Covers the sample's observed range and ±3σ of both distributions,
    /// padded by 10% of that span on each side.
    pub fn covering(sample: &Sample, reference: &ReferenceDistribution) -> Self {
        let lo = sample
            .min()
            .min(reference.mean() - DOMAIN_SIGMAS * reference.std_dev())
            .min(sample.mean() - DOMAIN_SIGMAS * sample.std_dev());
        let hi = sample
            .max()
            .max(reference.mean() + DOMAIN_SIGMAS * reference.std_dev())
            .max(sample.mean() + DOMAIN_SIGMAS * sample.std_dev());

        let pad = DOMAIN_PADDING * (hi - lo);
        Self {
            start: lo - pad,
            end: hi + pad,
        }
    }

    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    pub fn contains(&self, x: f64) -> bool {
        x >= self.start && x <= self.end
    }

    pub fn grid(&self, points: usize) -> Vec<f64> {
        linspace(self.start, self.end, points)
    }
}

/// A normal density sampled on a grid.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityCurve {
    pub mean: f64,
    pub std_dev: f64,
    pub points: Vec<(f64, f64)>,
}

impl DensityCurve {
    pub fn evaluate(grid: &[f64], mean: f64, std_dev: f64) -> Self {
        let points = grid
            .iter()
            .map(|&x| (x, normal_pdf(x, mean, std_dev)))
            .collect();

        Self {
            mean,
            std_dev,
            points,
        }
    }

    pub fn peak(&self) -> f64 {
        self.points.iter().map(|&(_, y)| y).fold(0.0, f64::max)
    }

    /// Trapezoidal integral of the sampled curve.
    pub fn area(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| (w[1].0 - w[0].0) * (w[0].1 + w[1].1) / 2.0)
            .sum()
    }
}
