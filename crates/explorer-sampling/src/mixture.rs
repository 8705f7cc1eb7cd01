//! Gaussian mixture description and sample-count allocation

use explorer_core::{approx_eq, Error, Result, WEIGHT_TOLERANCE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One normal component of a mixture
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MixtureComponent {
    /// Location of the peak
    pub mean: f64,
    /// Standard deviation, strictly positive
    pub std_dev: f64,
    /// Share of the total sample count, strictly positive
    pub weight: f64,
}

impl MixtureComponent {
    /// Create a new component (validated when placed in a [`MixtureSpec`])
    pub fn new(mean: f64, std_dev: f64, weight: f64) -> Self {
        Self {
            mean,
            std_dev,
            weight,
        }
    }

    fn validate(&self, index: usize) -> Result<()> {
        if !self.mean.is_finite() {
            return Err(Error::invalid_parameters(format!(
                "component {index}: mean must be finite, got {}",
                self.mean
            )));
        }
        if !(self.std_dev.is_finite() && self.std_dev > 0.0) {
            return Err(Error::invalid_parameters(format!(
                "component {index}: standard deviation must be positive, got {}",
                self.std_dev
            )));
        }
        if !(self.weight.is_finite() && self.weight > 0.0) {
            return Err(Error::invalid_parameters(format!(
                "component {index}: weight must be positive, got {}",
                self.weight
            )));
        }
        Ok(())
    }
}

impl From<(f64, f64, f64)> for MixtureComponent {
    fn from((mean, std_dev, weight): (f64, f64, f64)) -> Self {
        Self::new(mean, std_dev, weight)
    }
}

impl fmt::Display for MixtureComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "N(μ={:.3}, σ={:.3}) × {:.3}",
            self.mean, self.std_dev, self.weight
        )
    }
}

/// A validated, ordered list of mixture components
///
/// Construction enforces positive standard deviations and weights, and a
/// weight sum of 1.0 within [`WEIGHT_TOLERANCE`]. Deserialization goes through
/// the same checks, so a `MixtureSpec` value is always usable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<MixtureComponent>", into = "Vec<MixtureComponent>")]
pub struct MixtureSpec {
    components: Vec<MixtureComponent>,
}

impl MixtureSpec {
    /// Validate and wrap a list of components
    pub fn new(components: Vec<MixtureComponent>) -> Result<Self> {
        if components.is_empty() {
            return Err(Error::invalid_parameters(
                "mixture needs at least one component",
            ));
        }

        for (i, component) in components.iter().enumerate() {
            component.validate(i)?;
        }

        let total: f64 = components.iter().map(|c| c.weight).sum();
        if !approx_eq(total, 1.0, WEIGHT_TOLERANCE) {
            return Err(Error::invalid_parameters(format!(
                "mixture weights must sum to 1.0, got {total}"
            )));
        }

        Ok(Self { components })
    }

    /// Two-peak mixture from `(mean, std_dev, weight)` tuples
    pub fn bimodal(left: (f64, f64, f64), right: (f64, f64, f64)) -> Result<Self> {
        Self::new(vec![left.into(), right.into()])
    }

    /// The components in allocation order
    pub fn components(&self) -> &[MixtureComponent] {
        &self.components
    }

    /// Number of components
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Always false for a validated spec; provided for API symmetry
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Split `n` samples across the components
    ///
    /// Every component but the last gets `floor(n * weight)`; the last takes
    /// whatever remains, so the counts always sum to exactly `n`.
    pub fn component_counts(&self, n: usize) -> Vec<usize> {
        let last = self.components.len() - 1;
        let mut remaining = n;
        let mut counts = Vec::with_capacity(self.components.len());

        for component in &self.components[..last] {
            let share = ((n as f64) * component.weight).floor() as usize;
            let share = share.min(remaining);
            remaining -= share;
            counts.push(share);
        }
        counts.push(remaining);
        counts
    }
}

impl Default for MixtureSpec {
    /// Narrow minority peak at 0 beside a broad majority peak at 50
    fn default() -> Self {
        Self {
            components: vec![
                MixtureComponent::new(0.0, 8.0, 0.06),
                MixtureComponent::new(50.0, 13.8, 0.94),
            ],
        }
    }
}

impl TryFrom<Vec<MixtureComponent>> for MixtureSpec {
    type Error = Error;

    fn try_from(components: Vec<MixtureComponent>) -> Result<Self> {
        Self::new(components)
    }
}

impl From<MixtureSpec> for Vec<MixtureComponent> {
    fn from(spec: MixtureSpec) -> Self {
        spec.components
    }
}

impl fmt::Display for MixtureSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.components.iter().map(|c| c.to_string()).collect();
        write!(f, "Mixture[{}]", parts.join(" + "))
    }
}
