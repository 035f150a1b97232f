//! Duplicate gate between a new candidate and the last accepted optimum.
//!
//! The gate is greedy and single-slot: once a good-enough candidate has been
//! accepted, a later good candidate only counts as a distinct detection if its
//! centroid lies farther from the optimum's centroid than the larger of the
//! two mean radii.


use serde::{Deserialize, Serialize};

use crate::primitive::Primitive;

/// Configuration of the duplicate gate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Candidates with a fit error at or above this value are never accepted.
    pub max_fit_error: f64,
}

impl SelectorConfig {
    pub fn new(max_fit_error: f64) -> Self {
        let config = Self { max_fit_error };
        config.validate();
        config
    }

    /// Validate the configuration.
    pub fn validate(&self) {
        assert!(
            self.max_fit_error.is_finite() && self.max_fit_error >= 0.0,
            "max_fit_error must be finite and non-negative, got {}",
            self.max_fit_error
        );
    }
}

/// Outcome of the gate, kept distinct so the caller decides what a blocked
/// candidate means for its search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GateVerdict {
    /// Fit error reached the threshold; geometry was not consulted.
    PoorFit,
    /// Good fit and no optimum accepted yet.
    FirstOptimum,
    /// Good fit, but the centroid falls within the current optimum.
    Overlapping,
    /// Good fit and far enough from the current optimum.
    Distinct,
}

impl GateVerdict {
    pub fn is_blocked(self) -> bool {
        matches!(self, GateVerdict::PoorFit | GateVerdict::Overlapping)
    }

    pub fn is_accepted(self) -> bool {
        !self.is_blocked()
    }
}

#[derive(Debug, Clone)]
pub struct CandidateSelector {
    config: SelectorConfig,
}

impl CandidateSelector {
    pub fn new(config: SelectorConfig) -> Self {
        config.validate();
        Self { config }
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    pub fn evaluate(
        &self,
        fit_error: f64,
        candidate: &Primitive,
        last_optimum: Option<&Primitive>,
    ) -> GateVerdict {
        let verdict = verdict(fit_error, candidate, last_optimum, self.config.max_fit_error);
        tracing::debug!(
            ?verdict,
            fit_error,
            max_fit_error = self.config.max_fit_error,
            x = candidate.center().x,
            y = candidate.center().y,
            "candidate gated"
        );
        verdict
    }

    pub fn is_blocked(
        &self,
        fit_error: f64,
        candidate: &Primitive,
        last_optimum: Option<&Primitive>,
    ) -> bool {
        self.evaluate(fit_error, candidate, last_optimum).is_blocked()
    }
}

/// Stateless form of [`CandidateSelector::is_blocked`] with an explicit
/// threshold.
pub fn is_blocked(
    fit_error: f64,
    candidate: &Primitive,
    last_optimum: Option<&Primitive>,
    max_fit_error: f64,
) -> bool {
    verdict(fit_error, candidate, last_optimum, max_fit_error).is_blocked()
}

fn verdict(
    fit_error: f64,
    candidate: &Primitive,
    last_optimum: Option<&Primitive>,
    max_fit_error: f64,
) -> GateVerdict {
    if fit_error.is_nan() || fit_error >= max_fit_error {
        return GateVerdict::PoorFit;
    }

    match last_optimum {
        None => GateVerdict::FirstOptimum,
        Some(last) if overlaps(candidate, last) => GateVerdict::Overlapping,
        Some(_) => GateVerdict::Distinct,
    }
}

/// Mean of the two axis lengths.
pub fn mean_radius(primitive: &Primitive) -> f64 {
    let axes = primitive.axes_length();
    (axes.x + axes.y) / 2.0
}

/// True unless the squared centroid distance exceeds the square of the larger
/// mean radius. Symmetric in `a` and `b`.
pub fn overlaps(a: &Primitive, b: &Primitive) -> bool {
    let minimum_distance = mean_radius(a).max(mean_radius(b));
    let squared_distance = a.center().distance_squared(b.center());
    squared_distance <= minimum_distance * minimum_distance
}
