//! Holder for the last accepted optimum of one search region.


use crate::primitive::Primitive;
use crate::selector::{CandidateSelector, GateVerdict};

/// Keeps at most one accepted optimum. Each accepted candidate replaces the
/// previous one; [`OptimumSlot::clear`] starts a new independent region.
#[derive(Debug, Clone, Default)]
pub struct OptimumSlot {
    current: Option<Primitive>,
    accepted: usize,
}

impl OptimumSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Primitive> {
        self.current.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    /// Number of candidates accepted since the slot was created or cleared.
    pub fn accepted(&self) -> usize {
        self.accepted
    }

    /// Gates `candidate` against the current optimum and stores it when the
    /// verdict is not blocking.
    pub fn consider(
        &mut self,
        selector: &CandidateSelector,
        fit_error: f64,
        candidate: &Primitive,
    ) -> GateVerdict {
        let verdict = selector.evaluate(fit_error, candidate, self.current.as_ref());
        if verdict.is_accepted() {
            tracing::debug!(%candidate, ?verdict, "optimum replaced");
            self.current = Some(candidate.clone());
            self.accepted += 1;
        }
        verdict
    }

    pub fn take(&mut self) -> Option<Primitive> {
        self.current.take()
    }

    pub fn clear(&mut self) {
        self.current = None;
        self.accepted = 0;
    }
}
