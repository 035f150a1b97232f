// Error handling
pub use crate::error::{Error, Result};

// Buffers and primitives
pub use crate::primitive::{Colour, Primitive, Shape, ShapeKind};
pub use crate::raster::{Raster, Sample};

// Operations
pub use crate::fit::{fit_error, test_approximation, test_approximation_with, Approximation};
pub use crate::normalize::normalize;
pub use crate::render::{render, CoordinateMode};

// Candidate gating
pub use crate::optimum::OptimumSlot;
pub use crate::selector::{overlaps, CandidateSelector, GateVerdict, SelectorConfig};

pub use glam::DVec2;
