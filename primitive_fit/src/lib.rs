//! Primitive fit - render-and-compare scoring and duplicate gating of
//! geometric primitive candidates.
//!
//! A search driver proposes candidate primitives (ellipse, circle, rectangle
//! or point) for an image patch. This crate provides:
//! - Rendering of a primitive onto a caller-owned [`Raster`]
//! - Fit error between a reference patch and a rendering
//! - A duplicate gate deciding whether a good candidate is a new detection or
//!   a repeat of the last accepted optimum
//! - Normalization of primitives from pyramid-level coordinates into the
//!   canonical full-resolution frame
//!
//! # Quick Start
//!
//! ```rust
//! use primitive_fit::prelude::*;
//!
//! # fn main() -> primitive_fit::Result<()> {
//! let mut patch = Raster::<u8>::new_default(100, 100, 1)?;
//! let truth = Primitive::ellipse(DVec2::new(50.0, 50.0), DVec2::new(10.0, 10.0), 0.0, &[255.0])?;
//! render(&mut patch, &truth, CoordinateMode::Absolute)?;
//!
//! let selector = CandidateSelector::new(SelectorConfig::new(5000.0));
//! let mut optimum = OptimumSlot::new();
//!
//! let approximation = test_approximation(&patch, &truth)?;
//! let verdict = optimum.consider(&selector, approximation.fit_error, &truth);
//! assert_eq!(verdict, GateVerdict::FirstOptimum);
//! # Ok(())
//! # }
//! ```

mod error;
mod fit;
mod normalize;
mod optimum;
mod primitive;
mod raster;
mod render;
mod selector;

#[cfg(test)]
pub(crate) mod test_utils;
#[cfg(test)]
mod tests;

pub mod prelude;

pub use error::{Error, Result};
pub use fit::{fit_error, test_approximation, test_approximation_with, Approximation};
pub use normalize::normalize;
pub use optimum::OptimumSlot;
pub use primitive::{Colour, Primitive, Shape, ShapeKind};
pub use raster::{Raster, Sample};
pub use render::{render, resolve_center, CoordinateMode};
pub use selector::{
    is_blocked, mean_radius, overlaps, CandidateSelector, GateVerdict, SelectorConfig,
};

pub use glam::DVec2;
