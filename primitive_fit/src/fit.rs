//! Render-and-compare scoring of candidate primitives.


use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::primitive::Primitive;
use crate::raster::{Raster, Sample};
use crate::render::{render, CoordinateMode};

/// A candidate rendered over a copy of the reference patch.
#[derive(Debug, Clone, PartialEq)]
pub struct Approximation<T> {
    pub rendering: Raster<T>,
    pub fit_error: f64,
}

/// Total absolute deviation between two rasters of identical shape:
/// `Σ sqrt((reference_i - rendering_i)²)` over every sample.
///
/// Differences are taken in `f64`, so unsigned samples never wrap. Rows are
/// summed in parallel and the row totals are added in row order, which keeps
/// the result independent of thread scheduling.
pub fn fit_error<T: Sample>(reference: &Raster<T>, rendering: &Raster<T>) -> Result<f64> {
    if !reference.same_shape(rendering) {
        return Err(Error::ShapeMismatch {
            expected: reference.shape(),
            actual: rendering.shape(),
        });
    }

    let row_errors: Vec<f64> = (0..reference.height())
        .into_par_iter()
        .map(|y| row_error(reference.row(y), rendering.row(y)))
        .collect();

    Ok(row_errors.iter().sum())
}

fn row_error<T: Sample>(reference: &[T], rendering: &[T]) -> f64 {
    reference
        .iter()
        .zip(rendering)
        .map(|(&a, &b)| {
            let d = a.to_f64() - b.to_f64();
            (d * d).sqrt()
        })
        .sum()
}

/// Renders `primitive` in absolute coordinates over a copy of `reference` and
/// scores the result against the untouched reference.
pub fn test_approximation<T: Sample>(
    reference: &Raster<T>,
    primitive: &Primitive,
) -> Result<Approximation<T>> {
    test_approximation_with(reference, primitive, CoordinateMode::Absolute)
}

/// Like [`test_approximation`] with an explicit coordinate mode, for
/// candidates expressed relative to the patch centre.
pub fn test_approximation_with<T: Sample>(
    reference: &Raster<T>,
    primitive: &Primitive,
    mode: CoordinateMode,
) -> Result<Approximation<T>> {
    let mut rendering = reference.clone();
    render(&mut rendering, primitive, mode)?;
    let fit_error = fit_error(reference, &rendering)?;

    tracing::trace!(fit_error, kind = ?primitive.kind(), "approximation scored");

    Ok(Approximation {
        rendering,
        fit_error,
    })
}
