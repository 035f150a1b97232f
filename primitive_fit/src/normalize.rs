//! Mapping of primitives from pyramid-level coordinates to the canonical
//! full-resolution frame.


use crate::error::{Error, Result};
use crate::primitive::Primitive;

/// Returns a new primitive whose centre and extents are multiplied by
/// `resolution_factor`. Angle, colour and kind are copied unchanged. The input
/// is never modified.
///
/// The carried resolution factor is divided by `resolution_factor`, so a
/// primitive normalized by its own carried factor carries 1 and a later
/// [`Primitive::to_canonical`] leaves it where it is. A zero factor, or one
/// whose quotient is not a finite positive number, keeps the carried factor.
pub fn normalize(primitive: &Primitive, resolution_factor: f64) -> Result<Primitive> {
    if !resolution_factor.is_finite() || resolution_factor < 0.0 {
        return Err(Error::InvalidResolutionFactor(resolution_factor));
    }

    let mut normalized = primitive.with_scaled_geometry(resolution_factor);
    let remaining = primitive.resolution_factor() / resolution_factor;
    if remaining.is_finite() && remaining > 0.0 {
        normalized.set_resolution_factor(remaining);
    }
    Ok(normalized)
}

impl Primitive {
    /// Expresses the primitive in the canonical frame using the resolution
    /// factor it carries. The result carries a factor of 1.
    pub fn to_canonical(&self) -> Primitive {
        let mut canonical = self.with_scaled_geometry(self.resolution_factor());
        canonical.set_resolution_factor(1.0);
        canonical
    }
}
