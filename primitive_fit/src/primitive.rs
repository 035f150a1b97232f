//! Candidate primitive records.
//!
//! A [`Primitive`] is a filled geometric shape with a centre, extents, an
//! optional orientation and a per-channel fill colour. Each kind carries only
//! the fields it uses, so an angle on a rectangle cannot be expressed.

#[cfg(test)]
mod tests;

use std::fmt;

use glam::DVec2;
use serde::Serialize;
use smallvec::SmallVec;

use crate::error::{Error, Result};

/// Per-channel fill value. Its length must match the channel count of the
/// raster the primitive is rendered onto.
pub type Colour = SmallVec<[f64; 4]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ShapeKind {
    Ellipse,
    Circle,
    Rectangle,
    Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Shape {
    /// Filled ellipse with semi-axes `axes` rotated by `angle` degrees.
    Ellipse { axes: DVec2, angle: f64 },
    Circle { radius: f64 },
    /// Axis-aligned box spanning `center ± half_extents`.
    Rectangle { half_extents: DVec2 },
    /// Single pixel, first colour channel only.
    Point,
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Ellipse { .. } => ShapeKind::Ellipse,
            Shape::Circle { .. } => ShapeKind::Circle,
            Shape::Rectangle { .. } => ShapeKind::Rectangle,
            Shape::Point => ShapeKind::Point,
        }
    }

    /// Extents as an axis-length pair. A circle reports its radius on both
    /// axes and a point reports zero.
    pub fn axes_length(&self) -> DVec2 {
        match *self {
            Shape::Ellipse { axes, .. } => axes,
            Shape::Circle { radius } => DVec2::splat(radius),
            Shape::Rectangle { half_extents } => half_extents,
            Shape::Point => DVec2::ZERO,
        }
    }

    /// Multiplies every extent by `factor`, keeping orientation.
    pub(crate) fn scaled(&self, factor: f64) -> Shape {
        match *self {
            Shape::Ellipse { axes, angle } => Shape::Ellipse {
                axes: axes * factor,
                angle,
            },
            Shape::Circle { radius } => Shape::Circle {
                radius: radius * factor,
            },
            Shape::Rectangle { half_extents } => Shape::Rectangle {
                half_extents: half_extents * factor,
            },
            Shape::Point => Shape::Point,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Primitive {
    shape: Shape,
    center: DVec2,
    colour: Colour,
    resolution_factor: f64,
}

impl Primitive {
    pub fn ellipse(center: DVec2, axes: DVec2, angle: f64, colour: &[f64]) -> Result<Self> {
        check_extent(axes.x)?;
        check_extent(axes.y)?;
        if !angle.is_finite() {
            return Err(Error::NonFiniteGeometry);
        }
        Self::build(
            Shape::Ellipse {
                axes,
                angle: normalize_angle(angle),
            },
            center,
            colour,
        )
    }

    pub fn circle(center: DVec2, radius: f64, colour: &[f64]) -> Result<Self> {
        check_extent(radius)?;
        Self::build(Shape::Circle { radius }, center, colour)
    }

    pub fn rectangle(center: DVec2, half_extents: DVec2, colour: &[f64]) -> Result<Self> {
        check_extent(half_extents.x)?;
        check_extent(half_extents.y)?;
        Self::build(Shape::Rectangle { half_extents }, center, colour)
    }

    pub fn point(center: DVec2, colour: &[f64]) -> Result<Self> {
        Self::build(Shape::Point, center, colour)
    }

    fn build(shape: Shape, center: DVec2, colour: &[f64]) -> Result<Self> {
        if !center.is_finite() || colour.iter().any(|c| !c.is_finite()) {
            return Err(Error::NonFiniteGeometry);
        }
        if colour.is_empty() {
            return Err(Error::EmptyColour);
        }

        Ok(Self {
            shape,
            center,
            colour: Colour::from_slice(colour),
            resolution_factor: 1.0,
        })
    }

    /// Records the pyramid scale at which this primitive was found.
    pub fn with_resolution_factor(mut self, resolution_factor: f64) -> Result<Self> {
        if !resolution_factor.is_finite() || resolution_factor <= 0.0 {
            return Err(Error::InvalidResolutionFactor(resolution_factor));
        }
        self.resolution_factor = resolution_factor;
        Ok(self)
    }

    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        self.center
    }

    #[inline]
    pub fn axes_length(&self) -> DVec2 {
        self.shape.axes_length()
    }

    /// Rotation in degrees within `[0, 360)`. Zero for every kind but ellipses.
    #[inline]
    pub fn angle(&self) -> f64 {
        match self.shape {
            Shape::Ellipse { angle, .. } => angle,
            _ => 0.0,
        }
    }

    #[inline]
    pub fn colour(&self) -> &[f64] {
        &self.colour
    }

    #[inline]
    pub fn resolution_factor(&self) -> f64 {
        self.resolution_factor
    }

    /// Same primitive with centre and extents replaced by scaled values.
    pub(crate) fn with_scaled_geometry(&self, factor: f64) -> Self {
        Self {
            shape: self.shape.scaled(factor),
            center: self.center * factor,
            colour: self.colour.clone(),
            resolution_factor: self.resolution_factor,
        }
    }

    pub(crate) fn set_resolution_factor(&mut self, resolution_factor: f64) {
        debug_assert!(resolution_factor.is_finite() && resolution_factor > 0.0);
        self.resolution_factor = resolution_factor;
    }

    /// Emits the primitive's fields as a structured debug event.
    pub fn trace_dump(&self) {
        let axes = self.axes_length();
        tracing::debug!(
            kind = ?self.kind(),
            center_x = self.center.x,
            center_y = self.center.y,
            axis_a = axes.x,
            axis_b = axes.y,
            angle = self.angle(),
            colour = ?self.colour.as_slice(),
            resolution_factor = self.resolution_factor,
            "primitive"
        );
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let axes = self.axes_length();
        write!(
            f,
            "{:?} center=({}, {}) axes=({}, {}) angle={} colour={:?}",
            self.kind(),
            self.center.x,
            self.center.y,
            axes.x,
            axes.y,
            self.angle(),
            self.colour.as_slice()
        )
    }
}

fn check_extent(extent: f64) -> Result<()> {
    if extent.is_finite() && extent >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidExtent(extent))
    }
}

fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}
