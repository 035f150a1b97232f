//! Rasterization of primitives onto caller-owned buffers.
//!
//! Every shape is filled solid. Pixel centres sit on integer coordinates and
//! the resolved centre of a primitive is snapped to the nearest pixel. Shapes
//! that extend past the raster are clipped; shapes entirely outside are a
//! no-op.


use glam::DVec2;
use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::primitive::{Primitive, Shape};
use crate::raster::{Raster, Sample};

/// How a primitive's centre is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoordinateMode {
    /// Centre is a pixel coordinate of the raster.
    #[default]
    Absolute,
    /// Centre is an offset from the raster centre
    /// `(floor(width / 2), floor(height / 2))`.
    Relative,
}

/// Draws `primitive` onto `raster`.
///
/// Every shape needs a colour with exactly one value per channel. Ellipses,
/// circles and rectangles overwrite every channel; points only write the
/// first. On a colour depth error the raster is left untouched.
pub fn render<T: Sample>(
    raster: &mut Raster<T>,
    primitive: &Primitive,
    mode: CoordinateMode,
) -> Result<()> {
    let colour = primitive.colour();
    if colour.len() != raster.channels() {
        return Err(Error::ColourDepthMismatch {
            expected: raster.channels(),
            actual: colour.len(),
        });
    }

    let center = resolve_center(raster, primitive.center(), mode);
    tracing::trace!(
        kind = ?primitive.kind(),
        x = center.x,
        y = center.y,
        "render primitive"
    );

    if raster.is_empty() {
        return Ok(());
    }

    let pixel: SmallVec<[T; 4]> = colour.iter().map(|&c| T::from_f64(c)).collect();

    match *primitive.shape() {
        Shape::Ellipse { axes, angle } => fill_ellipse(raster, center, axes, angle, &pixel),
        Shape::Circle { radius } => fill_ellipse(raster, center, DVec2::splat(radius), 0.0, &pixel),
        Shape::Rectangle { half_extents } => fill_rectangle(raster, center, half_extents, &pixel),
        Shape::Point => draw_point(raster, center, pixel[0]),
    }

    Ok(())
}

/// Resolves the centre of a primitive to a pixel of `raster`.
pub fn resolve_center<T: Sample>(raster: &Raster<T>, center: DVec2, mode: CoordinateMode) -> DVec2 {
    let center = match mode {
        CoordinateMode::Absolute => center,
        CoordinateMode::Relative => {
            center + DVec2::new((raster.width() / 2) as f64, (raster.height() / 2) as f64)
        }
    };
    center.round()
}

/// Inclusive pixel bounds clipped to a raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PixelBox {
    x_min: usize,
    x_max: usize,
    y_min: usize,
    y_max: usize,
}

impl PixelBox {
    /// Clips the inclusive float bounds `[lo, hi]` to `raster`. Returns `None`
    /// if nothing remains.
    fn clipped<T: Sample>(raster: &Raster<T>, lo: DVec2, hi: DVec2) -> Option<Self> {
        let max_x = (raster.width() - 1) as f64;
        let max_y = (raster.height() - 1) as f64;
        let lo = lo.ceil();
        let hi = hi.floor();

        if hi.x < 0.0 || hi.y < 0.0 || lo.x > max_x || lo.y > max_y || lo.x > hi.x || lo.y > hi.y
        {
            return None;
        }

        Some(Self {
            x_min: lo.x.max(0.0) as usize,
            x_max: hi.x.min(max_x) as usize,
            y_min: lo.y.max(0.0) as usize,
            y_max: hi.y.min(max_y) as usize,
        })
    }
}

/// Fills every pixel whose rotated offset lies within the ellipse with
/// semi-axes `axes + 0.5`. The half pixel makes zero axes cover exactly the
/// centre pixel and keeps the covered area symmetric.
fn fill_ellipse<T: Sample>(
    raster: &mut Raster<T>,
    center: DVec2,
    axes: DVec2,
    angle: f64,
    pixel: &[T],
) {
    let radii = axes + DVec2::splat(0.5);
    let (sin, cos) = angle.to_radians().sin_cos();

    let half_extent = DVec2::new(
        ((radii.x * cos).powi(2) + (radii.y * sin).powi(2)).sqrt(),
        ((radii.x * sin).powi(2) + (radii.y * cos).powi(2)).sqrt(),
    );
    let Some(bounds) = PixelBox::clipped(raster, center - half_extent, center + half_extent)
    else {
        return;
    };

    let inside = |x: usize, y: usize| {
        let dx = x as f64 - center.x;
        let dy = y as f64 - center.y;
        let u = (dx * cos + dy * sin) / radii.x;
        let v = (dy * cos - dx * sin) / radii.y;
        u * u + v * v <= 1.0
    };

    // the covered set of a convex shape is one contiguous span per row
    for y in bounds.y_min..=bounds.y_max {
        let Some(first) = (bounds.x_min..=bounds.x_max).find(|&x| inside(x, y)) else {
            continue;
        };
        let last = (first..=bounds.x_max)
            .rev()
            .find(|&x| inside(x, y))
            .unwrap_or(first);
        raster.fill_span(y, first, last, pixel);
    }
}

fn fill_rectangle<T: Sample>(
    raster: &mut Raster<T>,
    center: DVec2,
    half_extents: DVec2,
    pixel: &[T],
) {
    let lo = (center - half_extents).round();
    let hi = (center + half_extents).round();
    let Some(bounds) = PixelBox::clipped(raster, lo, hi) else {
        return;
    };

    for y in bounds.y_min..=bounds.y_max {
        raster.fill_span(y, bounds.x_min, bounds.x_max, pixel);
    }
}

fn draw_point<T: Sample>(raster: &mut Raster<T>, center: DVec2, value: T) {
    let (x, y) = (center.x as i64, center.y as i64);
    if raster.contains(x, y) {
        raster.pixel_mut(x as usize, y as usize)[0] = value;
    }
}
