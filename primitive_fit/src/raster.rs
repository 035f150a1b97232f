//! Dense pixel buffers that primitives are rendered onto and compared against.
//!
//! A [`Raster`] is a height × width × channels array stored row-major with
//! interleaved channels. A plain 2-D buffer is a raster with one channel.


use std::fmt::Debug;

use crate::error::{Error, Result};

/// A fixed-width pixel sample.
///
/// Conversions go through `f64`, which represents every supported sample type
/// exactly, so differences between samples never wrap around.
pub trait Sample: Copy + Default + PartialEq + Debug + Send + Sync + 'static {
    fn to_f64(self) -> f64;

    /// Converts a fill value to a sample. Integer samples are rounded and
    /// saturated to the representable range.
    fn from_f64(value: f64) -> Self;
}

macro_rules! impl_int_sample {
    ($($t:ty),*) => {
        $(
            impl Sample for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    // float -> int `as` casts saturate, NaN maps to 0
                    value.round() as $t
                }
            }
        )*
    };
}

impl_int_sample!(u8, i8, u16, i16, u32, i32);

impl Sample for f32 {
    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl Sample for f64 {
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Raster<T> {
    samples: Vec<T>,
    width: usize,
    height: usize,
    channels: usize,
}

/// Samples in a `width × height × channels` raster, or `None` on overflow.
/// The row length is checked first so it stays representable even when
/// `height` is zero.
fn sample_count(width: usize, height: usize, channels: usize) -> Option<usize> {
    width
        .checked_mul(channels)
        .and_then(|row_len| row_len.checked_mul(height))
}

impl<T: Sample> Raster<T> {
    pub fn new(width: usize, height: usize, channels: usize, samples: Vec<T>) -> Result<Self> {
        if channels == 0 || sample_count(width, height, channels) != Some(samples.len()) {
            return Err(Error::InvalidDimensions {
                width,
                height,
                channels,
                len: samples.len(),
            });
        }

        Ok(Self {
            samples,
            width,
            height,
            channels,
        })
    }

    /// Creates a raster with every sample set to `T::default()` (zero).
    pub fn new_default(width: usize, height: usize, channels: usize) -> Result<Self> {
        let len = Self::checked_len(width, height, channels)?;
        Self::new(width, height, channels, vec![T::default(); len])
    }

    /// Creates a raster with every pixel set to `pixel`. The pixel length
    /// gives the channel count.
    pub fn new_filled(width: usize, height: usize, pixel: &[T]) -> Result<Self> {
        let len = Self::checked_len(width, height, pixel.len())?;
        let samples = pixel.iter().copied().cycle().take(len).collect();
        Self::new(width, height, pixel.len(), samples)
    }

    fn checked_len(width: usize, height: usize, channels: usize) -> Result<usize> {
        sample_count(width, height, channels).ok_or(Error::InvalidDimensions {
            width,
            height,
            channels,
            len: 0,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// `(width, height, channels)`
    #[inline]
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.width, self.height, self.channels)
    }

    #[inline]
    pub fn same_shape(&self, other: &Self) -> bool {
        self.shape() == other.shape()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[inline]
    pub fn samples(&self) -> &[T] {
        &self.samples
    }

    #[inline]
    pub fn samples_mut(&mut self) -> &mut [T] {
        &mut self.samples
    }

    #[inline]
    pub fn into_samples(self) -> Vec<T> {
        self.samples
    }

    /// Number of samples in one row.
    #[inline]
    pub fn row_len(&self) -> usize {
        self.width * self.channels
    }

    #[inline]
    pub fn row(&self, y: usize) -> &[T] {
        let row_len = self.row_len();
        &self.samples[y * row_len..(y + 1) * row_len]
    }

    /// Returns true if the signed pixel coordinate lies inside the raster.
    #[inline]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as u64) < self.width as u64 && (y as u64) < self.height as u64
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height);
        (y * self.width + x) * self.channels
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> &[T] {
        let offset = self.offset(x, y);
        &self.samples[offset..offset + self.channels]
    }

    #[inline]
    pub fn pixel_mut(&mut self, x: usize, y: usize) -> &mut [T] {
        let offset = self.offset(x, y);
        let channels = self.channels;
        &mut self.samples[offset..offset + channels]
    }

    #[inline]
    pub fn sample(&self, x: usize, y: usize, channel: usize) -> T {
        debug_assert!(channel < self.channels);
        self.samples[self.offset(x, y) + channel]
    }

    /// Fills the inclusive pixel span `[x_min, x_max]` of row `y`.
    #[inline]
    pub(crate) fn fill_span(&mut self, y: usize, x_min: usize, x_max: usize, pixel: &[T]) {
        debug_assert_eq!(pixel.len(), self.channels);
        let start = self.offset(x_min, y);
        let end = self.offset(x_max, y) + self.channels;
        for dst in self.samples[start..end].chunks_exact_mut(pixel.len()) {
            dst.copy_from_slice(pixel);
        }
    }
}
