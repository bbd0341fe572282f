//! Parameters controlling how local binary pattern features are extracted.

use crate::definitions::MAX_POINTS;
use crate::error::{LbpError, Result};

/// Parameters for local binary pattern features.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct LbpOptions {
    /// Distance in pixels between sampled centers, both horizontally and vertically.
    pub step: u32,
    /// Radius in pixels of the ring of neighbors around each center.
    pub radius: u32,
    /// Number of neighbors sampled on the ring, and so the bit width of each pattern.
    pub points: u32,
    /// Side length of the square window averaged to produce each sample.
    /// A value of 1 reads single pixels.
    pub block_size: u32,
    /// Whether non-uniform patterns share a single overflow bin.
    pub uniform: bool,
}

impl LbpOptions {
    /// Creates options from explicit values. Call [`validate`](Self::validate)
    /// or let the extraction functions do it.
    pub fn new(step: u32, radius: u32, points: u32, block_size: u32, uniform: bool) -> LbpOptions {
        LbpOptions {
            step,
            radius,
            points,
            block_size,
            uniform,
        }
    }

    /// Returns a copy with the given `step`.
    pub fn with_step(self, step: u32) -> LbpOptions {
        LbpOptions { step, ..self }
    }

    /// Returns a copy with the given `radius`.
    pub fn with_radius(self, radius: u32) -> LbpOptions {
        LbpOptions { radius, ..self }
    }

    /// Returns a copy with the given number of `points`.
    pub fn with_points(self, points: u32) -> LbpOptions {
        LbpOptions { points, ..self }
    }

    /// Returns a copy with the given `block_size`.
    pub fn with_block_size(self, block_size: u32) -> LbpOptions {
        LbpOptions { block_size, ..self }
    }

    /// Returns a copy with the given `uniform` flag.
    pub fn with_uniform(self, uniform: bool) -> LbpOptions {
        LbpOptions { uniform, ..self }
    }

    /// Checks that every option is in range.
    pub fn validate(&self) -> Result<()> {
        check_points(self.points)?;
        check_positive("step", self.step)?;
        check_positive("radius", self.radius)?;
        check_positive("block_size", self.block_size)?;
        Ok(())
    }
}

impl Default for LbpOptions {
    /// Every fifth pixel, an 8 point ring of radius 4, single pixel samples
    /// and uniform patterns.
    fn default() -> Self {
        LbpOptions::new(5, 4, 8, 1, true)
    }
}

/// Fails unless `1 <= points <= MAX_POINTS`.
pub(crate) fn check_points(points: u32) -> Result<()> {
    if points == 0 || points > MAX_POINTS {
        return Err(LbpError::InvalidPoints {
            points,
            max: MAX_POINTS,
        });
    }
    Ok(())
}

fn check_positive(name: &'static str, value: u32) -> Result<()> {
    if value == 0 {
        return Err(LbpError::InvalidOption { name, value });
    }
    Ok(())
}
