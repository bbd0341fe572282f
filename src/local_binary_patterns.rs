//! Functions for computing [local binary patterns](https://en.wikipedia.org/wiki/Local_binary_patterns)
//! on a ring of nearest-pixel samples, and for reducing them to rotation
//! invariant representatives.

use crate::definitions::Intensity;
use crate::error::{LbpError, Result};
use crate::options::check_points;
use crate::sampling::sample_pixel;
use image::GenericImageView;
use std::cmp;
use std::f64::consts::PI;

/// Pixel offsets of the neighbors sampled around a center, in bit order.
///
/// Neighbor `p` lies at angle `2πp / points`, counter-clockwise from the
/// positive x axis. Offsets are rounded to the nearest pixel, and the y
/// offset is negated because image rows increase downwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingOffsets {
    offsets: Vec<(i64, i64)>,
}

impl RingOffsets {
    /// Computes the offsets of `points` neighbors on a ring of the given `radius`.
    ///
    /// # Examples
    /// ```
    /// use lbp_texture::local_binary_patterns::RingOffsets;
    ///
    /// let ring = RingOffsets::new(1, 4).unwrap();
    /// assert_eq!(ring.offsets(), &[(1, 0), (0, -1), (-1, 0), (0, 1)]);
    /// ```
    pub fn new(radius: u32, points: u32) -> Result<RingOffsets> {
        check_points(points)?;
        let radius = radius as f64;
        let offsets = (0..points)
            .map(|p| {
                let angle = 2.0 * PI * p as f64 / points as f64;
                let dx = (radius * angle.cos()).round() as i64;
                let dy = -(radius * angle.sin()).round() as i64;
                (dx, dy)
            })
            .collect();
        Ok(RingOffsets { offsets })
    }

    /// Offsets `(dx, dy)` of each neighbor, indexed by bit position.
    pub fn offsets(&self) -> &[(i64, i64)] {
        &self.offsets
    }

    /// Number of neighbors, i.e. the bit width of the patterns produced.
    pub fn points(&self) -> u32 {
        self.offsets.len() as u32
    }
}

/// Computes the local binary pattern of the pixel at `(x, y)`.
///
/// Bit `p` of the result is set if neighbor `p` on the ring (see [`RingOffsets`])
/// is at least as bright as the center. Both the center and the neighbors are
/// read with [`sample_pixel`], so `block_size > 1` compares block averages.
/// Neighbors outside the image leave their bit unset.
///
/// Returns an error if `points` is not in `1..=31`, or if the center itself
/// has no in-bounds samples.
///
/// # Examples
/// ```
/// use lbp_texture::gray_image;
/// use lbp_texture::local_binary_patterns::local_binary_pattern;
///
/// let image = gray_image!(
///     06, 11, 14;
///     09, 10, 10;
///     19, 00, 22);
///
/// // Neighbors from the right, counter-clockwise: 10, 14, 11, 6, 9, 19, 0, 22.
/// let pattern = local_binary_pattern(&image, 1, 1, 1, 8, 1).unwrap();
/// assert_eq!(pattern, 0b10100111);
/// ```
pub fn local_binary_pattern<I>(
    image: &I,
    x: u32,
    y: u32,
    radius: u32,
    points: u32,
    block_size: u32,
) -> Result<u32>
where
    I: GenericImageView,
    I::Pixel: Intensity,
{
    let ring = RingOffsets::new(radius, points)?;
    ring_pattern(image, x, y, &ring, block_size)
}

/// Computes the local binary pattern at `(x, y)` using precomputed ring offsets.
/// See [`local_binary_pattern`].
pub fn ring_pattern<I>(image: &I, x: u32, y: u32, ring: &RingOffsets, block_size: u32) -> Result<u32>
where
    I: GenericImageView,
    I::Pixel: Intensity,
{
    let (cx, cy) = (x as i64, y as i64);
    let center = sample_pixel(image, cx, cy, block_size).ok_or_else(|| {
        let (width, height) = image.dimensions();
        LbpError::CenterOutOfBounds {
            x,
            y,
            width,
            height,
        }
    })?;

    let mut pattern = 0u32;
    for (p, &(dx, dy)) in ring.offsets.iter().enumerate() {
        match sample_pixel(image, cx + dx, cy + dy, block_size) {
            Some(neighbor) if neighbor >= center => pattern |= 1 << p,
            _ => {}
        }
    }

    Ok(pattern)
}

/// Mask with the lowest `bits` bits set.
fn low_bits(bits: u32) -> u32 {
    if bits == 0 {
        0
    } else {
        u32::MAX >> (32 - cmp::min(bits, 32))
    }
}

/// Rotates the lowest `bits` bits of `num` right by `shift` places.
///
/// Requires `shift <= bits <= 32`.
///
/// # Examples
/// ```
/// use lbp_texture::local_binary_patterns::rotate_right;
///
/// assert_eq!(rotate_right(0b0001, 1, 4), 0b1000);
/// assert_eq!(rotate_right(0b1011, 1, 4), 0b1101);
/// assert_eq!(rotate_right(0b10110100, 3, 8), 0b10010110);
/// ```
pub fn rotate_right(num: u32, shift: u32, bits: u32) -> u32 {
    debug_assert!(shift <= bits && bits <= 32);
    let low = num.checked_shr(shift).unwrap_or(0);
    let high = num.checked_shl(bits - shift).unwrap_or(0);
    (low | high) & low_bits(bits)
}

/// Returns the least value of all rotations of the lowest `bits` bits of `num`.
///
/// # Examples
/// ```
/// use lbp_texture::local_binary_patterns::min_shift;
///
/// let byte = 0b10110100;
/// assert_eq!(min_shift(byte, 8), 0b00101101);
/// ```
pub fn min_shift(num: u32, bits: u32) -> u32 {
    let mut min = num;
    for r in 1..bits {
        min = cmp::min(min, rotate_right(num, r, bits));
    }
    min
}

/// Number of bit transitions between adjacent positions among the lowest `bits` bits.
///
/// Only the `bits - 1` pairs `(i, i + 1)` for `i < bits - 1` are examined. The pair
/// formed by the highest and lowest bits is not counted.
///
/// # Examples
/// ```
/// use lbp_texture::local_binary_patterns::count_transitions;
///
/// assert_eq!(count_transitions(0b00000000, 8), 0);
/// assert_eq!(count_transitions(0b00001111, 8), 1);
/// assert_eq!(count_transitions(0b00000101, 8), 3);
/// assert_eq!(count_transitions(0b10011001, 8), 4);
/// ```
pub fn count_transitions(num: u32, bits: u32) -> u32 {
    ((num ^ (num >> 1)) & low_bits(bits.saturating_sub(1))).count_ones()
}

/// True if `num` has at most two transitions, as counted by [`count_transitions`].
pub fn is_uniform(num: u32, bits: u32) -> bool {
    count_transitions(num, bits) <= 2
}


#[cfg(not(miri))]
#[cfg(test)]
mod proptests {
    use super::*;
    use crate::proptest_utils::{arbitrary_flat_image, arbitrary_gray_image};
    use proptest::prelude::*;

    fn pattern_and_bits() -> impl Strategy<Value = (u32, u32)> {
        (1u32..=16).prop_flat_map(|bits| (0..(1u32 << bits), Just(bits)))
    }

    proptest! {
        #[test]
        fn proptest_min_shift_is_idempotent((num, bits) in pattern_and_bits()) {
            let canonical = min_shift(num, bits);
            prop_assert_eq!(min_shift(canonical, bits), canonical);
        }

        #[test]
        fn proptest_min_shift_is_rotation_invariant((num, bits) in pattern_and_bits()) {
            let canonical = min_shift(num, bits);
            for shift in 0..bits {
                prop_assert_eq!(min_shift(rotate_right(num, shift, bits), bits), canonical);
            }
        }

        #[test]
        fn proptest_min_shift_is_a_rotation((num, bits) in pattern_and_bits()) {
            let canonical = min_shift(num, bits);
            prop_assert!(canonical <= num);
            prop_assert!((0..bits).any(|shift| rotate_right(num, shift, bits) == canonical));
            prop_assert_eq!(canonical.count_ones(), num.count_ones());
        }

        #[test]
        fn proptest_pattern_fits_in_points(
            image in arbitrary_gray_image(1..12, 1..12),
            radius in 1u32..4,
            points in 1u32..=12,
            block_size in 1u32..4,
        ) {
            let (width, height) = image.dimensions();
            for y in 0..height {
                for x in 0..width {
                    let pattern = local_binary_pattern(&image, x, y, radius, points, block_size).unwrap();
                    prop_assert!(pattern < (1 << points));
                }
            }
        }

        #[test]
        fn proptest_flat_interior_sets_every_bit(
            image in arbitrary_flat_image(1..16, 1..16),
            radius in 1u32..4,
            points in 1u32..=16,
        ) {
            let (width, height) = image.dimensions();
            let all = (1u32 << points) - 1;
            for y in radius..height.saturating_sub(radius) {
                for x in radius..width.saturating_sub(radius) {
                    prop_assert_eq!(local_binary_pattern(&image, x, y, radius, points, 1).unwrap(), all);
                }
            }
        }
    }
}
