//! Bounds-checked intensity lookups, optionally averaged over a square block.

use crate::definitions::Intensity;
use image::GenericImageView;
use itertools::Itertools;

/// Returns the intensity at `(x, y)`, or `None` if it lies outside the image.
///
/// When `block_size > 1` the result is the mean over a `block_size` by
/// `block_size` window. With `r = block_size / 2` and `l = block_size - r - 1`
/// the window spans columns `x - l ..= x + r` and rows `y - l ..= y + r`, so
/// even sized blocks extend further right and down than left and up.
///
/// Samples outside the image are skipped, but the sum is always divided by
/// the full window area, so blocks overlapping the border are darker than
/// their in-bounds pixels. `None` is returned only if no sample in the window
/// is in bounds. A `block_size` of 0 behaves like 1.
///
/// # Examples
/// ```
/// use lbp_texture::gray_image;
/// use lbp_texture::sampling::sample_pixel;
///
/// let image = gray_image!(
///     1, 2, 3;
///     4, 5, 6;
///     7, 8, 9);
///
/// assert_eq!(sample_pixel(&image, 1, 1, 1), Some(5));
/// assert_eq!(sample_pixel(&image, -1, 1, 1), None);
///
/// // (5 + 6 + 8 + 9) / 4
/// assert_eq!(sample_pixel(&image, 1, 1, 2), Some(7));
///
/// // Only 9 is in bounds, but it's still divided by 4.
/// assert_eq!(sample_pixel(&image, 2, 2, 2), Some(2));
/// ```
pub fn sample_pixel<I>(image: &I, x: i64, y: i64, block_size: u32) -> Option<u32>
where
    I: GenericImageView,
    I::Pixel: Intensity,
{
    if block_size <= 1 {
        return checked_intensity(image, x, y);
    }

    let r = (block_size / 2) as i64;
    let l = block_size as i64 - r - 1;

    let mut sum: Option<u64> = None;
    for (py, px) in (y - l..=y + r).cartesian_product(x - l..=x + r) {
        if let Some(p) = checked_intensity(image, px, py) {
            *sum.get_or_insert(0) += p as u64;
        }
    }

    // The mean never exceeds the largest sample, so it fits back into u32.
    sum.map(|s| (s / (block_size as u64 * block_size as u64)) as u32)
}

fn checked_intensity<I>(image: &I, x: i64, y: i64) -> Option<u32>
where
    I: GenericImageView,
    I::Pixel: Intensity,
{
    let (width, height) = image.dimensions();
    if x < 0 || y < 0 || x >= width as i64 || y >= height as i64 {
        return None;
    }
    Some(image.get_pixel(x as u32, y as u32).intensity())
}
