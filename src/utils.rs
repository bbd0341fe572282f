//! Utils for testing and debugging.

use image::{GrayImage, Luma};

/// Helper for defining greyscale images.
///
/// Columns are separated by commas and rows by semi-colons.
/// By default a subpixel type of `u8` is used but this can be
/// overridden, as shown in the examples.
///
/// # Examples
/// ```
/// use lbp_texture::gray_image;
/// use lbp_texture::definitions::Image;
/// use image::{GrayImage, Luma};
///
/// // Empty images can be created with or without a type annotation.
/// let empty: GrayImage = gray_image!();
/// assert_eq!(empty.dimensions(), (0, 0));
///
/// let image = gray_image!(
///     1, 2, 3;
///     4, 5, 6);
/// assert_eq!(image.get_pixel(2, 1), &Luma([6u8]));
///
/// let wide = gray_image!(type: u16,
///     1, 2;
///     3, 1000);
/// assert_eq!(wide.get_pixel(1, 1), &Luma([1000u16]));
/// ```
#[macro_export]
macro_rules! gray_image {
    // Empty image with default channel type u8
    () => {
        $crate::gray_image!(type: u8)
    };
    // Empty image with the given channel type
    (type: $channel_type:ty) => {
        {
            $crate::definitions::Image::<$crate::image::Luma<$channel_type>>::new(0, 0)
        }
    };
    // Non-empty image of default channel type u8
    ($( $( $x: expr ),*);*) => {
        $crate::gray_image!(type: u8, $( $( $x ),*);*)
    };
    // Non-empty image of given channel type
    (type: $channel_type:ty, $( $( $x: expr ),*);*) => {
        {
            let nested_array = [ $( [ $($x),* ] ),* ];
            let height = nested_array.len() as u32;
            let width = nested_array[0].len() as u32;

            let flat_array: Vec<$channel_type> = nested_array
                .iter()
                .flat_map(|row| row.iter())
                .cloned()
                .collect();

            $crate::definitions::Image::<$crate::image::Luma<$channel_type>>::from_raw(
                width, height, flat_array,
            )
            .unwrap()
        }
    };
}

/// Gray image to use in benchmarks. This is neither noise nor
/// similar to natural images - it's just a convenience method
/// to produce an image that's not constant.
pub fn gray_bench_image(width: u32, height: u32) -> GrayImage {
    GrayImage::from_fn(width, height, |x, y| Luma([(x % 7 + y % 6) as u8]))
}

/// A checkerboard of `dark` and `light` squares of side `square`, with a
/// dark square in the top left corner.
pub fn checkerboard(width: u32, height: u32, square: u32, dark: u8, light: u8) -> GrayImage {
    let square = square.max(1);
    GrayImage::from_fn(width, height, |x, y| {
        if (x / square + y / square) % 2 == 0 {
            Luma([dark])
        } else {
            Luma([light])
        }
    })
}
