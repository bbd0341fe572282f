//! Utilities to help with writing property-based tests
//! (e.g. [quickcheck] tests) for texture functions.
//!
//! [quickcheck]: https://github.com/BurntSushi/quickcheck

use crate::definitions::Image;
use image::{GrayImage, ImageBuffer, Luma};
use quickcheck::{Arbitrary, Gen};
use std::fmt;

/// Wrapper for gray image buffers to allow us to write an Arbitrary instance.
#[derive(Clone)]
pub struct GrayTestImage(pub GrayImage);

impl Arbitrary for GrayTestImage {
    fn arbitrary(g: &mut Gen) -> Self {
        let (width, height) = small_image_dimensions(g);
        let mut image = ImageBuffer::new(width, height);
        for y in 0..height {
            for x in 0..width {
                image.put_pixel(x, y, Luma([u8::arbitrary(g)]));
            }
        }
        GrayTestImage(image)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = GrayTestImage>> {
        Box::new(shrink(&self.0).map(GrayTestImage))
    }
}

/// Images one row or column smaller, taken from each side.
fn shrink(image: &GrayImage) -> impl Iterator<Item = GrayImage> {
    let mut subs = vec![];

    let (w, h) = image.dimensions();

    if w > 0 {
        subs.push(copy_sub(image, 0, 0, w - 1, h));
        subs.push(copy_sub(image, 1, 0, w - 1, h));
    }
    if h > 0 {
        subs.push(copy_sub(image, 0, 0, w, h - 1));
        subs.push(copy_sub(image, 0, 1, w, h - 1));
    }

    subs.into_iter()
}

fn copy_sub(image: &GrayImage, x: u32, y: u32, width: u32, height: u32) -> Image<Luma<u8>> {
    ImageBuffer::from_fn(width, height, |dx, dy| *image.get_pixel(x + dx, y + dy))
}

impl fmt::Debug for GrayTestImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "width: {}, height: {}, data: {:?}",
            self.0.width(),
            self.0.height(),
            self.0.as_raw()
        )
    }
}

fn small_image_dimensions(g: &mut Gen) -> (u32, u32) {
    let dims: (u8, u8) = Arbitrary::arbitrary(g);
    ((dims.0 % 10) as u32, (dims.1 % 10) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shrink_removes_one_row_or_column() {
        let image = gray_image!(
            1, 2, 3;
            4, 5, 6);
        let shrunk: Vec<_> = GrayTestImage(image).shrink().map(|i| i.0).collect();
        assert_eq!(
            shrunk,
            vec![
                gray_image!(1, 2; 4, 5),
                gray_image!(2, 3; 5, 6),
                gray_image!(1, 2, 3),
                gray_image!(4, 5, 6),
            ]
        );
    }

    #[test]
    fn test_arbitrary_images_are_small() {
        let mut g = Gen::new(100);
        for _ in 0..20 {
            let GrayTestImage(image) = GrayTestImage::arbitrary(&mut g);
            assert!(image.width() < 10 && image.height() < 10);
        }
    }
}
