use image::{GrayImage, Luma};
use proptest::{
    arbitrary::any,
    sample::SizeRange,
    strategy::{BoxedStrategy, Strategy},
};
use std::ops::RangeInclusive;

/// Create a strategy to generate gray images with arbitrary dimensions selected
/// within the specified ranges.
pub(crate) fn arbitrary_gray_image(
    width_range: impl Into<SizeRange>,
    height_range: impl Into<SizeRange>,
) -> BoxedStrategy<GrayImage> {
    arbitrary_gray_image_with(any::<u8>(), width_range, height_range)
}

/// Create a strategy to generate gray images of a single random intensity.
pub(crate) fn arbitrary_flat_image(
    width_range: impl Into<SizeRange>,
    height_range: impl Into<SizeRange>,
) -> BoxedStrategy<GrayImage> {
    (any::<u8>(), dim(width_range), dim(height_range))
        .prop_map(|(v, w, h)| GrayImage::from_pixel(w, h, Luma([v])))
        .boxed()
}

/// Create a strategy to generate gray images whose intensities are drawn
/// from `values`.
pub(crate) fn arbitrary_gray_image_with<S>(
    values: S,
    width_range: impl Into<SizeRange>,
    height_range: impl Into<SizeRange>,
) -> BoxedStrategy<GrayImage>
where
    S: Strategy<Value = u8> + Clone + 'static,
{
    dims(width_range, height_range)
        .prop_flat_map(move |(w, h)| {
            let size = (w * h) as usize;
            proptest::collection::vec(values.clone(), size).prop_map(move |v| {
                GrayImage::from_vec(w, h, v).expect("buffer length matches dimensions")
            })
        })
        .boxed()
}

fn dims(width: impl Into<SizeRange>, height: impl Into<SizeRange>) -> BoxedStrategy<(u32, u32)> {
    (dim(width), dim(height)).boxed()
}

fn dim(range: impl Into<SizeRange>) -> RangeInclusive<u32> {
    let range = range.into();
    range.start() as u32..=range.end_incl() as u32
}

#[cfg(not(miri))]
#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_arbitrary_fixed_gray(img in arbitrary_gray_image(3, 7)) {
            assert_eq!(img.width(), 3);
            assert_eq!(img.height(), 7);
        }

        #[test]
        fn test_arbitrary_gray(img in arbitrary_gray_image(1..30, 2..=150)) {
            assert!((1..30).contains(&img.width()));
            assert!((2..=150).contains(&img.height()));
        }

        #[test]
        fn test_arbitrary_flat(img in arbitrary_flat_image(1..8, 1..8)) {
            let first = *img.get_pixel(0, 0);
            assert!(img.pixels().all(|p| *p == first));
        }
    }
}
