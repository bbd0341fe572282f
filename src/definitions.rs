//! Trait definitions and type aliases.

use image::{ImageBuffer, Luma, Pixel, Primitive};

/// An `ImageBuffer` containing Pixels of type P with storage `Vec<P::Subpixel>`.
/// Most operations in this library only support inputs of this type.
pub type Image<P> = ImageBuffer<P, Vec<<P as Pixel>::Subpixel>>;

/// Largest number of ring samples supported when encoding a pattern.
///
/// Patterns are stored in a `u32` and the pattern table enumerates
/// every value below `2^points`, so this leaves headroom for the shift
/// in [`rotate_right`](crate::local_binary_patterns::rotate_right).
pub const MAX_POINTS: u32 = 31;

/// Single channel pixels whose value can be read as an unsigned intensity.
pub trait Intensity: Pixel {
    /// The intensity of this pixel, widened to `u32`.
    fn intensity(&self) -> u32;
}

impl<T> Intensity for Luma<T>
where
    T: Primitive + Into<u32>,
{
    fn intensity(&self) -> u32 {
        self.0[0].into()
    }
}
