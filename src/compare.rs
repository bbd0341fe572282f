//! Scoring the dissimilarity of texture features.

use crate::definitions::Intensity;
use crate::error::{LbpError, Result};
use crate::feature::{extract_feature, FeatureVector};
use crate::math::l2_distance;
use crate::options::LbpOptions;
use crate::pattern_table::PatternTable;
use image::GenericImageView;
use log::debug;

/// Euclidean distance between two feature vectors. Zero for identical
/// textures, larger for less similar ones.
///
/// Both vectors must come from pattern tables with the same bit width and
/// uniformity. Vectors of different lengths are rejected.
///
/// # Examples
/// ```
/// use lbp_texture::compare::compare_features;
/// use lbp_texture::feature::FeatureVector;
///
/// let a = FeatureVector::new(vec![1.0, 0.5, 0.0]);
/// let b = FeatureVector::new(vec![1.0, 0.0, 0.0]);
///
/// assert_eq!(compare_features(&a, &b).unwrap(), 0.5);
/// assert_eq!(compare_features(&a, &a).unwrap(), 0.0);
/// ```
pub fn compare_features(a: &FeatureVector, b: &FeatureVector) -> Result<f64> {
    if a.len() != b.len() {
        return Err(LbpError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(l2_distance(a.values(), b.values()))
}

/// Builds the pattern table for `options`, extracts the feature of each
/// image and returns the distance between them.
///
/// Prefer building the table once with [`PatternTable::new`] and calling
/// [`extract_feature`] directly when comparing many images.
///
/// # Examples
/// ```
/// use lbp_texture::compare::compare_images;
/// use lbp_texture::options::LbpOptions;
/// use lbp_texture::utils::checkerboard;
///
/// let fine = checkerboard(40, 40, 1, 0, 255);
/// let coarse = checkerboard(40, 40, 8, 0, 255);
/// let options = LbpOptions::default().with_step(1).with_radius(1);
///
/// assert_eq!(compare_images(&fine, &fine, &options).unwrap(), 0.0);
/// assert!(compare_images(&fine, &coarse, &options).unwrap() > 0.0);
/// ```
pub fn compare_images<I, J>(left: &I, right: &J, options: &LbpOptions) -> Result<f64>
where
    I: GenericImageView,
    I::Pixel: Intensity,
    J: GenericImageView,
    J::Pixel: Intensity,
{
    options.validate()?;
    let table = PatternTable::new(options.points, options.uniform)?;
    let left = extract_feature(left, &table, options)?;
    let right = extract_feature(right, &table, options)?;
    let distance = compare_features(&left, &right)?;
    debug!("feature distance {}", distance);
    Ok(distance)
}
