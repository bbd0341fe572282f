//! Texture descriptors built from [local binary patterns], on top of the
//! [image] crate.
//!
//! Each sampled pixel is encoded by comparing a ring of neighbors with the
//! pixel itself. The resulting codes are reduced to their least circular
//! shift, counted in a histogram and scaled by the largest count to give a
//! [`FeatureVector`]. The Euclidean distance between two feature vectors
//! scores how similar the textures of two images are.
//!
//! ```
//! use lbp_texture::{compare_features, extract_feature, LbpOptions, PatternTable};
//! use lbp_texture::utils::checkerboard;
//!
//! let options = LbpOptions::default().with_step(1).with_radius(1);
//! let table = PatternTable::new(options.points, options.uniform).unwrap();
//!
//! let board = checkerboard(32, 32, 4, 0, 255);
//! let inverted = checkerboard(32, 32, 4, 255, 0);
//! let fine = checkerboard(32, 32, 1, 0, 255);
//!
//! let a = extract_feature(&board, &table, &options).unwrap();
//! let b = extract_feature(&inverted, &table, &options).unwrap();
//! let c = extract_feature(&fine, &table, &options).unwrap();
//!
//! // Inverting a checkerboard doesn't change its texture, but shrinking the squares does.
//! assert_eq!(compare_features(&a, &b).unwrap(), 0.0);
//! assert!(compare_features(&a, &c).unwrap() > 0.5);
//! ```
//!
//! Loading images and converting them to grayscale is left to the
//! [image] crate, e.g. `image::open(path)?.to_luma8()`.
//!
//! [local binary patterns]: https://en.wikipedia.org/wiki/Local_binary_patterns
//! [image]: https://github.com/image-rs/image
#![deny(missing_docs)]
#![cfg_attr(all(test, feature = "benchmark"), feature(test))]
#![allow(
    clippy::cast_lossless,
    clippy::too_many_arguments,
    clippy::needless_range_loop,
    clippy::many_single_char_names
)]

#[cfg(all(test, feature = "benchmark"))]
extern crate test;
#[cfg(test)]
#[macro_use]
extern crate assert_approx_eq;

#[macro_use]
pub mod utils;
#[macro_use]
mod doc_macros;
pub mod compare;
pub mod definitions;
pub mod error;
pub mod feature;
pub mod local_binary_patterns;
pub mod math;
pub mod options;
pub mod pattern_table;
pub mod progress;
#[cfg(test)]
mod property_testing;
#[cfg(test)]
mod proptest_utils;
pub mod sampling;

pub use crate::compare::{compare_features, compare_images};
pub use crate::error::{LbpError, Result};
pub use crate::feature::{extract_feature, extract_feature_with_progress, FeatureVector, Histogram};
#[cfg(feature = "rayon")]
pub use crate::feature::extract_feature_parallel;
pub use crate::options::LbpOptions;
pub use crate::pattern_table::PatternTable;
pub use image;
