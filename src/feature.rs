//! Texture features built from histograms of rotation invariant local binary patterns.

use crate::definitions::Intensity;
use crate::error::{LbpError, Result};
use crate::local_binary_patterns::{min_shift, ring_pattern, RingOffsets};
use crate::options::LbpOptions;
use crate::pattern_table::PatternTable;
use crate::progress::{NoProgress, ProgressCounter, ProgressSink};
use image::GenericImageView;
use log::debug;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Counts of sampled pixels per pattern bin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: Vec<u64>,
}

impl Histogram {
    /// An empty histogram with `len` bins.
    pub fn zeros(len: usize) -> Histogram {
        Histogram {
            counts: vec![0; len],
        }
    }

    /// An empty histogram with one bin per pattern in `table` plus an overflow bin.
    pub fn for_table(table: &PatternTable) -> Histogram {
        Histogram::zeros(table.histogram_len())
    }

    /// Adds one to the count of bin `index`.
    pub fn increment(&mut self, index: usize) -> Result<()> {
        let len = self.counts.len();
        let count = self
            .counts
            .get_mut(index)
            .ok_or(LbpError::BinOutOfRange { index, len })?;
        *count += 1;
        Ok(())
    }

    /// Adds the counts of `other` to this histogram, bin by bin.
    pub fn merge(&mut self, other: &Histogram) -> Result<()> {
        if self.counts.len() != other.counts.len() {
            return Err(LbpError::LengthMismatch {
                left: self.counts.len(),
                right: other.counts.len(),
            });
        }
        for (c, o) in self.counts.iter_mut().zip(&other.counts) {
            *c += o;
        }
        Ok(())
    }

    /// Count of each bin.
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Number of bins.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True if there are no bins.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Largest count, or 0 if there are no bins.
    pub fn max(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Divides every count by the largest count, so the most frequent bin
    /// becomes exactly 1.
    ///
    /// Fails with [`LbpError::NoSamples`] if every count is zero.
    pub fn normalize(&self) -> Result<FeatureVector> {
        let max = self.max();
        if max == 0 {
            return Err(LbpError::NoSamples);
        }
        let max = max as f64;
        Ok(FeatureVector::new(
            self.counts.iter().map(|&c| c as f64 / max).collect(),
        ))
    }
}

/// A texture descriptor: a pattern histogram scaled by its maximum count.
///
/// Feature vectors are only comparable if they were extracted with pattern
/// tables of the same bit width and uniformity.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: Vec<f64>,
}

impl FeatureVector {
    /// Wraps precomputed values.
    pub fn new(values: Vec<f64>) -> FeatureVector {
        FeatureVector { values }
    }

    /// The value of each bin.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of bins.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if there are no bins.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Consumes the vector, returning its values.
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

impl AsRef<[f64]> for FeatureVector {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

/// Validates `options` against `table` and precomputes the sampling ring.
fn prepare(table: &PatternTable, options: &LbpOptions) -> Result<RingOffsets> {
    options.validate()?;
    if table.bits() != options.points {
        return Err(LbpError::TableMismatch {
            table_bits: table.bits(),
            points: options.points,
        });
    }
    RingOffsets::new(options.radius, options.points)
}

/// Histogram bin of the rotation invariant pattern at `(x, y)`.
fn pattern_bin<I>(
    image: &I,
    x: u32,
    y: u32,
    ring: &RingOffsets,
    table: &PatternTable,
    block_size: u32,
) -> Result<usize>
where
    I: GenericImageView,
    I::Pixel: Intensity,
{
    let pattern = ring_pattern(image, x, y, ring, block_size)?;
    Ok(table.bin_or_overflow(min_shift(pattern, table.bits())))
}

/// Accumulates the bins of every sampled pixel in row `y`.
fn accumulate_row<I, S>(
    image: &I,
    y: u32,
    ring: &RingOffsets,
    table: &PatternTable,
    options: &LbpOptions,
    histogram: &mut Histogram,
    progress: &mut ProgressCounter<'_, S>,
) -> Result<()>
where
    I: GenericImageView,
    I::Pixel: Intensity,
    S: ProgressSink + ?Sized,
{
    for x in (0..image.width()).step_by(options.step as usize) {
        histogram.increment(pattern_bin(image, x, y, ring, table, options.block_size)?)?;
        progress.tick();
    }
    Ok(())
}

/// Counts the rotation invariant patterns of pixels sampled every
/// `options.step` pixels in each direction, starting from `(0, 0)`.
///
/// Patterns with no bin in `table` are counted in its
/// [overflow bin](PatternTable::overflow_index). `options.points` must
/// equal `table.bits()`; the table alone decides whether non-uniform
/// patterns are merged, so `options.uniform` is not consulted.
///
/// # Examples
/// ```
/// use lbp_texture::gray_image;
/// use lbp_texture::feature::histogram;
/// use lbp_texture::options::LbpOptions;
/// use lbp_texture::pattern_table::PatternTable;
///
/// let image = gray_image!(
///     1, 1, 1;
///     1, 1, 1;
///     1, 1, 1);
///
/// let table = PatternTable::uniform(4).unwrap();
/// let options = LbpOptions::new(1, 1, 4, 1, true);
/// let hist = histogram(&image, &table, &options).unwrap();
///
/// // Corners see two neighbors, edges three, and the center all four.
/// assert_eq!(hist.counts(), &[0, 0, 4, 4, 1, 0]);
/// ```
pub fn histogram<I>(image: &I, table: &PatternTable, options: &LbpOptions) -> Result<Histogram>
where
    I: GenericImageView,
    I::Pixel: Intensity,
{
    histogram_with_progress(image, table, options, &mut NoProgress)
}

/// As [`histogram`], notifying `sink` every
/// [`PROGRESS_INTERVAL`](crate::progress::PROGRESS_INTERVAL) samples.
pub fn histogram_with_progress<I, S>(
    image: &I,
    table: &PatternTable,
    options: &LbpOptions,
    sink: &mut S,
) -> Result<Histogram>
where
    I: GenericImageView,
    I::Pixel: Intensity,
    S: ProgressSink + ?Sized,
{
    let ring = prepare(table, options)?;
    let mut histogram = Histogram::for_table(table);
    let mut progress = ProgressCounter::new(sink);

    for y in (0..image.height()).step_by(options.step as usize) {
        accumulate_row(image, y, &ring, table, options, &mut histogram, &mut progress)?;
    }

    debug!(
        "sampled {} pixels of a {}x{} image",
        progress.processed(),
        image.width(),
        image.height()
    );
    Ok(histogram)
}

/// Computes the texture feature of an image: the [`histogram`] of its
/// patterns divided by the largest bin count.
///
/// Fails with [`LbpError::NoSamples`] if the image is empty.
///
/// # Examples
/// ```
/// use lbp_texture::feature::extract_feature;
/// use lbp_texture::options::LbpOptions;
/// use lbp_texture::pattern_table::PatternTable;
/// use lbp_texture::utils::checkerboard;
///
/// let board = checkerboard(4, 4, 1, 10, 200);
/// let table = PatternTable::rotation_invariant(4).unwrap();
/// let options = LbpOptions::new(1, 1, 4, 1, false);
///
/// let feature = extract_feature(&board, &table, &options).unwrap();
/// assert_eq!(feature.values(), &[1.0, 0.0, 0.25, 0.0, 0.5, 0.25, 0.0]);
/// ```
pub fn extract_feature<I>(image: &I, table: &PatternTable, options: &LbpOptions) -> Result<FeatureVector>
where
    I: GenericImageView,
    I::Pixel: Intensity,
{
    histogram(image, table, options)?.normalize()
}

/// As [`extract_feature`], notifying `sink` every
/// [`PROGRESS_INTERVAL`](crate::progress::PROGRESS_INTERVAL) samples.
pub fn extract_feature_with_progress<I, S>(
    image: &I,
    table: &PatternTable,
    options: &LbpOptions,
    sink: &mut S,
) -> Result<FeatureVector>
where
    I: GenericImageView,
    I::Pixel: Intensity,
    S: ProgressSink + ?Sized,
{
    histogram_with_progress(image, table, options, sink)?.normalize()
}

#[cfg(feature = "rayon")]
#[doc = generate_parallel_doc_comment!("histogram")]
pub fn histogram_parallel<I>(image: &I, table: &PatternTable, options: &LbpOptions) -> Result<Histogram>
where
    I: GenericImageView + Sync,
    I::Pixel: Intensity,
{
    let ring = prepare(table, options)?;
    let rows: Vec<u32> = (0..image.height()).step_by(options.step as usize).collect();

    rows.par_iter()
        .try_fold(
            || Histogram::for_table(table),
            |mut histogram, &y| {
                let mut sink = NoProgress;
                let mut progress = ProgressCounter::new(&mut sink);
                accumulate_row(image, y, &ring, table, options, &mut histogram, &mut progress)?;
                Ok(histogram)
            },
        )
        .try_reduce(
            || Histogram::for_table(table),
            |mut left, right| {
                left.merge(&right)?;
                Ok(left)
            },
        )
}

#[cfg(feature = "rayon")]
#[doc = generate_parallel_doc_comment!("extract_feature")]
pub fn extract_feature_parallel<I>(
    image: &I,
    table: &PatternTable,
    options: &LbpOptions,
) -> Result<FeatureVector>
where
    I: GenericImageView + Sync,
    I::Pixel: Intensity,
{
    histogram_parallel(image, table, options)?.normalize()
}


#[cfg(all(test, feature = "benchmark"))]
mod benches {
    use super::*;
    use crate::utils::gray_bench_image;
    use ::test::{black_box, Bencher};

    #[bench]
    fn bench_extract_feature_uniform_8(b: &mut Bencher) {
        let image = gray_bench_image(200, 200);
        let table = PatternTable::uniform(8).unwrap();
        let options = LbpOptions::new(1, 1, 8, 1, true);
        b.iter(|| {
            let feature = extract_feature(&image, &table, &options);
            black_box(feature.ok());
        });
    }

    #[bench]
    fn bench_extract_feature_block_3(b: &mut Bencher) {
        let image = gray_bench_image(200, 200);
        let table = PatternTable::uniform(8).unwrap();
        let options = LbpOptions::new(2, 4, 8, 3, true);
        b.iter(|| {
            let feature = extract_feature(&image, &table, &options);
            black_box(feature.ok());
        });
    }
}
