//! Assorted mathematical helper functions.

/// L2 norm of a vector.
pub fn l2_norm(xs: &[f64]) -> f64 {
    xs.iter().fold(0f64, |acc, x| acc + x * x).sqrt()
}

/// Euclidean distance between two vectors. Extra elements of the longer
/// vector are ignored, so callers should check the lengths first.
pub fn l2_distance(xs: &[f64], ys: &[f64]) -> f64 {
    xs.iter()
        .zip(ys)
        .fold(0f64, |acc, (x, y)| acc + (x - y) * (x - y))
        .sqrt()
}
