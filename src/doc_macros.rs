//! Macros used for generating documentation

/// Generates the doc comment for the parallel version of a function. Takes
/// the name of the sequential function as a string literal.
macro_rules! generate_parallel_doc_comment {
    ($name:literal) => {
        concat!(
            "A parallel version of [`",
            $name,
            "()`].\n\nRows are scanned on the rayon thread pool and their partial histograms\nsummed, so the result is identical to [`",
            $name,
            "()`]. No progress is reported."
        )
    };
}
