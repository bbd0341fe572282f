//! Progress reporting for long running feature extraction.

use log::info;

/// Number of sampled pixels between progress notifications.
pub const PROGRESS_INTERVAL: usize = 50_000;

/// Receives the running count of sampled pixels during extraction.
///
/// Sinks only observe extraction; they cannot change its result.
pub trait ProgressSink {
    /// Called every [`PROGRESS_INTERVAL`] samples with the total so far.
    fn pixels_processed(&mut self, count: usize);
}

impl<F> ProgressSink for F
where
    F: FnMut(usize),
{
    fn pixels_processed(&mut self, count: usize) {
        self(count)
    }
}

/// Ignores all progress.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn pixels_processed(&mut self, _count: usize) {}
}

/// Logs progress at info level.
#[derive(Debug, Default, Copy, Clone)]
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn pixels_processed(&mut self, count: usize) {
        info!("{} pixels processed", count);
    }
}

/// Counts samples and notifies a sink at every multiple of [`PROGRESS_INTERVAL`].
pub(crate) struct ProgressCounter<'a, S: ?Sized> {
    processed: usize,
    sink: &'a mut S,
}

impl<'a, S: ProgressSink + ?Sized> ProgressCounter<'a, S> {
    pub(crate) fn new(sink: &'a mut S) -> Self {
        ProgressCounter { processed: 0, sink }
    }

    pub(crate) fn tick(&mut self) {
        self.processed += 1;
        if self.processed % PROGRESS_INTERVAL == 0 {
            self.sink.pixels_processed(self.processed);
        }
    }

    pub(crate) fn processed(&self) -> usize {
        self.processed
    }
}
