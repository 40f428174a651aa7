//! The `OutputWriter` trait implemented by all backend writers.

use crate::{EventRow, OutputResult};

/// Trait implemented by event-log backends.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with [`EventLogObserver::take_error`].
pub trait OutputWriter {
    /// Write one event row.
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
