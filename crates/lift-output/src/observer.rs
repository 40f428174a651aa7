//! `EventLogObserver<W>` — bridges `BankObserver` to an `OutputWriter`.

use lift_core::{Direction, Floor, LiftId, Tick};
use lift_sim::BankObserver;

use crate::OutputError;
use crate::row::{EventKind, EventRow};
use crate::writer::OutputWriter;

/// A [`BankObserver`] that appends every transition to any [`OutputWriter`]
/// backend.
///
/// Errors from the writer are stored internally because `BankObserver`
/// methods have no return value.  After the run, call
/// [`finish`][Self::finish] and then check [`take_error`][Self::take_error].
pub struct EventLogObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> EventLogObserver<W> {
    /// Create an observer backed by `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Flush the backend.  Call once the run is over.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    /// Take the stored write error (if any) after the run.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn emit(&mut self, row: EventRow) {
        let result = self.writer.write_event(&row);
        self.store_err(result);
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> BankObserver for EventLogObserver<W> {
    fn on_lift_dispatched(&mut self, now: Tick, lift: LiftId, target: Floor, _travel: u64) {
        self.emit(EventRow {
            tick:      now.0,
            event:     EventKind::Dispatched,
            lift:      Some(lift.0),
            floor:     Some(target.0),
            direction: None,
        });
    }

    fn on_lift_arrived(&mut self, now: Tick, lift: LiftId, floor: Floor) {
        self.emit(EventRow {
            tick:      now.0,
            event:     EventKind::Arrived,
            lift:      Some(lift.0),
            floor:     Some(floor.0),
            direction: None,
        });
    }

    fn on_doors_opening(&mut self, now: Tick, lift: LiftId) {
        self.emit(EventRow {
            tick:      now.0,
            event:     EventKind::DoorsOpening,
            lift:      Some(lift.0),
            floor:     None,
            direction: None,
        });
    }

    fn on_doors_closed(&mut self, now: Tick, lift: LiftId) {
        self.emit(EventRow {
            tick:      now.0,
            event:     EventKind::DoorsClosed,
            lift:      Some(lift.0),
            floor:     None,
            direction: None,
        });
    }

    fn on_button_disabled(&mut self, now: Tick, floor: Floor, direction: Direction) {
        self.emit(EventRow {
            tick:      now.0,
            event:     EventKind::ButtonDisabled,
            lift:      None,
            floor:     Some(floor.0),
            direction: Some(direction.as_str()),
        });
    }

    fn on_button_enabled(&mut self, now: Tick, floor: Floor, direction: Direction) {
        self.emit(EventRow {
            tick:      now.0,
            event:     EventKind::ButtonEnabled,
            lift:      None,
            floor:     Some(floor.0),
            direction: Some(direction.as_str()),
        });
    }
}
