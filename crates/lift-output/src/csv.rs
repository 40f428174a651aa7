//! CSV output backend.
//!
//! Creates `lift_events.csv` in the configured output directory.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{EventRow, OutputResult};
use crate::writer::OutputWriter;

/// Writes the event log to a single CSV file.
pub struct CsvWriter {
    events:   Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) `lift_events.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut events = Writer::from_path(dir.join("lift_events.csv"))?;
        events.write_record(["tick", "event", "lift", "floor", "direction"])?;

        Ok(Self { events, finished: false })
    }
}

fn opt_cell(value: Option<u16>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
        self.events.write_record(&[
            row.tick.to_string(),
            row.event.as_str().to_string(),
            opt_cell(row.lift),
            opt_cell(row.floor),
            row.direction.unwrap_or_default().to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        Ok(())
    }
}
