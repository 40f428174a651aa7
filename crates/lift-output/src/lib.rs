//! `lift-output` — event-log writers for the lift bank simulation.
//!
//! The CSV backend creates one file in the configured output directory:
//!
//! | File              | Contents                                          |
//! |-------------------|---------------------------------------------------|
//! | `lift_events.csv` | one row per state transition, in emission order   |
//!
//! The backend implements [`OutputWriter`] and is driven by
//! [`EventLogObserver`], which implements `lift_sim::BankObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lift_output::{CsvWriter, EventLogObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = EventLogObserver::new(writer);
//! bank.run_until_idle(&mut obs);
//! obs.finish();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::EventLogObserver;
pub use row::{EventKind, EventRow};
pub use writer::OutputWriter;
