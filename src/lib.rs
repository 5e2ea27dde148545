//! tickwise: "nice number" axis tick selection.
//!
//! Given a data range and a desired tick count, pick tick positions people
//! expect on a chart axis (0, 25, 50, 75, 100 rather than 0, 23.7, 47.4).
//! Numeric ranges snap to 1, 2, 2.5, 3, 5 or 10 times a power of ten; time
//! ranges pick between fixed-second steps and calendar month/year steps.
//!
//! ```
//! let range = tickwise::nice_ticks(0.0, 97.0, 5, false).expect("finite range");
//! assert_eq!(range.ticks.as_slice(), &[0.0, 25.0, 50.0, 75.0, 100.0]);
//! ```

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{
    TickOptions, TickSelector, TimeTickSeq, TimeTicks, nice_time_ticks, nice_time_ticks_seq,
};
pub use crate::core::{TickRange, TickSeq, TimeStep, nice_ticks, nice_ticks_seq};
pub use error::{TickError, TickResult};
