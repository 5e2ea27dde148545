pub mod calendar;
pub mod calendar_time_ticks;
pub mod nice_number;
pub mod numeric_ticks;
pub mod primitives;
pub mod regular_time_ticks;
pub mod scoring;
pub mod types;

pub use calendar::{
    CalendarUnit, Months, RollingDate, Years, end_of_month, month_ceil, month_floor,
};
pub use calendar_time_ticks::calendar_time_ticks;
pub use nice_number::{NICE_INTERVALS, nice_ceil, nice_floor, nice_round};
pub use numeric_ticks::{nice_ticks, nice_ticks_decimal, nice_ticks_seq};
pub use regular_time_ticks::regular_time_ticks;
pub use scoring::{CandidateInterval, CandidateSearch};
pub use types::{TickRange, TickSeq, TimeStep};
