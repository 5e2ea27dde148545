mod tick_options;
mod tick_selector;

pub use tick_options::TickOptions;
pub use tick_selector::{
    CALENDAR_THRESHOLD_SECONDS, TickSelector, TimeTickSeq, TimeTicks, nice_time_ticks,
    nice_time_ticks_seq,
};
