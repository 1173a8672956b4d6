pub mod identifier;
pub mod time;

pub use identifier::{filter_id, identify};
pub use time::{format_delay, format_time, merge_time_delay};
