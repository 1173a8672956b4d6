pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub mod config;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use self::core::{filter_id, format_delay, format_time, identify, merge_time_delay};
pub use domain::{ServiceKind, TrainId};
pub use utils::error::{FormatError, Result};
