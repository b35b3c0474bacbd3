// Shared helpers (maths, time, display formatting)
pub mod format_utils;
pub mod maths_utils;
pub mod time_utils;

pub use maths_utils::{SENTINEL, is_sentinel};
pub use time_utils::TimeUtils;
