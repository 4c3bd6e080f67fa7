//! Background Tasks Module
//!
//! # Tasks
//! - Reaper: removes expired cache entries once per interval

mod reaper;

pub use reaper::spawn_reaper_task;
