// src/meter/mod.rs

pub mod poll;
pub mod sync_meter;
pub mod ticker;

pub use poll::{poll_until, Deadline};
pub use sync_meter::SyncMeter;
pub use ticker::Ticker;
