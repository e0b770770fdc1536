//! Port implementations.

pub mod fixed;
pub mod live;

pub use fixed::FixedClock;
pub use live::{LiveClock, LiveFileSystem};
