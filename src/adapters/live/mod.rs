//! Live adapters backed by the system clock and the real disk.

pub mod clock;
pub mod filesystem;

pub use clock::LiveClock;
pub use filesystem::LiveFileSystem;
