//! Port traits defining external boundaries.
//!
//! The record-keeping core only sees time and storage through these traits.
//! Implementations live in `src/adapters/`.

pub mod clock;
pub mod filesystem;

pub use clock::Clock;
pub use filesystem::{FileSystem, FsError};
