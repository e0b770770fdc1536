//! Service context bundling all port trait objects.

use std::path::PathBuf;

use crate::adapters::{FixedClock, LiveClock, LiveFileSystem};
use crate::config::Config;
use crate::ports::clock::Clock;
use crate::ports::filesystem::FileSystem;

/// Bundles the port trait objects and the store location.
pub struct ServiceContext {
    /// Clock for timestamps and identifier dates.
    pub clock: Box<dyn Clock>,
    /// Filesystem for the record store.
    pub fs: Box<dyn FileSystem>,
    /// Directory the record store lives in.
    pub store_root: PathBuf,
}

impl ServiceContext {
    /// Creates a live context rooted at `store_root`.
    #[must_use]
    pub fn live(store_root: PathBuf) -> Self {
        Self { clock: Box::new(LiveClock), fs: Box::new(LiveFileSystem), store_root }
    }

    /// Creates a context from resolved configuration.
    ///
    /// A pinned day swaps the system clock for a [`FixedClock`].
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mut ctx = Self::live(config.store_root.clone());
        if let Some(day) = config.today {
            log::debug!("clock pinned to {day}");
            ctx.clock = Box::new(FixedClock::new(day));
        }
        ctx
    }
}
