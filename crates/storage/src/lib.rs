//! Storage layer for theme-shift
//!
//! This crate provides the persistent key-value capability used to remember
//! the last chosen theme, a sled-backed implementation of it, and an
//! in-memory implementation for headless hosts and tests.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod kv;
pub mod memory;
pub mod mode;

pub use kv::{KvConfig, KvError, KvStore, PersistentStore, Result};
pub use memory::MemoryStore;
pub use mode::ThemeMode;
