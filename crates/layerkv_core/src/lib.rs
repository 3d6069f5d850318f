//! # LayerKV Core
//!
//! Transactional engine for LayerKV, an in-memory key -> integer store.
//!
//! This crate provides:
//! - Copy-on-write transaction frames with lazy pull-up from ancestors
//! - Per-value reference counts for O(1) "how many keys hold V" queries
//! - Nested begin/commit/rollback with commit flattening every open level
//! - Debug snapshots and operation statistics
//!
//! ## Example
//!
//! ```rust
//! use layerkv_core::{DataStore, Store};
//!
//! let mut store = Store::new();
//! store.begin();
//! store.set("a", 1);
//! store.begin();
//! store.set("b", 1);
//! assert_eq!(store.count(1), 2);
//!
//! store.commit();
//! assert!(!store.in_transaction());
//! assert_eq!(store.get("b"), Some(1));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod debug;
mod error;
mod frame;
mod stats;
mod store;
mod traits;
mod types;

pub use config::Config;
pub use debug::{DebugSnapshot, FrameSnapshot};
pub use error::{CoreError, CoreResult};
pub use frame::{Entry, Frame, FrameStack};
pub use stats::StoreStats;
pub use store::Store;
pub use traits::DataStore;
pub use types::{parse_value, Version};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
