//! # LayerKV Testkit
//!
//! Test utilities for LayerKV.
//!
//! This crate provides:
//! - A full-copy reference model of the store
//! - Property-based test generators using proptest
//! - Scripted scenarios written in shell syntax
//!
//! ## Usage
//!
//! ```rust
//! use layerkv_core::Store;
//! use layerkv_testkit::prelude::*;
//!
//! let mut store = Store::new();
//! let printed = run_script(&mut store, "SET a 1\nGET a\nROLLBACK").unwrap();
//! assert_eq!(printed, ["1", "NO TRANSACTION"]);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod generators;
pub mod model;
pub mod script;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::generators::*;
    pub use crate::model::*;
    pub use crate::script::*;
}

pub use generators::*;
pub use model::*;
pub use script::*;
