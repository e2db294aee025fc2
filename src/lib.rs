//! gridfall (workspace facade crate).
//!
//! This package exposes the member crates under stable `gridfall::{core,types}`
//! paths while the implementation lives in dedicated crates under `crates/`.

pub use gridfall_core as core;
pub use gridfall_types as types;
