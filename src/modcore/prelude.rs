//! Prelude module: `modcore::prelude` re-exports all `modkit::modcore` items.
//!
//! # Examples
//! Import all the exports.
//!
//! ```rust
//! use modkit::modcore::prelude::*;
//! ```
//!

// re-exports
pub use crate::modcore::predicates::*;
pub use crate::modcore::targets::*;
