//! Prelude module: `mathcore::prelude` re-exports all `modkit::mathcore` items.
//!
//! # Examples
//! Import all the exports.
//!
//! ```rust
//! use modkit::mathcore::prelude::*;
//! ```
//!

// re-exports
pub use crate::mathcore::floats::*;
pub use crate::mathcore::vectors::*;
