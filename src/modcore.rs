//! `modkit::modcore` module is a core that decides which mods are present in the game,
//! so code that depends on them (for example, mixins) can be applied conditionally.
//!
//! # Prelude
//! `modkit::modcore` prelude can be imported with `use modkit::modcore::prelude::*`.
//!
//! # Usage
//! Every dependency is described by a [`TargetedMod`](targets::TargetedMod): its name,
//! [`NameCondition`](predicates::NameCondition) on jar names and development flag.
//! [`detect_targets`](targets::detect_targets) then filters targets by the jars that were found
//! by the loader.
//!
//! This core never touches filesystem - it only inspects paths that it is given.
//! Decisions are reported through `log` crate on `debug` and `trace` levels.
//!

// submodules and public re-exports
pub mod predicates;
pub mod targets;

// prelude
pub mod prelude;
